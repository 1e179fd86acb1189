//! Mock service adapters for testing.
//!
//! Configurable implementations of the catalog and recommendation ports,
//! allowing wizard flows to run without a live backend.
//!
//! # Features
//!
//! - Pre-configured success or failure responses
//! - Call tracking for verification (request count, recorded criteria)
//!
//! # Example
//!
//! ```ignore
//! let service = MockRecommendationService::with_items(vec![item]);
//! // ... run the wizard ...
//! assert_eq!(service.requests().len(), 1);
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::catalog::Catalog;
use crate::domain::recommendation::{Criteria, RecommendationItem};
use crate::ports::{
    CatalogSource, CatalogSourceError, RecommendationService, RecommendationServiceError,
};

/// Mock catalog source returning a fixed catalog or a fixed error.
#[derive(Debug, Clone)]
pub struct MockCatalogSource {
    response: Result<Catalog, CatalogSourceError>,
    calls: Arc<Mutex<u32>>,
}

impl MockCatalogSource {
    /// Always returns the given catalog.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            response: Ok(catalog),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Always returns the given error.
    pub fn failing(error: CatalogSourceError) -> Self {
        Self {
            response: Err(error),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Returns how many times the catalog was fetched.
    pub fn call_count(&self) -> u32 {
        *self.calls.lock().expect("mock lock poisoned")
    }
}

#[async_trait]
impl CatalogSource for MockCatalogSource {
    async fn fetch_catalog(&self) -> Result<Catalog, CatalogSourceError> {
        *self.calls.lock().expect("mock lock poisoned") += 1;
        self.response.clone()
    }
}

/// Mock recommendation service with request recording.
#[derive(Debug, Clone)]
pub struct MockRecommendationService {
    response: Result<Vec<RecommendationItem>, RecommendationServiceError>,
    requests: Arc<Mutex<Vec<(Criteria, u32)>>>,
}

impl MockRecommendationService {
    /// Always returns the given items.
    pub fn with_items(items: Vec<RecommendationItem>) -> Self {
        Self {
            response: Ok(items),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Always returns the given error.
    pub fn failing(error: RecommendationServiceError) -> Self {
        Self {
            response: Err(error),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns every (criteria, limit) pair received, in call order.
    pub fn requests(&self) -> Vec<(Criteria, u32)> {
        self.requests.lock().expect("mock lock poisoned").clone()
    }
}

#[async_trait]
impl RecommendationService for MockRecommendationService {
    async fn recommend(
        &self,
        criteria: &Criteria,
        limit: u32,
    ) -> Result<Vec<RecommendationItem>, RecommendationServiceError> {
        self.requests
            .lock()
            .expect("mock lock poisoned")
            .push((criteria.clone(), limit));
        self.response.clone()
    }
}
