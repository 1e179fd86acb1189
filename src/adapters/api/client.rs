//! HTTP API Client - Implements both service ports against the portal API.
//!
//! One reqwest client serves both endpoints:
//!
//! - `GET {base_url}/api/questions` for the catalog
//! - `POST {base_url}/api/recommend` for ranked recommendations
//!
//! # Configuration
//!
//! ```ignore
//! let config = ApiConfig {
//!     base_url: "http://localhost:8080".to_string(),
//!     timeout_secs: 30,
//! };
//! let client = HttpApiClient::new(&config);
//! ```

use async_trait::async_trait;
use reqwest::Client;

use crate::config::ApiConfig;
use crate::domain::catalog::Catalog;
use crate::domain::recommendation::{Criteria, RecommendationItem};
use crate::ports::{
    CatalogSource, CatalogSourceError, RecommendationService, RecommendationServiceError,
};

use super::dto::{CatalogResponse, RecommendRequest, RecommendResponse};

/// HTTP client for the portal's catalog and recommendation endpoints.
pub struct HttpApiClient {
    base_url: String,
    client: Client,
}

impl HttpApiClient {
    /// Creates a client from API configuration.
    pub fn new(config: &ApiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    fn questions_url(&self) -> String {
        format!("{}/api/questions", self.base_url)
    }

    fn recommend_url(&self) -> String {
        format!("{}/api/recommend", self.base_url)
    }
}

#[async_trait]
impl CatalogSource for HttpApiClient {
    async fn fetch_catalog(&self) -> Result<Catalog, CatalogSourceError> {
        let url = self.questions_url();
        tracing::debug!(%url, "fetching question catalog");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogSourceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "catalog fetch failed");
            return Err(CatalogSourceError::Status {
                status: status.as_u16(),
            });
        }

        let payload: CatalogResponse = response
            .json()
            .await
            .map_err(|e| CatalogSourceError::Decode(e.to_string()))?;

        let catalog = payload.into_catalog();
        tracing::debug!(questions = catalog.len(), "catalog loaded");
        Ok(catalog)
    }
}

#[async_trait]
impl RecommendationService for HttpApiClient {
    async fn recommend(
        &self,
        criteria: &Criteria,
        limit: u32,
    ) -> Result<Vec<RecommendationItem>, RecommendationServiceError> {
        let url = self.recommend_url();
        tracing::debug!(%url, limit, "requesting recommendations");

        let response = self
            .client
            .post(&url)
            .json(&RecommendRequest {
                answers: criteria,
                limit,
            })
            .send()
            .await
            .map_err(|e| RecommendationServiceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "recommendation fetch failed");
            return Err(RecommendationServiceError::Status {
                status: status.as_u16(),
            });
        }

        let payload: RecommendResponse = response
            .json()
            .await
            .map_err(|e| RecommendationServiceError::Decode(e.to_string()))?;

        tracing::debug!(items = payload.items.len(), "recommendations received");
        Ok(payload.items)
    }
}
