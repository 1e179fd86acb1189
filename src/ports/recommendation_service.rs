//! Recommendation Service Port - Interface to the remote scoring service.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::recommendation::{Criteria, RecommendationItem};

/// Failures while fetching recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecommendationServiceError {
    /// The endpoint answered with a non-success status.
    #[error("recommendation endpoint returned status {status}")]
    Status { status: u16 },

    /// The endpoint could not be reached.
    #[error("recommendation request failed: {0}")]
    Network(String),

    /// The payload could not be decoded.
    #[error("malformed recommendation payload: {0}")]
    Decode(String),
}

/// Port for requesting ranked recommendations.
///
/// One call per completed wizard pass; a failure is reported upward
/// immediately with no retries, and the caller decides how to surface it.
#[async_trait]
pub trait RecommendationService: Send + Sync {
    /// Requests at most `limit` items ranked against the criteria.
    async fn recommend(
        &self,
        criteria: &Criteria,
        limit: u32,
    ) -> Result<Vec<RecommendationItem>, RecommendationServiceError>;
}
