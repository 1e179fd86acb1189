//! Catalog Source Port - Interface for fetching the question catalog.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::catalog::Catalog;

/// Failures while fetching the catalog.
///
/// A single failed fetch is surfaced once; the wizard never retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogSourceError {
    /// The endpoint answered with a non-success status.
    #[error("catalog endpoint returned status {status}")]
    Status { status: u16 },

    /// The endpoint could not be reached.
    #[error("catalog request failed: {0}")]
    Network(String),

    /// The payload could not be decoded.
    #[error("malformed catalog payload: {0}")]
    Decode(String),
}

/// Port for fetching the ordered question catalog.
///
/// Implementations talk to the backing service and translate the wire
/// format into domain types. Emptiness is not an error at this boundary;
/// the session decides what an empty catalog means.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetches the full catalog.
    async fn fetch_catalog(&self) -> Result<Catalog, CatalogSourceError>;
}
