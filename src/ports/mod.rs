//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CatalogSource` - fetches the question catalog
//! - `RecommendationService` - fetches ranked recommendations
//! - `Presenter` - renders wizard output and reports user events

mod catalog_source;
mod presenter;
mod recommendation_service;

pub use catalog_source::{CatalogSource, CatalogSourceError};
pub use presenter::{Presenter, WizardEvent};
pub use recommendation_service::{RecommendationService, RecommendationServiceError};
