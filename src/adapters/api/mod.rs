//! API adapters - HTTP client and test mocks for the service ports.

mod client;
mod dto;
mod mock;

pub use client::HttpApiClient;
pub use dto::{CatalogResponse, OptionDto, QuestionDto, RecommendRequest, RecommendResponse};
pub use mock::{MockCatalogSource, MockRecommendationService};
