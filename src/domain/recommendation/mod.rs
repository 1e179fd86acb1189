//! Recommendation module - Normalized criteria and ranked results.
//!
//! The normalizer is the deterministic bridge between raw wizard answers
//! and the scoring service's query format.

mod criteria;
mod item;
mod normalizer;

pub use criteria::{Criteria, Vibe};
pub use item::{MinuteRange, RecommendationItem, ResultSet};
pub use normalizer::normalize;
