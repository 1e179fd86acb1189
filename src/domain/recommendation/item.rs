//! Recommendation items and the per-session result set.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// Open-ended minute range attached to an item (duration, travel time).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MinuteRange {
    #[serde(default)]
    pub min_minutes: Option<u32>,
    #[serde(default)]
    pub max_minutes: Option<u32>,
}

/// One ranked recommendation as returned by the scoring service.
///
/// Opaque to the wizard beyond what rendering and navigation need; every
/// field other than the title falls back to a defensive default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationItem {
    pub title: String,

    #[serde(default)]
    pub slug: String,

    #[serde(default)]
    pub summary: String,

    /// Navigation target for this item.
    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub emoji_tags: Vec<String>,

    #[serde(default)]
    pub duration: Option<MinuteRange>,

    #[serde(default)]
    pub travel_from: Option<MinuteRange>,

    /// Human-readable reasons the scorer attached to its ranking.
    #[serde(default)]
    pub reasons: Vec<String>,

    #[serde(default)]
    pub score: f64,
}

/// The ordered recommendations for the current criteria.
///
/// Held only in memory, replaced wholesale on each request, discarded
/// on restart.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    items: Vec<RecommendationItem>,
    fetched_at: Timestamp,
}

impl ResultSet {
    /// Creates a result set stamped with the current time.
    pub fn new(items: Vec<RecommendationItem>) -> Self {
        Self {
            items,
            fetched_at: Timestamp::now(),
        }
    }

    /// Returns the items in rank order.
    pub fn items(&self) -> &[RecommendationItem] {
        &self.items
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the service returned nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns when the set was fetched.
    pub fn fetched_at(&self) -> &Timestamp {
        &self.fetched_at
    }

    /// Picks one item uniformly at random, for the shuffle affordance.
    ///
    /// Returns None on an empty set.
    pub fn random_pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&RecommendationItem> {
        self.items.choose(rng)
    }
}
