//! Re-order recommendations mined from a user's order history.
//!
//! Each distinct menu item gets a composite score from how often it was
//! ordered, how it was rated, and how recently it was last ordered. The top
//! entries are what the app offers for a quick re-order.

mod engine;
mod scoring;
mod types;

use chrono::{DateTime, Utc};

pub use engine::RecommendationEngine;
pub use scoring::{ScoreCalculator, ScoringWeights};
pub use types::*;

use crate::domain::order::Order;

/// Default scoring weights
pub const DEFAULT_WEIGHTS: ScoringWeights =
    ScoringWeights { frequency: 0.40, rating: 0.40, recency: 0.20 };

/// Days after which an item no longer earns any recency credit
pub const RECENCY_WINDOW_DAYS: f64 = 30.0;

/// Maximum recommendations to return
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Ranks menu items from `orders` for re-ordering, relative to `now`.
///
/// `orders` must be oldest first: the last order scanned for an item becomes
/// its `last_ordered`. Newest-first histories must go through
/// [`crate::domain::order::sort_chronologically`] beforehand.
pub fn compute_recommendations(orders: &[Order], now: DateTime<Utc>) -> Vec<RecommendedItem> {
    RecommendationEngine::new().compute(orders, now)
}
