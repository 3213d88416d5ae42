//! Scoring math for re-order recommendations

use chrono::{DateTime, Utc};

use super::types::*;
use super::RECENCY_WINDOW_DAYS;

const MILLIS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Weights for scoring components
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    /// Weight for the raw order count (default: 0.40)
    pub frequency: f64,
    /// Weight for the mean rating (default: 0.40)
    pub rating: f64,
    /// Weight for the recency decay (default: 0.20)
    pub recency: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        super::DEFAULT_WEIGHTS
    }
}

/// Score calculator for recommendations
#[derive(Debug, Clone)]
pub struct ScoreCalculator {
    weights: ScoringWeights,
}

impl ScoreCalculator {
    /// Create a new score calculator with default weights
    pub fn new() -> Self {
        Self { weights: ScoringWeights::default() }
    }

    /// Create with custom weights
    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> ScoringWeights {
        self.weights
    }

    /// Weighted sum of the components. Not normalized: frequency is a raw
    /// count, so heavily re-ordered items dominate.
    pub fn calculate_total_score(&self, components: &ComponentScores) -> f64 {
        components.frequency * self.weights.frequency
            + components.rating * self.weights.rating
            + components.recency * self.weights.recency
    }

    /// Arithmetic mean, or 0.0 when nothing was rated
    pub fn average_rating(&self, ratings: &[i32]) -> f64 {
        if ratings.is_empty() {
            return 0.0;
        }

        let total: i64 = ratings.iter().map(|rating| i64::from(*rating)).sum();
        total as f64 / ratings.len() as f64
    }

    /// Fractional days from `last_ordered` to `now`; negative when
    /// `last_ordered` lies in the future.
    pub fn days_between(&self, last_ordered: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
        (now - last_ordered).num_milliseconds() as f64 / MILLIS_PER_DAY
    }

    /// Linear decay from 1.0 (today) to 0.0 at the end of the window.
    /// Future dates count as today.
    pub fn recency_score(&self, days_since_last_order: f64) -> f64 {
        let days = days_since_last_order.max(0.0);
        (1.0 - days / RECENCY_WINDOW_DAYS).max(0.0)
    }

    pub fn component_scores(&self, stats: &ItemStatistics, now: DateTime<Utc>) -> ComponentScores {
        let days = self.days_between(stats.last_ordered, now);

        ComponentScores {
            frequency: stats.times_ordered as f64,
            rating: self.average_rating(&stats.ratings),
            recency: self.recency_score(days),
        }
    }
}

impl Default for ScoreCalculator {
    fn default() -> Self {
        Self::new()
    }
}
