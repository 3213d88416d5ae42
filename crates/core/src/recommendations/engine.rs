//! Recommendation engine implementation

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::scoring::{ScoreCalculator, ScoringWeights};
use super::types::*;
use super::MAX_RECOMMENDATIONS;
use crate::domain::menu::MenuItemId;
use crate::domain::order::{is_chronological, Order};

/// Turns an order history into a capped, ranked list of re-order candidates.
///
/// Holds no state between calls; every `compute` rebuilds its statistics
/// from the orders it is given.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    calculator: ScoreCalculator,
}

impl RecommendationEngine {
    /// Create a new engine with default weights
    pub fn new() -> Self {
        Self { calculator: ScoreCalculator::new() }
    }

    /// Create with custom weights
    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self { calculator: ScoreCalculator::with_weights(weights) }
    }

    pub fn compute(&self, orders: &[Order], now: DateTime<Utc>) -> Vec<RecommendedItem> {
        if !is_chronological(orders) {
            tracing::warn!(
                event_name = "recommendations.history_not_chronological",
                order_count = orders.len(),
                "order history is not oldest-first; last_ordered follows scan order"
            );
        }

        let statistics = self.aggregate(orders);
        let distinct_items = statistics.len();
        let mut ranked = self.rank(statistics, now);
        ranked.truncate(MAX_RECOMMENDATIONS);

        tracing::debug!(
            event_name = "recommendations.computed",
            order_count = orders.len(),
            distinct_items,
            returned = ranked.len(),
            "re-order recommendations computed"
        );

        ranked
    }

    /// Single forward scan over `orders`. Output keeps first-seen order.
    pub fn aggregate(&self, orders: &[Order]) -> Vec<ItemStatistics> {
        let mut index: HashMap<MenuItemId, usize> = HashMap::new();
        let mut statistics: Vec<ItemStatistics> = Vec::new();

        for order in orders {
            for line in &order.items {
                let slot = *index.entry(line.menu_item_id).or_insert_with(|| {
                    statistics.push(ItemStatistics::first_seen(
                        line.menu_item_id,
                        &line.name,
                        order.date,
                    ));
                    statistics.len() - 1
                });

                let stats = &mut statistics[slot];
                stats.name.clone_from(&line.name);
                stats.times_ordered += i64::from(line.quantity);
                stats.last_ordered = order.date;
                if let Some(rating) = order.rating_for(line.menu_item_id) {
                    stats.ratings.push(rating);
                }
            }
        }

        statistics
    }

    /// Scores every aggregate and sorts by score, highest first. The sort is
    /// stable, so equal scores keep first-seen order.
    pub fn rank(
        &self,
        statistics: Vec<ItemStatistics>,
        now: DateTime<Utc>,
    ) -> Vec<RecommendedItem> {
        let mut ranked: Vec<RecommendedItem> = statistics
            .into_iter()
            .map(|stats| {
                let components = self.calculator.component_scores(&stats, now);
                RecommendedItem {
                    menu_item_id: stats.menu_item_id,
                    score: self.calculator.calculate_total_score(&components),
                    average_rating: components.rating,
                    name: stats.name,
                    last_ordered: stats.last_ordered,
                    times_ordered: stats.times_ordered,
                }
            })
            .collect();

        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        ranked
    }
}
