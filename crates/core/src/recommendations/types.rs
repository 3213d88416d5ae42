//! Types for the recommendation engine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::menu::MenuItemId;

/// Per-item aggregate built during one compute call
#[derive(Debug, Clone, PartialEq)]
pub struct ItemStatistics {
    pub menu_item_id: MenuItemId,
    /// Name from the most recently scanned line for this item
    pub name: String,
    /// Sum of quantities across every order containing the item
    pub times_ordered: i64,
    /// Date of the last scanned order containing the item
    pub last_ordered: DateTime<Utc>,
    /// Ratings in order of appearance
    pub ratings: Vec<i32>,
}

impl ItemStatistics {
    pub(crate) fn first_seen(
        menu_item_id: MenuItemId,
        name: &str,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            menu_item_id,
            name: name.to_owned(),
            times_ordered: 0,
            last_ordered: date,
            ratings: Vec::new(),
        }
    }
}

/// A ranked re-order suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedItem {
    pub menu_item_id: MenuItemId,
    pub name: String,
    /// Composite score; unbounded above because frequency is a raw count
    pub score: f64,
    pub last_ordered: DateTime<Utc>,
    pub times_ordered: i64,
    pub average_rating: f64,
}

/// Individual scoring components
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ComponentScores {
    /// Raw quantity total
    pub frequency: f64,
    /// Mean rating, 0 when unrated
    pub rating: f64,
    /// Linear decay over the recency window (0.0 - 1.0)
    pub recency: f64,
}
