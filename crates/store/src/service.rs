//! Wires the order history and catalog collaborators to the engine.

use chrono::{DateTime, Utc};
use serde::Serialize;

use reorder_core::domain::menu::MenuItem;
use reorder_core::domain::order::sort_chronologically;
use reorder_core::recommendations::{RecommendationEngine, RecommendedItem};

use crate::repositories::{CatalogLookup, OrderHistoryProvider, StoreError};

/// A recommendation paired with its current catalog entry. `detail` is
/// `None` when the item is no longer on the menu.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderSuggestion {
    #[serde(flatten)]
    pub recommendation: RecommendedItem,
    pub detail: Option<MenuItem>,
}

pub struct RecommendationService<H, C> {
    history: H,
    catalog: C,
    engine: RecommendationEngine,
}

impl<H, C> RecommendationService<H, C>
where
    H: OrderHistoryProvider,
    C: CatalogLookup,
{
    pub fn new(history: H, catalog: C) -> Self {
        Self { history, catalog, engine: RecommendationEngine::new() }
    }

    pub fn with_engine(mut self, engine: RecommendationEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Ranks the full history as of `now`. The history is put in
    /// chronological order first, whatever order the provider yields.
    pub async fn recommend(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<ReorderSuggestion>, StoreError> {
        let mut orders = self.history.list_orders().await?;
        sort_chronologically(&mut orders);

        let ranked = self.engine.compute(&orders, now);
        let mut suggestions = Vec::with_capacity(ranked.len());

        for recommendation in ranked {
            let detail = self.catalog.find_by_id(recommendation.menu_item_id).await?;
            if detail.is_none() {
                tracing::debug!(
                    event_name = "recommendations.catalog_miss",
                    menu_item_id = recommendation.menu_item_id.0,
                    "recommended item is not in the catalog"
                );
            }
            suggestions.push(ReorderSuggestion { recommendation, detail });
        }

        tracing::info!(
            event_name = "recommendations.served",
            order_count = orders.len(),
            returned = suggestions.len(),
            "re-order suggestions served"
        );

        Ok(suggestions)
    }
}
