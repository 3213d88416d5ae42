use async_trait::async_trait;
use thiserror::Error;

use reorder_core::domain::menu::{Category, MenuItem, MenuItemId};
use reorder_core::domain::order::{Order, OrderId};
use reorder_core::errors::{ApplicationError, DomainError};

pub mod file;
pub mod memory;

pub use file::JsonFileOrderHistory;
pub use memory::{InMemoryMenuCatalog, InMemoryOrderHistory};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not read order history `{path}`: {source}")]
    Io { path: String, source: std::io::Error },
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("order not found: {0}")]
    OrderNotFound(OrderId),
}

impl From<StoreError> for ApplicationError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::Domain(error) => Self::Domain(error),
            StoreError::Io { .. } => Self::HistoryUnreadable(value.to_string()),
            StoreError::OrderNotFound(_) => Self::Store(value.to_string()),
        }
    }
}

/// Read side of the order history. Orders come back in the provider's own
/// order, which is not necessarily chronological.
#[async_trait]
pub trait OrderHistoryProvider: Send + Sync {
    async fn list_orders(&self) -> Result<Vec<Order>, StoreError>;
}

#[async_trait]
pub trait OrderHistoryStore: OrderHistoryProvider {
    /// Records a newly placed order ahead of all earlier ones.
    async fn add_order(&self, order: Order) -> Result<(), StoreError>;

    /// Rates one item of an order, replacing any earlier rating of the same
    /// item on that order.
    async fn add_menu_item_rating(
        &self,
        order_id: &OrderId,
        menu_item_id: MenuItemId,
        rating: i32,
        review: Option<String>,
    ) -> Result<(), StoreError>;
}

#[async_trait]
pub trait CatalogLookup: Send + Sync {
    async fn find_by_id(&self, id: MenuItemId) -> Result<Option<MenuItem>, StoreError>;
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;
    async fn list_by_category(&self, category: &str) -> Result<Vec<MenuItem>, StoreError>;
    async fn list_popular(&self) -> Result<Vec<MenuItem>, StoreError>;
}
