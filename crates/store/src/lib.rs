pub mod fixtures;
pub mod repositories;
pub mod service;

pub use repositories::{
    CatalogLookup, InMemoryMenuCatalog, InMemoryOrderHistory, JsonFileOrderHistory,
    OrderHistoryProvider, OrderHistoryStore, StoreError,
};
pub use service::{RecommendationService, ReorderSuggestion};
