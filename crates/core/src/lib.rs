pub mod config;
pub mod domain;
pub mod errors;
pub mod recommendations;

pub use domain::menu::{Category, MenuItem, MenuItemId, MenuItemOptions};
pub use domain::order::{
    is_chronological, parse_order_history, sort_chronologically, MenuItemRating, Order, OrderId,
    OrderLine,
};
pub use errors::{ApplicationError, DomainError};
pub use recommendations::{
    compute_recommendations, ItemStatistics, RecommendationEngine, RecommendedItem,
    ScoreCalculator, ScoringWeights, MAX_RECOMMENDATIONS,
};
