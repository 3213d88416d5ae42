use tokio::sync::RwLock;

use reorder_core::domain::menu::{Category, MenuItem, MenuItemId};
use reorder_core::domain::order::{MenuItemRating, Order, OrderId};

use super::{CatalogLookup, OrderHistoryProvider, OrderHistoryStore, StoreError};
use crate::fixtures;

/// Newest-first order history, as the app keeps it.
#[derive(Default)]
pub struct InMemoryOrderHistory {
    orders: RwLock<Vec<Order>>,
}

impl InMemoryOrderHistory {
    /// Builds a history from orders listed oldest first, as if each had been
    /// placed in turn.
    pub fn from_placed(orders: impl IntoIterator<Item = Order>) -> Self {
        let mut newest_first: Vec<Order> = orders.into_iter().collect();
        newest_first.reverse();
        Self { orders: RwLock::new(newest_first) }
    }
}

#[async_trait::async_trait]
impl OrderHistoryProvider for InMemoryOrderHistory {
    async fn list_orders(&self) -> Result<Vec<Order>, StoreError> {
        let orders = self.orders.read().await;
        Ok(orders.clone())
    }
}

#[async_trait::async_trait]
impl OrderHistoryStore for InMemoryOrderHistory {
    async fn add_order(&self, order: Order) -> Result<(), StoreError> {
        let mut orders = self.orders.write().await;
        orders.insert(0, order);
        Ok(())
    }

    async fn add_menu_item_rating(
        &self,
        order_id: &OrderId,
        menu_item_id: MenuItemId,
        rating: i32,
        review: Option<String>,
    ) -> Result<(), StoreError> {
        let mut orders = self.orders.write().await;
        let order = orders
            .iter_mut()
            .find(|order| &order.id == order_id)
            .ok_or_else(|| StoreError::OrderNotFound(order_id.clone()))?;

        match order.item_ratings.iter_mut().find(|existing| existing.menu_item_id == menu_item_id)
        {
            Some(existing) => {
                existing.rating = rating;
                existing.review = review;
            }
            None => order.item_ratings.push(MenuItemRating { menu_item_id, rating, review }),
        }

        Ok(())
    }
}

pub struct InMemoryMenuCatalog {
    categories: Vec<Category>,
    items: Vec<MenuItem>,
}

impl InMemoryMenuCatalog {
    pub fn new(categories: Vec<Category>, items: Vec<MenuItem>) -> Self {
        Self { categories, items }
    }

    /// Catalog preloaded with the demo menu.
    pub fn seeded() -> Self {
        Self::new(fixtures::seed_categories(), fixtures::seed_menu())
    }
}

#[async_trait::async_trait]
impl CatalogLookup for InMemoryMenuCatalog {
    async fn find_by_id(&self, id: MenuItemId) -> Result<Option<MenuItem>, StoreError> {
        Ok(self.items.iter().find(|item| item.id == id).cloned())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.categories.clone())
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<MenuItem>, StoreError> {
        Ok(self.items.iter().filter(|item| item.in_category(category)).cloned().collect())
    }

    async fn list_popular(&self) -> Result<Vec<MenuItem>, StoreError> {
        Ok(self.items.iter().filter(|item| item.is_popular).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use reorder_core::domain::menu::MenuItemId;
    use reorder_core::domain::order::{Order, OrderId};

    use crate::repositories::{
        CatalogLookup, InMemoryMenuCatalog, InMemoryOrderHistory, OrderHistoryProvider,
        OrderHistoryStore, StoreError,
    };

    #[tokio::test]
    async fn added_orders_are_listed_newest_first() {
        let history = InMemoryOrderHistory::default();
        let first = Order::new("ord-1", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let second = Order::new("ord-2", Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap());

        history.add_order(first).await.expect("add first order");
        history.add_order(second).await.expect("add second order");
        let orders = history.list_orders().await.expect("list orders");

        let ids: Vec<_> = orders.iter().map(|order| order.id.0.as_str()).collect();
        assert_eq!(ids, vec!["ord-2", "ord-1"]);
    }

    #[tokio::test]
    async fn from_placed_matches_sequential_adds() {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let history = InMemoryOrderHistory::from_placed(vec![
            Order::new("ord-1", date),
            Order::new("ord-2", date),
        ]);

        let orders = history.list_orders().await.expect("list orders");

        assert_eq!(orders[0].id, OrderId("ord-2".to_string()));
    }

    #[tokio::test]
    async fn rating_an_item_twice_replaces_the_first_rating() {
        let history = InMemoryOrderHistory::default();
        let order = Order::new("ord-1", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
            .with_line(2, "Margherita Pizza", 1);
        history.add_order(order).await.expect("add order");
        let order_id = OrderId("ord-1".to_string());

        history
            .add_menu_item_rating(&order_id, MenuItemId(2), 3, None)
            .await
            .expect("first rating");
        history
            .add_menu_item_rating(
                &order_id,
                MenuItemId(2),
                5,
                Some("better second time".to_string()),
            )
            .await
            .expect("second rating");

        let orders = history.list_orders().await.expect("list orders");
        assert_eq!(orders[0].item_ratings.len(), 1);
        assert_eq!(orders[0].rating_for(MenuItemId(2)), Some(5));
        assert_eq!(orders[0].item_ratings[0].review.as_deref(), Some("better second time"));
    }

    #[tokio::test]
    async fn rating_an_unknown_order_fails() {
        let history = InMemoryOrderHistory::default();

        let result = history
            .add_menu_item_rating(&OrderId("missing".to_string()), MenuItemId(1), 4, None)
            .await;

        assert!(matches!(result, Err(StoreError::OrderNotFound(ref id)) if id.0 == "missing"));
    }

    #[tokio::test]
    async fn seeded_catalog_lookups() {
        let catalog = InMemoryMenuCatalog::seeded();

        let pizza = catalog.find_by_id(MenuItemId(2)).await.expect("lookup").expect("pizza exists");
        assert_eq!(pizza.name, "Margherita Pizza");
        assert!(catalog.find_by_id(MenuItemId(99)).await.expect("lookup").is_none());

        let appetizers = catalog.list_by_category("Appetizers").await.expect("category");
        let names: Vec<_> = appetizers.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["Caesar Salad", "Chicken Wings"]);

        let popular = catalog.list_popular().await.expect("popular");
        assert_eq!(popular.len(), 5);
        assert!(popular.iter().all(|item| item.is_popular));

        assert_eq!(catalog.list_categories().await.expect("categories").len(), 4);
    }
}
