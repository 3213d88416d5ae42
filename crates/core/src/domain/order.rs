use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::menu::MenuItemId;
use crate::errors::DomainError;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub String);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One line of an order. `quantity` is signed so malformed upstream data
/// stays representable; nothing here validates it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub menu_item_id: MenuItemId,
    pub name: String,
    pub quantity: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemRating {
    pub menu_item_id: MenuItemId,
    pub rating: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<OrderLine>,
    pub date: DateTime<Utc>,
    #[serde(default, rename = "menuItemsRatings", alias = "itemRatings")]
    pub item_ratings: Vec<MenuItemRating>,
}

impl Order {
    pub fn new(id: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self { id: OrderId(id.into()), items: Vec::new(), date, item_ratings: Vec::new() }
    }

    pub fn with_line(mut self, menu_item_id: u32, name: impl Into<String>, quantity: i32) -> Self {
        self.items.push(OrderLine {
            menu_item_id: MenuItemId(menu_item_id),
            name: name.into(),
            quantity,
        });
        self
    }

    pub fn with_rating(mut self, menu_item_id: u32, rating: i32) -> Self {
        self.item_ratings.push(MenuItemRating {
            menu_item_id: MenuItemId(menu_item_id),
            rating,
            review: None,
        });
        self
    }

    /// First rating recorded for `menu_item_id` on this order.
    pub fn rating_for(&self, menu_item_id: MenuItemId) -> Option<i32> {
        self.item_ratings
            .iter()
            .find(|rating| rating.menu_item_id == menu_item_id)
            .map(|rating| rating.rating)
    }
}

/// Parses a JSON array of orders as stored by the app.
///
/// Absent required fields and unparseable dates are rejected here. Values
/// that are merely out of range (negative quantities, ratings outside 1..=5)
/// are passed through untouched.
pub fn parse_order_history(raw: &str) -> Result<Vec<Order>, DomainError> {
    serde_json::from_str::<Vec<Order>>(raw)
        .map_err(|error| DomainError::MalformedOrderHistory(error.to_string()))
}

pub fn is_chronological(orders: &[Order]) -> bool {
    orders.windows(2).all(|pair| pair[0].date <= pair[1].date)
}

/// Stable sort, oldest first. Orders placed at the same instant keep their
/// relative position.
pub fn sort_chronologically(orders: &mut [Order]) {
    orders.sort_by_key(|order| order.date);
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{is_chronological, parse_order_history, sort_chronologically, Order};
    use crate::domain::menu::MenuItemId;
    use crate::errors::DomainError;

    #[test]
    fn parses_app_shaped_history() {
        let raw = r#"[
            {
                "id": "ord-1",
                "items": [{ "id": 17, "menuItemId": 2, "name": "Margherita Pizza", "quantity": 2 }],
                "orderType": "Delivery",
                "status": "Delivered",
                "date": "2024-03-01T12:30:00.000Z",
                "menuItemsRatings": [{ "menuItemId": 2, "rating": 5, "review": "great crust" }]
            }
        ]"#;

        let orders = parse_order_history(raw).expect("history should parse");

        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].items[0].menu_item_id, MenuItemId(2));
        assert_eq!(orders[0].items[0].quantity, 2);
        assert_eq!(orders[0].rating_for(MenuItemId(2)), Some(5));
        assert_eq!(orders[0].item_ratings[0].review.as_deref(), Some("great crust"));
    }

    #[test]
    fn ratings_are_optional() {
        let raw = r#"[{ "id": "ord-1", "items": [], "date": "2024-03-01T00:00:00Z" }]"#;

        let orders = parse_order_history(raw).expect("history should parse");

        assert!(orders[0].item_ratings.is_empty());
        assert_eq!(orders[0].rating_for(MenuItemId(1)), None);
    }

    #[test]
    fn missing_required_field_fails_fast() {
        let raw = r#"[{ "id": "ord-1", "items": [{ "menuItemId": 1, "name": "Classic Burger" }], "date": "2024-03-01T00:00:00Z" }]"#;

        let error = parse_order_history(raw).expect_err("quantity is required");

        assert!(matches!(
            error,
            DomainError::MalformedOrderHistory(ref message)
                if message.contains("missing field `quantity`")
        ));
    }

    #[test]
    fn missing_date_fails_fast() {
        let raw = r#"[{ "id": "ord-1", "items": [] }]"#;

        let error = parse_order_history(raw).expect_err("date is required");

        assert!(error.to_string().contains("missing field `date`"));
    }

    #[test]
    fn malformed_date_is_rejected() {
        let raw = r#"[{ "id": "ord-1", "items": [], "date": "last tuesday" }]"#;

        assert!(parse_order_history(raw).is_err());
    }

    #[test]
    fn out_of_range_values_pass_through() {
        let raw = r#"[{
            "id": "ord-1",
            "items": [{ "menuItemId": 3, "name": "Caesar Salad", "quantity": -2 }],
            "date": "2024-03-01T00:00:00Z",
            "menuItemsRatings": [{ "menuItemId": 3, "rating": 9 }]
        }]"#;

        let orders = parse_order_history(raw).expect("range is not validated");

        assert_eq!(orders[0].items[0].quantity, -2);
        assert_eq!(orders[0].rating_for(MenuItemId(3)), Some(9));
    }

    #[test]
    fn sort_chronologically_is_stable_for_equal_dates() {
        let early = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let mut orders = vec![
            Order::new("c", late),
            Order::new("a", early),
            Order::new("d", late),
            Order::new("b", early),
        ];

        assert!(!is_chronological(&orders));
        sort_chronologically(&mut orders);

        let ids: Vec<_> = orders.iter().map(|order| order.id.0.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);
        assert!(is_chronological(&orders));
    }
}
