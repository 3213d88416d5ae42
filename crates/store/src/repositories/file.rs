use std::path::PathBuf;

use reorder_core::domain::order::{parse_order_history, Order};

use super::{OrderHistoryProvider, StoreError};

/// Read-only history backed by a JSON export of the app's orders.
#[derive(Debug, Clone)]
pub struct JsonFileOrderHistory {
    path: PathBuf,
}

impl JsonFileOrderHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl OrderHistoryProvider for JsonFileOrderHistory {
    async fn list_orders(&self) -> Result<Vec<Order>, StoreError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|source| StoreError::Io {
            path: self.path.display().to_string(),
            source,
        })?;

        Ok(parse_order_history(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use reorder_core::domain::menu::MenuItemId;
    use reorder_core::errors::{ApplicationError, DomainError};

    use crate::repositories::{JsonFileOrderHistory, OrderHistoryProvider, StoreError};

    #[tokio::test]
    async fn reads_orders_from_json_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("orders.json");
        fs::write(
            &path,
            r#"[{ "id": "ord-1", "items": [{ "menuItemId": 6, "name": "Chicken Wings", "quantity": 2 }], "date": "2024-03-01T18:00:00Z" }]"#,
        )
        .expect("write history");

        let orders = JsonFileOrderHistory::new(&path).list_orders().await.expect("read history");

        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].items[0].menu_item_id, MenuItemId(6));
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let dir = TempDir::new().expect("temp dir");
        let history = JsonFileOrderHistory::new(dir.path().join("absent.json"));

        let result = history.list_orders().await;

        assert!(matches!(result, Err(StoreError::Io { .. })));
    }

    #[tokio::test]
    async fn unreadable_file_surfaces_as_history_failure() {
        let dir = TempDir::new().expect("temp dir");
        let history = JsonFileOrderHistory::new(dir.path().join("absent.json"));

        let error = history.list_orders().await.expect_err("file is absent");
        let error = ApplicationError::from(error);

        assert_eq!(error.error_class(), "history");
        assert!(matches!(error, ApplicationError::HistoryUnreadable(ref detail)
            if detail.contains("absent.json")));
    }

    #[tokio::test]
    async fn malformed_file_is_a_domain_error() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("orders.json");
        fs::write(&path, r#"[{ "id": "ord-1", "items": [] }]"#).expect("write history");

        let result = JsonFileOrderHistory::new(&path).list_orders().await;

        assert!(matches!(
            result,
            Err(StoreError::Domain(DomainError::MalformedOrderHistory(ref message)))
                if message.contains("date")
        ));
    }
}
