use reorder_store::{CatalogLookup, InMemoryMenuCatalog, StoreError};

use crate::commands::{current_thread_runtime, CommandResult};

pub fn run(category: Option<&str>, popular_only: bool) -> CommandResult {
    let runtime = match current_thread_runtime("menu") {
        Ok(runtime) => runtime,
        Err(failure) => return failure,
    };

    let catalog = InMemoryMenuCatalog::seeded();
    let result = runtime.block_on(async {
        let mut items = match category {
            Some(category) => catalog.list_by_category(category).await?,
            None if popular_only => return catalog.list_popular().await,
            None => {
                let mut all = Vec::new();
                for category in catalog.list_categories().await? {
                    all.extend(catalog.list_by_category(&category.name).await?);
                }
                all
            }
        };
        if popular_only {
            items.retain(|item| item.is_popular);
        }
        Ok::<_, StoreError>(items)
    });

    let items = match result {
        Ok(items) => items,
        Err(error) => return CommandResult::application_failure("menu", &error.into(), 3),
    };

    let message = match category {
        Some(category) => format!("{} item(s) in {category}", items.len()),
        None => format!("{} item(s) on the menu", items.len()),
    };

    match serde_json::to_value(&items) {
        Ok(data) => CommandResult::success("menu", message, Some(data)),
        Err(error) => CommandResult::failure("menu", "serialization", error.to_string(), 5),
    }
}
