use std::path::PathBuf;

use chrono::{DateTime, Utc};
use reorder_core::config::{AppConfig, ConfigOverrides, LoadOptions};
use reorder_core::errors::ApplicationError;
use reorder_store::{InMemoryMenuCatalog, JsonFileOrderHistory, RecommendationService};

use crate::commands::{current_thread_runtime, CommandResult};

#[derive(Debug, Clone, Default)]
pub struct RecommendArgs {
    pub history: Option<PathBuf>,
    pub now: Option<String>,
    pub limit: Option<usize>,
}

pub fn run(args: RecommendArgs) -> CommandResult {
    let overrides = ConfigOverrides {
        history_path: args.history,
        display_limit: args.limit,
        ..ConfigOverrides::default()
    };
    let config = match AppConfig::load(LoadOptions { overrides, ..LoadOptions::default() }) {
        Ok(config) => config,
        Err(error) => {
            let error = ApplicationError::Configuration(error.to_string());
            return CommandResult::application_failure("recommend", &error, 2);
        }
    };

    let Some(history_path) = config.history.path.clone() else {
        let error = ApplicationError::Configuration(
            "no order history configured: pass --history or set REORDER_HISTORY_PATH".to_string(),
        );
        return CommandResult::application_failure("recommend", &error, 2);
    };

    let now = match parse_now(args.now.as_deref()) {
        Ok(now) => now,
        Err(message) => return CommandResult::failure("recommend", "invalid_argument", message, 2),
    };

    let runtime = match current_thread_runtime("recommend") {
        Ok(runtime) => runtime,
        Err(failure) => return failure,
    };

    let service = RecommendationService::new(
        JsonFileOrderHistory::new(history_path),
        InMemoryMenuCatalog::seeded(),
    );

    let mut suggestions = match runtime.block_on(service.recommend(now)) {
        Ok(suggestions) => suggestions,
        Err(error) => {
            return CommandResult::application_failure("recommend", &error.into(), 3);
        }
    };
    suggestions.truncate(config.recommendations.display_limit);

    let message = match suggestions.first() {
        Some(top) => format!(
            "{} re-order suggestion(s); top pick: {} (ordered {} times)",
            suggestions.len(),
            top.recommendation.name,
            top.recommendation.times_ordered
        ),
        None => "no order history yet; nothing to recommend".to_string(),
    };

    match serde_json::to_value(&suggestions) {
        Ok(data) => CommandResult::success("recommend", message, Some(data)),
        Err(error) => CommandResult::failure("recommend", "serialization", error.to_string(), 5),
    }
}

fn parse_now(raw: Option<&str>) -> Result<DateTime<Utc>, String> {
    match raw {
        None => Ok(Utc::now()),
        Some(value) => DateTime::parse_from_rfc3339(value.trim())
            .map(|instant| instant.with_timezone(&Utc))
            .map_err(|error| format!("--now must be an RFC 3339 instant (`{value}`: {error})")),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::parse_now;

    #[test]
    fn parse_now_normalizes_offsets_to_utc() {
        let parsed = parse_now(Some("2024-03-31T14:00:00+02:00")).expect("valid instant");

        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap());
    }

    #[test]
    fn parse_now_rejects_free_text() {
        let error = parse_now(Some("yesterday")).expect_err("not an instant");

        assert!(error.contains("RFC 3339"));
    }
}
