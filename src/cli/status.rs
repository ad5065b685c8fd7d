//! Status command implementation

use crate::api::ApiClient;
use crate::cli::{output, StatusArgs};
use crate::status::{IndicatorBoard, PollOutcome, StatusPoller};
use std::sync::{Arc, PoisonError};

/// Handle `workboard status` command
pub async fn handle_status(args: &StatusArgs) -> Result<String, Box<dyn std::error::Error>> {
    let config = args.connection.load_config()?;
    crate::logging::init_tracing(&config.logging)?;

    let api = Arc::new(ApiClient::new(&config.api)?);
    let poller = StatusPoller::new(api, config.status.bindings.clone(), IndicatorBoard::new());

    match poller.poll_once().await {
        PollOutcome::Applied { snapshot } => {
            if args.json {
                let board = poller.sink();
                let board = board.read().unwrap_or_else(PoisonError::into_inner);
                Ok(output::format_status_json(&snapshot, &board))
            } else {
                Ok(output::format_status_pretty(&snapshot))
            }
        }
        PollOutcome::Failed { error } => Err(format!(
            "Failed to fetch system status from {}: {}",
            config.api.base_url, error
        )
        .into()),
        PollOutcome::Stale { .. } => Err("Status poll was superseded".into()),
    }
}
