//! Configuration for the status poller.

use super::bindings::IndicatorBindings;
use serde::{Deserialize, Serialize};

/// Configuration for system status polling.
///
/// The poll period is fixed at [`STATUS_POLL_INTERVAL`](super::STATUS_POLL_INTERVAL)
/// and is deliberately absent here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    /// Whether the poller runs in `watch` mode
    pub enabled: bool,
    /// NetBox status known at start-up, applied once before the first poll
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_status: Option<String>,
    /// Widget ids written by the poller
    pub bindings: IndicatorBindings,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            initial_status: None,
            bindings: IndicatorBindings::default(),
        }
    }
}
