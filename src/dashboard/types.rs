//! Type definitions for dashboard update messages

use serde::{Deserialize, Serialize};

/// Update message published after the graph or the indicators change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardUpdate {
    /// Type of update
    pub update_type: UpdateType,
    /// When the update was applied
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// JSON payload for the update
    pub data: serde_json::Value,
}

/// Type of dashboard update
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UpdateType {
    /// The topology graph was rebuilt
    GraphSynced,
    /// A system status snapshot was applied to the indicators
    StatusApplied,
}
