//! Dashboard update stream
//!
//! The graph syncer and the status poller publish a [`DashboardUpdate`] on a
//! `tokio::sync::broadcast` channel each time they apply new backend state.
//! Front ends (the `watch` command, an embedding application) subscribe to it
//! instead of polling the surfaces.

pub mod types;

pub use types::{DashboardUpdate, UpdateType};

use crate::graph::TopologySummary;
use tokio::sync::broadcast;

/// Capacity of the update channel; slow subscribers lag rather than block.
pub const UPDATE_CHANNEL_CAPACITY: usize = 64;

/// Create the broadcast channel shared by the syncer and the poller.
pub fn channel() -> (
    broadcast::Sender<DashboardUpdate>,
    broadcast::Receiver<DashboardUpdate>,
) {
    broadcast::channel(UPDATE_CHANNEL_CAPACITY)
}

/// Create a graph synced update message
pub fn create_graph_update(summary: &TopologySummary, nodes: usize, edges: usize) -> DashboardUpdate {
    let data = serde_json::json!({
        "nodes": nodes,
        "edges": edges,
        "summary": summary,
    });

    DashboardUpdate {
        update_type: UpdateType::GraphSynced,
        timestamp: chrono::Utc::now(),
        data,
    }
}

/// Create a status applied update message from the exported indicator state
pub fn create_status_update(widgets: serde_json::Value) -> DashboardUpdate {
    DashboardUpdate {
        update_type: UpdateType::StatusApplied,
        timestamp: chrono::Utc::now(),
        data: widgets,
    }
}
