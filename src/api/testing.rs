//! Scripted [`TopologyApi`] for unit tests.

use super::{ApiError, ClusterSnapshot, SystemStatusSnapshot, TopologyApi};
use super::{ConnectionSnapshot, DeviceSnapshot, DeviceTypeSnapshot};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

type Gate = Option<Arc<Notify>>;

/// Returns queued responses in order; once a queue is empty every call fails
/// with a connection error.
#[derive(Default)]
pub struct ScriptedApi {
    clusters: Mutex<VecDeque<(Result<Vec<ClusterSnapshot>, ApiError>, Gate)>>,
    statuses: Mutex<VecDeque<(Result<SystemStatusSnapshot, ApiError>, Gate)>>,
    pub cluster_calls: AtomicUsize,
    pub status_calls: AtomicUsize,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_clusters(&self, response: Result<Vec<ClusterSnapshot>, ApiError>) {
        self.clusters.lock().unwrap().push_back((response, None));
    }

    /// Queue a response that is only returned after the gate is notified.
    pub fn push_gated_clusters(&self, response: Result<Vec<ClusterSnapshot>, ApiError>) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.clusters
            .lock()
            .unwrap()
            .push_back((response, Some(gate.clone())));
        gate
    }

    pub fn push_status(&self, response: Result<SystemStatusSnapshot, ApiError>) {
        self.statuses.lock().unwrap().push_back((response, None));
    }

    pub fn push_gated_status(&self, response: Result<SystemStatusSnapshot, ApiError>) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.statuses
            .lock()
            .unwrap()
            .push_back((response, Some(gate.clone())));
        gate
    }
}

#[async_trait]
impl TopologyApi for ScriptedApi {
    async fn fetch_clusters(&self) -> Result<Vec<ClusterSnapshot>, ApiError> {
        self.cluster_calls.fetch_add(1, Ordering::SeqCst);
        let next = self.clusters.lock().unwrap().pop_front();
        let (response, gate) = next.unwrap_or_else(|| {
            (
                Err(ApiError::ConnectionFailed("script exhausted".to_string())),
                None,
            )
        });
        if let Some(gate) = gate {
            gate.notified().await;
        }
        response
    }

    async fn fetch_system_status(&self) -> Result<SystemStatusSnapshot, ApiError> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        let next = self.statuses.lock().unwrap().pop_front();
        let (response, gate) = next.unwrap_or_else(|| {
            (
                Err(ApiError::ConnectionFailed("script exhausted".to_string())),
                None,
            )
        });
        if let Some(gate) = gate {
            gate.notified().await;
        }
        response
    }
}

pub fn device(id: &str, name: &str, category: &str) -> DeviceSnapshot {
    DeviceSnapshot {
        id: id.to_string(),
        name: name.to_string(),
        device_type: DeviceTypeSnapshot {
            category: category.to_string(),
        },
    }
}

pub fn connection(source: &DeviceSnapshot, target: &DeviceSnapshot, status: &str) -> ConnectionSnapshot {
    ConnectionSnapshot {
        source_device: source.clone(),
        target_device: target.clone(),
        status: status.to_string(),
    }
}

/// Two servers behind one switch, one active and one planned link.
pub fn rack(name: &str, prefix: &str) -> ClusterSnapshot {
    let sw = device(&format!("{}-sw", prefix), &format!("{} switch", name), "switch");
    let a = device(&format!("{}-a", prefix), &format!("{} server a", name), "server");
    let b = device(&format!("{}-b", prefix), &format!("{} server b", name), "server");
    ClusterSnapshot {
        name: name.to_string(),
        connections: vec![connection(&a, &sw, "active"), connection(&b, &sw, "planned")],
        devices: vec![sw, a, b],
    }
}

pub fn status(db: f64, api: f64, netbox: Option<&str>, netbox_health: Option<f64>) -> SystemStatusSnapshot {
    SystemStatusSnapshot {
        db_health: db,
        api_health: api,
        netbox_status: netbox.map(str::to_string),
        netbox_health,
    }
}
