//! Shared test utilities for Workboard integration tests.
//!
//! Provides a wiremock-backed backend and JSON builders for the two
//! endpoints the dashboard reads.

#![allow(dead_code)]

use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use workboard::api::{ApiClient, CLUSTERS_PATH, SYSTEM_STATUS_PATH};
use workboard::config::ApiConfig;

// =============================================================================
// Payload Builders
// =============================================================================

/// A device object as the backend serializes it.
pub fn device_json(id: Value, name: &str, category: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "device_type": {"category": category},
    })
}

/// A cluster with one switch, two servers and one active plus one planned link.
pub fn rack_json(name: &str, prefix: &str) -> Value {
    let sw = device_json(json!(format!("{}-sw", prefix)), &format!("{} switch", name), "switch");
    let a = device_json(json!(format!("{}-a", prefix)), &format!("{} server a", name), "server");
    let b = device_json(json!(format!("{}-b", prefix)), &format!("{} server b", name), "server");
    json!({
        "name": name,
        "devices": [sw, a, b],
        "connections": [
            {"source_device": a, "target_device": sw, "status": "active"},
            {"source_device": b, "target_device": sw, "status": "planned"},
        ],
    })
}

pub fn status_json(db: f64, api: f64, netbox: Option<&str>, netbox_health: Option<f64>) -> Value {
    json!({
        "db_health": db,
        "api_health": api,
        "netbox_status": netbox,
        "netbox_health": netbox_health,
    })
}

// =============================================================================
// Mock Backend
// =============================================================================

/// Serve `body` from the clusters endpoint.
pub async fn mount_clusters(server: &MockServer, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path(CLUSTERS_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

/// Serve `body` from the system status endpoint.
pub async fn mount_status(server: &MockServer, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path(SYSTEM_STATUS_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

pub fn api_config(server: &MockServer) -> ApiConfig {
    ApiConfig {
        base_url: server.uri(),
        request_timeout_seconds: Some(5),
    }
}

pub fn client_for(server: &MockServer) -> Arc<ApiClient> {
    Arc::new(ApiClient::new(&api_config(server)).unwrap())
}
