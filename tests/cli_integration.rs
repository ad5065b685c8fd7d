//! CLI Integration Tests
//!
//! End-to-end tests for CLI commands using assert_cmd.

mod common;

use assert_cmd::Command;
use common::{mount_clusters, mount_status, rack_json, status_json};
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::MockServer;

/// Get the workboard binary for testing
fn workboard_cmd() -> Command {
    let mut cmd = Command::cargo_bin("workboard").unwrap();
    cmd.env_remove("WORKBOARD_API_URL")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_version_output() {
    workboard_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("workboard"));
}

#[test]
fn test_help_shows_all_commands() {
    workboard_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("graph"))
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("watch"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_graph_help() {
    workboard_cmd()
        .args(["graph", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--json"))
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--api-url"));
}

#[test]
fn test_config_init_creates_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("workboard.toml");

    workboard_cmd()
        .args(["config", "init", "-o", config_path.to_str().unwrap()])
        .assert()
        .success();

    assert!(config_path.exists());
    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[api]"));
    assert!(content.contains("[status.bindings]"));
}

#[test]
fn test_config_init_no_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("workboard.toml");
    std::fs::write(&config_path, "existing content").unwrap();

    workboard_cmd()
        .args(["config", "init", "-o", config_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert_eq!(content, "existing content");
}

#[test]
fn test_completions_bash() {
    workboard_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("workboard"));
}

#[test]
fn test_graph_invalid_api_url_fails() {
    workboard_cmd()
        .args(["graph", "--api-url", "netbox.local"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("api.base_url"));
}

#[test]
fn test_graph_unreachable_backend_fails() {
    workboard_cmd()
        .args(["graph", "--api-url", "http://127.0.0.1:1", "-l", "off"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load network data"));
}

#[test]
fn test_invalid_config_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("workboard.toml");
    std::fs::write(&config_path, "[api\nbase_url =").unwrap();

    workboard_cmd()
        .args(["status", "-c", config_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_graph_json_prints_document() {
    let server = MockServer::start().await;
    mount_clusters(&server, 200, serde_json::json!([rack_json("Rack A", "a")])).await;

    let output = workboard_cmd()
        .args(["graph", "--json", "-l", "off", "--api-url", &server.uri()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let document: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(document["container"], "cy");
    assert_eq!(document["elements"]["nodes"].as_array().unwrap().len(), 3);
    assert_eq!(document["elements"]["edges"][0]["data"]["id"], "e0");
    assert_eq!(document["layout"]["name"], "cose");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_graph_table_output() {
    let server = MockServer::start().await;
    mount_clusters(&server, 200, serde_json::json!([rack_json("Rack A", "a")])).await;

    workboard_cmd()
        .args(["graph", "-l", "off", "--api-url", &server.uri()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Clusters: 1"))
        .stdout(predicate::str::contains("Rack A switch"))
        .stdout(predicate::str::contains("planned"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_status_json_prints_indicators() {
    let server = MockServer::start().await;
    mount_status(&server, 200, status_json(42.0, 87.0, Some("syncing"), Some(50.0))).await;

    let output = workboard_cmd()
        .args(["status", "--json", "-l", "off", "--api-url", &server.uri()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["indicators"]["db-health-bar"]["width"], "42%");
    assert_eq!(
        parsed["indicators"]["netbox-status-badge"]["class"],
        "status-badge status-badge-info"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_status_server_error_fails() {
    let server = MockServer::start().await;
    mount_status(&server, 500, serde_json::json!({})).await;

    workboard_cmd()
        .args(["status", "-l", "off", "--api-url", &server.uri()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP error: 500"));
}
