//! Output formatting helpers for CLI commands

use crate::api::SystemStatusSnapshot;
use crate::dashboard::{DashboardUpdate, UpdateType};
use crate::graph::{GraphView, TopologySummary};
use crate::status::{IndicatorBoard, StatusVariant};
use colored::{ColoredString, Colorize};
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde_json::json;
use std::fmt::Write;

/// Color a connection status: active links green, anything else yellow.
pub fn connection_status(status: &str) -> ColoredString {
    if status == "active" {
        status.green()
    } else {
        status.yellow()
    }
}

fn variant_colored(text: &str, variant: StatusVariant) -> ColoredString {
    match variant {
        StatusVariant::Success => text.green(),
        StatusVariant::Info => text.cyan(),
        StatusVariant::Warning => text.yellow(),
    }
}

/// Color a health percentage by how healthy it is.
pub fn health_colored(value: f64) -> ColoredString {
    let text = crate::status::format_percent(value);
    if value >= 80.0 {
        text.green()
    } else if value >= 50.0 {
        text.yellow()
    } else {
        text.red()
    }
}

/// Format the mounted graph as summary lines plus node and edge tables
pub fn format_graph_table(view: &GraphView, summary: &TopologySummary, rejected: usize) -> String {
    let mut output = String::new();

    let _ = writeln!(
        output,
        "Clusters: {}  Devices: {} ({} servers, {} switches)",
        summary.clusters, summary.devices, summary.servers, summary.switches
    );
    let _ = writeln!(
        output,
        "Connections: {} ({} active, {} pending)",
        summary.connections,
        summary.active_connections.to_string().green(),
        summary.pending_connections.to_string().yellow()
    );
    if rejected > 0 {
        let _ = writeln!(
            output,
            "{}",
            format!("{} element(s) rejected by the view", rejected).red()
        );
    }

    let mut nodes = Table::new();
    nodes.load_preset(UTF8_FULL);
    nodes.set_content_arrangement(ContentArrangement::Dynamic);
    nodes.set_header(vec!["ID", "Label", "Type", "Cluster"]);
    for node in view.nodes() {
        nodes.add_row(vec![
            Cell::new(&node.id),
            Cell::new(&node.label),
            Cell::new(&node.node_type),
            Cell::new(&node.cluster),
        ]);
    }

    let mut edges = Table::new();
    edges.load_preset(UTF8_FULL);
    edges.set_content_arrangement(ContentArrangement::Dynamic);
    edges.set_header(vec!["Source", "Target", "Status"]);
    for edge in view.edges() {
        edges.add_row(vec![
            Cell::new(&edge.source),
            Cell::new(&edge.target),
            Cell::new(connection_status(&edge.status)),
        ]);
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "{}", nodes);
    let _ = writeln!(output);
    let _ = write!(output, "{}", edges);

    output
}

/// Format the mounted graph as the renderer document
pub fn format_graph_json(view: &GraphView) -> String {
    serde_json::to_string_pretty(&view.to_document()).unwrap_or_default()
}

/// Format a status snapshot for humans
pub fn format_status_pretty(snapshot: &SystemStatusSnapshot) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "Database: {}", health_colored(snapshot.db_health));
    let _ = writeln!(output, "API:      {}", health_colored(snapshot.api_health));

    match snapshot.netbox_status() {
        Some(status) => {
            let variant = StatusVariant::from_netbox_status(status);
            let label = crate::status::capitalize_first(status);
            let health = snapshot.netbox_health.unwrap_or(0.0);
            let _ = write!(
                output,
                "NetBox:   {} ({})",
                variant_colored(&label, variant),
                health_colored(health)
            );
        }
        None => {
            let _ = write!(output, "NetBox:   {}", "not reported".dimmed());
        }
    }

    output
}

/// Format a status snapshot and the resulting widget state as JSON
pub fn format_status_json(snapshot: &SystemStatusSnapshot, board: &IndicatorBoard) -> String {
    serde_json::to_string_pretty(&json!({
        "status": snapshot,
        "indicators": board,
    }))
    .unwrap_or_default()
}

/// One line per dashboard update, for `watch`
pub fn format_update(update: &DashboardUpdate) -> String {
    let time = update.timestamp.format("%H:%M:%S").to_string().dimmed();
    match update.update_type {
        UpdateType::GraphSynced => format!(
            "{} {} {} nodes, {} edges",
            time,
            "graph".bold(),
            update.data["nodes"],
            update.data["edges"]
        ),
        UpdateType::StatusApplied => {
            let width = |id: &str| {
                update
                    .data
                    .get(id)
                    .and_then(|w| w.get("width"))
                    .and_then(|w| w.as_str())
                    .unwrap_or("-")
                    .to_string()
            };
            format!(
                "{} {} db {}, api {}",
                time,
                "status".bold(),
                width("db-health-bar"),
                width("api-health-bar")
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphElement, NodeData, RenderSurface, Theme};
    use crate::status::{apply_snapshot, IndicatorBindings};

    fn sample_view() -> GraphView {
        let mut view = GraphView::mount("cy", Theme::standard());
        view.add(GraphElement::Nodes(NodeData {
            id: "sw-1".to_string(),
            label: "core switch".to_string(),
            node_type: "switch".to_string(),
            cluster: "Rack A".to_string(),
        }))
        .unwrap();
        view
    }

    fn sample_status() -> SystemStatusSnapshot {
        SystemStatusSnapshot {
            db_health: 42.0,
            api_health: 87.0,
            netbox_status: Some("syncing".to_string()),
            netbox_health: Some(60.0),
        }
    }

    #[test]
    fn test_format_graph_table_lists_nodes() {
        colored::control::set_override(false);
        let summary = TopologySummary {
            clusters: 1,
            devices: 1,
            switches: 1,
            ..Default::default()
        };
        let output = format_graph_table(&sample_view(), &summary, 0);
        assert!(output.contains("Clusters: 1"));
        assert!(output.contains("core switch"));
        assert!(output.contains("Rack A"));
        assert!(!output.contains("rejected"));
    }

    #[test]
    fn test_format_graph_table_reports_rejections() {
        colored::control::set_override(false);
        let output = format_graph_table(&sample_view(), &TopologySummary::default(), 2);
        assert!(output.contains("2 element(s) rejected"));
    }

    #[test]
    fn test_format_graph_json_is_document() {
        let parsed: serde_json::Value =
            serde_json::from_str(&format_graph_json(&sample_view())).unwrap();
        assert_eq!(parsed["container"], "cy");
        assert_eq!(parsed["elements"]["nodes"][0]["data"]["id"], "sw-1");
    }

    #[test]
    fn test_format_status_pretty() {
        colored::control::set_override(false);
        let output = format_status_pretty(&sample_status());
        assert!(output.contains("Database: 42%"));
        assert!(output.contains("API:      87%"));
        assert!(output.contains("Syncing (60%)"));
    }

    #[test]
    fn test_format_status_pretty_without_netbox() {
        colored::control::set_override(false);
        let mut status = sample_status();
        status.netbox_status = None;
        assert!(format_status_pretty(&status).contains("not reported"));
    }

    #[test]
    fn test_format_status_json() {
        let status = sample_status();
        let mut board = IndicatorBoard::new();
        apply_snapshot(&status, &IndicatorBindings::default(), &mut board);

        let parsed: serde_json::Value =
            serde_json::from_str(&format_status_json(&status, &board)).unwrap();
        assert_eq!(parsed["status"]["db_health"], 42.0);
        assert_eq!(parsed["indicators"]["db-health-bar"]["width"], "42%");
    }

    #[test]
    fn test_format_update_graph_line() {
        colored::control::set_override(false);
        let update = crate::dashboard::create_graph_update(&TopologySummary::default(), 3, 2);
        let line = format_update(&update);
        assert!(line.contains("graph 3 nodes, 2 edges"));
    }

    #[test]
    fn test_format_update_status_line() {
        colored::control::set_override(false);
        let update = crate::dashboard::create_status_update(json!({
            "db-health-bar": {"width": "42%", "visible": true},
        }));
        let line = format_update(&update);
        assert!(line.contains("db 42%, api -"));
    }
}
