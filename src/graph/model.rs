//! Graph elements and the mapping from cluster snapshots.

use crate::api::ClusterSnapshot;
use serde::{Deserialize, Serialize};

/// Which collection of the surface an element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementGroup {
    Nodes,
    Edges,
}

/// Data carried by a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeData {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub cluster: String,
}

/// Data carried by an edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeData {
    pub source: String,
    pub target: String,
    pub status: String,
}

/// A typed element added to a rendering surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "group", content = "data", rename_all = "lowercase")]
pub enum GraphElement {
    Nodes(NodeData),
    Edges(EdgeData),
}

impl GraphElement {
    pub fn group(&self) -> ElementGroup {
        match self {
            GraphElement::Nodes(_) => ElementGroup::Nodes,
            GraphElement::Edges(_) => ElementGroup::Edges,
        }
    }

    /// Look up a data attribute by the name style selectors use.
    pub fn attr(&self, key: &str) -> Option<&str> {
        match self {
            GraphElement::Nodes(n) => match key {
                "id" => Some(&n.id),
                "label" => Some(&n.label),
                "type" => Some(&n.node_type),
                "cluster" => Some(&n.cluster),
                _ => None,
            },
            GraphElement::Edges(e) => match key {
                "source" => Some(&e.source),
                "target" => Some(&e.target),
                "status" => Some(&e.status),
                _ => None,
            },
        }
    }
}

/// Nodes and edges derived from one snapshot, in snapshot order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphElements {
    pub nodes: Vec<NodeData>,
    pub edges: Vec<EdgeData>,
}

impl GraphElements {
    pub fn len(&self) -> usize {
        self.nodes.len() + self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// All nodes first, then all edges, so that edges between clusters
    /// reference nodes that are already present.
    pub fn into_elements(self) -> impl Iterator<Item = GraphElement> {
        self.nodes
            .into_iter()
            .map(GraphElement::Nodes)
            .chain(self.edges.into_iter().map(GraphElement::Edges))
    }
}

/// Map clusters to graph elements.
///
/// One node per device and one edge per connection, with no validation of
/// edge endpoints.
pub fn map_clusters(clusters: &[ClusterSnapshot]) -> GraphElements {
    let mut elements = GraphElements::default();

    for cluster in clusters {
        elements
            .nodes
            .extend(cluster.devices.iter().map(|device| NodeData {
                id: device.id.clone(),
                label: device.name.clone(),
                node_type: device.device_type.category.clone(),
                cluster: cluster.name.clone(),
            }));

        elements
            .edges
            .extend(cluster.connections.iter().map(|conn| EdgeData {
                source: conn.source_device.id.clone(),
                target: conn.target_device.id.clone(),
                status: conn.status.clone(),
            }));
    }

    elements
}

/// Counts shown in the dashboard header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TopologySummary {
    pub clusters: usize,
    pub devices: usize,
    pub servers: usize,
    pub switches: usize,
    pub connections: usize,
    pub active_connections: usize,
    pub pending_connections: usize,
}

impl TopologySummary {
    pub fn from_clusters(clusters: &[ClusterSnapshot]) -> Self {
        let devices = clusters.iter().flat_map(|c| c.devices.iter());
        let connections: Vec<_> = clusters.iter().flat_map(|c| c.connections.iter()).collect();

        let mut summary = Self {
            clusters: clusters.len(),
            connections: connections.len(),
            active_connections: connections.iter().filter(|c| c.is_active()).count(),
            ..Default::default()
        };
        summary.pending_connections = summary.connections - summary.active_connections;

        for device in devices {
            summary.devices += 1;
            match device.device_type.category.as_str() {
                "server" => summary.servers += 1,
                "switch" => summary.switches += 1,
                _ => {}
            }
        }

        summary
    }
}
