//! Rendering surfaces and the in-memory [`GraphView`].

use super::model::{EdgeData, GraphElement, NodeData};
use super::theme::{LayoutOptions, Theme};
use serde::Serialize;
use serde_json::json;
use std::collections::HashSet;
use thiserror::Error;

/// Reasons a surface refuses an element.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("node already exists: {0}")]
    DuplicateNode(String),

    #[error("edge references missing node: {source_id} -> {target_id}")]
    DanglingEdge {
        source_id: String,
        target_id: String,
    },
}

/// Something the graph syncer can draw into.
///
/// Mirrors the contract of browser graph libraries: a surface is mounted on a
/// container with a theme, accepts typed elements one at a time, and can be
/// cleared and re-laid out.
pub trait RenderSurface: Send + Sync + 'static {
    /// Bind a new surface to `container` using `theme`.
    fn mount(container: &str, theme: Theme) -> Self
    where
        Self: Sized;

    /// Remove every node and edge.
    fn clear(&mut self);

    /// Add one element. A surface may reject elements it cannot draw.
    fn add(&mut self, element: GraphElement) -> Result<(), SurfaceError>;

    /// Re-run the layout over the current elements.
    fn run_layout(&mut self, options: &LayoutOptions);

    fn node_count(&self) -> usize;

    fn edge_count(&self) -> usize;
}

/// Layout state recorded by [`GraphView`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutState {
    pub runs: u64,
    pub last: Option<LayoutOptions>,
}

/// In-memory rendering surface.
///
/// Rejects duplicate node ids and edges whose endpoints are not present,
/// the way browser graph libraries do. Edges get sequential ids `e0`, `e1`, ...
/// scoped to the current contents.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphView {
    container: String,
    theme: Theme,
    nodes: Vec<NodeData>,
    edges: Vec<EdgeData>,
    node_ids: HashSet<String>,
    layout: LayoutState,
}

impl GraphView {
    pub fn container(&self) -> &str {
        &self.container
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn nodes(&self) -> &[NodeData] {
        &self.nodes
    }

    pub fn edges(&self) -> &[EdgeData] {
        &self.edges
    }

    pub fn layout(&self) -> &LayoutState {
        &self.layout
    }

    pub fn node(&self, id: &str) -> Option<&NodeData> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Serialize as a graph-library initialization document: container,
    /// style table, layout, zoom sensitivity and all elements.
    pub fn to_document(&self) -> serde_json::Value {
        let nodes: Vec<_> = self.nodes.iter().map(|n| json!({ "data": n })).collect();
        let edges: Vec<_> = self
            .edges
            .iter()
            .enumerate()
            .map(|(i, e)| {
                json!({
                    "data": {
                        "id": format!("e{}", i),
                        "source": e.source,
                        "target": e.target,
                        "status": e.status,
                    }
                })
            })
            .collect();

        json!({
            "container": self.container,
            "style": self.theme.style,
            "layout": self.theme.layout,
            "wheelSensitivity": self.theme.wheel_sensitivity,
            "elements": {
                "nodes": nodes,
                "edges": edges,
            }
        })
    }
}

impl RenderSurface for GraphView {
    fn mount(container: &str, theme: Theme) -> Self {
        Self {
            container: container.to_string(),
            theme,
            nodes: Vec::new(),
            edges: Vec::new(),
            node_ids: HashSet::new(),
            layout: LayoutState {
                runs: 0,
                last: None,
            },
        }
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.node_ids.clear();
    }

    fn add(&mut self, element: GraphElement) -> Result<(), SurfaceError> {
        match element {
            GraphElement::Nodes(node) => {
                if !self.node_ids.insert(node.id.clone()) {
                    return Err(SurfaceError::DuplicateNode(node.id));
                }
                self.nodes.push(node);
            }
            GraphElement::Edges(edge) => {
                if !self.node_ids.contains(&edge.source) || !self.node_ids.contains(&edge.target)
                {
                    return Err(SurfaceError::DanglingEdge {
                        source_id: edge.source,
                        target_id: edge.target,
                    });
                }
                self.edges.push(edge);
            }
        }
        Ok(())
    }

    fn run_layout(&mut self, options: &LayoutOptions) {
        self.layout.runs += 1;
        self.layout.last = Some(options.clone());
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
