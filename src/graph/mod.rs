//! Network topology graph.
//!
//! [`GraphSyncer`] pulls the cluster list from the backend and rebuilds a
//! [`RenderSurface`] from it on every sync: clear, add one node per device and
//! one edge per connection, re-run the layout. Nothing is diffed and no
//! element identity survives from one sync to the next.

mod model;
mod surface;
mod syncer;
mod theme;


pub use model::{
    map_clusters, EdgeData, ElementGroup, GraphElement, GraphElements, NodeData, TopologySummary,
};
pub use surface::{GraphView, LayoutState, RenderSurface, SurfaceError};
pub use syncer::{GraphSyncer, SyncOutcome};
pub use theme::{LayoutOptions, Selector, StyleProperties, StyleRule, Theme};
