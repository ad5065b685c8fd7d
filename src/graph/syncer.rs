//! Keeps a rendering surface consistent with the backend topology.

use super::model::{map_clusters, TopologySummary};
use super::surface::{GraphView, RenderSurface};
use super::theme::{LayoutOptions, Theme};
use crate::api::{ApiError, TopologyApi};
use crate::dashboard::{self, DashboardUpdate};
use crate::sequence::{RequestSequencer, Ticket};
use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::broadcast;

/// Result of one graph sync.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncOutcome {
    /// The surface was rebuilt from the snapshot.
    Applied {
        nodes: usize,
        edges: usize,
        /// Elements the surface refused (duplicate ids, dangling edges)
        rejected: usize,
        summary: TopologySummary,
    },
    /// The fetch failed; the surface is untouched.
    Failed { error: ApiError },
    /// A newer sync was issued while this one was in flight; its result was dropped.
    Stale { ticket: Ticket },
}

impl SyncOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, SyncOutcome::Applied { .. })
    }

    fn label(&self) -> &'static str {
        match self {
            SyncOutcome::Applied { .. } => "applied",
            SyncOutcome::Failed { .. } => "failed",
            SyncOutcome::Stale { .. } => "stale",
        }
    }
}

/// Owns a rendering surface and rebuilds it from `/api/v1/clusters/`.
pub struct GraphSyncer<S: RenderSurface = GraphView> {
    api: Arc<dyn TopologyApi>,
    surface: RwLock<S>,
    layout: LayoutOptions,
    sequencer: RequestSequencer,
    updates: Option<broadcast::Sender<DashboardUpdate>>,
}

impl<S: RenderSurface> GraphSyncer<S> {
    /// Wrap an already mounted surface. Layout defaults to the standard theme's.
    pub fn new(api: Arc<dyn TopologyApi>, surface: S) -> Self {
        Self {
            api,
            surface: RwLock::new(surface),
            layout: LayoutOptions::default(),
            sequencer: RequestSequencer::new(),
            updates: None,
        }
    }

    /// Mount a new surface on `container` with the standard theme, without syncing.
    pub fn mount(container: &str, api: Arc<dyn TopologyApi>) -> Self {
        let theme = Theme::standard();
        let layout = theme.layout.clone();
        Self::new(api, S::mount(container, theme)).with_layout(layout)
    }

    /// Mount a new surface on `container` and run the first sync.
    pub async fn initialize(container: &str, api: Arc<dyn TopologyApi>) -> Self {
        let syncer = Self::mount(container, api);
        syncer.sync().await;
        syncer
    }

    pub fn with_layout(mut self, layout: LayoutOptions) -> Self {
        self.layout = layout;
        self
    }

    /// Publish an update after every applied sync.
    pub fn with_broadcast(mut self, sender: broadcast::Sender<DashboardUpdate>) -> Self {
        self.updates = Some(sender);
        self
    }

    /// Fetch all clusters and replace the surface contents.
    ///
    /// On failure the surface is left exactly as it was. The clear, the adds
    /// and the layout run happen under one write lock, so readers never see
    /// a partially rebuilt graph.
    pub async fn sync(&self) -> SyncOutcome {
        let ticket = self.sequencer.issue();

        let outcome = match self.api.fetch_clusters().await {
            Ok(clusters) => {
                let summary = TopologySummary::from_clusters(&clusters);
                let elements = map_clusters(&clusters);
                self.rebuild(ticket, elements, summary)
            }
            Err(error) => {
                tracing::error!(
                    error = %error,
                    kind = error.kind(),
                    "Error loading network data, keeping current graph"
                );
                SyncOutcome::Failed { error }
            }
        };

        metrics::counter!("workboard_graph_syncs_total", "outcome" => outcome.label())
            .increment(1);

        if let SyncOutcome::Applied {
            nodes,
            edges,
            rejected,
            ref summary,
        } = outcome
        {
            tracing::info!(nodes, edges, rejected, clusters = summary.clusters, "Graph synced");
            if let Some(sender) = &self.updates {
                let _ = sender.send(dashboard::create_graph_update(summary, nodes, edges));
            }
        }

        outcome
    }

    fn rebuild(
        &self,
        ticket: Ticket,
        elements: super::model::GraphElements,
        summary: TopologySummary,
    ) -> SyncOutcome {
        let mut surface = self.surface.write().unwrap_or_else(PoisonError::into_inner);

        if !self.sequencer.is_current(ticket) {
            tracing::debug!(
                ticket = ticket.value(),
                latest = self.sequencer.issued(),
                "Discarding stale cluster snapshot"
            );
            return SyncOutcome::Stale { ticket };
        }

        surface.clear();
        let mut rejected = 0;
        for element in elements.into_elements() {
            if let Err(e) = surface.add(element) {
                tracing::warn!(error = %e, "Rendering surface rejected element");
                rejected += 1;
            }
        }
        surface.run_layout(&self.layout);

        SyncOutcome::Applied {
            nodes: surface.node_count(),
            edges: surface.edge_count(),
            rejected,
            summary,
        }
    }

    /// Run `f` against the current surface.
    pub fn with_surface<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        let surface = self.surface.read().unwrap_or_else(PoisonError::into_inner);
        f(&surface)
    }
}

impl<S: RenderSurface + Clone> GraphSyncer<S> {
    /// Clone of the current surface.
    pub fn snapshot(&self) -> S {
        self.with_surface(S::clone)
    }
}
