//! Graph command implementation

use crate::api::ApiClient;
use crate::cli::{output, GraphArgs};
use crate::config::WorkboardConfig;
use crate::graph::{GraphSyncer, GraphView, SyncOutcome};
use std::sync::Arc;

/// Mount a view on the configured container and run one sync against the backend
pub async fn sync_once(
    config: &WorkboardConfig,
) -> Result<(GraphSyncer<GraphView>, SyncOutcome), Box<dyn std::error::Error>> {
    let api = Arc::new(ApiClient::new(&config.api)?);
    let syncer: GraphSyncer<GraphView> = GraphSyncer::mount(&config.graph.container, api);
    let outcome = syncer.sync().await;
    Ok((syncer, outcome))
}

/// Handle `workboard graph` command
pub async fn handle_graph(args: &GraphArgs) -> Result<String, Box<dyn std::error::Error>> {
    let config = args.connection.load_config()?;
    crate::logging::init_tracing(&config.logging)?;

    let (syncer, outcome) = sync_once(&config).await?;

    match outcome {
        SyncOutcome::Applied {
            rejected, summary, ..
        } => {
            let view = syncer.snapshot();
            if args.json {
                Ok(output::format_graph_json(&view))
            } else {
                Ok(output::format_graph_table(&view, &summary, rejected))
            }
        }
        SyncOutcome::Failed { error } => Err(format!(
            "Failed to load network data from {}: {}",
            config.api.base_url, error
        )
        .into()),
        SyncOutcome::Stale { .. } => Err("Graph sync was superseded".into()),
    }
}
