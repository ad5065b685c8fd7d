//! Watch command implementation

use crate::api::ApiClient;
use crate::cli::{output, WatchArgs};
use crate::dashboard::{self, DashboardUpdate};
use crate::graph::{GraphSyncer, GraphView};
use crate::status::{IndicatorBoard, StatusPoller};
use std::sync::Arc;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio_util::sync::CancellationToken;

/// Wait for shutdown signal (SIGINT or SIGTERM)
async fn shutdown_signal(cancel_token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }

    cancel_token.cancel();
}

/// Print updates until cancelled. Lagged updates are skipped.
async fn print_updates(
    mut updates: broadcast::Receiver<DashboardUpdate>,
    cancel_token: CancellationToken,
) {
    loop {
        tokio::select! {
            _ = cancel_token.cancelled() => break,
            received = updates.recv() => match received {
                Ok(update) => println!("{}", output::format_update(&update)),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Output fell behind, skipping updates");
                }
                Err(RecvError::Closed) => break,
            }
        }
    }
}

/// Main watch command handler
pub async fn run_watch(args: WatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load and merge configuration
    let config = args.connection.load_config()?;

    // 2. Initialize tracing
    crate::logging::init_tracing(&config.logging)?;
    tracing::info!(api = %config.api.base_url, "Starting workboard watch");
    tracing::debug!(?config, "Loaded configuration");

    let api = Arc::new(ApiClient::new(&config.api)?);
    let (sender, receiver) = dashboard::channel();
    let cancel_token = CancellationToken::new();

    // 3. Print updates from here on, so the first sync is shown too
    let printer = tokio::spawn(print_updates(receiver, cancel_token.clone()));

    // 4. Mount and sync the graph once
    let syncer: GraphSyncer<GraphView> =
        GraphSyncer::mount(&config.graph.container, api.clone()).with_broadcast(sender.clone());
    let outcome = syncer.sync().await;
    if !outcome.is_applied() {
        tracing::warn!("Initial graph sync did not apply, continuing with an empty graph");
    }

    // 5. Start the status poller (if enabled)
    let poller_handle = if config.status.enabled && !args.no_status {
        let poller = StatusPoller::new(api, config.status.bindings.clone(), IndicatorBoard::new())
            .with_initial_status(config.status.initial_status.clone())
            .with_broadcast(sender);
        Some(poller.start(cancel_token.clone()))
    } else {
        tracing::info!("Status polling disabled");
        None
    };

    // 6. Run until interrupted
    shutdown_signal(cancel_token.clone()).await;

    // 7. Cleanup
    if let Some(handle) = poller_handle {
        tracing::info!("Waiting for status poller to stop");
        handle.await?;
    }
    printer.await?;

    tracing::info!("Workboard watch stopped");
    Ok(())
}
