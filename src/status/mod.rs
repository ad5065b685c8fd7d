//! System status indicators.
//!
//! [`StatusPoller`] fetches `/api/v1/system/status` every 30 seconds and
//! writes the health values into a set of indicator widgets through an
//! [`IndicatorSink`]. Failed polls are logged and leave every indicator at its
//! last applied value.

mod bindings;
mod board;
mod config;
mod variant;


pub use bindings::IndicatorBindings;
pub use board::{IndicatorBoard, IndicatorSink, Widget};
pub use config::StatusConfig;
pub use variant::{capitalize_first, format_percent, StatusVariant};

use crate::api::{ApiError, SystemStatusSnapshot, TopologyApi};
use crate::dashboard::{self, DashboardUpdate};
use crate::sequence::{RequestSequencer, Ticket};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Fixed period between status polls.
pub const STATUS_POLL_INTERVAL: Duration = Duration::from_millis(30_000);

/// Write a status snapshot into the bound widgets.
///
/// Health bars get `"{value}%"` widths. A present NetBox status reveals the
/// panel and selects its variant; an absent one hides the panel and leaves
/// its other widgets alone.
pub fn apply_snapshot<K: IndicatorSink + ?Sized>(
    snapshot: &SystemStatusSnapshot,
    bindings: &IndicatorBindings,
    sink: &mut K,
) {
    sink.set_width(&bindings.db_health_bar, &format_percent(snapshot.db_health));
    sink.set_width(&bindings.api_health_bar, &format_percent(snapshot.api_health));

    match snapshot.netbox_status() {
        Some(status) => {
            sink.set_visible(&bindings.netbox_container, true);
            sink.set_text(&bindings.netbox_text, &capitalize_first(status));
            apply_netbox_variant(status, bindings, sink);
            // A missing health value renders as an empty bar
            let health = snapshot.netbox_health.unwrap_or(0.0);
            sink.set_width(&bindings.netbox_health_bar, &format_percent(health));
        }
        None => sink.set_visible(&bindings.netbox_container, false),
    }
}

/// Set the badge, icon and bar classes for a NetBox status string.
pub fn apply_netbox_variant<K: IndicatorSink + ?Sized>(
    status: &str,
    bindings: &IndicatorBindings,
    sink: &mut K,
) -> StatusVariant {
    let variant = StatusVariant::from_netbox_status(status);
    sink.set_class(&bindings.netbox_badge, &variant.badge_class());
    sink.set_class(&bindings.netbox_icon, &variant.icon_class());
    sink.set_class(&bindings.netbox_health_bar, &variant.bar_class());
    variant
}

/// Result of one status poll.
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    Applied { snapshot: SystemStatusSnapshot },
    /// The fetch failed; indicators keep their last values.
    Failed { error: ApiError },
    /// A newer poll was issued while this one was in flight.
    Stale { ticket: Ticket },
}

impl PollOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, PollOutcome::Applied { .. })
    }

    fn label(&self) -> &'static str {
        match self {
            PollOutcome::Applied { .. } => "applied",
            PollOutcome::Failed { .. } => "failed",
            PollOutcome::Stale { .. } => "stale",
        }
    }
}

/// Background service that keeps the indicators in sync with backend health.
pub struct StatusPoller<K: IndicatorSink = IndicatorBoard> {
    api: Arc<dyn TopologyApi>,
    bindings: IndicatorBindings,
    sink: Arc<RwLock<K>>,
    initial_status: Option<String>,
    sequencer: RequestSequencer,
    updates: Option<broadcast::Sender<DashboardUpdate>>,
}

impl<K: IndicatorSink> StatusPoller<K> {
    pub fn new(api: Arc<dyn TopologyApi>, bindings: IndicatorBindings, sink: K) -> Self {
        Self {
            api,
            bindings,
            sink: Arc::new(RwLock::new(sink)),
            initial_status: None,
            sequencer: RequestSequencer::new(),
            updates: None,
        }
    }

    /// Status applied once by [`start`](Self::start) before the timer begins.
    pub fn with_initial_status(mut self, status: Option<String>) -> Self {
        self.initial_status = status;
        self
    }

    /// Publish an update after every applied poll.
    pub fn with_broadcast(mut self, sender: broadcast::Sender<DashboardUpdate>) -> Self {
        self.updates = Some(sender);
        self
    }

    /// Shared handle to the widgets; stays valid after `start`.
    pub fn sink(&self) -> Arc<RwLock<K>> {
        Arc::clone(&self.sink)
    }

    pub fn bindings(&self) -> &IndicatorBindings {
        &self.bindings
    }

    /// Fetch one status snapshot and apply it.
    pub async fn poll_once(&self) -> PollOutcome {
        let ticket = self.sequencer.issue();

        let outcome = match self.api.fetch_system_status().await {
            Ok(snapshot) => {
                let mut sink = self.sink.write().unwrap_or_else(PoisonError::into_inner);
                if self.sequencer.is_current(ticket) {
                    apply_snapshot(&snapshot, &self.bindings, &mut *sink);
                    PollOutcome::Applied { snapshot }
                } else {
                    tracing::debug!(ticket = ticket.value(), "Discarding stale status snapshot");
                    PollOutcome::Stale { ticket }
                }
            }
            Err(error) => {
                tracing::error!(
                    error = %error,
                    kind = error.kind(),
                    "Error fetching system status, keeping current indicators"
                );
                PollOutcome::Failed { error }
            }
        };

        metrics::counter!("workboard_status_polls_total", "outcome" => outcome.label())
            .increment(1);

        if let PollOutcome::Applied { ref snapshot } = outcome {
            tracing::debug!(
                db_health = snapshot.db_health,
                api_health = snapshot.api_health,
                netbox_status = snapshot.netbox_status(),
                "System status applied"
            );
            self.broadcast_state();
        }

        outcome
    }

    fn broadcast_state(&self) {
        if let Some(sender) = &self.updates {
            let state = self
                .sink
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .export();
            if let Some(state) = state {
                let _ = sender.send(dashboard::create_status_update(state));
            }
        }
    }

    /// An unset initial status selects the warning variant.
    fn apply_initial_status(&self) {
        let status = self.initial_status.as_deref().unwrap_or_default();
        let mut sink = self.sink.write().unwrap_or_else(PoisonError::into_inner);
        let variant = apply_netbox_variant(status, &self.bindings, &mut *sink);
        tracing::debug!(status = %status, variant = variant.as_str(), "Initial NetBox status applied");
    }

    /// Apply the initial status, then poll every [`STATUS_POLL_INTERVAL`]
    /// until `cancel_token` fires. The first poll happens one period after start.
    pub fn start(self, cancel_token: CancellationToken) -> JoinHandle<()> {
        self.apply_initial_status();

        tokio::spawn(async move {
            let first_tick = tokio::time::Instant::now() + STATUS_POLL_INTERVAL;
            let mut interval = tokio::time::interval_at(first_tick, STATUS_POLL_INTERVAL);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

            tracing::info!(
                interval_ms = STATUS_POLL_INTERVAL.as_millis() as u64,
                "Status poller started"
            );

            loop {
                tokio::select! {
                    _ = cancel_token.cancelled() => {
                        tracing::info!("Status poller shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        tokio::select! {
                            _ = cancel_token.cancelled() => {
                                tracing::info!("Status poller shutting down with a poll in flight");
                                break;
                            }
                            outcome = self.poll_once() => {
                                tracing::trace!(outcome = outcome.label(), "Status poll completed");
                            }
                        }
                    }
                }
            }
        })
    }
}
