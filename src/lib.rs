//! Workboard - network topology dashboard services
//!
//! This library keeps a rendered topology graph and a set of system health
//! indicators consistent with a read-only backend API.
//!
//! - [`graph::GraphSyncer`] rebuilds a [`graph::RenderSurface`] from
//!   `/api/v1/clusters/` on demand.
//! - [`status::StatusPoller`] polls `/api/v1/system/status` every 30 seconds
//!   and writes into an [`status::IndicatorSink`].
//!
//! Both talk to the backend through [`api::TopologyApi`] and publish
//! [`dashboard::DashboardUpdate`]s when they apply new state.

pub mod api;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod graph;
pub mod logging;
pub mod sequence;
pub mod status;
