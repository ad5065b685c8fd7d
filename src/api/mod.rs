//! Backend API client.
//!
//! The syncer and the poller only ever read from the backend. They talk to it
//! through the [`TopologyApi`] trait so tests can substitute a scripted
//! implementation; [`ApiClient`] is the reqwest-backed one used by the CLI.

mod error;
pub mod parser;
#[cfg(test)]
pub(crate) mod testing;
mod types;

pub use error::ApiError;
pub use types::{
    ClusterSnapshot, ConnectionSnapshot, DeviceSnapshot, DeviceTypeSnapshot,
    SystemStatusSnapshot,
};

use crate::config::ApiConfig;
use async_trait::async_trait;
use std::time::{Duration, Instant};

/// Path of the cluster listing endpoint.
pub const CLUSTERS_PATH: &str = "/api/v1/clusters/";
/// Path of the system status endpoint.
pub const SYSTEM_STATUS_PATH: &str = "/api/v1/system/status";

/// Read-only view of the backend.
///
/// Object-safe; used as `Arc<dyn TopologyApi>`.
#[async_trait]
pub trait TopologyApi: Send + Sync + 'static {
    /// Fetch every cluster with its devices and connections.
    async fn fetch_clusters(&self) -> Result<Vec<ClusterSnapshot>, ApiError>;

    /// Fetch the current system health snapshot.
    async fn fetch_system_status(&self) -> Result<SystemStatusSnapshot, ApiError>;
}

/// HTTP implementation of [`TopologyApi`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    timeout_seconds: Option<u64>,
}

impl ApiClient {
    /// Create a client from configuration.
    ///
    /// No request timeout is applied unless `request_timeout_seconds` is set.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::ConnectionFailed(e.to_string()))?;

        Ok(Self::with_client(config, client))
    }

    /// Create a client with a custom HTTP client (for testing).
    pub fn with_client(config: &ApiConfig, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_seconds: config.request_timeout_seconds,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` and return the body of a 2xx response.
    async fn get_body(&self, path: &str) -> Result<String, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let start = Instant::now();

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        metrics::histogram!("workboard_api_latency_seconds", "endpoint" => path.to_string())
            .record(start.elapsed().as_secs_f64());

        if !response.status().is_success() {
            return Err(ApiError::HttpError(response.status().as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }

    /// Classify reqwest error into ApiError.
    fn classify_error(&self, e: reqwest::Error) -> ApiError {
        match self.timeout_seconds {
            Some(secs) if e.is_timeout() => ApiError::Timeout(secs),
            _ => ApiError::ConnectionFailed(e.to_string()),
        }
    }
}

#[async_trait]
impl TopologyApi for ApiClient {
    async fn fetch_clusters(&self) -> Result<Vec<ClusterSnapshot>, ApiError> {
        let body = self.get_body(CLUSTERS_PATH).await?;
        parser::parse_clusters(&body)
    }

    async fn fetch_system_status(&self) -> Result<SystemStatusSnapshot, ApiError> {
        let body = self.get_body(SYSTEM_STATUS_PATH).await?;
        parser::parse_system_status(&body)
    }
}
