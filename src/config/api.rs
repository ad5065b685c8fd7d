//! Backend API configuration

use serde::{Deserialize, Serialize};

/// Where the topology backend lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Scheme, host and optional path prefix; endpoint paths are appended
    pub base_url: String,
    /// Per-request timeout. Unset means requests wait indefinitely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_seconds: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            request_timeout_seconds: None,
        }
    }
}
