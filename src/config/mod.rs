//! Configuration module for Workboard
//!
//! Provides layered configuration loading from files, environment variables, and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`WORKBOARD_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use workboard::config::WorkboardConfig;
//!
//! let toml = r#"
//! [api]
//! base_url = "http://netbox.local:8000"
//! "#;
//! let config: WorkboardConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.api.base_url, "http://netbox.local:8000");
//! assert_eq!(config.graph.container, "cy");
//! ```

pub mod api;
pub mod error;
pub mod graph;
pub mod logging;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use graph::GraphConfig;
pub use logging::{LogFormat, LoggingConfig};

// Status settings live next to the poller
pub use crate::status::StatusConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Unified configuration for the dashboard services.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WorkboardConfig {
    /// Backend API location
    pub api: ApiConfig,
    /// Topology graph view
    pub graph: GraphConfig,
    /// System status polling
    pub status: StatusConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl WorkboardConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Invalid values are silently ignored (the current value is kept).
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("WORKBOARD_API_URL") {
            self.api.base_url = url;
        }

        if let Ok(level) = std::env::var("WORKBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("WORKBOARD_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        if let Ok(status) = std::env::var("WORKBOARD_STATUS") {
            self.status.enabled = status.to_lowercase() == "true";
        }

        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api.base_url.trim();
        if url.is_empty() {
            return Err(ConfigError::validation("api.base_url", "URL cannot be empty"));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::validation(
                "api.base_url",
                format!("'{}' must start with http:// or https://", url),
            ));
        }
        if self.api.request_timeout_seconds == Some(0) {
            return Err(ConfigError::validation(
                "api.request_timeout_seconds",
                "timeout must be non-zero",
            ));
        }

        if self.graph.container.trim().is_empty() {
            return Err(ConfigError::validation(
                "graph.container",
                "container id cannot be empty",
            ));
        }

        if let Some((field, message)) = self.status.bindings.find_invalid() {
            return Err(ConfigError::validation(
                format!("status.bindings.{}", field),
                message,
            ));
        }

        Ok(())
    }
}
