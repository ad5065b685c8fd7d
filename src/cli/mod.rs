//! CLI module for Workboard
//!
//! Command-line interface definitions and handlers for the topology dashboard.
//!
//! # Commands
//!
//! - `graph` - Sync the topology graph once and print it
//! - `status` - Poll system status once and print the indicators
//! - `watch` - Keep the graph and the status indicators live until interrupted
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Print the topology as the renderer document
//! workboard graph --json --api-url http://netbox.local:8000
//!
//! # Follow status updates
//! workboard watch -c workboard.toml
//! ```

pub mod completions;
pub mod config;
pub mod graph;
pub mod output;
pub mod status;
pub mod watch;

pub use completions::handle_completions;
pub use config::handle_config_init;

use crate::config::WorkboardConfig;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Workboard - network topology dashboard
#[derive(Parser, Debug)]
#[command(
    name = "workboard",
    version,
    about = "Network topology graph and system status dashboard"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sync the topology graph once and print it
    Graph(GraphArgs),
    /// Poll system status once and print the indicators
    Status(StatusArgs),
    /// Keep graph and status live, printing every update
    Watch(WatchArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Options shared by every command that talks to the backend
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "workboard.toml")]
    pub config: PathBuf,

    /// Override backend base URL
    #[arg(short = 'u', long)]
    pub api_url: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,
}

impl ConnectionArgs {
    /// Load configuration with CLI overrides
    ///
    /// A missing config file falls back to defaults; an unreadable or
    /// invalid one is an error.
    pub fn load_config(&self) -> Result<WorkboardConfig, Box<dyn std::error::Error>> {
        let mut config = if self.config.exists() {
            WorkboardConfig::load(Some(&self.config))?
        } else {
            tracing::debug!("Config file not found, using defaults");
            WorkboardConfig::default()
        };

        config = config.with_env_overrides();

        if let Some(ref url) = self.api_url {
            config.api.base_url = url.clone();
        }
        if let Some(ref level) = self.log_level {
            config.logging.level = level.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Output the renderer document as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Do not start the status poller
    #[arg(long)]
    pub no_status: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = "workboard.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
