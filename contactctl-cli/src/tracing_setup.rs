//! Tracing setup for the contactctl CLI
//!
//! Usage:
//!   contactctl --debug list                # Debug logging to stderr
//!   RUST_LOG=contactctl_core=debug contactctl
//!
//! The interactive browser owns the terminal, so in that mode log lines go to
//! ~/.contactctl/contactctl.log instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (sets RUST_LOG=debug if not already set)
    pub debug: bool,
    /// Append to this file instead of writing to stderr
    pub log_file: Option<PathBuf>,
}

fn env_filter(config: &TracingConfig) -> EnvFilter {
    if config.debug {
        // Debug mode: set debug level unless RUST_LOG is explicitly set
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Initialize tracing based on configuration
pub fn init(config: &TracingConfig) -> Result<()> {
    let filter = env_filter(config);

    match &config.log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .context(format!("Failed to create {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .context(format!("Failed to open log file {}", path.display()))?;

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .try_init()
                .map_err(|err| anyhow!(err))
        }
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(config.debug) // Show targets in debug mode
            .compact()
            .try_init()
            .map_err(|err| anyhow!(err)),
    }
}
