//! Subcommand implementations and the source options they share

pub mod browse;
pub mod list;
pub mod show;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use contactctl_core::{Contact, ContactClient, ContactConfig};

pub use browse::run_browse;
pub use list::run_list;
pub use show::run_show;

use crate::ui;

/// Where to read contacts from, plus per-run overrides of the config file
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Read contacts from a local JSON file instead of the endpoint
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Endpoint URL (overrides config and CONTACTCTL_ENDPOINT)
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Records per page
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,
}

/// Load config from `config_path` (or the default location) and apply flags
pub fn load_config(config_path: Option<&Path>, source: &SourceArgs) -> Result<ContactConfig> {
    let mut config = match config_path {
        Some(path) => ContactConfig::load_from(path),
        None => ContactConfig::load(),
    }
    .context("Failed to load contactctl config")?;

    config.apply_endpoint_override(source.endpoint.clone());
    if let Some(page_size) = source.page_size {
        config.page_size = page_size;
    }
    config.validate().context("Invalid settings")?;

    Ok(config)
}

/// Fetch the full list; failures are logged and yield an empty list
pub async fn fetch_contacts(config: &ContactConfig, source: &SourceArgs) -> Result<Vec<Contact>> {
    let client = ContactClient::from_config(config, source.file.clone())?;

    let spinner = ui::spinner(format!("Fetching contacts from {}", client.source()));
    let contacts = client.fetch_or_empty().await;
    ui::finish(spinner);

    Ok(contacts)
}
