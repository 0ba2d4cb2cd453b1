use std::path::Path;
use std::sync::mpsc;

use anyhow::{Context, Result};
use clap::Args;
use contactctl_core::ContactClient;
use tracing::info;

use super::{load_config, SourceArgs};
use crate::tui::{self, Settings};

#[derive(Args, Debug, Clone, Default)]
pub struct BrowseArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

/// Start the fetch in the background and run the browser until quit
pub async fn run_browse(args: BrowseArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path, &args.source)?;
    let client = ContactClient::from_config(&config, args.source.file.clone())?;
    info!(source = %client.source(), "starting browser");

    let (tx, rx) = mpsc::channel();
    tokio::spawn(async move {
        let contacts = client.fetch_or_empty().await;
        // Receiver is gone if the user quit before the fetch finished
        tx.send(contacts).ok();
    });

    let settings = Settings {
        page_size: config.page_size,
        compact_max_width: config.compact_max_width,
    };

    tokio::task::spawn_blocking(move || tui::run(settings, rx))
        .await
        .context("Browser thread panicked")?
}
