use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use contactctl_core::ContactConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write a config file with the default settings
    Init(InitArgs),
    /// Print the effective settings as TOML
    Show,
    /// Show config file path
    Path,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(long, short)]
    pub force: bool,
}

pub fn run_config(args: ConfigArgs, config_path: Option<&Path>) -> Result<()> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(ContactConfig::config_path);

    match args.command {
        ConfigCommands::Init(args) => run_init(args, &path),
        ConfigCommands::Show => run_show(&path),
        ConfigCommands::Path => {
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn run_init(args: InitArgs, path: &Path) -> Result<()> {
    if path.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Config already exists at {:?}\n\nUse --force to overwrite",
            path
        ));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .context(format!("Failed to create {}", parent.display()))?;
    }

    let content = ContactConfig::default().to_toml()?;
    std::fs::write(path, content)
        .context(format!("Failed to write config file: {:?}", path))?;

    println!("✅ Created config at: {:?}", path);
    Ok(())
}

fn run_show(path: &Path) -> Result<()> {
    let config = ContactConfig::load_from(path).context("Failed to load contactctl config")?;
    print!("{}", config.to_toml()?);
    Ok(())
}
