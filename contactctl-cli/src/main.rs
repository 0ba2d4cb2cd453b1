//! contactctl - browse a contact directory from the terminal
//!
//! Fetches the contact list once, then:
//! - `browse` (default): interactive table/card view with search and paging
//! - `list`: print one page of (optionally filtered) contacts
//! - `show`: print one contact's address and company detail
//! - `config`: manage ~/.contactctl/config.toml

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use contactctl_core::ContactConfig;

mod commands;
mod config;
mod tracing_setup;
mod tui;
mod ui;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "contactctl",
    author,
    version,
    about = "Browse, search and page through a contact directory",
    long_about = "Fetches contact records from a REST endpoint (or a local JSON file) and shows \
                  them as a table on wide terminals or as cards on narrow ones, with live search \
                  and paging."
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Suppress progress spinners
    #[arg(long, global = true)]
    quiet: bool,

    /// Config file to use instead of ~/.contactctl/config.toml
    #[arg(long, global = true, env = "CONTACTCTL_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive browser (default when no command is given)
    Browse(commands::browse::BrowseArgs),
    /// Print one page of contacts
    List(commands::list::ListArgs),
    /// Print a single contact with address and company detail
    Show(commands::show::ShowArgs),
    /// Manage contactctl configuration (init, show, path)
    Config(config::ConfigArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing, so .env can supply CONTACTCTL_CONFIG, RUST_LOG and friends
    load_dotenv();
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Browse(Default::default()));

    // The browser owns the screen; send its logs to a file
    let log_file = matches!(command, Commands::Browse(_))
        .then(|| ContactConfig::config_dir().join("contactctl.log"));
    tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        log_file,
    })
    .ok();

    ui::init_quiet_mode(cli.quiet);

    let config_path = cli.config.as_deref();
    match command {
        Commands::Browse(args) => commands::run_browse(args, config_path).await?,
        Commands::List(args) => commands::run_list(args, config_path).await?,
        Commands::Show(args) => commands::run_show(args, config_path).await?,
        Commands::Config(args) => config::run_config(args, config_path)?,
        Commands::Completions(args) => run_completions(args),
    }
    Ok(())
}

/// Pick up CONTACTCTL_* variables from ~/.contactctl/.env, then ./.env.
/// Variables already set in the environment win.
fn load_dotenv() {
    let _ = dotenvy::from_path(ContactConfig::config_dir().join(".env"));
    let _ = dotenvy::dotenv();
}

fn run_completions(args: CompletionsArgs) {
    use clap_complete::{generate, Shell as CompletionShell};

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
    };

    generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
}
