//! Fetch spinner for `list` and `show`
//!
//! Those commands block on one fetch before printing, so a spinner on stderr
//! shows the source being read. `browse` never uses it; its loading state is
//! drawn inside the TUI.
//!
//! The spinner stays off with `--quiet`, `CONTACTCTL_QUIET=1`, or when stderr
//! is piped, so scripted output is just the page.

use std::io::IsTerminal;
use std::sync::OnceLock;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

static QUIET_MODE: OnceLock<bool> = OnceLock::new();

/// Decide once, at startup, whether spinners may draw
pub fn init_quiet_mode(quiet_flag: bool) {
    let is_quiet = quiet_flag
        || std::env::var("CONTACTCTL_QUIET").map(|v| v == "1").unwrap_or(false)
        || !std::io::stderr().is_terminal();

    QUIET_MODE.set(is_quiet).ok();
}

pub fn is_quiet() -> bool {
    *QUIET_MODE.get().unwrap_or(&false)
}

/// Spinner labelled with what is being fetched, or `None` when quiet
pub fn spinner(msg: impl Into<String>) -> Option<ProgressBar> {
    if is_quiet() {
        return None;
    }

    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(msg.into());
    pb.enable_steady_tick(Duration::from_millis(80));
    Some(pb)
}

/// Clear the spinner once the fetch has settled
pub fn finish(pb: Option<ProgressBar>) {
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
}
