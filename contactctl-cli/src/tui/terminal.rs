//! Terminal management and main run loop

use std::io::{self, Stdout, Write};
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

use anyhow::{Context, Result};
use contactctl_core::Contact;
use crossterm::{
    cursor,
    event::{Event, KeyEventKind},
    execute,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, warn};

use super::app::{App, Settings};
use super::event::{handle_key, poll_event, HandleResult};
use super::ui;

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Leave the alternate screen and show the cursor again
fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, cursor::Show)
}

/// Restore the terminal to normal mode
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    leave_screen(terminal.backend_mut()).context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Put the terminal back before the panic message prints.
/// Runs under `panic = "abort"` too, where `run` never gets to restore.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = leave_screen(&mut io::stdout());
        previous(info);
    }));
}

/// Run the browser until the user quits.
///
/// `contacts` delivers the fetch result once; until then a loading
/// placeholder is shown.
pub fn run(settings: Settings, contacts: Receiver<Vec<Contact>>) -> Result<()> {
    let (width, _) = terminal::size().context("Failed to read terminal size")?;
    install_panic_hook();
    let mut terminal = init_terminal()?;

    let mut app = App::new(settings, width);

    let result = run_loop(&mut terminal, &mut app, &contacts);

    // Restore terminal (even if loop failed)
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    contacts: &Receiver<Vec<Contact>>,
) -> Result<()> {
    loop {
        if app.loading {
            match contacts.try_recv() {
                Ok(list) => {
                    debug!(count = list.len(), "contacts arrived");
                    app.finish_loading(list);
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    warn!("contact fetch ended without a result");
                    app.finish_loading(Vec::new());
                }
            }
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        // Poll for events (with 100ms timeout for responsive UI)
        if let Some(event) = poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key(app, key) == HandleResult::Quit {
                        break;
                    }
                }
                Event::Resize(width, _) => {
                    app.resize(width);
                }
                _ => {}
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leave_screen_writes_reset_sequences() {
        let mut out = Vec::new();
        leave_screen(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\x1b[?1049l"));
        assert!(text.contains("\x1b[?25h"));
    }
}
