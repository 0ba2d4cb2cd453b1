//! Event handling for the browser

use std::time::Duration;

use contactctl_core::DetailKind;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

/// Poll for events with timeout
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Result of handling a key event
#[derive(Debug, PartialEq, Eq)]
pub enum HandleResult {
    /// Continue running
    Continue,
    /// Quit the application
    Quit,
}

/// Handle a key event
pub fn handle_key(app: &mut App, key: KeyEvent) -> HandleResult {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Global quit (Ctrl+C)
    if ctrl && key.code == KeyCode::Char('c') {
        return HandleResult::Quit;
    }

    // Ctrl+U clears the query from any mode
    if ctrl && key.code == KeyCode::Char('u') {
        app.clear_search();
        return HandleResult::Continue;
    }

    match app.mode {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::Search => handle_search_mode(app, key),
        Mode::Detail(kind) => handle_detail_mode(app, key, kind),
        Mode::Help => {
            // Any key dismisses help
            app.close_overlay();
            HandleResult::Continue
        }
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut App, key: KeyEvent) -> HandleResult {
    match key.code {
        KeyCode::Char('q') => HandleResult::Quit,

        // Row navigation
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
            HandleResult::Continue
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_prev();
            HandleResult::Continue
        }

        // Page navigation
        KeyCode::Char('n') | KeyCode::Right | KeyCode::PageDown => {
            app.next_page();
            HandleResult::Continue
        }
        KeyCode::Char('p') | KeyCode::Left | KeyCode::PageUp => {
            app.prev_page();
            HandleResult::Continue
        }
        KeyCode::Home | KeyCode::Char('g') => {
            app.first_page();
            HandleResult::Continue
        }
        KeyCode::End | KeyCode::Char('G') => {
            app.last_page();
            HandleResult::Continue
        }

        // Search
        KeyCode::Char('/') => {
            app.enter_search();
            HandleResult::Continue
        }
        KeyCode::Char('x') => {
            app.clear_search();
            HandleResult::Continue
        }

        // Detail overlays
        KeyCode::Char('a') => {
            app.open_detail(DetailKind::Address);
            HandleResult::Continue
        }
        KeyCode::Char('c') | KeyCode::Enter => {
            app.open_detail(DetailKind::Company);
            HandleResult::Continue
        }

        // Tooltip column
        KeyCode::Tab => {
            app.next_column();
            HandleResult::Continue
        }
        KeyCode::BackTab => {
            app.prev_column();
            HandleResult::Continue
        }

        KeyCode::Char('?') => {
            app.show_help();
            HandleResult::Continue
        }

        _ => HandleResult::Continue,
    }
}

/// Handle keys while the search input is focused
fn handle_search_mode(app: &mut App, key: KeyEvent) -> HandleResult {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            app.exit_mode();
            HandleResult::Continue
        }
        KeyCode::Backspace => {
            app.search_backspace();
            HandleResult::Continue
        }
        KeyCode::Left => {
            app.search_cursor_left();
            HandleResult::Continue
        }
        KeyCode::Right => {
            app.search_cursor_right();
            HandleResult::Continue
        }
        KeyCode::Down => {
            app.select_next();
            HandleResult::Continue
        }
        KeyCode::Up => {
            app.select_prev();
            HandleResult::Continue
        }
        KeyCode::Char(c) => {
            app.search_insert(c);
            HandleResult::Continue
        }
        _ => HandleResult::Continue,
    }
}

/// Handle keys while an overlay is open
fn handle_detail_mode(app: &mut App, key: KeyEvent, kind: DetailKind) -> HandleResult {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.close_overlay(),
        KeyCode::Char('a') if kind != DetailKind::Address => app.open_detail(DetailKind::Address),
        KeyCode::Char('c') if kind != DetailKind::Company => app.open_detail(DetailKind::Company),
        _ => {}
    }
    HandleResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::tests::loaded_app;

    fn press(app: &mut App, code: KeyCode) -> HandleResult {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn quit_keys() {
        let mut app = loaded_app(3, 120);
        assert_eq!(press(&mut app, KeyCode::Char('q')), HandleResult::Quit);

        app.enter_search();
        assert_eq!(
            handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            HandleResult::Quit
        );
    }

    #[test]
    fn q_is_text_while_searching() {
        let mut app = loaded_app(3, 120);
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(press(&mut app, KeyCode::Char('q')), HandleResult::Continue);
        assert_eq!(app.search_input, "q");
    }

    #[test]
    fn search_then_escape_keeps_query() {
        let mut app = loaded_app(25, 120);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.store.page(), 1);

        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "PERSON 1");
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.store.page(), 0);
        assert_eq!(app.store.query(), "PERSON 1");
        // Person 1 and Person 10..=19
        assert_eq!(app.store.filtered().len(), 11);
    }

    #[test]
    fn ctrl_u_and_x_clear_query() {
        let mut app = loaded_app(5, 120);
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "person 3");
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert!(!app.has_query());
        assert_eq!(app.mode, Mode::Search);

        type_text(&mut app, "person 4");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('x'));
        assert!(!app.has_query());
        assert_eq!(app.store.filtered().len(), 5);
    }

    #[test]
    fn ctrl_u_closes_detail_overlay() {
        let mut app = loaded_app(25, 120);
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "person 2");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.mode, Mode::Detail(DetailKind::Address));
        assert_eq!(app.selected_contact().map(|c| c.id), Some(20));

        handle_key(&mut app, KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert!(!app.has_query());
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.store.filtered().len(), 25);
    }

    #[test]
    fn overlays_open_switch_and_close() {
        let mut app = loaded_app(3, 120);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.mode, Mode::Detail(DetailKind::Address));
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.mode, Mode::Detail(DetailKind::Company));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn help_dismissed_by_any_key() {
        let mut app = loaded_app(3, 120);
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.mode, Mode::Help);
        assert_eq!(press(&mut app, KeyCode::Char('q')), HandleResult::Continue);
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn tab_cycles_tooltip_column() {
        let mut app = loaded_app(3, 120);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.tooltip().as_deref(), Some("user1"));
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.tooltip().as_deref(), Some("1"));
    }
}
