//! Browser state: record store, search input, selection and overlays

use contactctl_core::{Contact, ContactStore, DetailKind, TableColumn, ViewMode};

/// Input mode for the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigate rows and pages
    #[default]
    Normal,
    /// Search input focused, keystrokes edit the query
    Search,
    /// Address or company overlay is open
    Detail(DetailKind),
    /// Key help overlay
    Help,
}

/// Startup settings taken from config
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub page_size: usize,
    pub compact_max_width: u16,
}

#[derive(Debug)]
pub struct App {
    /// All records plus the filtered, paged view
    pub store: ContactStore,
    /// Current input mode
    pub mode: Mode,
    /// True until the fetch result arrives
    pub loading: bool,
    /// Terminal width in columns, updated on resize
    pub width: u16,
    pub compact_max_width: u16,
    /// Selected record, as an index into the current page
    pub selected: usize,
    /// Table column whose full value is shown in the status line
    pub focused_column: TableColumn,
    /// Search input text
    pub search_input: String,
    /// Cursor position in the search input, in characters
    pub search_cursor: usize,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(settings: Settings, width: u16) -> Self {
        Self {
            store: ContactStore::empty(settings.page_size),
            mode: Mode::Normal,
            loading: true,
            width,
            compact_max_width: settings.compact_max_width,
            selected: 0,
            focused_column: TableColumn::Name,
            search_input: String::new(),
            search_cursor: 0,
            status_message: None,
        }
    }

    /// Table or cards for the current width
    pub fn view_mode(&self) -> ViewMode {
        ViewMode::for_width(self.width, self.compact_max_width)
    }

    pub fn resize(&mut self, width: u16) {
        self.width = width;
    }

    /// Install the fetched records (possibly empty after a failed fetch)
    pub fn finish_loading(&mut self, contacts: Vec<Contact>) {
        self.store.load(contacts);
        self.loading = false;
        self.selected = 0;
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Whether the clear control is shown
    pub fn has_query(&self) -> bool {
        !self.search_input.is_empty()
    }

    pub fn enter_search(&mut self) {
        self.mode = Mode::Search;
        self.search_cursor = self.search_input.chars().count();
    }

    /// Leave search mode, keeping the query applied
    pub fn exit_mode(&mut self) {
        self.mode = Mode::Normal;
    }

    fn cursor_byte(&self) -> usize {
        self.search_input
            .char_indices()
            .nth(self.search_cursor)
            .map(|(idx, _)| idx)
            .unwrap_or(self.search_input.len())
    }

    fn apply_query(&mut self) {
        self.store.set_query(self.search_input.clone());
        self.selected = 0;
        self.clear_status();
        // The open overlay's record may no longer be selected
        if matches!(self.mode, Mode::Detail(_)) {
            self.mode = Mode::Normal;
        }
    }

    pub fn search_insert(&mut self, c: char) {
        let at = self.cursor_byte();
        self.search_input.insert(at, c);
        self.search_cursor += 1;
        self.apply_query();
    }

    /// Delete char before cursor in search
    pub fn search_backspace(&mut self) {
        if self.search_cursor > 0 {
            self.search_cursor -= 1;
            let at = self.cursor_byte();
            self.search_input.remove(at);
            self.apply_query();
        }
    }

    pub fn search_cursor_left(&mut self) {
        self.search_cursor = self.search_cursor.saturating_sub(1);
    }

    pub fn search_cursor_right(&mut self) {
        if self.search_cursor < self.search_input.chars().count() {
            self.search_cursor += 1;
        }
    }

    /// Empty the search box and show every record again
    pub fn clear_search(&mut self) {
        if self.has_query() {
            self.search_input.clear();
            self.search_cursor = 0;
            self.apply_query();
        }
    }

    pub fn next_page(&mut self) {
        if self.store.next_page() {
            self.selected = 0;
            self.clear_status();
        } else {
            self.set_status("Already on the last page");
        }
    }

    pub fn prev_page(&mut self) {
        if self.store.prev_page() {
            self.selected = 0;
            self.clear_status();
        } else {
            self.set_status("Already on the first page");
        }
    }

    pub fn first_page(&mut self) {
        self.store.set_page(0);
        self.selected = 0;
    }

    pub fn last_page(&mut self) {
        self.store.set_page(self.store.page_count() - 1);
        self.selected = 0;
    }

    /// Select next record on the page, wrapping around
    pub fn select_next(&mut self) {
        let len = self.store.visible().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    /// Select previous record on the page, wrapping around
    pub fn select_prev(&mut self) {
        let len = self.store.visible().len();
        if len > 0 {
            self.selected = self.selected.checked_sub(1).unwrap_or(len - 1);
        }
    }

    pub fn selected_contact(&self) -> Option<&Contact> {
        self.store.visible().get(self.selected)
    }

    /// Open the address or company overlay for the selected record
    pub fn open_detail(&mut self, kind: DetailKind) {
        if self.selected_contact().is_some() {
            self.mode = Mode::Detail(kind);
        }
    }

    pub fn close_overlay(&mut self) {
        self.mode = Mode::Normal;
    }

    pub fn show_help(&mut self) {
        self.mode = Mode::Help;
    }

    pub fn next_column(&mut self) {
        self.focused_column = self.focused_column.next();
    }

    pub fn prev_column(&mut self) {
        self.focused_column = self.focused_column.prev();
    }

    /// Full text of the focused cell, shown where a truncated value needs it
    pub fn tooltip(&self) -> Option<String> {
        if self.view_mode() != ViewMode::Table {
            return None;
        }
        self.selected_contact()
            .map(|contact| self.focused_column.tooltip(contact))
    }
}
