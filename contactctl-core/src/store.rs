//! In-memory record store: full list, active query, filtered view, page.

use crate::filter::filter_contacts;
use crate::model::Contact;
use crate::pager::Pager;

#[derive(Debug, Clone)]
pub struct ContactStore {
    all: Vec<Contact>,
    filtered: Vec<Contact>,
    query: String,
    page: usize,
    pager: Pager,
}

impl ContactStore {
    pub fn new(contacts: Vec<Contact>, page_size: usize) -> Self {
        Self {
            filtered: contacts.clone(),
            all: contacts,
            query: String::new(),
            page: 0,
            pager: Pager::new(page_size),
        }
    }

    /// Store with no records yet (before the fetch completes)
    pub fn empty(page_size: usize) -> Self {
        Self::new(Vec::new(), page_size)
    }

    /// Replace the full list, keeping the current query applied
    pub fn load(&mut self, contacts: Vec<Contact>) {
        self.all = contacts;
        self.refilter();
    }

    /// Apply a new search query. Always returns to the first page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refilter();
    }

    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    fn refilter(&mut self) {
        self.filtered = filter_contacts(&self.all, &self.query);
        self.page = 0;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn all(&self) -> &[Contact] {
        &self.all
    }

    pub fn filtered(&self) -> &[Contact] {
        &self.filtered
    }

    /// The records on the current page
    pub fn visible(&self) -> &[Contact] {
        self.pager.window(&self.filtered, self.page)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn pager(&self) -> Pager {
        self.pager
    }

    pub fn page_count(&self) -> usize {
        self.pager.page_count(self.filtered.len())
    }

    /// Jump to a page as given; past-the-end pages show nothing.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Pull a past-the-end page back onto the last page
    fn clamp_page(&mut self) {
        self.page = self.page.min(self.page_count() - 1);
    }

    /// Advance one page. Returns false when already on the last page.
    pub fn next_page(&mut self) -> bool {
        self.clamp_page();
        if self.pager.has_next(self.page, self.filtered.len()) {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page. Returns false when already on the first page.
    pub fn prev_page(&mut self) -> bool {
        self.clamp_page();
        if self.pager.has_prev(self.page) {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Look up a record by id in the full list
    pub fn find(&self, id: u64) -> Option<&Contact> {
        self.all.iter().find(|c| c.id == id)
    }
}
