//! Fixed-size paging over an ordered slice

/// Default records per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page windowing with zero-based page indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
}

impl Pager {
    /// Create a pager. Page size is clamped to a minimum of 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Index of the first item on `page`.
    pub fn offset(&self, page: usize) -> usize {
        page.saturating_mul(self.page_size)
    }

    /// Items `[page*size, page*size+size)`; empty when the start is past the end.
    pub fn window<'a, T>(&self, items: &'a [T], page: usize) -> &'a [T] {
        let start = self.offset(page);
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }

    /// Number of pages for `len` items. An empty list still has one page.
    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.page_size).max(1)
    }

    pub fn has_next(&self, page: usize, len: usize) -> bool {
        page.saturating_add(1) < self.page_count(len)
    }

    pub fn has_prev(&self, page: usize) -> bool {
        page > 0
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_over_twenty_five_items() {
        let items: Vec<u32> = (0..25).collect();
        let pager = Pager::new(10);

        assert_eq!(pager.window(&items, 0), &items[0..10]);
        assert_eq!(pager.window(&items, 1), &items[10..20]);
        assert_eq!(pager.window(&items, 2), &items[20..25]);
        assert!(pager.window(&items, 3).is_empty());
    }

    #[test]
    fn huge_page_index_does_not_overflow() {
        let items = [1, 2, 3];
        let pager = Pager::new(10);
        assert!(pager.window(&items, usize::MAX).is_empty());
    }

    #[test]
    fn clamps_page_size() {
        assert_eq!(Pager::new(0).page_size(), 1);
    }

    #[test]
    fn page_count() {
        let pager = Pager::new(10);
        assert_eq!(pager.page_count(0), 1);
        assert_eq!(pager.page_count(10), 1);
        assert_eq!(pager.page_count(11), 2);
        assert_eq!(pager.page_count(25), 3);
    }

    #[test]
    fn has_next_prev() {
        let pager = Pager::new(10);
        assert!(pager.has_next(0, 30));
        assert!(!pager.has_prev(0));

        assert!(pager.has_next(1, 30));
        assert!(pager.has_prev(1));

        assert!(!pager.has_next(2, 30));
        assert!(pager.has_prev(2));

        assert!(!pager.has_next(0, 0));
    }

    #[test]
    fn has_next_at_max_page_index() {
        let pager = Pager::new(10);
        assert!(!pager.has_next(usize::MAX, 30));
    }
}
