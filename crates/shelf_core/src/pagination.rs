use std::ops::Range;

/// Default number of cards per page.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// 1-based page cursor over an ordered collection.
///
/// `1 <= current_page <= total_pages` holds after every call to
/// [`Pagination::reconcile`], and `total_pages` is never below 1 so an empty
/// collection still has a single (empty) page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    page_size: usize,
    total_pages: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    /// A zero `page_size` is treated as 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
            total_pages: 1,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// `max(1, ceil(len / page_size))`
    pub fn total_pages_for(len: usize, page_size: usize) -> usize {
        len.div_ceil(page_size.max(1)).max(1)
    }

    /// Recomputes `total_pages` for a collection of `len` items and pulls the
    /// current page back inside range. The page ordinal is otherwise kept, even
    /// when the collection behind it was reordered.
    pub fn reconcile(&mut self, len: usize) {
        self.total_pages = Self::total_pages_for(len, self.page_size);
        self.current_page = self.current_page.clamp(1, self.total_pages);
    }

    /// Index range of the current page within a collection of `len` items.
    pub fn bounds(&self, len: usize) -> Range<usize> {
        let start = ((self.current_page - 1) * self.page_size).min(len);
        let end = (start + self.page_size).min(len);
        start..end
    }

    pub fn page<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.bounds(items.len())]
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Returns `false` and leaves the cursor alone when already on page 1.
    pub fn go_previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.current_page -= 1;
        true
    }

    /// Returns `false` and leaves the cursor alone when already on the last page.
    pub fn go_next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.current_page += 1;
        true
    }

    /// "current / total", as shown between the navigation buttons.
    pub fn indicator(&self) -> String {
        format!("{} / {}", self.current_page, self.total_pages)
    }
}
