//! Client-side pagination for the movie table.
//!
//! The pager stores a requested page index and a page size. The index is
//! clamped against the current row count on every read, so a list that
//! shrinks under the pager (new search text, fresh fetch) never yields an
//! empty window past the end.

#[cfg(test)]
#[path = "pager_test.rs"]
mod pager_test;

use std::ops::Range;

/// Selectable rows-per-page values.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 20];

/// Initial rows-per-page value.
pub const DEFAULT_PAGE_SIZE: usize = PAGE_SIZE_OPTIONS[0];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self { page: 0, page_size: DEFAULT_PAGE_SIZE }
    }
}

impl Pager {
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Change rows-per-page and return to the first page.
    ///
    /// Returns `false` (and leaves the pager untouched) for sizes outside
    /// [`PAGE_SIZE_OPTIONS`].
    pub fn set_page_size(&mut self, size: usize) -> bool {
        if !PAGE_SIZE_OPTIONS.contains(&size) {
            return false;
        }
        self.page_size = size;
        self.page = 0;
        true
    }

    /// Return to the first page.
    pub fn reset(&mut self) {
        self.page = 0;
    }

    /// Number of pages for `total` rows. Always at least one.
    #[must_use]
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// Zero-based page index, clamped to the last page for `total` rows.
    #[must_use]
    pub fn current_page(&self, total: usize) -> usize {
        self.page.min(self.page_count(total) - 1)
    }

    /// Row index range shown for `total` rows.
    #[must_use]
    pub fn visible_range(&self, total: usize) -> Range<usize> {
        let start = self.current_page(total) * self.page_size;
        let end = (start + self.page_size).min(total);
        start.min(end)..end
    }

    /// Rows of `items` on the current page.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.visible_range(items.len())]
    }

    #[must_use]
    pub fn has_previous(&self, total: usize) -> bool {
        self.current_page(total) > 0
    }

    #[must_use]
    pub fn has_next(&self, total: usize) -> bool {
        self.current_page(total) + 1 < self.page_count(total)
    }

    pub fn previous(&mut self, total: usize) {
        self.page = self.current_page(total).saturating_sub(1);
    }

    pub fn next(&mut self, total: usize) {
        let current = self.current_page(total);
        self.page = if self.has_next(total) { current + 1 } else { current };
    }

    /// Footer text such as `"6–10 of 20"`.
    #[must_use]
    pub fn range_label(&self, total: usize) -> String {
        let range = self.visible_range(total);
        if range.is_empty() {
            return format!("0–0 of {total}");
        }
        format!("{}–{} of {total}", range.start + 1, range.end)
    }
}
