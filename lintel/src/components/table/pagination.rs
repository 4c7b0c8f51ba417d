//! Page tracking over the filtered and sorted rows.

use std::ops::Range;

/// Emitted when the active page moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChange {
    pub page: usize,
    pub first_visible_index: usize,
}

/// Tracks the active page against an item count and page size.
///
/// Navigation is only possible one page at a time, guarded at both ends.
/// Any change to the item count sends the controller back to the first page,
/// even when the current page would still exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    items_per_page: usize,
    item_count: usize,
    active_page: usize,
}

impl Pagination {
    /// A page size of zero is treated as one.
    pub fn new(items_per_page: usize) -> Self {
        if items_per_page == 0 {
            log::warn!("items_per_page of 0 treated as 1");
        }
        Self {
            items_per_page: items_per_page.max(1),
            item_count: 0,
            active_page: 0,
        }
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Zero-based active page.
    pub fn active_page(&self) -> usize {
        self.active_page
    }

    pub fn total_pages(&self) -> usize {
        self.item_count.div_ceil(self.items_per_page)
    }

    pub fn first_visible_index(&self) -> usize {
        self.active_page * self.items_per_page
    }

    pub fn has_prev(&self) -> bool {
        self.active_page > 0
    }

    pub fn has_next(&self) -> bool {
        self.active_page + 1 < self.total_pages()
    }

    pub fn next_page(&mut self) -> Option<PageChange> {
        if !self.has_next() {
            return None;
        }
        Some(self.go_to(self.active_page + 1))
    }

    pub fn prev_page(&mut self) -> Option<PageChange> {
        if !self.has_prev() {
            return None;
        }
        Some(self.go_to(self.active_page - 1))
    }

    /// Update the item count. Returns a change back to page 0 whenever the
    /// count differs from the previous one.
    pub fn set_item_count(&mut self, item_count: usize) -> Option<PageChange> {
        if item_count == self.item_count {
            return None;
        }
        self.item_count = item_count;
        Some(self.go_to(0))
    }

    /// Indices of the visible slice within the item list.
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.first_visible_index().min(self.item_count);
        let end = (start + self.items_per_page).min(self.item_count);
        start..end
    }

    /// The "X of Y" label; Y is at least 1 so an empty table reads "1 of 1".
    pub fn label(&self) -> String {
        format!("{} of {}", self.active_page + 1, self.total_pages().max(1))
    }

    fn go_to(&mut self, page: usize) -> PageChange {
        self.active_page = page;
        let change = PageChange {
            page,
            first_visible_index: self.first_visible_index(),
        };
        log::debug!(
            "Page changed to {} (first visible index {})",
            change.page,
            change.first_visible_index
        );
        change
    }
}
