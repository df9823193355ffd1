//! Page-number strip and paginated payloads shared by every listing.

use serde::Serialize;

/// Page size used when the caller does not pick one.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Width of the centered window of page buttons.
pub const DEFAULT_MAX_BUTTONS: usize = 5;

/// Returns the page indicators for a bounded navigation strip.
///
/// `None` marks an ellipsis. The window of `max_buttons` pages is centered on
/// `current_page` and clamped to `1..=total_pages`; the first and last pages
/// are always reachable.
pub fn page_numbers(current_page: usize, total_pages: usize, max_buttons: usize) -> Vec<Option<usize>> {
    let last_page = total_pages.max(1);
    let max_buttons = max_buttons.max(1);
    let current_page = current_page.clamp(1, last_page);

    let mut start = current_page.saturating_sub(max_buttons / 2).max(1);
    let end = start.saturating_add(max_buttons - 1).min(last_page);

    if end + 1 - start < max_buttons {
        start = (end + 1).saturating_sub(max_buttons).max(1);
    }

    // Window plus first page, last page and two ellipses.
    let mut pages = Vec::with_capacity(end + 1 - start + 4);

    if start > 1 {
        pages.push(Some(1));
        if start > 2 {
            pages.push(None);
        }
    }

    pages.extend((start..=end).map(Some));

    if end < last_page {
        if end + 1 < last_page {
            pages.push(None);
        }
        pages.push(Some(last_page));
    }

    pages
}

/// Page reached by the "previous" control, or `None` on the first page.
pub fn previous_page(current_page: usize) -> Option<usize> {
    (current_page > 1).then(|| current_page - 1)
}

/// Page reached by the "next" control, or `None` on the last page.
pub fn next_page(current_page: usize, total_pages: usize) -> Option<usize> {
    (current_page < total_pages).then(|| current_page + 1)
}

/// Number of pages needed for `total_items`; never less than one.
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    total_items.div_ceil(items_per_page.max(1)).max(1)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub previous: Option<usize>,
    pub next: Option<usize>,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize, total_items: usize) -> Self {
        let total_pages = total_pages.max(1);
        let current_page = current_page.clamp(1, total_pages);

        let pages = page_numbers(current_page, total_pages, DEFAULT_MAX_BUTTONS);

        Self {
            items,
            pages,
            page: current_page,
            total_pages,
            total_items,
            previous: previous_page(current_page),
            next: next_page(current_page, total_pages),
        }
    }

    /// Converts the page items while keeping the navigation state.
    pub fn map<U, F>(self, f: F) -> Paginated<U>
    where
        F: FnMut(T) -> U,
    {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            pages: self.pages,
            page: self.page,
            total_pages: self.total_pages,
            total_items: self.total_items,
            previous: self.previous,
            next: self.next,
        }
    }
}
