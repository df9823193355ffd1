//! Generic list view controller: free-text search, a single-select
//! categorical filter and pagination over a borrowed record collection.
//!
//! The controller stores only the user's inputs. Filtered sets and page
//! slices are recomputed from the caller's records whenever they are read, and
//! the records themselves are never modified.

use serde::Serialize;

use crate::pagination::{
    DEFAULT_ITEMS_PER_PAGE, DEFAULT_MAX_BUTTONS, Paginated, next_page, page_numbers,
    previous_page, total_pages,
};

pub mod filter;
pub mod render;

pub use filter::{FilterOption, ListFields};
pub use render::{
    DEFAULT_EMPTY_MESSAGE, FnRenderer, ListRenderer, RenderedBody, RenderedList,
};

/// User-controlled inputs of a list view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListViewState {
    pub search_query: String,
    pub selected_filter: Option<String>,
    pub current_page: usize,
}

impl Default for ListViewState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            selected_filter: None,
            current_page: 1,
        }
    }
}

pub struct ListView<'a, T> {
    records: &'a [T],
    fields: ListFields<T>,
    items_per_page: usize,
    state: ListViewState,
}

impl<'a, T> ListView<'a, T> {
    pub fn new(records: &'a [T], fields: ListFields<T>) -> Self {
        Self {
            records,
            fields,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            state: ListViewState::default(),
        }
    }

    /// Sets the page size; zero is treated as one.
    pub fn items_per_page(mut self, items_per_page: usize) -> Self {
        self.items_per_page = items_per_page.max(1);
        self.state.current_page = 1;
        self
    }

    pub fn state(&self) -> &ListViewState {
        &self.state
    }

    pub fn search_query(&self) -> &str {
        &self.state.search_query
    }

    pub fn selected_filter(&self) -> Option<&str> {
        self.state.selected_filter.as_deref()
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page
    }

    pub fn filter_options(&self) -> &[FilterOption] {
        self.fields.options()
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.state.search_query = query.into();
        self.state.current_page = 1;
    }

    /// Toggles `id`: selecting the active filter clears it.
    pub fn set_filter(&mut self, id: impl Into<String>) {
        let id = id.into();
        if self.state.selected_filter.as_deref() == Some(id.as_str()) {
            self.state.selected_filter = None;
        } else {
            self.state.selected_filter = Some(id);
        }
        self.state.current_page = 1;
    }

    /// Replaces the selection without toggling, e.g. when restoring it from a
    /// request.
    pub fn select_filter(&mut self, id: Option<String>) {
        self.state.selected_filter = id;
        self.state.current_page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.state.current_page = page.clamp(1, self.total_pages());
    }

    /// Pager callback target.
    pub fn handle_page_change(&mut self, page: usize) {
        self.set_page(page);
    }

    pub fn clear_all(&mut self) {
        self.state = ListViewState::default();
    }

    pub fn has_active_filters(&self) -> bool {
        !self.state.search_query.trim().is_empty() || self.state.selected_filter.is_some()
    }

    /// Records matching the current search and filter, in original order.
    pub fn filtered_items(&self) -> Vec<&'a T> {
        let query = self.state.search_query.as_str();
        let selected = self.state.selected_filter.as_deref();
        self.records
            .iter()
            .filter(|record| self.fields.matches(record, query, selected))
            .collect()
    }

    pub fn total_items(&self) -> usize {
        self.filtered_items().len()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items(), self.items_per_page)
    }

    /// Position of the first item of the current page in the filtered set.
    pub fn start_index(&self) -> usize {
        (self.state.current_page - 1) * self.items_per_page
    }

    pub fn page_slice(&self) -> Vec<&'a T> {
        self.filtered_items()
            .into_iter()
            .skip(self.start_index())
            .take(self.items_per_page)
            .collect()
    }

    /// Results line such as "Showing 11 to 20 of 23 results".
    pub fn summary(&self) -> String {
        let total = self.total_items();
        let start = self.start_index();
        let first = if total == 0 { 0 } else { start + 1 };
        let last = (start + self.items_per_page).min(total);
        format!("Showing {first} to {last} of {total} results")
    }

    /// Current page as a serializable payload.
    pub fn paginate(&self) -> Paginated<&'a T> {
        let filtered = self.filtered_items();
        let total_items = filtered.len();
        let items = filtered
            .into_iter()
            .skip(self.start_index())
            .take(self.items_per_page)
            .collect();
        Paginated::new(
            items,
            self.state.current_page,
            total_pages(total_items, self.items_per_page),
            total_items,
        )
    }

    /// Hands each record of the current page to `renderer`, or asks it for
    /// the empty state.
    pub fn render<R>(&self, renderer: &R) -> RenderedList<R::Output>
    where
        R: ListRenderer<T> + ?Sized,
    {
        let start = self.start_index();
        let slice = self.page_slice();

        let body = if slice.is_empty() {
            RenderedBody::Empty(renderer.render_empty())
        } else {
            RenderedBody::Items(
                slice
                    .into_iter()
                    .enumerate()
                    .map(|(offset, item)| renderer.render_item(item, start + offset))
                    .collect(),
            )
        };

        let current_page = self.state.current_page;
        let total_pages = self.total_pages();

        RenderedList {
            body,
            summary: self.summary(),
            pages: page_numbers(current_page, total_pages, DEFAULT_MAX_BUTTONS),
            current_page,
            total_pages,
            previous: previous_page(current_page),
            next: next_page(current_page, total_pages),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item {
        id: usize,
        name: String,
        kind: &'static str,
    }

    fn items(count: usize) -> Vec<Item> {
        (1..=count)
            .map(|id| Item {
                id,
                name: format!("Item {id}"),
                kind: if id % 2 == 0 { "even" } else { "odd" },
            })
            .collect()
    }

    fn fields() -> ListFields<Item> {
        ListFields::new(|i: &Item| i.name.clone()).filter_by(
            |i: &Item| i.kind.to_string(),
            vec![
                FilterOption::new("even", "Even"),
                FilterOption::new("odd", "Odd"),
            ],
        )
    }

    fn ids(items: &[&Item]) -> Vec<usize> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn twenty_three_items_make_three_pages() {
        let records = items(23);
        let mut view = ListView::new(&records, fields());

        assert_eq!(view.total_pages(), 3);
        view.set_page(3);
        assert_eq!(view.page_slice().len(), 3);
        assert_eq!(view.start_index(), 20);
        assert_eq!(view.summary(), "Showing 21 to 23 of 23 results");
    }

    #[test]
    fn set_page_clamps_to_range() {
        let records = items(23);
        let mut view = ListView::new(&records, fields());

        view.set_page(99);
        assert_eq!(view.current_page(), 3);
        view.set_page(0);
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn search_and_filter_reset_page() {
        let records = items(23);
        let mut view = ListView::new(&records, fields());

        view.set_page(2);
        view.set_search_query("item");
        assert_eq!(view.current_page(), 1);

        view.set_page(2);
        view.set_filter("odd");
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn selecting_active_filter_clears_it() {
        let records = items(6);
        let mut view = ListView::new(&records, fields());
        view.set_search_query("item");

        view.set_filter("even");
        assert_eq!(ids(&view.filtered_items()), vec![2, 4, 6]);

        view.set_filter("even");
        assert_eq!(view.selected_filter(), None);
        assert_eq!(ids(&view.filtered_items()), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn switching_filter_replaces_selection() {
        let records = items(4);
        let mut view = ListView::new(&records, fields());

        view.set_filter("even");
        view.set_filter("odd");
        assert_eq!(view.selected_filter(), Some("odd"));
        assert_eq!(ids(&view.filtered_items()), vec![1, 3]);
    }

    #[test]
    fn clear_all_restores_defaults() {
        let records = items(23);
        let mut view = ListView::new(&records, fields());
        view.set_search_query("1");
        view.set_filter("odd");
        view.set_page(2);
        assert!(view.has_active_filters());

        view.clear_all();

        assert_eq!(view.state(), &ListViewState::default());
        assert!(!view.has_active_filters());
    }

    #[test]
    fn whitespace_query_is_not_an_active_filter() {
        let records = items(3);
        let mut view = ListView::new(&records, fields());
        view.set_search_query("   ");
        assert!(!view.has_active_filters());
        assert_eq!(view.total_items(), 3);
    }

    #[test]
    fn empty_result_has_one_page_and_zero_summary() {
        let records = items(5);
        let mut view = ListView::new(&records, fields());
        view.set_search_query("nothing");

        assert_eq!(view.total_pages(), 1);
        assert!(view.page_slice().is_empty());
        assert_eq!(view.summary(), "Showing 0 to 0 of 0 results");
    }

    #[test]
    fn render_uses_absolute_indices() {
        let records = items(12);
        let mut view = ListView::new(&records, fields()).items_per_page(5);
        view.set_page(2);

        let renderer = FnRenderer::new(|item: &Item, index| format!("{index}:{}", item.id));
        let rendered = view.render(&renderer);

        assert_eq!(
            rendered.body,
            RenderedBody::Items(vec![
                "5:6".to_string(),
                "6:7".to_string(),
                "7:8".to_string(),
                "8:9".to_string(),
                "9:10".to_string()
            ])
        );
        assert!(rendered.show_pager());
        assert_eq!(rendered.previous, Some(1));
        assert_eq!(rendered.next, Some(3));
    }

    #[test]
    fn render_empty_state() {
        let records = items(2);
        let mut view = ListView::new(&records, fields());
        view.set_search_query("zzz");

        let plain = FnRenderer::new(|item: &Item, _| item.id.to_string());
        let rendered = view.render(&plain);
        assert_eq!(rendered.body, RenderedBody::Empty(None));
        assert!(!rendered.show_pager());

        let custom = FnRenderer::new(|item: &Item, _| item.id.to_string())
            .with_empty(|| "Nothing here".to_string());
        assert_eq!(
            view.render(&custom).body,
            RenderedBody::Empty(Some("Nothing here".to_string()))
        );
    }

    #[test]
    fn zero_page_size_treated_as_one() {
        let records = items(3);
        let view = ListView::new(&records, fields()).items_per_page(0);
        assert_eq!(view.total_pages(), 3);
    }

    #[test]
    fn paginate_reports_totals() {
        let records = items(23);
        let mut view = ListView::new(&records, fields());
        view.set_filter("odd");
        view.set_page(2);

        let page = view.paginate();
        assert_eq!(page.total_items, 12);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.page, 2);
        assert_eq!(page.items.len(), 2);
    }
}
