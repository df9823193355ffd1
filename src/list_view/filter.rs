//! Search and categorical filter predicates.

use serde::{Deserialize, Serialize};

/// Selectable option for the categorical filter.
///
/// `id` is compared against the value returned by the filter accessor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub id: String,
    pub label: String,
}

impl FilterOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

type Accessor<T> = Box<dyn Fn(&T) -> String>;

/// Typed field accessors describing how a list is searched and filtered.
pub struct ListFields<T> {
    search: Accessor<T>,
    filter: Option<Accessor<T>>,
    options: Vec<FilterOption>,
}

impl<T> ListFields<T> {
    /// Searches the value returned by `search`; no categorical filter.
    pub fn new<S>(search: S) -> Self
    where
        S: Fn(&T) -> String + 'static,
    {
        Self {
            search: Box::new(search),
            filter: None,
            options: Vec::new(),
        }
    }

    /// Adds a categorical filter with the options offered to the user.
    pub fn filter_by<F>(mut self, filter: F, options: Vec<FilterOption>) -> Self
    where
        F: Fn(&T) -> String + 'static,
    {
        self.filter = Some(Box::new(filter));
        self.options = options;
        self
    }

    pub fn options(&self) -> &[FilterOption] {
        &self.options
    }

    pub fn has_filter(&self) -> bool {
        self.filter.is_some()
    }

    /// Case-insensitive substring match on the search field.
    ///
    /// A blank query matches everything.
    pub fn matches_search(&self, record: &T, query: &str) -> bool {
        if query.trim().is_empty() {
            return true;
        }
        (self.search)(record)
            .to_lowercase()
            .contains(&query.to_lowercase())
    }

    /// Exact match on the filter field; passes when nothing is selected.
    pub fn matches_filter(&self, record: &T, selected: Option<&str>) -> bool {
        match (&self.filter, selected) {
            (Some(filter), Some(selected)) => filter(record) == selected,
            _ => true,
        }
    }

    /// Whether `record` belongs to the filtered set.
    pub fn matches(&self, record: &T, query: &str, selected: Option<&str>) -> bool {
        self.matches_search(record, query) && self.matches_filter(record, selected)
    }
}
