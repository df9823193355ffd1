//! Rendering contract between a list view and its caller.

/// Shown when the page is empty and the renderer has no empty state.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No items found";

/// Turns records into whatever the caller displays.
pub trait ListRenderer<T> {
    type Output;

    /// Renders one record; `index` is its position in the filtered set.
    fn render_item(&self, item: &T, index: usize) -> Self::Output;

    /// Renders the empty state, or `None` to use [`DEFAULT_EMPTY_MESSAGE`].
    fn render_empty(&self) -> Option<Self::Output> {
        None
    }
}

/// Closure-backed [`ListRenderer`].
pub struct FnRenderer<T, O> {
    item: Box<dyn Fn(&T, usize) -> O>,
    empty: Option<Box<dyn Fn() -> O>>,
}

impl<T, O> FnRenderer<T, O> {
    pub fn new<I>(item: I) -> Self
    where
        I: Fn(&T, usize) -> O + 'static,
    {
        Self {
            item: Box::new(item),
            empty: None,
        }
    }

    pub fn with_empty<E>(mut self, empty: E) -> Self
    where
        E: Fn() -> O + 'static,
    {
        self.empty = Some(Box::new(empty));
        self
    }
}

impl<T, O> ListRenderer<T> for FnRenderer<T, O> {
    type Output = O;

    fn render_item(&self, item: &T, index: usize) -> O {
        (self.item)(item, index)
    }

    fn render_empty(&self) -> Option<O> {
        self.empty.as_ref().map(|empty| empty())
    }
}

/// Body of a rendered page.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedBody<O> {
    Items(Vec<O>),
    /// The caller's empty state, when it supplied one.
    Empty(Option<O>),
}

/// Everything needed to draw one page of a list view.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedList<O> {
    pub body: RenderedBody<O>,
    pub summary: String,
    pub pages: Vec<Option<usize>>,
    pub current_page: usize,
    pub total_pages: usize,
    pub previous: Option<usize>,
    pub next: Option<usize>,
}

impl<O> RenderedList<O> {
    /// Pager controls are only drawn when there is more than one page.
    pub fn show_pager(&self) -> bool {
        self.total_pages > 1
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.body, RenderedBody::Empty(_))
    }
}
