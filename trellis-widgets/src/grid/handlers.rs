//! Host callback registry.

use std::fmt;
use std::sync::Arc;

use trellis_model::SortState;

/// A host callback.
///
/// Handlers fire synchronously in dispatch order and always receive
/// complete new state values, never partial patches. An unwired handler
/// makes the corresponding interaction a no-op: the widget holds no
/// fallback state of its own.
pub type Handler<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// The grid's host-facing callbacks.
///
/// Built with chained setters, the same shape the rest of the widgets use
/// for configuration:
///
/// ```
/// use trellis_widgets::grid::GridHandlers;
///
/// let handlers = GridHandlers::new()
///     .on_sort_change(|sort| { let _ = sort; })
///     .on_page_change(|page| { let _ = page; });
/// ```
#[derive(Clone, Default)]
pub struct GridHandlers {
    pub(super) sort_change: Option<Handler<SortState>>,
    pub(super) selection_change: Option<Handler<Vec<usize>>>,
    pub(super) page_change: Option<Handler<usize>>,
    pub(super) column_resize: Option<Handler<(String, u16)>>,
    pub(super) column_visibility: Option<Handler<(String, bool)>>,
    pub(super) column_reorder: Option<Handler<(usize, usize)>>,
}

impl GridHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with the complete next sort state after a header click.
    pub fn on_sort_change<F>(mut self, f: F) -> Self
    where
        F: Fn(&SortState) + Send + Sync + 'static,
    {
        self.sort_change = Some(Arc::new(f));
        self
    }

    /// Called with the full set of selected page-relative indices.
    pub fn on_selection_change<F>(mut self, f: F) -> Self
    where
        F: Fn(&Vec<usize>) + Send + Sync + 'static,
    {
        self.selection_change = Some(Arc::new(f));
        self
    }

    /// Called with the requested 0-based page.
    pub fn on_page_change<F>(mut self, f: F) -> Self
    where
        F: Fn(&usize) + Send + Sync + 'static,
    {
        self.page_change = Some(Arc::new(f));
        self
    }

    /// Called with `(column id, committed width)` when a resize gesture
    /// ends. Live previews are not reported here.
    pub fn on_column_resize<F>(mut self, f: F) -> Self
    where
        F: Fn(&(String, u16)) + Send + Sync + 'static,
    {
        self.column_resize = Some(Arc::new(f));
        self
    }

    /// Called with `(column id, visible)` when a visibility toggle is
    /// requested.
    pub fn on_column_visibility_change<F>(mut self, f: F) -> Self
    where
        F: Fn(&(String, bool)) + Send + Sync + 'static,
    {
        self.column_visibility = Some(Arc::new(f));
        self
    }

    /// Called with `(from, to)` display positions when a column drag ends.
    pub fn on_column_reorder<F>(mut self, f: F) -> Self
    where
        F: Fn(&(usize, usize)) + Send + Sync + 'static,
    {
        self.column_reorder = Some(Arc::new(f));
        self
    }
}

impl fmt::Debug for GridHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridHandlers")
            .field("sort_change", &self.sort_change.is_some())
            .field("selection_change", &self.selection_change.is_some())
            .field("page_change", &self.page_change.is_some())
            .field("column_resize", &self.column_resize.is_some())
            .field("column_visibility", &self.column_visibility.is_some())
            .field("column_reorder", &self.column_reorder.is_some())
            .finish()
    }
}
