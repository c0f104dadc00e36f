//! The grid controller: input normalization and handler dispatch.

use trellis_model::{next_sort, Row, SortState};

use crate::event::{GridEvent, Modifiers};
use crate::layout::{LayoutError, ResizeGesture};

use super::handlers::GridHandlers;
use super::state::GridState;
use super::view::{self, GridView};

/// The grid controller.
///
/// Stateless apart from an in-flight resize gesture: every call takes the
/// host's current `GridState` and rows, and every outcome is reported
/// through [`GridHandlers`] as a complete new state value. Methods also
/// return the value they dispatched so callers driving the grid directly
/// (tests, scripted hosts) can observe it.
#[derive(Debug, Default)]
pub struct Grid {
    handlers: GridHandlers,
    resize: Option<ResizeGesture>,
}

impl Grid {
    pub fn new(handlers: GridHandlers) -> Self {
        Self {
            handlers,
            resize: None,
        }
    }

    /// Derive the visible window from the current props.
    ///
    /// With the full dataset on hand the pipeline is filter, then sort,
    /// then paginate; when a server holds the rest, the supplied rows
    /// already are the page and pass through verbatim. A column mid-resize
    /// shows its live preview width.
    pub fn view(&self, state: &GridState, rows: &[Row]) -> GridView {
        let preview = self
            .resize
            .as_ref()
            .map(|g| (g.column_id().to_string(), g.preview()));
        view::derive(state, rows, preview.as_ref().map(|(id, w)| (id.as_str(), *w)))
    }

    /// A click on a column header.
    ///
    /// Ignored for unknown or unsortable columns. Otherwise computes the
    /// next sort state (first click ascending, repeated clicks cycling,
    /// a different column restarting ascending) and reports it. The grid
    /// itself never reorders anything here; whether sorting happens locally
    /// is decided when the view is derived.
    pub fn header_click(&self, state: &GridState, column_id: &str) -> Option<SortState> {
        let sortable = state.layout.get(column_id).is_some_and(|c| c.sortable);
        if !sortable {
            return None;
        }
        let next = next_sort(state.sort.as_ref(), column_id);
        self.emit(GridEvent::SortChanged(next.clone()));
        Some(next)
    }

    /// A click on a data row, with modifiers.
    ///
    /// `index` is relative to the visible page. Out-of-range clicks are
    /// inert. Returns the new selection when it changed.
    pub fn row_click(
        &self,
        state: &GridState,
        rows: &[Row],
        index: usize,
        modifiers: Modifiers,
    ) -> Option<Vec<usize>> {
        let page_len = view::page_indices(state, rows).len();
        let mut selection = state.selection.clone();
        selection.apply_click(index, page_len, modifiers);
        if selection == state.selection {
            return None;
        }
        let indices = selection.selected();
        self.emit(GridEvent::SelectionChanged(indices.clone()));
        Some(indices)
    }

    /// A request to navigate to `page` (0-based).
    ///
    /// Clamped to the valid span when the page count is known; requests
    /// that resolve to the current page are inert. Returns the page
    /// actually requested from the host.
    pub fn page_request(&self, state: &GridState, page: usize) -> Option<usize> {
        let next = state.pagination.go_to(page);
        if next.page() == state.pagination.page() {
            return None;
        }
        self.emit(GridEvent::PageChanged(next.page()));
        Some(next.page())
    }

    /// A request to show or hide a column. Returns the requested visibility.
    pub fn toggle_column(&self, state: &GridState, column_id: &str) -> Option<bool> {
        let column = state.layout.get(column_id)?;
        let visible = !column.visible;
        self.emit(GridEvent::ColumnVisibilityChanged {
            column_id: column_id.to_string(),
            visible,
        });
        Some(visible)
    }

    /// A column drag-reorder between display positions. Inert out of range.
    pub fn reorder_columns(&self, state: &GridState, from: usize, to: usize) -> bool {
        if from >= state.layout.len() || to >= state.layout.len() || from == to {
            return false;
        }
        self.emit(GridEvent::ColumnMoved { from, to });
        true
    }

    /// Begin a resize gesture on a column at the given pointer position.
    ///
    /// A gesture already in progress is replaced; its shadow width is
    /// discarded, not committed.
    pub fn resize_begin(
        &mut self,
        state: &GridState,
        column_id: &str,
        pointer_x: i32,
    ) -> Result<(), LayoutError> {
        self.resize = Some(ResizeGesture::begin(&state.layout, column_id, pointer_x)?);
        Ok(())
    }

    /// Track the pointer during a resize, returning the live preview width.
    ///
    /// The preview is for the host to paint; nothing is committed and no
    /// handler fires until the gesture ends.
    pub fn resize_update(&mut self, pointer_x: i32) -> Option<u16> {
        self.resize.as_mut().map(|g| g.update(pointer_x))
    }

    /// End the gesture, committing and reporting the final width.
    pub fn resize_end(&mut self) -> Option<(String, u16)> {
        let (column_id, width) = self.resize.take()?.commit();
        self.emit(GridEvent::ColumnResized {
            column_id: column_id.clone(),
            width,
        });
        Some((column_id, width))
    }

    /// Abandon the gesture, discarding the shadow width.
    ///
    /// No input binding maps here by default; hosts that want an
    /// Escape-to-abort can wire one themselves.
    pub fn resize_cancel(&mut self) {
        if let Some(gesture) = self.resize.take() {
            log::debug!("resize cancel: {}", gesture.column_id());
        }
    }

    /// Whether a resize gesture is in progress.
    pub fn is_resizing(&self) -> bool {
        self.resize.is_some()
    }

    /// Dispatch a semantic event to the matching handler, if wired.
    fn emit(&self, event: GridEvent) {
        log::debug!("grid event: {:?}", event);
        match event {
            GridEvent::SortChanged(sort) => {
                if let Some(handler) = &self.handlers.sort_change {
                    handler(&sort);
                }
            }
            GridEvent::SelectionChanged(indices) => {
                if let Some(handler) = &self.handlers.selection_change {
                    handler(&indices);
                }
            }
            GridEvent::PageChanged(page) => {
                if let Some(handler) = &self.handlers.page_change {
                    handler(&page);
                }
            }
            GridEvent::ColumnResized { column_id, width } => {
                if let Some(handler) = &self.handlers.column_resize {
                    handler(&(column_id, width));
                }
            }
            GridEvent::ColumnVisibilityChanged { column_id, visible } => {
                if let Some(handler) = &self.handlers.column_visibility {
                    handler(&(column_id, visible));
                }
            }
            GridEvent::ColumnMoved { from, to } => {
                if let Some(handler) = &self.handlers.column_reorder {
                    handler(&(from, to));
                }
            }
        }
    }
}
