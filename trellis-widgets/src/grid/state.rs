//! Host-owned grid state.

use serde::Deserialize;
use serde::Serialize;

use trellis_model::{FilterQuery, SortState};

use crate::layout::ColumnLayout;
use crate::pagination::PaginationState;
use crate::selection::Selection;

/// Everything the grid needs besides the rows themselves.
///
/// The host owns this and passes it into every controller call as an
/// immutable snapshot; the widget never mutates it. Handlers deliver new
/// values for individual fields and the host folds them back in before the
/// next render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridState {
    pub layout: ColumnLayout,
    /// Active sort, if any. `None` means input order.
    pub sort: Option<SortState>,
    pub selection: Selection,
    pub pagination: PaginationState,
    /// Client-side filter, applied before sort and pagination.
    pub filter: Option<FilterQuery>,
}

impl GridState {
    pub fn new(layout: ColumnLayout, pagination: PaginationState) -> Self {
        Self {
            layout,
            sort: None,
            selection: Selection::new(),
            pagination,
            filter: None,
        }
    }

    /// Whether the grid holds the full dataset and may derive locally.
    ///
    /// With no known total the rows on hand are all there is. With a known
    /// total, the grid only derives locally when the host actually supplied
    /// that many rows; fewer means the rows are just a fetched page, and
    /// sort/filter must be delegated: the widget reports the requested
    /// state and the host re-fetches. The grid never assumes it holds data
    /// it was not given.
    pub fn holds_full_dataset(&self, rows_on_hand: usize) -> bool {
        self.pagination
            .total_rows()
            .is_none_or(|total| rows_on_hand >= total)
    }
}
