//! Data model and pure computations for the Trellis grid widgets.
//!
//! This crate holds everything that can be computed without interaction
//! state: cell values and column descriptors, display formatting, the sort
//! comparator, row filtering, and pivot shaping. The interaction layer
//! (selection, layout gestures, pagination, the grid controller) lives in
//! `trellis-widgets`.

pub mod column;
pub mod filter;
pub mod format;
pub mod pivot;
pub mod sort;
pub mod value;

pub use column::{Column, ColumnKind, PinSide, MIN_COLUMN_WIDTH};
pub use filter::{filter_rows, FilterMode, FilterQuery};
pub use format::{format, CellText, TextTone};
pub use pivot::{pivot, Aggregation, PivotError, PivotShape, PivotSpec};
pub use sort::{compare, next_sort, sort_indices, sort_rows, SortDirection, SortState};
pub use value::{value_for, CellValue, Row};
