//! Sort state and row comparison.
//!
//! The grid sorts locally only when it holds the full dataset. When the host
//! reports a server-side total, header clicks compute the next [`SortState`]
//! and the host re-fetches sorted rows itself; the widget never assumes it
//! holds everything.

use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;

use crate::column::{Column, ColumnKind};
use crate::format;
use crate::value::{CellValue, Row};

/// Direction of an active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
    /// Sort cleared; rows revert to input order.
    #[default]
    None,
}

impl SortDirection {
    /// Advance one step in the header-click cycle:
    /// ascending, then descending, then none, then ascending again.
    pub fn cycle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::None,
            SortDirection::None => SortDirection::Ascending,
        }
    }

    /// Header glyph for this direction.
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
            SortDirection::None => "",
        }
    }
}

/// The grid's sort state: at most one active column.
///
/// Created on the first header click, cycled on repeated clicks of the same
/// header, replaced wholesale when a different header is clicked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column_id: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(column_id: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column_id: column_id.into(),
            direction,
        }
    }

    /// Whether this state actually orders anything.
    pub fn is_active(&self) -> bool {
        self.direction != SortDirection::None
    }
}

/// Compute the sort state a header click produces.
///
/// Clicking an unsorted column starts ascending; clicking the active column
/// cycles its direction; the previous column's state never leaks into a new
/// column.
pub fn next_sort(current: Option<&SortState>, clicked_column: &str) -> SortState {
    match current {
        Some(state) if state.column_id == clicked_column => {
            SortState::new(clicked_column, state.direction.cycle())
        }
        _ => SortState::new(clicked_column, SortDirection::Ascending),
    }
}

/// Compare two cell values without direction or null policy applied.
///
/// Numbers (and cross Int/Float pairs) compare numerically, booleans as
/// `false < true`, datetimes chronologically. Everything else falls back to
/// string ordering of the coerced rendering, so mixed-kind columns still
/// order deterministically.
pub fn compare(a: &CellValue, b: &CellValue) -> Ordering {
    if let (Some(x), Some(y)) = (a.as_f64(), b.as_f64()) {
        return x.partial_cmp(&y).unwrap_or(Ordering::Equal);
    }
    match (a, b) {
        (CellValue::Bool(x), CellValue::Bool(y)) => x.cmp(y),
        (CellValue::DateTime(x), CellValue::DateTime(y)) => x.cmp(y),
        _ => format::coerce(a).cmp(&format::coerce(b)),
    }
}

/// Sort all rows, returning a permutation of row indices.
///
/// A cleared or unresolvable sort returns the identity permutation.
pub fn sort_rows(rows: &[Row], columns: &[Column], state: &SortState) -> Vec<usize> {
    sort_indices(rows, (0..rows.len()).collect(), columns, state)
}

/// Sort a pre-selected subset of row indices (e.g. the filtered set).
///
/// The sort is stable, so rows with equal keys keep their input order.
/// Null cells sort last regardless of direction: missing data must not win
/// a descending sort, so the null policy is applied after the direction
/// reversal, not subject to it.
pub fn sort_indices(
    rows: &[Row],
    mut indices: Vec<usize>,
    columns: &[Column],
    state: &SortState,
) -> Vec<usize> {
    if !state.is_active() {
        return indices;
    }
    let Some(position) = columns.iter().position(|c| c.id == state.column_id) else {
        log::debug!("sort on unknown column {:?} ignored", state.column_id);
        return indices;
    };

    let numeric = columns[position].kind == ColumnKind::Number;
    let direction = state.direction;

    indices.sort_by(|&ia, &ib| {
        let a = rows.get(ia).and_then(|r| r.get(position));
        let b = rows.get(ib).and_then(|r| r.get(position));
        let (a, b) = match (a, b) {
            (Some(a), Some(b)) => (a, b),
            (None, None) => return Ordering::Equal,
            // Short rows behave like null cells.
            (None, Some(_)) => return Ordering::Greater,
            (Some(_), None) => return Ordering::Less,
        };
        match (a.is_null(), b.is_null()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                let ordering = if numeric {
                    // Stray non-numeric values in a numeric column fall
                    // back to the generic comparator.
                    match (a.as_f64(), b.as_f64()) {
                        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
                        _ => compare(a, b),
                    }
                } else {
                    compare(a, b)
                };
                match direction {
                    SortDirection::Descending => ordering.reverse(),
                    _ => ordering,
                }
            }
        }
    });

    indices
}
