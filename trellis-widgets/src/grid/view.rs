//! Derivation of the visible grid window.

use trellis_model::{
    filter_rows, format, sort_indices, CellText, CellValue, PinSide, Row, SortDirection,
};

use super::state::GridState;
use crate::pagination::PageWindow;

/// A visible column, ready to render as a header cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnView {
    pub id: String,
    pub header: String,
    pub width: u16,
    pub pin: PinSide,
    pub sortable: bool,
    /// Direction of the sort indicator on this header, `None` glyph-less.
    pub sort: SortDirection,
}

/// A visible row with its formatted cells.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    /// Index relative to the visible page; what selection tracks.
    pub page_index: usize,
    /// Index into the host's row slice.
    pub source_index: usize,
    pub selected: bool,
    /// One formatted cell per visible column, in display order.
    pub cells: Vec<CellText>,
}

/// The fully derived visible window.
///
/// Recomputed from props on every call; the grid keeps no memory of a
/// previous view.
#[derive(Debug, Clone, PartialEq)]
pub struct GridView {
    pub columns: Vec<ColumnView>,
    pub rows: Vec<RowView>,
    /// 1-based display window, e.g. rows 201-250.
    pub window: PageWindow,
    /// Footer text, e.g. `"201-250 of 250"`.
    pub summary: String,
    /// Number of rows on the visible page.
    pub page_len: usize,
}

/// Row indices making up the current page, in display order.
///
/// When the grid holds the full dataset: filter, then sort, then slice the
/// page window out of the result. Sort applies to the whole filtered set
/// before pagination, so page N of a sorted grid shows rows
/// N*size..N*size+size of the globally sorted sequence. When a server holds
/// the rest, the rows on hand already are the page; they pass through
/// verbatim.
pub(super) fn page_indices(state: &GridState, rows: &[Row]) -> Vec<usize> {
    if !state.holds_full_dataset(rows.len()) {
        return (0..rows.len()).collect();
    }
    let columns = state.layout.columns();
    let mut indices = match &state.filter {
        Some(query) if !query.is_empty() => filter_rows(rows, columns, query),
        _ => (0..rows.len()).collect(),
    };
    if let Some(sort) = &state.sort
        && sort.is_active()
    {
        indices = sort_indices(rows, indices, columns, sort);
    }
    let window = state.pagination.window(indices.len());
    indices[window].to_vec()
}

/// Number of rows that survive filtering, before pagination.
fn rows_on_hand(state: &GridState, rows: &[Row]) -> usize {
    if !state.holds_full_dataset(rows.len()) {
        return rows.len();
    }
    match &state.filter {
        Some(query) if !query.is_empty() => {
            filter_rows(rows, state.layout.columns(), query).len()
        }
        _ => rows.len(),
    }
}

pub(super) fn derive(
    state: &GridState,
    rows: &[Row],
    resize_preview: Option<(&str, u16)>,
) -> GridView {
    let visible = state.layout.visible_columns();

    let columns: Vec<ColumnView> = visible
        .iter()
        .map(|(_, column)| {
            let width = match resize_preview {
                Some((id, w)) if id == column.id => w,
                _ => column.width,
            };
            let sort = match &state.sort {
                Some(s) if s.column_id == column.id => s.direction,
                _ => SortDirection::None,
            };
            ColumnView {
                id: column.id.clone(),
                header: column.header.clone(),
                width,
                pin: column.pin,
                sortable: column.sortable,
                sort,
            }
        })
        .collect();

    let page = page_indices(state, rows);
    let page_len = page.len();

    let row_views: Vec<RowView> = page
        .iter()
        .enumerate()
        .map(|(page_index, &source_index)| {
            let row = &rows[source_index];
            let cells = visible
                .iter()
                .map(|&(position, column)| {
                    let value = row.get(position).unwrap_or(&CellValue::Null);
                    format(value, column)
                })
                .collect();
            RowView {
                page_index,
                source_index,
                selected: state.selection.is_selected(page_index),
                cells,
            }
        })
        .collect();

    let on_hand = rows_on_hand(state, rows);

    GridView {
        columns,
        rows: row_views,
        window: state.pagination.visible_range(on_hand),
        summary: state.pagination.summary(on_hand),
        page_len,
    }
}
