//! Column layout: widths, visibility, pinning, display order, and the
//! resize gesture.
//!
//! The column sequence is fixed at construction and is what rows align to
//! positionally. Reordering only permutes a display order on top of it, so
//! dragging a column never misaligns row data.

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use trellis_model::{Column, PinSide, MIN_COLUMN_WIDTH};

/// Invalid column configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("duplicate column id: {0}")]
    DuplicateColumnId(String),
    #[error("unknown column id: {0}")]
    UnknownColumn(String),
}

/// The grid's column layout.
///
/// Owned by the host like every other piece of grid state; the widget only
/// reads it and reports intended mutations through handlers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnLayout {
    /// Columns in data order. Rows align to this sequence by position.
    columns: Vec<Column>,
    /// Display order as a permutation of data positions.
    order: Vec<usize>,
}

impl ColumnLayout {
    /// Build a layout, validating id uniqueness and clamping widths to the
    /// minimum floor.
    pub fn new(mut columns: Vec<Column>) -> Result<Self, LayoutError> {
        for (i, column) in columns.iter().enumerate() {
            if columns[..i].iter().any(|c| c.id == column.id) {
                return Err(LayoutError::DuplicateColumnId(column.id.clone()));
            }
        }
        for column in &mut columns {
            column.width = column.width.max(MIN_COLUMN_WIDTH);
        }
        let order = (0..columns.len()).collect();
        Ok(Self { columns, order })
    }

    /// Columns in data order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of columns, hidden ones included.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Look up a column by id.
    pub fn get(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Data position of a column id.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.id == id)
    }

    /// Visible columns in display order, pinned-left first, then unpinned,
    /// then pinned-right. Each entry carries the column's data position so
    /// callers can index into rows.
    pub fn visible_columns(&self) -> Vec<(usize, &Column)> {
        let shown = |pin: PinSide| {
            self.order
                .iter()
                .map(|&pos| (pos, &self.columns[pos]))
                .filter(move |(_, c)| c.visible && c.pin == pin)
        };
        shown(PinSide::Left)
            .chain(shown(PinSide::None))
            .chain(shown(PinSide::Right))
            .collect()
    }

    /// Set a column's width, clamped to the floor. Unknown ids are inert.
    pub fn set_width(&mut self, id: &str, width: u16) {
        if let Some(column) = self.columns.iter_mut().find(|c| c.id == id) {
            column.width = width.max(MIN_COLUMN_WIDTH);
        }
    }

    /// Show or hide a column. No derived effect on width or sort.
    pub fn set_visible(&mut self, id: &str, visible: bool) {
        if let Some(column) = self.columns.iter_mut().find(|c| c.id == id) {
            column.visible = visible;
        }
    }

    /// Assign a pin side. No derived effect on width or sort.
    pub fn set_pin(&mut self, id: &str, pin: PinSide) {
        if let Some(column) = self.columns.iter_mut().find(|c| c.id == id) {
            column.pin = pin;
        }
    }

    /// Move the column at display position `from` to display position `to`.
    ///
    /// Out-of-range positions are inert. The data sequence, and therefore
    /// row alignment, is untouched.
    pub fn move_column(&mut self, from: usize, to: usize) {
        if from >= self.order.len() || to >= self.order.len() || from == to {
            return;
        }
        let pos = self.order.remove(from);
        self.order.insert(to, pos);
    }
}

/// An in-flight column resize.
///
/// The one piece of state the grid keeps for itself: a transient shadow of
/// the dragged column's width, alive from pointer-down to release. The host
/// sees intermediate widths as live previews and receives only the final
/// width as committed state; dropping the gesture discards the shadow.
#[derive(Debug, Clone)]
pub struct ResizeGesture {
    column_id: String,
    start_x: i32,
    start_width: u16,
    preview: u16,
}

impl ResizeGesture {
    /// Capture the gesture origin for the given column.
    pub fn begin(
        layout: &ColumnLayout,
        column_id: &str,
        pointer_x: i32,
    ) -> Result<Self, LayoutError> {
        let column = layout
            .get(column_id)
            .ok_or_else(|| LayoutError::UnknownColumn(column_id.to_string()))?;
        log::debug!("resize begin: {} at width {}", column_id, column.width);
        Ok(Self {
            column_id: column_id.to_string(),
            start_x: pointer_x,
            start_width: column.width,
            preview: column.width,
        })
    }

    /// The column being resized.
    pub fn column_id(&self) -> &str {
        &self.column_id
    }

    /// Track the pointer, returning the width the column would have.
    ///
    /// The floor is absolute: an arbitrarily large negative delta still
    /// yields [`MIN_COLUMN_WIDTH`], never zero or a wrapped value.
    pub fn update(&mut self, pointer_x: i32) -> u16 {
        let delta = i64::from(pointer_x) - i64::from(self.start_x);
        let width = i64::from(self.start_width) + delta;
        self.preview = width.clamp(i64::from(MIN_COLUMN_WIDTH), i64::from(u16::MAX)) as u16;
        self.preview
    }

    /// The current live preview width.
    pub fn preview(&self) -> u16 {
        self.preview
    }

    /// Finish the gesture, yielding the committed `(column id, width)`.
    pub fn commit(self) -> (String, u16) {
        log::debug!("resize commit: {} -> {}", self.column_id, self.preview);
        (self.column_id, self.preview)
    }
}
