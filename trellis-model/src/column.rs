//! Column descriptors.

use serde::Deserialize;
use serde::Serialize;

/// Minimum column width. The resize gesture clamps to this floor no matter
/// how far the pointer travels.
pub const MIN_COLUMN_WIDTH: u16 = 50;

/// Semantic type tag for a column.
///
/// Drives comparator dispatch and display decoration. `Unknown` columns fall
/// back to string handling everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    #[default]
    Text,
    Number,
    Boolean,
    DateTime,
    Json,
    Unknown,
}

/// Which edge a column is pinned to, if any.
///
/// Pinning is a display concept: pinned columns render fixed to one edge
/// regardless of horizontal scroll. It has no effect on sort or selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PinSide {
    Left,
    Right,
    #[default]
    None,
}

/// A grid column definition.
///
/// # Examples
///
/// ```
/// use trellis_model::{Column, ColumnKind};
///
/// let columns = vec![
///     Column::new("name", "Name").sortable(),
///     Column::new("amount", "Amount").kind(ColumnKind::Number).fixed(90).sortable(),
///     Column::new("payload", "Payload").kind(ColumnKind::Json).fixed(200),
/// ];
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Unique, stable identifier.
    pub id: String,
    /// Header text displayed at the top.
    pub header: String,
    /// Semantic type tag.
    pub kind: ColumnKind,
    /// Current width in display units.
    pub width: u16,
    /// Whether header clicks cycle a sort on this column.
    pub sortable: bool,
    /// Edge this column is pinned to.
    pub pin: PinSide,
    /// Whether the column is currently shown.
    pub visible: bool,
}

impl Column {
    /// Create a new column with the given id and header.
    pub fn new(id: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            kind: ColumnKind::default(),
            width: 120,
            sortable: false,
            pin: PinSide::None,
            visible: true,
        }
    }

    /// Set the semantic kind.
    pub fn kind(mut self, kind: ColumnKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set a fixed width, clamped to [`MIN_COLUMN_WIDTH`].
    pub fn fixed(mut self, width: u16) -> Self {
        self.width = width.max(MIN_COLUMN_WIDTH);
        self
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Pin the column to the left edge.
    pub fn pinned_left(mut self) -> Self {
        self.pin = PinSide::Left;
        self
    }

    /// Pin the column to the right edge.
    pub fn pinned_right(mut self) -> Self {
        self.pin = PinSide::Right;
        self
    }

    /// Start the column hidden.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}
