//! Interaction models for the Trellis data-platform widgets.
//!
//! Everything here follows the controlled-component contract: the host owns
//! all authoritative state and passes it down as immutable snapshots; the
//! widgets normalize raw input into semantic events and hand the host
//! complete new state values through callbacks. Nothing performs I/O, and
//! nothing keeps authoritative memory across renders. The single exception
//! is the grid's in-flight column resize gesture, a transient shadow that
//! is committed on release and discarded on cancel.

pub mod event;
pub mod grid;
pub mod layout;
pub mod pagination;
pub mod selection;
pub mod tabs;
pub mod theme;
pub mod tree;

pub mod prelude {
    pub use crate::event::{GridEvent, Modifiers};
    pub use crate::grid::{ColumnView, Grid, GridHandlers, GridState, GridView, RowView};
    pub use crate::layout::{ColumnLayout, LayoutError, ResizeGesture};
    pub use crate::pagination::{PageWindow, PaginationError, PaginationState};
    pub use crate::selection::Selection;
    pub use crate::tabs::{Tab, TabStrip};
    pub use crate::theme::{DefaultTheme, Rgb, Theme, ThemeRef};
    pub use crate::tree::{FlatNode, TreeItem, TreeModel};

    pub use trellis_model::{
        CellText, CellValue, Column, ColumnKind, FilterMode, FilterQuery, PinSide, Row,
        SortDirection, SortState, TextTone, MIN_COLUMN_WIDTH,
    };
}
