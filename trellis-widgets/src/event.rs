//! Input event types shared by the widgets.

use serde::Deserialize;
use serde::Serialize;

use trellis_model::SortState;

/// Keyboard modifiers active during a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    /// Ctrl on most platforms, Cmd on macOS; both toggle selection.
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        shift: false,
        alt: false,
    };

    pub fn ctrl() -> Self {
        Modifiers {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn shift() -> Self {
        Modifiers {
            shift: true,
            ..Default::default()
        }
    }
}

/// A semantic grid event, produced by the controller after normalizing raw
/// input and before handler dispatch.
///
/// Every variant carries a complete new state value, never a delta; hosts
/// apply it wholesale to the state they own.
#[derive(Debug, Clone, PartialEq)]
pub enum GridEvent {
    SortChanged(SortState),
    SelectionChanged(Vec<usize>),
    PageChanged(usize),
    ColumnResized { column_id: String, width: u16 },
    ColumnVisibilityChanged { column_id: String, visible: bool },
    ColumnMoved { from: usize, to: usize },
}
