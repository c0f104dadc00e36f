//! The grid: a controlled tabular widget composing formatting, sort,
//! filter, selection, column layout, and pagination.
//!
//! The host owns all authoritative state ([`GridState`]) and the rows; the
//! controller ([`Grid`]) normalizes raw input into semantic events, invokes
//! the host's handlers with complete new state values, and re-derives the
//! visible window ([`GridView`]) purely from whatever props it is given.
//! The only state the widget keeps for itself is an in-flight column resize
//! gesture.
//!
//! # Example
//!
//! ```
//! use trellis_model::{CellValue, Column, ColumnKind};
//! use trellis_widgets::grid::{Grid, GridHandlers, GridState};
//! use trellis_widgets::layout::ColumnLayout;
//! use trellis_widgets::pagination::PaginationState;
//!
//! let layout = ColumnLayout::new(vec![
//!     Column::new("name", "Name").sortable(),
//!     Column::new("rows", "Rows").kind(ColumnKind::Number).sortable(),
//! ])
//! .unwrap();
//! let state = GridState::new(layout, PaginationState::new(100).unwrap());
//!
//! let grid = Grid::new(GridHandlers::new().on_sort_change(|sort| {
//!     println!("host refetches sorted by {:?}", sort);
//! }));
//!
//! let rows: Vec<Vec<CellValue>> = vec![
//!     vec!["orders".into(), 1_204_773i64.into()],
//!     vec!["users".into(), 88_412i64.into()],
//! ];
//! grid.header_click(&state, "rows");
//! let view = grid.view(&state, &rows);
//! assert_eq!(view.rows.len(), 2);
//! ```

mod events;
mod handlers;
mod state;
mod view;

pub use events::Grid;
pub use handlers::GridHandlers;
pub use state::GridState;
pub use view::{ColumnView, GridView, RowView};
