//! Tree explorer model for file and catalog browsers.
//!
//! Nodes live in a flat arena keyed by stable id, with child lists and a
//! separate parent map for upward traversal. No node owns another, so there
//! is no cyclic ownership to manage; the renderer walks the flattened
//! visible list and never needs back-pointers.
//!
//! # Example
//!
//! ```
//! use trellis_widgets::tree::{TreeItem, TreeModel};
//!
//! #[derive(Clone)]
//! struct Entry {
//!     id: String,
//!     name: String,
//! }
//!
//! impl TreeItem for Entry {
//!     fn id(&self) -> String {
//!         self.id.clone()
//!     }
//! }
//!
//! let mut tree = TreeModel::new();
//! tree.insert(None, Entry { id: "db".into(), name: "warehouse".into() });
//! tree.insert(Some("db"), Entry { id: "db.sales".into(), name: "sales".into() });
//! tree.expand("db");
//! let visible = tree.flatten();
//! assert_eq!(visible.len(), 2);
//! assert_eq!(visible[1].item.name, "sales");
//! ```

mod item;
mod state;

pub use item::TreeItem;
pub use state::{FlatNode, TreeModel};
