//! Row selection with range anchor.
//!
//! Indices are 0-based and relative to the currently visible page. The grid
//! never presents rows outside the page's index span, so out-of-range input
//! here is treated as inert rather than an error.

use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

use crate::event::Modifiers;

/// Selected row indices plus the anchor a shift-click range is measured from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    selected: BTreeSet<usize>,
    anchor: Option<usize>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected indices in ascending order.
    pub fn selected(&self) -> Vec<usize> {
        self.selected.iter().copied().collect()
    }

    /// Check if an index is selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Number of selected rows.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// The anchor for range selection, if one exists.
    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    /// Clear all selection and the anchor.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.anchor = None;
    }

    /// Plain click: selection becomes the singleton `{index}` and `index`
    /// becomes the new anchor.
    pub fn click(&mut self, index: usize, len: usize) {
        if index >= len {
            return;
        }
        self.selected.clear();
        self.selected.insert(index);
        self.anchor = Some(index);
    }

    /// Ctrl/Cmd-click: toggle membership of `index`.
    ///
    /// Deselecting the anchor clears it; what the next shift-click should
    /// anchor to is deliberately left undefined (it falls back to plain
    /// click semantics).
    pub fn toggle(&mut self, index: usize, len: usize) {
        if index >= len {
            return;
        }
        if self.selected.remove(&index) {
            if self.anchor == Some(index) {
                self.anchor = None;
            }
        } else {
            self.selected.insert(index);
            self.anchor = Some(index);
        }
    }

    /// Shift-click: union the inclusive range between the anchor and `index`
    /// into the selection.
    ///
    /// The range is order-independent and additive; it extends the current
    /// selection rather than replacing it. With no anchor this degrades to a
    /// plain click.
    pub fn extend_to(&mut self, index: usize, len: usize) {
        if index >= len {
            return;
        }
        let Some(anchor) = self.anchor else {
            self.click(index, len);
            return;
        };
        let (lo, hi) = if anchor <= index {
            (anchor, index)
        } else {
            (index, anchor)
        };
        for i in lo..=hi.min(len.saturating_sub(1)) {
            self.selected.insert(i);
        }
    }

    /// Select every row on the page.
    pub fn select_all(&mut self, len: usize) {
        self.selected = (0..len).collect();
    }

    /// Apply a row click under the given modifiers.
    ///
    /// Shift extends from the anchor, ctrl/cmd toggles, a plain click
    /// replaces the selection. This is the single dispatch point the grid
    /// controller uses.
    pub fn apply_click(&mut self, index: usize, len: usize, modifiers: Modifiers) {
        if modifiers.shift {
            self.extend_to(index, len);
        } else if modifiers.ctrl {
            self.toggle(index, len);
        } else {
            self.click(index, len);
        }
    }

    /// Drop any selected indices beyond the page length.
    ///
    /// Called when the page shrinks (page change, refetch) so stale indices
    /// cannot linger.
    pub fn retain_within(&mut self, len: usize) {
        self.selected.retain(|&i| i < len);
        if self.anchor.is_some_and(|a| a >= len) {
            self.anchor = None;
        }
    }
}
