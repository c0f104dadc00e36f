//! Reorderable tab strip.

use serde::Deserialize;
use serde::Serialize;

/// One tab in the strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    /// Stable identifier.
    pub id: String,
    /// Display title.
    pub title: String,
}

impl Tab {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// An ordered strip of tabs with one active tab.
///
/// Drag-reordering moves a tab while keeping whichever tab was active still
/// active; closing a tab activates its right neighbor, or the new last tab
/// when the rightmost one closes. Out-of-range indices are inert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabStrip {
    tabs: Vec<Tab>,
    active: Option<usize>,
}

impl TabStrip {
    pub fn new() -> Self {
        Self::default()
    }

    /// All tabs in display order.
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Index of the active tab, if the strip is non-empty.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// The active tab itself.
    pub fn active_tab(&self) -> Option<&Tab> {
        self.active.and_then(|i| self.tabs.get(i))
    }

    /// Append a tab. The first tab added becomes active.
    pub fn push(&mut self, tab: Tab) {
        self.tabs.push(tab);
        if self.active.is_none() {
            self.active = Some(0);
        }
    }

    /// Activate the tab at `index`. Inert when out of range.
    pub fn activate(&mut self, index: usize) {
        if index < self.tabs.len() {
            self.active = Some(index);
        }
    }

    /// Move the tab at `from` to position `to` (drag reorder).
    ///
    /// The active tab stays logically active wherever it lands.
    pub fn move_tab(&mut self, from: usize, to: usize) {
        if from >= self.tabs.len() || to >= self.tabs.len() || from == to {
            return;
        }
        let active_id = self.active_tab().map(|t| t.id.clone());
        let tab = self.tabs.remove(from);
        self.tabs.insert(to, tab);
        if let Some(id) = active_id {
            self.active = self.tabs.iter().position(|t| t.id == id);
        }
    }

    /// Close the tab at `index`.
    ///
    /// When the active tab closes, its right neighbor becomes active, or the
    /// new last tab if there is none. Closing the only tab leaves an empty
    /// strip with no active index.
    pub fn close(&mut self, index: usize) {
        if index >= self.tabs.len() {
            return;
        }
        self.tabs.remove(index);
        if self.tabs.is_empty() {
            self.active = None;
            return;
        }
        let last = self.tabs.len() - 1;
        self.active = Some(match self.active {
            Some(active) if active == index => index.min(last),
            Some(active) if active > index => active - 1,
            Some(active) => active,
            None => 0,
        });
    }
}
