//! Page window arithmetic.

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Pagination configuration error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("page size must be at least 1")]
    ZeroPageSize,
}

/// The 1-based inclusive display window, e.g. rows "201-250".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start: usize,
    pub end: usize,
}

impl PageWindow {
    /// Whether the window contains no rows.
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }
}

/// Where the grid is in its row set.
///
/// An unknown total (`total_rows: None`) is a distinct state meaning the
/// host is streaming or has not counted; it is never coerced to a sentinel
/// like 0, which would read as "zero pages". With an unknown total the page
/// count cannot be computed and last-page navigation is disabled, but
/// "next" stays available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    page: usize,
    page_size: usize,
    total_rows: Option<usize>,
}

impl PaginationState {
    /// Create pagination with the given page size, starting at page 0.
    pub fn new(page_size: usize) -> Result<Self, PaginationError> {
        if page_size == 0 {
            return Err(PaginationError::ZeroPageSize);
        }
        Ok(Self {
            page: 0,
            page_size,
            total_rows: None,
        })
    }

    /// Set a known server-side total.
    pub fn with_total(mut self, total_rows: usize) -> Self {
        self.total_rows = Some(total_rows);
        self
    }

    /// Current page, 0-based.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Known total row count, if the host supplied one.
    pub fn total_rows(&self) -> Option<usize> {
        self.total_rows
    }

    /// Total number of pages, when the total is known.
    pub fn page_count(&self) -> Option<usize> {
        self.total_rows.map(|total| total.div_ceil(self.page_size))
    }

    /// The display window for the current page.
    ///
    /// `rows_on_hand` stands in for the total when it is unknown (the host
    /// has only streamed that many rows so far).
    pub fn visible_range(&self, rows_on_hand: usize) -> PageWindow {
        let limit = self.total_rows.unwrap_or(rows_on_hand);
        let start = self.page * self.page_size + 1;
        let end = ((self.page + 1) * self.page_size).min(limit);
        PageWindow { start, end }
    }

    /// The 0-based slice range of the current page within a row set of
    /// `len` rows. Used for client-side windowing.
    pub fn window(&self, len: usize) -> std::ops::Range<usize> {
        let start = (self.page * self.page_size).min(len);
        let end = ((self.page + 1) * self.page_size).min(len);
        start..end
    }

    /// Navigate to a page, clamping to the valid span when the page count
    /// is known. Never errors.
    pub fn go_to(&self, page: usize) -> Self {
        let page = match self.page_count() {
            Some(count) => page.min(count.saturating_sub(1)),
            None => page,
        };
        Self { page, ..*self }
    }

    /// Next page; clamped at the last page when the total is known.
    pub fn next(&self) -> Self {
        self.go_to(self.page + 1)
    }

    /// Previous page; saturates at page 0.
    pub fn prev(&self) -> Self {
        self.go_to(self.page.saturating_sub(1))
    }

    /// Whether a jump-to-last control can be offered.
    pub fn can_jump_to_last(&self) -> bool {
        self.total_rows.is_some()
    }

    /// Summary text for the pagination footer, e.g. `"201-250 of 250"`, or
    /// `"201-250"` when the total is unknown.
    pub fn summary(&self, rows_on_hand: usize) -> String {
        let window = self.visible_range(rows_on_hand);
        if window.is_empty() {
            return match self.total_rows {
                Some(total) => format!("0 of {total}"),
                None => "0".to_string(),
            };
        }
        match self.total_rows {
            Some(total) => format!("{}-{} of {}", window.start, window.end, total),
            None => format!("{}-{}", window.start, window.end),
        }
    }
}
