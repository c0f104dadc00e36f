//! Client-side row filtering.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use serde::Deserialize;
use serde::Serialize;

use crate::column::Column;
use crate::format;
use crate::value::Row;

/// How the query text matches cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Case-insensitive substring match.
    #[default]
    Substring,
    /// Fuzzy match scored by nucleo.
    Fuzzy,
}

/// A filter over the grid's rows.
///
/// Filtering is a pure derivation applied before sort and pagination. No
/// debouncing happens here; callers wanting debounce wrap their input
/// handling themselves.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterQuery {
    pub text: String,
    pub mode: FilterMode,
}

impl FilterQuery {
    pub fn substring(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            mode: FilterMode::Substring,
        }
    }

    pub fn fuzzy(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            mode: FilterMode::Fuzzy,
        }
    }

    /// An empty query matches every row.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Filter rows against the query, returning matching row indices in input
/// order.
///
/// A row matches when any of its cells in a visible column matches. Hidden
/// columns are excluded so the filter agrees with what the user can see.
pub fn filter_rows(rows: &[Row], columns: &[Column], query: &FilterQuery) -> Vec<usize> {
    if query.is_empty() {
        return (0..rows.len()).collect();
    }

    let visible_positions: Vec<usize> = columns
        .iter()
        .enumerate()
        .filter(|(_, c)| c.visible)
        .map(|(i, _)| i)
        .collect();

    match query.mode {
        FilterMode::Substring => {
            let needle = query.text.to_lowercase();
            rows.iter()
                .enumerate()
                .filter(|(_, row)| {
                    visible_positions.iter().any(|&pos| {
                        row.get(pos)
                            .is_some_and(|v| format::coerce(v).to_lowercase().contains(&needle))
                    })
                })
                .map(|(i, _)| i)
                .collect()
        }
        FilterMode::Fuzzy => {
            let mut matcher = Matcher::new(Config::DEFAULT);
            let pattern = Pattern::new(
                &query.text,
                CaseMatching::Ignore,
                Normalization::Smart,
                AtomKind::Fuzzy,
            );
            rows.iter()
                .enumerate()
                .filter(|(_, row)| {
                    visible_positions.iter().any(|&pos| {
                        row.get(pos).is_some_and(|v| {
                            let text = format::coerce(v);
                            let mut buf = Vec::new();
                            let haystack = Utf32Str::new(&text, &mut buf);
                            pattern.score(haystack, &mut matcher).is_some()
                        })
                    })
                })
                .map(|(i, _)| i)
                .collect()
        }
    }
}
