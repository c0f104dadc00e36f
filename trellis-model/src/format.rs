//! Cell formatting.
//!
//! Maps a raw [`CellValue`] plus its column metadata to a display
//! representation. Formatting is display-only: the underlying value is
//! passed through unchanged to sorting and export, so nothing here may
//! round, reorder, or lose data. Every value has a defined rendering and
//! the formatter never errors.

use chrono::SecondsFormat;

use crate::column::Column;
use crate::value::CellValue;

/// Decoration hint attached to formatted text.
///
/// Purely advisory: hosts map tones to theme colors (muted null markers,
/// green/red booleans). Tones never carry behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextTone {
    #[default]
    Default,
    /// De-emphasized, used for the null marker.
    Muted,
    /// Affirmative accent, used for `true`.
    Positive,
    /// Negative accent, used for `false`.
    Negative,
}

/// A formatted cell: display text plus a decoration hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellText {
    pub text: String,
    pub tone: TextTone,
}

impl CellText {
    fn new(text: impl Into<String>, tone: TextTone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// Format a cell value for display in the given column.
///
/// - `Null` renders as a muted literal `"null"`.
/// - Booleans render as colorized `"true"`/`"false"`.
/// - Numbers are grouped with thousands separators.
/// - Datetimes render as RFC 3339.
/// - Structured values render as compact single-line JSON, truncated to the
///   column's width budget; the full value stays on the row for copy/export.
/// - Everything else coerces to a string.
pub fn format(value: &CellValue, column: &Column) -> CellText {
    match value {
        CellValue::Null => CellText::new("null", TextTone::Muted),
        CellValue::Bool(true) => CellText::new("true", TextTone::Positive),
        CellValue::Bool(false) => CellText::new("false", TextTone::Negative),
        CellValue::Int(i) => CellText::new(group_integer(&i.to_string()), TextTone::Default),
        CellValue::Float(f) => CellText::new(group_float(*f), TextTone::Default),
        CellValue::DateTime(dt) => CellText::new(
            dt.to_rfc3339_opts(SecondsFormat::Secs, true),
            TextTone::Default,
        ),
        CellValue::Json(json) => {
            let compact = serde_json::to_string(json).unwrap_or_else(|_| json.to_string());
            CellText::new(truncate(&compact, preview_budget(column)), TextTone::Default)
        }
        CellValue::Text(s) => CellText::new(s.clone(), TextTone::Default),
    }
}

/// Plain string coercion of a value, with no grouping or truncation.
///
/// Shared by the comparator (string ordering of non-numeric kinds) and the
/// pivot key rendering, so a value always coerces the same way everywhere.
pub fn coerce(value: &CellValue) -> String {
    match value {
        CellValue::Null => "null".to_string(),
        CellValue::Bool(b) => b.to_string(),
        CellValue::Int(i) => i.to_string(),
        CellValue::Float(f) => f.to_string(),
        CellValue::DateTime(dt) => dt.to_rfc3339_opts(SecondsFormat::Secs, true),
        CellValue::Text(s) => s.clone(),
        CellValue::Json(json) => serde_json::to_string(json).unwrap_or_else(|_| json.to_string()),
    }
}

/// Display budget for structured previews, tied to the column's width so a
/// narrow column does not haul a multi-kilobyte document into the cell.
fn preview_budget(column: &Column) -> usize {
    (column.width as usize).max(16)
}

/// Insert thousands separators into a plain integer rendering.
fn group_integer(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && i % 3 == offset % 3 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}")
}

/// Group the integer part of a float rendering, keeping the fraction intact.
fn group_float(f: f64) -> String {
    let rendered = f.to_string();
    if !rendered.chars().all(|c| c.is_ascii_digit() || c == '-' || c == '.') {
        // NaN / inf / exponent renderings pass through untouched.
        return rendered;
    }
    match rendered.split_once('.') {
        Some((int_part, frac)) => format!("{}.{}", group_integer(int_part), frac),
        None => group_integer(&rendered),
    }
}

/// Truncate to a character budget, appending an ellipsis when cut.
fn truncate(s: &str, budget: usize) -> String {
    if s.chars().count() <= budget {
        return s.to_string();
    }
    let mut out: String = s.chars().take(budget.saturating_sub(1)).collect();
    out.push('…');
    out
}
