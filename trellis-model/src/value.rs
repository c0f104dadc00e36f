//! Dynamic cell values.

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::column::ColumnKind;

/// A dynamic value held by a single grid cell.
///
/// Rows never interpret their values; they carry them positionally and hand
/// them to the formatter and comparator. Missing data is `Null`, a first-class
/// variant rather than an `Option` wrapper, so that the nulls-last sort policy
/// and the `"null"` display marker have a single representation.
///
/// # Example
///
/// ```
/// use trellis_model::CellValue;
///
/// let name = CellValue::from("orders_2024");
/// let rows = CellValue::from(1_204_773i64);
/// let ok = CellValue::from(true);
/// let missing = CellValue::Null;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Null/missing value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Date and time with timezone.
    DateTime(DateTime<Utc>),
    /// String value.
    Text(String),
    /// Structured value (object or array), kept intact for copy/export.
    Json(JsonValue),
}

/// An ordered sequence of cell values, positionally aligned to the column
/// sequence by index. Lookup by column id resolves the column's position
/// first (see [`value_for`]).
pub type Row = Vec<CellValue>;

impl CellValue {
    /// Whether this value is the null marker.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// The semantic kind this value infers to.
    pub fn kind(&self) -> ColumnKind {
        match self {
            CellValue::Null => ColumnKind::Unknown,
            CellValue::Bool(_) => ColumnKind::Boolean,
            CellValue::Int(_) | CellValue::Float(_) => ColumnKind::Number,
            CellValue::DateTime(_) => ColumnKind::DateTime,
            CellValue::Text(_) => ColumnKind::Text,
            CellValue::Json(_) => ColumnKind::Json,
        }
    }

    /// Numeric view of this value, if it has one.
    ///
    /// Used by the comparator and the pivot aggregations; non-numeric values
    /// return `None` and are skipped by numeric folds.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Int(i) => Some(*i as f64),
            CellValue::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

impl From<i32> for CellValue {
    fn from(v: i32) -> Self {
        CellValue::Int(v as i64)
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Text(v)
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(v: DateTime<Utc>) -> Self {
        CellValue::DateTime(v)
    }
}

impl From<JsonValue> for CellValue {
    fn from(v: JsonValue) -> Self {
        CellValue::Json(v)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => CellValue::Null,
        }
    }
}

/// Resolve a cell by column id.
///
/// Rows align with the column sequence by position, so the id is translated
/// to an index first. Unknown ids and short rows yield `None`.
pub fn value_for<'a>(
    columns: &[crate::column::Column],
    row: &'a [CellValue],
    column_id: &str,
) -> Option<&'a CellValue> {
    let position = columns.iter().position(|c| c.id == column_id)?;
    row.get(position)
}
