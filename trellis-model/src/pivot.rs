//! Pivot-shape computation.
//!
//! Shapes a flat row set into a two-dimensional aggregate grid: distinct
//! row-key values down the side, distinct column-key values across the top,
//! one aggregated cell per pair. Shape computation only; rendering and
//! drill-down stay with the host.

use std::collections::{HashMap, HashSet};

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::column::Column;
use crate::format;
use crate::sort::compare;
use crate::value::{CellValue, Row};

/// How bucketed values fold into a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    /// Number of rows in the bucket. Counts every value, numeric or not.
    #[default]
    Count,
    /// Sum of numeric values; non-numeric cells are skipped.
    Sum,
    /// Smallest numeric value; non-numeric cells are skipped.
    Min,
    /// Largest numeric value; non-numeric cells are skipped.
    Max,
    /// Mean of numeric values; non-numeric cells are skipped.
    Average,
}

/// A pivot request: which columns key the two axes, which column feeds the
/// cells, and how buckets aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PivotSpec {
    pub row_key_column: String,
    pub column_key_column: String,
    pub value_column: String,
    pub aggregation: Aggregation,
}

/// The computed pivot grid.
///
/// `cells[r][c]` is the aggregate for `row_keys[r]` x `column_keys[c]`;
/// empty buckets hold `Null` (`Count` renders them as 0). Keys are ordered
/// by the sort comparator with the null bucket last, rendered `"null"`.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotShape {
    pub row_keys: Vec<String>,
    pub column_keys: Vec<String>,
    pub cells: Vec<Vec<CellValue>>,
}

/// A pivot spec referencing columns the grid does not have.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PivotError {
    #[error("unknown pivot column: {0}")]
    UnknownColumn(String),
}

/// Running aggregate for one bucket.
#[derive(Debug, Clone, Default)]
struct Bucket {
    count: u64,
    numeric_count: u64,
    sum: f64,
    all_int: bool,
    int_sum: i64,
    min: Option<CellValue>,
    max: Option<CellValue>,
}

impl Bucket {
    fn fold(&mut self, value: &CellValue) {
        if self.count == 0 {
            self.all_int = true;
        }
        self.count += 1;
        let Some(n) = value.as_f64() else {
            return;
        };
        self.numeric_count += 1;
        self.sum += n;
        match value {
            CellValue::Int(i) if self.all_int => {
                self.int_sum = self.int_sum.saturating_add(*i);
            }
            _ => self.all_int = false,
        }
        let smaller = self
            .min
            .as_ref()
            .is_none_or(|current| compare(value, current).is_lt());
        if smaller {
            self.min = Some(value.clone());
        }
        let larger = self
            .max
            .as_ref()
            .is_none_or(|current| compare(value, current).is_gt());
        if larger {
            self.max = Some(value.clone());
        }
    }

    fn finish(self, aggregation: Aggregation) -> CellValue {
        match aggregation {
            Aggregation::Count => CellValue::Int(self.count as i64),
            Aggregation::Sum if self.numeric_count == 0 => CellValue::Null,
            Aggregation::Sum if self.all_int => CellValue::Int(self.int_sum),
            Aggregation::Sum => CellValue::Float(self.sum),
            Aggregation::Min => self.min.unwrap_or(CellValue::Null),
            Aggregation::Max => self.max.unwrap_or(CellValue::Null),
            Aggregation::Average if self.numeric_count == 0 => CellValue::Null,
            Aggregation::Average => CellValue::Float(self.sum / self.numeric_count as f64),
        }
    }
}

/// Compute the pivot shape of `rows` under `spec`.
pub fn pivot(rows: &[Row], columns: &[Column], spec: &PivotSpec) -> Result<PivotShape, PivotError> {
    let row_pos = position_of(columns, &spec.row_key_column)?;
    let col_pos = position_of(columns, &spec.column_key_column)?;
    let value_pos = position_of(columns, &spec.value_column)?;

    let row_keys = distinct_keys(rows, row_pos);
    let column_keys = distinct_keys(rows, col_pos);

    let row_index: HashMap<&str, usize> = row_keys
        .iter()
        .enumerate()
        .map(|(i, k)| (k.as_str(), i))
        .collect();
    let col_index: HashMap<&str, usize> = column_keys
        .iter()
        .enumerate()
        .map(|(i, k)| (k.as_str(), i))
        .collect();

    let mut buckets: Vec<Vec<Bucket>> =
        vec![vec![Bucket::default(); column_keys.len()]; row_keys.len()];

    for row in rows {
        let rk = format::coerce(row.get(row_pos).unwrap_or(&CellValue::Null));
        let ck = format::coerce(row.get(col_pos).unwrap_or(&CellValue::Null));
        let (Some(&r), Some(&c)) = (row_index.get(rk.as_str()), col_index.get(ck.as_str())) else {
            continue;
        };
        buckets[r][c].fold(row.get(value_pos).unwrap_or(&CellValue::Null));
    }

    let cells = buckets
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|b| b.finish(spec.aggregation))
                .collect()
        })
        .collect();

    Ok(PivotShape {
        row_keys,
        column_keys,
        cells,
    })
}

fn position_of(columns: &[Column], id: &str) -> Result<usize, PivotError> {
    columns
        .iter()
        .position(|c| c.id == id)
        .ok_or_else(|| PivotError::UnknownColumn(id.to_string()))
}

/// Distinct key values at `position`, ordered by the sort comparator with
/// nulls (and short rows) grouped last under the `"null"` rendering.
fn distinct_keys(rows: &[Row], position: usize) -> Vec<String> {
    let mut representatives: Vec<&CellValue> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for row in rows {
        let value = row.get(position).unwrap_or(&CellValue::Null);
        let rendered = format::coerce(value);
        if seen.insert(rendered) {
            representatives.push(value);
        }
    }

    representatives.sort_by(|a, b| match (a.is_null(), b.is_null()) {
        (true, true) => std::cmp::Ordering::Equal,
        (true, false) => std::cmp::Ordering::Greater,
        (false, true) => std::cmp::Ordering::Less,
        (false, false) => compare(a, b),
    });

    representatives.into_iter().map(format::coerce).collect()
}
