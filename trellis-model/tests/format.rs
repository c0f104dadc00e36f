use chrono::{TimeZone, Utc};
use serde_json::json;
use trellis_model::{format, CellValue, Column, ColumnKind, TextTone};

fn text_column() -> Column {
    Column::new("c", "C")
}

#[test]
fn test_null_renders_muted_marker() {
    let cell = format::format(&CellValue::Null, &text_column());
    assert_eq!(cell.text, "null");
    assert_eq!(cell.tone, TextTone::Muted);
}

#[test]
fn test_booleans_render_colorized_literals() {
    let yes = format::format(&CellValue::Bool(true), &text_column());
    assert_eq!(yes.text, "true");
    assert_eq!(yes.tone, TextTone::Positive);

    let no = format::format(&CellValue::Bool(false), &text_column());
    assert_eq!(no.text, "false");
    assert_eq!(no.tone, TextTone::Negative);
}

#[test]
fn test_integer_grouping() {
    let column = Column::new("n", "N").kind(ColumnKind::Number);
    assert_eq!(format::format(&CellValue::Int(0), &column).text, "0");
    assert_eq!(format::format(&CellValue::Int(123), &column).text, "123");
    assert_eq!(format::format(&CellValue::Int(1234), &column).text, "1,234");
    assert_eq!(
        format::format(&CellValue::Int(1_234_567), &column).text,
        "1,234,567"
    );
    assert_eq!(
        format::format(&CellValue::Int(-1_234_567), &column).text,
        "-1,234,567"
    );
}

#[test]
fn test_float_grouping_keeps_fraction() {
    let column = Column::new("n", "N").kind(ColumnKind::Number);
    assert_eq!(
        format::format(&CellValue::Float(1_234_567.5), &column).text,
        "1,234,567.5"
    );
    assert_eq!(format::format(&CellValue::Float(0.25), &column).text, "0.25");
}

#[test]
fn test_grouping_is_display_only() {
    // The raw value is untouched; only the rendering groups digits.
    let value = CellValue::Int(1_234_567);
    let _ = format::format(&value, &text_column());
    assert_eq!(value, CellValue::Int(1_234_567));
    assert_eq!(format::coerce(&value), "1234567");
}

#[test]
fn test_datetime_renders_rfc3339() {
    let dt = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
    let cell = format::format(&CellValue::DateTime(dt), &text_column());
    assert_eq!(cell.text, "2024-03-01T12:30:00Z");
}

#[test]
fn test_json_compact_single_line() {
    let column = Column::new("payload", "Payload").kind(ColumnKind::Json).fixed(200);
    let value = CellValue::Json(json!({"a": 1, "b": [2, 3]}));
    let cell = format::format(&value, &column);
    assert_eq!(cell.text, r#"{"a":1,"b":[2,3]}"#);
    assert!(!cell.text.contains('\n'));
}

#[test]
fn test_json_truncated_to_column_budget() {
    let column = Column::new("payload", "Payload").kind(ColumnKind::Json).fixed(50);
    let long: Vec<i32> = (0..200).collect();
    let value = CellValue::Json(json!(long));
    let cell = format::format(&value, &column);
    assert_eq!(cell.text.chars().count(), 50);
    assert!(cell.text.ends_with('…'));
    // The underlying value keeps everything for copy/export.
    match value {
        CellValue::Json(j) => assert_eq!(j.as_array().unwrap().len(), 200),
        _ => unreachable!(),
    }
}

#[test]
fn test_text_passes_through() {
    let cell = format::format(&CellValue::from("hello"), &text_column());
    assert_eq!(cell.text, "hello");
    assert_eq!(cell.tone, TextTone::Default);
}

#[test]
fn test_coerce_covers_every_variant() {
    assert_eq!(format::coerce(&CellValue::Null), "null");
    assert_eq!(format::coerce(&CellValue::Bool(true)), "true");
    assert_eq!(format::coerce(&CellValue::Int(-5)), "-5");
    assert_eq!(format::coerce(&CellValue::Float(1.5)), "1.5");
    assert_eq!(format::coerce(&CellValue::from("x")), "x");
    assert_eq!(format::coerce(&CellValue::Json(json!([1]))), "[1]");
}
