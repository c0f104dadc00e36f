use trellis_model::{Column, PinSide, MIN_COLUMN_WIDTH};
use trellis_widgets::layout::{ColumnLayout, LayoutError, ResizeGesture};

fn layout() -> ColumnLayout {
    ColumnLayout::new(vec![
        Column::new("a", "A").fixed(100),
        Column::new("b", "B").fixed(150),
        Column::new("c", "C").fixed(200),
    ])
    .unwrap()
}

#[test]
fn test_duplicate_column_id_rejected() {
    let result = ColumnLayout::new(vec![Column::new("a", "A"), Column::new("a", "Also A")]);
    assert_eq!(result.unwrap_err(), LayoutError::DuplicateColumnId("a".into()));
}

#[test]
fn test_construction_clamps_widths_to_floor() {
    let layout = ColumnLayout::new(vec![Column::new("a", "A")]).unwrap();
    assert!(layout.get("a").unwrap().width >= MIN_COLUMN_WIDTH);
}

#[test]
fn test_resize_floor_is_absolute() {
    // Start width 100, drag delta -10000: result is the minimum, never zero
    // or a wrapped value.
    let layout = layout();
    let mut gesture = ResizeGesture::begin(&layout, "a", 500).unwrap();
    assert_eq!(gesture.update(500 - 10_000), MIN_COLUMN_WIDTH);
    let (id, width) = gesture.commit();
    assert_eq!(id, "a");
    assert_eq!(width, MIN_COLUMN_WIDTH);
}

#[test]
fn test_resize_preview_tracks_pointer() {
    let layout = layout();
    let mut gesture = ResizeGesture::begin(&layout, "b", 300).unwrap();
    assert_eq!(gesture.preview(), 150);
    assert_eq!(gesture.update(340), 190);
    assert_eq!(gesture.update(260), 110);
    // Only the final position commits.
    let (_, width) = gesture.commit();
    assert_eq!(width, 110);
}

#[test]
fn test_resize_unknown_column_errors() {
    let layout = layout();
    assert!(matches!(
        ResizeGesture::begin(&layout, "ghost", 0),
        Err(LayoutError::UnknownColumn(_))
    ));
}

#[test]
fn test_set_width_clamps() {
    let mut layout = layout();
    layout.set_width("a", 10);
    assert_eq!(layout.get("a").unwrap().width, MIN_COLUMN_WIDTH);
    layout.set_width("a", 400);
    assert_eq!(layout.get("a").unwrap().width, 400);
}

#[test]
fn test_move_column_changes_display_order_only() {
    let mut layout = layout();
    layout.move_column(0, 2);
    let visible: Vec<&str> = layout
        .visible_columns()
        .iter()
        .map(|(_, c)| c.id.as_str())
        .collect();
    assert_eq!(visible, vec!["b", "c", "a"]);
    // Data order, and therefore row alignment, is untouched.
    let data: Vec<&str> = layout.columns().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(data, vec!["a", "b", "c"]);
}

#[test]
fn test_move_column_out_of_range_inert() {
    let mut layout = layout();
    let before = layout.visible_columns().len();
    layout.move_column(0, 3);
    layout.move_column(5, 0);
    let visible: Vec<&str> = layout
        .visible_columns()
        .iter()
        .map(|(_, c)| c.id.as_str())
        .collect();
    assert_eq!(visible, vec!["a", "b", "c"]);
    assert_eq!(layout.visible_columns().len(), before);
}

#[test]
fn test_pinned_columns_partition_edges() {
    let mut layout = ColumnLayout::new(vec![
        Column::new("a", "A"),
        Column::new("b", "B").pinned_right(),
        Column::new("c", "C").pinned_left(),
        Column::new("d", "D"),
    ])
    .unwrap();
    let visible: Vec<&str> = layout
        .visible_columns()
        .iter()
        .map(|(_, c)| c.id.as_str())
        .collect();
    assert_eq!(visible, vec!["c", "a", "d", "b"]);

    // Pinning has no derived effect on width or sort flags.
    let width_before = layout.get("a").unwrap().width;
    layout.set_pin("a", PinSide::Left);
    assert_eq!(layout.get("a").unwrap().width, width_before);
}

#[test]
fn test_hidden_columns_are_skipped() {
    let mut layout = layout();
    layout.set_visible("b", false);
    let visible: Vec<&str> = layout
        .visible_columns()
        .iter()
        .map(|(_, c)| c.id.as_str())
        .collect();
    assert_eq!(visible, vec!["a", "c"]);
    // The hidden column still occupies its data position.
    assert_eq!(layout.position_of("c"), Some(2));
}

#[test]
fn test_visible_columns_carry_data_positions() {
    let mut layout = layout();
    layout.move_column(0, 2);
    let positions: Vec<usize> = layout.visible_columns().iter().map(|(p, _)| *p).collect();
    assert_eq!(positions, vec![1, 2, 0]);
}
