use trellis_model::{
    next_sort, sort_rows, CellValue, Column, ColumnKind, Row, SortDirection, SortState,
};

fn columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name").sortable(),
        Column::new("amount", "Amount").kind(ColumnKind::Number).sortable(),
    ]
}

fn row(name: &str, amount: CellValue) -> Row {
    vec![CellValue::from(name), amount]
}

#[test]
fn test_direction_cycle_has_period_three() {
    // click -> asc, click -> desc, click -> none, click -> asc
    let first = SortDirection::None.cycle();
    assert_eq!(first, SortDirection::Ascending);
    let second = first.cycle();
    assert_eq!(second, SortDirection::Descending);
    let third = second.cycle();
    assert_eq!(third, SortDirection::None);
    assert_eq!(third.cycle(), SortDirection::Ascending);
}

#[test]
fn test_three_clicks_return_to_none() {
    let columns = columns();
    let mut sort = None;
    for _ in 0..3 {
        sort = Some(next_sort(sort.as_ref(), "amount"));
        assert!(columns.iter().any(|c| c.id == sort.as_ref().unwrap().column_id));
    }
    assert_eq!(sort.unwrap().direction, SortDirection::None);
}

#[test]
fn test_different_column_always_starts_ascending() {
    let current = SortState::new("amount", SortDirection::Descending);
    let next = next_sort(Some(&current), "name");
    assert_eq!(next.column_id, "name");
    assert_eq!(next.direction, SortDirection::Ascending);
}

#[test]
fn test_nulls_sort_last_regardless_of_direction() {
    let columns = columns();
    let rows = vec![
        row("a", CellValue::Int(5)),
        row("b", CellValue::Null),
        row("c", CellValue::Int(1)),
        row("d", CellValue::Null),
        row("e", CellValue::Int(9)),
    ];

    let asc = sort_rows(&rows, &columns, &SortState::new("amount", SortDirection::Ascending));
    assert_eq!(asc, vec![2, 0, 4, 1, 3]);

    let desc = sort_rows(&rows, &columns, &SortState::new("amount", SortDirection::Descending));
    assert_eq!(desc, vec![4, 0, 2, 1, 3]);
}

#[test]
fn test_numeric_column_compares_numerically() {
    let columns = columns();
    // String ordering would put "10" before "9".
    let rows = vec![row("a", CellValue::Int(10)), row("b", CellValue::Int(9))];
    let asc = sort_rows(&rows, &columns, &SortState::new("amount", SortDirection::Ascending));
    assert_eq!(asc, vec![1, 0]);
}

#[test]
fn test_int_and_float_cross_compare() {
    let columns = columns();
    let rows = vec![
        row("a", CellValue::Float(2.5)),
        row("b", CellValue::Int(2)),
        row("c", CellValue::Int(3)),
    ];
    let asc = sort_rows(&rows, &columns, &SortState::new("amount", SortDirection::Ascending));
    assert_eq!(asc, vec![1, 0, 2]);
}

#[test]
fn test_text_column_sorts_by_string_order() {
    let columns = columns();
    let rows = vec![
        row("pear", CellValue::Int(1)),
        row("apple", CellValue::Int(2)),
        row("fig", CellValue::Int(3)),
    ];
    let asc = sort_rows(&rows, &columns, &SortState::new("name", SortDirection::Ascending));
    assert_eq!(asc, vec![1, 2, 0]);
}

#[test]
fn test_sort_is_stable_on_equal_keys() {
    let columns = columns();
    let rows = vec![
        row("a", CellValue::Int(1)),
        row("b", CellValue::Int(1)),
        row("c", CellValue::Int(1)),
    ];
    let asc = sort_rows(&rows, &columns, &SortState::new("amount", SortDirection::Ascending));
    assert_eq!(asc, vec![0, 1, 2]);
}

#[test]
fn test_cleared_sort_restores_input_order() {
    let columns = columns();
    let rows = vec![row("b", CellValue::Int(2)), row("a", CellValue::Int(1))];
    let cleared = sort_rows(&rows, &columns, &SortState::new("amount", SortDirection::None));
    assert_eq!(cleared, vec![0, 1]);
}

#[test]
fn test_unknown_column_is_identity() {
    let columns = columns();
    let rows = vec![row("b", CellValue::Int(2)), row("a", CellValue::Int(1))];
    let sorted = sort_rows(&rows, &columns, &SortState::new("ghost", SortDirection::Ascending));
    assert_eq!(sorted, vec![0, 1]);
}

#[test]
fn test_short_rows_sort_like_nulls() {
    let columns = columns();
    let rows = vec![vec![CellValue::from("only-name")], row("b", CellValue::Int(1))];
    let asc = sort_rows(&rows, &columns, &SortState::new("amount", SortDirection::Ascending));
    assert_eq!(asc, vec![1, 0]);
}
