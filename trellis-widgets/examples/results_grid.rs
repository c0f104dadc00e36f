//! Results grid example - a scripted host session.
//!
//! Drives the grid controller the way a host application would: the host
//! owns the state behind a mutex, every handler folds the reported value
//! back into it, and each interaction re-derives the view from the latest
//! snapshot. Run with `cargo run --example results_grid`.

use std::fs::File;
use std::sync::{Arc, Mutex};

use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use trellis_widgets::prelude::*;

// =============================================================================
// Sample data
// =============================================================================

fn create_columns() -> Vec<Column> {
    vec![
        Column::new("id", "ID").kind(ColumnKind::Number).fixed(60),
        Column::new("table", "Table").fixed(160).sortable(),
        Column::new("rows", "Rows").kind(ColumnKind::Number).fixed(110).sortable(),
        Column::new("active", "Active").kind(ColumnKind::Boolean).fixed(70),
        Column::new("stats", "Stats").kind(ColumnKind::Json).fixed(200),
    ]
}

fn create_rows() -> Vec<Row> {
    let names = [
        "orders", "users", "events", "sessions", "invoices", "payments", "shipments", "reviews",
    ];
    (0..250i64)
        .map(|i| {
            let name = format!("{}_{:03}", names[i as usize % names.len()], i);
            let rows = (i * 7919) % 100_000;
            vec![
                CellValue::Int(i),
                CellValue::from(name),
                CellValue::Int(rows),
                CellValue::Bool(i % 3 != 0),
                CellValue::Json(serde_json::json!({"parts": i % 16, "compacted": i % 2 == 0})),
            ]
        })
        .collect()
}

// =============================================================================
// Host
// =============================================================================

fn print_view(view: &GridView) {
    let header: Vec<String> = view
        .columns
        .iter()
        .map(|c| format!("{}{}", c.header, c.sort.indicator()))
        .collect();
    println!("  {}", header.join(" | "));
    for row in view.rows.iter().take(5) {
        let marker = if row.selected { "*" } else { " " };
        let cells: Vec<&str> = row.cells.iter().map(|c| c.text.as_str()).collect();
        println!(" {}{}", marker, cells.join(" | "));
    }
    if view.rows.len() > 5 {
        println!("  ... {} more on this page", view.rows.len() - 5);
    }
    println!("  [{}]", view.summary);
}

fn main() {
    let _ = WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create("results_grid.log").expect("create log file"),
    );

    let layout = ColumnLayout::new(create_columns()).expect("valid columns");
    let pagination = PaginationState::new(100).expect("valid page size");
    let host = Arc::new(Mutex::new(GridState::new(layout, pagination)));
    let rows = create_rows();

    // Wire every handler to fold the reported value back into host state.
    let handlers = {
        let on_sort = Arc::clone(&host);
        let on_page = Arc::clone(&host);
        let on_select = Arc::clone(&host);
        let on_resize = Arc::clone(&host);
        let on_visibility = Arc::clone(&host);
        let on_reorder = Arc::clone(&host);
        GridHandlers::new()
            .on_sort_change(move |sort| {
                on_sort.lock().unwrap().sort = Some(sort.clone());
            })
            .on_page_change(move |page| {
                let mut state = on_page.lock().unwrap();
                state.pagination = state.pagination.go_to(*page);
            })
            .on_selection_change(move |indices| {
                let mut state = on_select.lock().unwrap();
                state.selection.clear();
                for &i in indices {
                    state.selection.toggle(i, usize::MAX);
                }
            })
            .on_column_resize(move |(id, width)| {
                on_resize.lock().unwrap().layout.set_width(id, *width);
            })
            .on_column_visibility_change(move |(id, visible)| {
                on_visibility.lock().unwrap().layout.set_visible(id, *visible);
            })
            .on_column_reorder(move |(from, to)| {
                on_reorder.lock().unwrap().layout.move_column(*from, *to);
            })
    };
    let mut grid = Grid::new(handlers);

    let snapshot = || host.lock().unwrap().clone();

    println!("== initial view");
    print_view(&grid.view(&snapshot(), &rows));

    println!("\n== click \"Rows\" header twice (ascending, then descending)");
    grid.header_click(&snapshot(), "rows");
    grid.header_click(&snapshot(), "rows");
    print_view(&grid.view(&snapshot(), &rows));

    println!("\n== go to page 1");
    grid.page_request(&snapshot(), 1);
    print_view(&grid.view(&snapshot(), &rows));

    println!("\n== click row 2, then shift-click row 5");
    grid.row_click(&snapshot(), &rows, 2, Modifiers::NONE);
    grid.row_click(&snapshot(), &rows, 5, Modifiers::shift());
    print_view(&grid.view(&snapshot(), &rows));

    println!("\n== drag the \"Table\" column 80 units wider");
    grid.resize_begin(&snapshot(), "table", 0).expect("column exists");
    grid.resize_update(40);
    grid.resize_update(80);
    if let Some((id, width)) = grid.resize_end() {
        println!("  committed {id} -> {width}");
    }

    println!("\n== hide \"Stats\" and filter for \"orders\"");
    grid.toggle_column(&snapshot(), "stats");
    host.lock().unwrap().filter = Some(FilterQuery::substring("orders"));
    print_view(&grid.view(&snapshot(), &rows));
}
