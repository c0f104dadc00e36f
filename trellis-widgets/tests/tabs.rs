use trellis_widgets::tabs::{Tab, TabStrip};

fn strip() -> TabStrip {
    let mut strip = TabStrip::new();
    strip.push(Tab::new("q1", "query 1"));
    strip.push(Tab::new("q2", "query 2"));
    strip.push(Tab::new("q3", "query 3"));
    strip
}

fn order(strip: &TabStrip) -> Vec<&str> {
    strip.tabs().iter().map(|t| t.id.as_str()).collect()
}

#[test]
fn test_first_tab_becomes_active() {
    let strip = strip();
    assert_eq!(strip.active(), Some(0));
    assert_eq!(strip.active_tab().unwrap().id, "q1");
}

#[test]
fn test_activate() {
    let mut strip = strip();
    strip.activate(2);
    assert_eq!(strip.active_tab().unwrap().id, "q3");
    // Out of range is inert.
    strip.activate(9);
    assert_eq!(strip.active_tab().unwrap().id, "q3");
}

#[test]
fn test_move_tab_keeps_active_tab_active() {
    let mut strip = strip();
    strip.activate(1);
    strip.move_tab(1, 0);
    assert_eq!(order(&strip), vec!["q2", "q1", "q3"]);
    assert_eq!(strip.active_tab().unwrap().id, "q2");

    // Moving a different tab also leaves the active one active.
    strip.move_tab(2, 0);
    assert_eq!(order(&strip), vec!["q3", "q2", "q1"]);
    assert_eq!(strip.active_tab().unwrap().id, "q2");
}

#[test]
fn test_move_preserves_membership() {
    let mut strip = strip();
    strip.move_tab(0, 2);
    let mut ids = order(&strip);
    ids.sort();
    assert_eq!(ids, vec!["q1", "q2", "q3"]);
    assert_eq!(strip.len(), 3);
}

#[test]
fn test_move_out_of_range_is_inert() {
    let mut strip = strip();
    strip.move_tab(0, 3);
    strip.move_tab(5, 1);
    strip.move_tab(1, 1);
    assert_eq!(order(&strip), vec!["q1", "q2", "q3"]);
}

#[test]
fn test_close_activates_right_neighbor() {
    let mut strip = strip();
    strip.activate(1);
    strip.close(1);
    assert_eq!(order(&strip), vec!["q1", "q3"]);
    // The right neighbor (previously q3) is now at the closed index.
    assert_eq!(strip.active_tab().unwrap().id, "q3");
}

#[test]
fn test_close_last_tab_activates_new_last() {
    let mut strip = strip();
    strip.activate(2);
    strip.close(2);
    assert_eq!(strip.active_tab().unwrap().id, "q2");
}

#[test]
fn test_close_before_active_shifts_index() {
    let mut strip = strip();
    strip.activate(2);
    strip.close(0);
    assert_eq!(strip.active_tab().unwrap().id, "q3");
}

#[test]
fn test_close_only_tab_leaves_empty_strip() {
    let mut strip = TabStrip::new();
    strip.push(Tab::new("solo", "solo"));
    strip.close(0);
    assert!(strip.is_empty());
    assert_eq!(strip.active(), None);
    assert!(strip.active_tab().is_none());
}

#[test]
fn test_close_out_of_range_is_inert() {
    let mut strip = strip();
    strip.close(7);
    assert_eq!(strip.len(), 3);
}
