use super::{AppState, FileMode, View};
use crate::section::Section;
use crate::tracker::TrackerOptions;
use crate::viewport::Band;
use std::path::PathBuf;

fn section(id: &str, line_start: usize, line_end: usize) -> Section {
    Section {
        id: id.to_string(),
        title: id.to_string(),
        level: 1,
        line_start,
        line_end,
        file_path: "doc.md".to_string(),
        parent_index: None,
        children_indices: Vec::new(),
    }
}

fn tutorial_app() -> AppState {
    let options = TrackerOptions {
        reference_line: 4.0,
        ..TrackerOptions::default()
    };
    let mut app = AppState::new(
        vec![PathBuf::from("doc.md")],
        options,
        Band::default(),
        10,
    );
    let lines = (0..40).map(|i| format!("line {i}")).collect();
    let sections = vec![
        section("intro", 0, 10),
        section("features", 10, 20),
        section("pricing", 20, 40),
    ];
    app.load_document(lines, sections);
    app
}

#[test]
fn test_single_file_starts_in_reader() {
    let app = tutorial_app();
    assert!(app.file_mode == FileMode::Single);
    assert!(app.current_view == View::Reader);
}

#[test]
fn test_first_committed_layout_highlights_top_section() {
    let mut app = tutorial_app();
    assert_eq!(app.active_id, None);

    app.layout_committed();
    assert_eq!(app.active_id.as_deref(), Some("intro"));
}

#[test]
fn test_scrolling_moves_the_highlight() {
    let mut app = tutorial_app();
    app.layout_committed();

    // Offset 12 puts features at the pane top and intro out of the band.
    app.scroll(12, 0);
    assert_eq!(app.viewport.offset(), 12);
    assert_eq!(app.active_id.as_deref(), Some("features"));
    assert_eq!(app.active_index(), Some(1));
}

#[test]
fn test_tick_drains_the_throttled_sample() {
    let mut app = tutorial_app();
    app.layout_committed();
    app.scroll(12, 0);

    assert_eq!(app.next_deadline_in(0), Some(50));
    app.tick(20);
    assert_eq!(app.next_deadline_in(20), Some(30));

    app.tick(60);
    assert_eq!(app.active_id.as_deref(), Some("features"));
    assert_eq!(app.next_deadline_in(60), None);
}

#[test]
fn test_section_jumps_follow_document_order() {
    let mut app = tutorial_app();
    app.layout_committed();

    app.jump_to_neighbour_section(true, 0);
    assert_eq!(app.viewport.offset(), 10);
    assert_eq!(app.active_id.as_deref(), Some("features"));

    app.jump_to_neighbour_section(true, 10);
    assert_eq!(app.viewport.offset(), 20);
    assert_eq!(app.active_id.as_deref(), Some("pricing"));

    app.jump_to_neighbour_section(false, 20);
    assert_eq!(app.viewport.offset(), 10);
    assert_eq!(app.active_id.as_deref(), Some("features"));
}

#[test]
fn test_edge_jumps() {
    let mut app = tutorial_app();
    app.layout_committed();

    app.jump_to_edge(true, 0);
    assert_eq!(app.viewport.offset(), 39);
    assert_eq!(app.active_id.as_deref(), Some("pricing"));

    app.jump_to_edge(false, 10);
    assert_eq!(app.viewport.offset(), 0);
    assert_eq!(app.active_id.as_deref(), Some("intro"));
}

#[test]
fn test_reloading_purges_stale_tracking() {
    let mut app = tutorial_app();
    app.layout_committed();
    assert_eq!(app.active_id.as_deref(), Some("intro"));

    let lines = (0..20).map(|i| format!("line {i}")).collect();
    app.load_document(lines, vec![section("changelog", 0, 20)]);
    assert_eq!(app.active_id, None);
    assert!(!app.tracker.is_tracked("intro"));

    app.layout_committed();
    assert_eq!(app.active_id.as_deref(), Some("changelog"));
}

#[test]
fn test_resize_reflows_visibility() {
    let mut app = tutorial_app();
    app.layout_committed();

    // Shrinking the pane to 4 rows leaves a band of rows 0..2; intro still
    // intersects and stays active.
    app.resize(4);
    assert_eq!(app.active_id.as_deref(), Some("intro"));
    assert_eq!(app.viewport.height(), 4);
}
