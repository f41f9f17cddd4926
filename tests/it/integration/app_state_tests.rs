//! App State Integration Tests

use codingnode::app_state::AppState;
use codingnode::file_tree::FileTree;
use codingnode::geometry::{Point, Size};
use codingnode::settings::CanvasSettings;
use std::fs;
use tempfile::tempdir;

fn app() -> AppState {
    AppState::new(CanvasSettings::default(), FileTree::default())
}

#[test]
fn test_starts_with_sample_nodes() {
    let app = app();
    let contents: Vec<&str> = app.session.nodes().iter().map(|c| c.content()).collect();
    assert_eq!(
        contents,
        vec![
            "def add(a, b):\n    return a + b",
            "def subtract(a, b):\n    return a - b",
        ]
    );
    assert_eq!(app.preview_text(), None);
}

#[test]
fn test_dragging_a_node_shows_it_in_preview() {
    let mut app = app();
    app.session.set_visible_size(Size::new(800.0, 600.0));

    let id = app
        .session
        .pointer_down(Point::new(200.0, 200.0))
        .expect("add node is under the pointer");
    app.session.on_gesture_move(id, Point::new(50.0, 0.0));
    app.session.on_gesture_end(id);

    assert_eq!(app.preview_text(), Some("def add(a, b):\n    return a + b"));
}

#[test]
fn test_apply_settings_refloors_nodes() {
    let mut app = app();
    app.apply_settings(CanvasSettings {
        min_node_size: Size::new(200.0, 100.0),
        min_panel_width: 250.0,
        ..Default::default()
    });

    for controller in app.session.nodes() {
        assert_eq!(controller.size(), Size::new(200.0, 100.0));
    }
    assert_eq!(app.layout.navigation_width, 250.0);
    assert_eq!(app.layout.code_canvas_width, 350.0);
    assert_eq!(app.session.config().min_node_size, Size::new(200.0, 100.0));
}

#[test]
fn test_settings_file_configures_layout() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "navigation_width": 260.0, "drag_threshold": 5.0 }"#).unwrap();

    let mut app = AppState::with_settings_file(path, FileTree::default());
    assert_eq!(app.layout.navigation_width, 260.0);
    assert_eq!(app.session.config().drag_threshold, 5.0);

    assert_eq!(app.layout.drag_navigation_divider(-500.0, 1000.0), 100.0);
    assert_eq!(app.layout.drag_code_divider(-500.0, 1000.0), 500.0);
    assert_eq!(app.layout.canvas_width(1000.0), 400.0);
    app.tick();
}
