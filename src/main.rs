use anyhow::{Context, Result};
use codingnode::app_state::AppState;
use codingnode::file_tree::FileTree;
use codingnode::geometry::{Point, Size};
use codingnode::logging::init_logging;
use codingnode::settings::{CanvasSettings, load_default_settings};
use std::path::PathBuf;

/// Headless run: seed the canvas, replay one drag and print the resulting
/// node snapshots as JSON. An optional argument names a settings file.
fn main() -> Result<()> {
    init_logging();

    let settings = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => CanvasSettings::load(&path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => load_default_settings(),
    };

    let mut app = AppState::new(settings, FileTree::with_default_root());
    app.session.set_visible_size(Size::new(800.0, 600.0));

    if let Some(id) = app.session.pointer_down(Point::new(200.0, 200.0)) {
        for step in 1..=10 {
            let t = step as f32 * 40.0;
            app.session.on_gesture_move(id, Point::new(t, t / 2.0));
        }
        app.session.on_gesture_end(id);
    }
    app.tick();

    let snapshots = app.session.snapshots();
    println!(
        "{}",
        serde_json::to_string_pretty(&snapshots).context("serializing snapshots")?
    );
    if let Some(text) = app.preview_text() {
        println!("\n{text}");
    }
    Ok(())
}
