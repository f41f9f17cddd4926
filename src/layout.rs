//! Three-pane window layout: file navigation, node canvas, code preview.
//!
//! Side panels are resized with drag dividers. Each side panel is kept
//! between `min_panel_width` and half the window width.

use crate::settings::CanvasSettings;

/// New panel width after dragging its divider by `delta`.
///
/// `reversed` is for panels anchored to the right edge, which grow when the
/// divider moves left. If `max < min` the result is `min`.
pub fn drag_divider(current: f32, delta: f32, min: f32, max: f32, reversed: bool) -> f32 {
    let delta = if reversed { -delta } else { delta };
    (current + delta).min(max).max(min)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelLayout {
    pub navigation_width: f32,
    pub code_canvas_width: f32,
    pub min_panel_width: f32,
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self::from(&CanvasSettings::default())
    }
}

impl From<&CanvasSettings> for PanelLayout {
    fn from(settings: &CanvasSettings) -> Self {
        Self {
            navigation_width: settings.navigation_width,
            code_canvas_width: settings.code_canvas_width,
            min_panel_width: settings.min_panel_width,
        }
    }
}

impl PanelLayout {
    pub fn drag_navigation_divider(&mut self, delta: f32, window_width: f32) -> f32 {
        self.navigation_width = drag_divider(
            self.navigation_width,
            delta,
            self.min_panel_width,
            window_width / 2.0,
            false,
        );
        self.navigation_width
    }

    pub fn drag_code_divider(&mut self, delta: f32, window_width: f32) -> f32 {
        self.code_canvas_width = drag_divider(
            self.code_canvas_width,
            delta,
            self.min_panel_width,
            window_width / 2.0,
            true,
        );
        self.code_canvas_width
    }

    /// Width left for the node canvas between the two side panels.
    pub fn canvas_width(&self, window_width: f32) -> f32 {
        (window_width - self.navigation_width - self.code_canvas_width).max(0.0)
    }
}
