//! User settings for the canvas and panel layout.
//!
//! Settings are a plain value loaded from JSON. Nothing in the canvas core
//! reads global state; `AppState::apply_settings` pushes changes in.

use crate::constants::{
    CONFIG_DIR_NAME, DEFAULT_CANVAS_SIZE, DEFAULT_CODE_CANVAS_WIDTH, DEFAULT_DRAG_THRESHOLD,
    DEFAULT_NAVIGATION_WIDTH, DEFAULT_RESIZE_HANDLE_SIZE, MIN_NODE_SIZE, MIN_PANEL_WIDTH,
    SETTINGS_FILE_NAME,
};
use crate::geometry::Size;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while loading or saving settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No platform config directory")]
    NoConfigDir,
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Floor applied to every node size
    pub min_node_size: Size,
    /// Logical canvas extent
    pub canvas_size: Size,
    /// Pointer travel before a press turns into a drag
    pub drag_threshold: f32,
    /// Side of the square resize handle at a node's bottom-right corner
    pub resize_handle_size: f32,
    pub navigation_width: f32,
    pub code_canvas_width: f32,
    pub min_panel_width: f32,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            min_node_size: MIN_NODE_SIZE,
            canvas_size: DEFAULT_CANVAS_SIZE,
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            resize_handle_size: DEFAULT_RESIZE_HANDLE_SIZE,
            navigation_width: DEFAULT_NAVIGATION_WIDTH,
            code_canvas_width: DEFAULT_CODE_CANVAS_WIDTH,
            min_panel_width: MIN_PANEL_WIDTH,
        }
    }
}

impl CanvasSettings {
    pub fn load(path: &Path) -> SettingsResult<Self> {
        let text = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&text)?;
        debug!(path = %path.display(), "Settings loaded");
        Ok(settings.sanitized())
    }

    /// Load, falling back to defaults when the file is missing or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No settings file, using defaults");
                Self::default()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to load settings, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Replace nonsensical values (negative or non-finite) with defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        let min = self.min_node_size;
        if min.is_empty() || !min.width.is_finite() || !min.height.is_finite() {
            self.min_node_size = defaults.min_node_size;
        }
        if self.canvas_size.is_empty() {
            self.canvas_size = defaults.canvas_size;
        }
        if !(self.drag_threshold >= 0.0 && self.drag_threshold.is_finite()) {
            self.drag_threshold = defaults.drag_threshold;
        }
        if !(self.resize_handle_size >= 0.0 && self.resize_handle_size.is_finite()) {
            self.resize_handle_size = defaults.resize_handle_size;
        }
        if !(self.min_panel_width >= 0.0) {
            self.min_panel_width = defaults.min_panel_width;
        }
        self
    }
}

/// `<config dir>/codingnode/settings.json`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(SETTINGS_FILE_NAME))
}

/// Settings from the default location, or defaults.
pub fn load_default_settings() -> CanvasSettings {
    match default_settings_path() {
        Some(path) => CanvasSettings::load_or_default(&path),
        None => {
            warn!("{}", SettingsError::NoConfigDir);
            CanvasSettings::default()
        }
    }
}
