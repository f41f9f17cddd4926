//! Top-level state container shared by the canvas, the file tree and the
//! panel layout.

use crate::file_tree::FileTree;
use crate::layout::PanelLayout;
use crate::session::{CanvasSession, SessionConfig};
use crate::settings::CanvasSettings;
use crate::settings_watcher::{SettingsEvent, SettingsWatcher};
use std::path::PathBuf;
use tracing::{error, info, warn};

pub struct AppState {
    pub session: CanvasSession,
    pub file_tree: FileTree,
    pub layout: PanelLayout,
    settings: CanvasSettings,
    settings_path: Option<PathBuf>,
    settings_watcher: Option<SettingsWatcher>,
}

impl AppState {
    pub fn new(settings: CanvasSettings, file_tree: FileTree) -> Self {
        Self {
            session: CanvasSession::with_default_nodes(SessionConfig::from(&settings)),
            file_tree,
            layout: PanelLayout::from(&settings),
            settings,
            settings_path: None,
            settings_watcher: None,
        }
    }

    /// Load settings from `path` and watch it for changes.
    pub fn with_settings_file(path: PathBuf, file_tree: FileTree) -> Self {
        let settings = CanvasSettings::load_or_default(&path);
        let mut state = Self::new(settings, file_tree);
        state.settings_watcher = match SettingsWatcher::new(path.clone()) {
            Ok(watcher) => Some(watcher),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Settings hot-reload unavailable");
                None
            }
        };
        state.settings_path = Some(path);
        state
    }

    pub fn settings(&self) -> &CanvasSettings {
        &self.settings
    }

    /// Push new settings into the session and layout. Panel widths already
    /// adjusted by the user are kept but re-clamped to the new minimum.
    pub fn apply_settings(&mut self, settings: CanvasSettings) {
        self.session.set_config(SessionConfig::from(&settings));
        self.layout.min_panel_width = settings.min_panel_width;
        self.layout.navigation_width = self.layout.navigation_width.max(settings.min_panel_width);
        self.layout.code_canvas_width = self.layout.code_canvas_width.max(settings.min_panel_width);
        self.settings = settings;
    }

    /// Drain settings-file changes, reloading when the file changes.
    /// Returns true if settings were reloaded.
    pub fn check_settings_reload(&mut self) -> bool {
        let Some(event) = self.settings_watcher.as_mut().and_then(SettingsWatcher::poll) else {
            return false;
        };
        match event {
            SettingsEvent::Modified | SettingsEvent::Created => {
                let Some(path) = self.settings_path.clone() else {
                    return false;
                };
                info!("Settings file changed, reloading...");
                self.apply_settings(CanvasSettings::load_or_default(&path));
                true
            }
            SettingsEvent::Deleted => {
                warn!("Settings file deleted");
                false
            }
            SettingsEvent::Error(e) => {
                error!("Settings watch error: {}", e);
                false
            }
        }
    }

    /// Text for the code preview panel.
    pub fn preview_text(&self) -> Option<&str> {
        self.session.selected_content()
    }

    /// Process background work that must land on the event thread.
    pub fn tick(&mut self) {
        self.file_tree.poll();
        self.check_settings_reload();
    }
}
