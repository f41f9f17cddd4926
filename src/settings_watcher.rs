//! Settings hot reload.
//!
//! Watches the settings file's directory (editors often replace the file
//! rather than write it in place) and reports changes through a channel
//! that the event thread drains with [`SettingsWatcher::poll`].

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, TryRecvError, channel};
use tracing::warn;

pub use crate::settings::default_settings_path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEvent {
    Modified,
    Created,
    Deleted,
    Error(String),
}

pub struct SettingsWatcher {
    path: PathBuf,
    rx: Receiver<notify::Result<Event>>,
    _watcher: RecommendedWatcher,
}

impl SettingsWatcher {
    pub fn new(path: PathBuf) -> notify::Result<Self> {
        let (tx, rx) = channel();
        let mut watcher = notify::recommended_watcher(tx)?;

        let watch_root = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        watcher.watch(watch_root, RecursiveMode::NonRecursive)?;

        Ok(Self {
            path,
            rx,
            _watcher: watcher,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Next relevant change, if any. Never blocks.
    pub fn poll(&mut self) -> Option<SettingsEvent> {
        loop {
            match self.rx.try_recv() {
                Ok(Ok(event)) => {
                    if !event.paths.iter().any(|p| p.ends_with(self.file_name())) {
                        continue;
                    }
                    match event.kind {
                        EventKind::Modify(_) => return Some(SettingsEvent::Modified),
                        EventKind::Create(_) => return Some(SettingsEvent::Created),
                        EventKind::Remove(_) => return Some(SettingsEvent::Deleted),
                        _ => continue,
                    }
                }
                Ok(Err(e)) => return Some(SettingsEvent::Error(e.to_string())),
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => {
                    warn!(path = %self.path.display(), "Settings watcher disconnected");
                    return None;
                }
            }
        }
    }

    fn file_name(&self) -> &Path {
        self.path
            .file_name()
            .map(Path::new)
            .unwrap_or(self.path.as_path())
    }
}
