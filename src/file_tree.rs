//! Lazily expanded file navigation tree.
//!
//! Directory listings run on a background thread and come back over a
//! channel; [`FileTree::poll`] applies them on the event thread, so the tree
//! itself is only ever mutated there.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum FileTreeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
}

pub type FileTreeResult<T> = Result<T, FileTreeError>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
}

impl FileEntry {
    fn from_path(path: PathBuf, is_dir: bool) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name, is_dir }
    }
}

/// Immediate, non-hidden children of `dir`: directories first, then by name.
pub fn list_children(dir: &Path) -> FileTreeResult<Vec<FileEntry>> {
    if !dir.is_dir() {
        return Err(FileTreeError::NotADirectory(dir.to_path_buf()));
    }

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        entries.push(FileEntry::from_path(entry.path(), is_dir));
    }

    entries.sort_by(|a, b| {
        b.is_dir
            .cmp(&a.is_dir)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
    Ok(entries)
}

type Listing = (PathBuf, FileTreeResult<Vec<FileEntry>>);

pub struct FileTree {
    roots: Vec<PathBuf>,
    expanded: HashSet<PathBuf>,
    children: HashMap<PathBuf, Vec<FileEntry>>,
    /// Directories with a listing in flight
    loading: HashSet<PathBuf>,
    tx: Sender<Listing>,
    rx: Receiver<Listing>,
}

impl Default for FileTree {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl FileTree {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        let (tx, rx) = channel();
        Self {
            roots,
            expanded: HashSet::new(),
            children: HashMap::new(),
            loading: HashSet::new(),
            tx,
            rx,
        }
    }

    /// A tree rooted at the user's documents directory, if there is one.
    pub fn with_default_root() -> Self {
        let roots: Vec<PathBuf> = dirs::document_dir().into_iter().collect();
        if let Some(root) = roots.first() {
            info!(root = %root.display(), "Root directory loaded");
        }
        Self::new(roots)
    }

    pub fn root_directories(&self) -> &[PathBuf] {
        &self.roots
    }

    pub fn add_root(&mut self, path: PathBuf) {
        if !self.roots.contains(&path) {
            self.roots.push(path);
        }
    }

    pub fn is_expanded(&self, path: &Path) -> bool {
        self.expanded.contains(path)
    }

    /// Loaded children of `path`; `None` while the listing is in flight.
    pub fn children(&self, path: &Path) -> Option<&[FileEntry]> {
        self.children.get(path).map(Vec::as_slice)
    }

    pub fn is_loading(&self, path: &Path) -> bool {
        self.loading.contains(path)
    }

    /// Collapse an expanded directory (dropping its listing), or expand it
    /// and start listing it. A listing already in flight is reused.
    pub fn toggle(&mut self, path: &Path) {
        if self.expanded.remove(path) {
            self.children.remove(path);
            return;
        }
        self.expanded.insert(path.to_path_buf());
        if self.loading.insert(path.to_path_buf()) {
            self.request_children(path.to_path_buf());
        }
    }

    fn request_children(&self, path: PathBuf) {
        let tx = self.tx.clone();
        thread::spawn(move || {
            let listing = list_children(&path);
            // receiver gone means the tree was dropped
            let _ = tx.send((path, listing));
        });
    }

    /// Apply finished listings. Returns how many arrived. Listings for
    /// directories collapsed in the meantime are dropped.
    pub fn poll(&mut self) -> usize {
        let mut applied = 0;
        while let Ok((path, listing)) = self.rx.try_recv() {
            applied += 1;
            self.loading.remove(&path);
            if !self.expanded.contains(&path) {
                continue;
            }
            match listing {
                Ok(entries) => {
                    debug!(dir = %path.display(), count = entries.len(), "Directory listed");
                    self.children.insert(path, entries);
                }
                Err(e) => {
                    warn!(dir = %path.display(), error = %e, "Failed to list directory");
                    self.children.insert(path, Vec::new());
                }
            }
        }
        applied
    }

    /// Roots and expanded children flattened into `(depth, entry)` rows.
    pub fn visible_entries(&self) -> Vec<(usize, FileEntry)> {
        let mut rows = Vec::new();
        for root in &self.roots {
            let entry = FileEntry::from_path(root.clone(), true);
            self.push_rows(entry, 0, &mut rows);
        }
        rows
    }

    fn push_rows(&self, entry: FileEntry, depth: usize, rows: &mut Vec<(usize, FileEntry)>) {
        let descend = entry.is_dir && self.expanded.contains(&entry.path);
        let path = entry.path.clone();
        rows.push((depth, entry));
        if !descend {
            return;
        }
        if let Some(children) = self.children.get(&path) {
            for child in children {
                self.push_rows(child.clone(), depth + 1, rows);
            }
        }
    }
}
