//! File browser feature - file system navigation for opening catalog files.
//!
//! Directories and catalog files (`.csv`, `.txt`) are listed; everything else
//! is hidden unless `show_all` is set.

pub mod ui;

use crate::catalog::CatalogReader;
use std::fs;
use std::path::PathBuf;

/// File browser entry.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Full path to the file/directory.
    pub path: PathBuf,
    /// Display name (basename of path).
    pub name: String,
    /// Is this entry a directory (final target if symlink resolves)?
    pub is_dir: bool,
    /// Is this entry a symlink?
    pub is_symlink: bool,
}

/// File browser state.
#[derive(Debug)]
pub struct FileBrowserState {
    /// Current directory being browsed.
    pub current_dir: PathBuf,
    /// Entries in current directory.
    pub entries: Vec<FileEntry>,
    /// Cursor position.
    pub cursor: usize,
    /// Scroll offset.
    pub scroll: usize,
    /// Show hidden dot-prefixed entries.
    pub show_hidden: bool,
    /// Show files that are not catalogs.
    pub show_all: bool,
}

impl FileBrowserState {
    /// Create a new file browser state at the working directory.
    pub fn new() -> Self {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            current_dir,
            entries: Vec::new(),
            cursor: 0,
            scroll: 0,
            show_hidden: false,
            show_all: false,
        }
    }

    /// Load directory contents.
    pub fn load_directory(&mut self) {
        self.entries.clear();

        if let Some(parent) = self.current_dir.parent() {
            self.entries.push(FileEntry {
                path: parent.to_path_buf(),
                name: "..".to_string(),
                is_dir: true,
                is_symlink: parent.is_symlink(),
            });
        }

        let dir_entries = match fs::read_dir(&self.current_dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Cannot list {}: {}", self.current_dir.display(), e);
                return;
            },
        };

        for entry in dir_entries.flatten() {
            let path = entry.path();
            let name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();

            if !self.show_hidden && name.starts_with('.') {
                continue;
            }

            let is_symlink = path.is_symlink();
            let is_dir = if is_symlink {
                path.metadata().map(|m| m.is_dir()).unwrap_or(false)
            } else {
                path.is_dir()
            };

            if !is_dir && !self.show_all && !CatalogReader::is_catalog_file(&path) {
                continue;
            }

            self.entries.push(FileEntry {
                path,
                name,
                is_dir,
                is_symlink,
            });
        }

        // Directories first, then files, both alphabetically
        self.entries.sort_by(|a, b| {
            if a.name == ".." {
                std::cmp::Ordering::Less
            } else if b.name == ".." {
                std::cmp::Ordering::Greater
            } else {
                match (a.is_dir, b.is_dir) {
                    (true, false) => std::cmp::Ordering::Less,
                    (false, true) => std::cmp::Ordering::Greater,
                    _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
                }
            }
        });

        self.cursor = 0;
        self.scroll = 0;
    }

    /// Move cursor up.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor down.
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
        }
    }

    /// Get the currently selected entry.
    pub fn current_entry(&self) -> Option<&FileEntry> {
        self.entries.get(self.cursor)
    }

    /// Navigate into the selected directory or return the selected file.
    pub fn select_current(&mut self) -> Option<PathBuf> {
        let entry = self.current_entry()?.clone();

        if entry.is_dir {
            self.current_dir = entry.path;
            self.load_directory();
            None
        } else {
            Some(entry.path)
        }
    }

    /// Navigate to parent directory.
    pub fn go_to_parent(&mut self) {
        if let Some(parent) = self.current_dir.parent() {
            self.current_dir = parent.to_path_buf();
            self.load_directory();
        }
    }

    /// Toggle show hidden files.
    pub fn toggle_hidden(&mut self) {
        self.show_hidden = !self.show_hidden;
        self.load_directory();
    }

    /// Toggle listing of non-catalog files.
    pub fn toggle_show_all(&mut self) {
        self.show_all = !self.show_all;
        self.load_directory();
    }

    /// Adjust scroll to keep cursor visible.
    pub fn adjust_scroll(&mut self, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }

        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        }

        if self.cursor >= self.scroll + viewport_height {
            self.scroll = self.cursor.saturating_sub(viewport_height - 1);
        }
    }
}

impl Default for FileBrowserState {
    fn default() -> Self {
        Self::new()
    }
}
