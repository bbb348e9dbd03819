//! Application state and logic.
//!
//! `App` is the adapter between key events and the catalog core: it calls
//! into [`CatalogController`] and keeps only presentation state of its own.

use std::path::PathBuf;

use crate::catalog::{CatalogController, Criteria, LoadOutcome, Record};
use crate::config::ViewerConfig;
use crate::error::{CatalogError, Result};
use crate::file_browser::FileBrowserState;
use crate::search::QueryInput;
use crate::util;

/// Application theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    #[default]
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Severity of the status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Neutral hint.
    Info,
    /// An action succeeded.
    Success,
    /// Nothing went wrong, but the result needs attention.
    Warning,
    /// An action failed.
    Danger,
}

/// Status bar message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    /// Severity.
    pub kind: StatusKind,
    /// Text.
    pub message: String,
}

impl Status {
    fn new(kind: StatusKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Cursor and scroll position in the results list.
#[derive(Debug, Default)]
pub struct ResultsState {
    /// Selected row in the view.
    pub cursor: usize,
    /// First visible row.
    pub scroll: usize,
}

impl ResultsState {
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

    fn clamp(&mut self, len: usize) {
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Current catalog file path.
    pub file_path: Option<PathBuf>,
    /// Corpus, criteria and view.
    pub catalog: CatalogController,
    /// Query editor.
    pub query_input: QueryInput,
    /// Results list position.
    pub results: ResultsState,
    /// File browser state.
    pub file_browser: FileBrowserState,
    /// File browser mode.
    pub file_browser_mode: bool,
    /// Details overlay visible.
    pub details_visible: bool,
    /// Status message.
    pub status: Status,
    /// Current theme.
    pub theme: Theme,
    /// Startup configuration.
    pub config: ViewerConfig,
    /// Startup criteria not yet applied to a loaded catalog.
    pending_criteria: Option<Criteria>,
}

impl App {
    /// Create a new application instance.
    pub fn new(config: ViewerConfig) -> Self {
        let mut app = Self {
            file_path: None,
            catalog: CatalogController::new(),
            query_input: QueryInput::new(),
            results: ResultsState::default(),
            file_browser: FileBrowserState::new(),
            file_browser_mode: false,
            details_visible: false,
            status: Status::new(
                StatusKind::Info,
                "Open a catalog file to get started (o: open, d: demo data)",
            ),
            theme: config.theme,
            pending_criteria: Some(config.initial_criteria.clone()),
            config,
        };

        if app.config.load_demo {
            app.load_demo();
        } else {
            match app.config.start_path.clone() {
                Some(path) if path.is_dir() => {
                    app.file_browser.current_dir = path;
                    app.file_browser.load_directory();
                    app.file_browser_mode = true;
                },
                Some(path) => app.load_file(path),
                None => {
                    app.file_browser.load_directory();
                    app.file_browser_mode = true;
                },
            }
        }

        app
    }

    /// Load a catalog file.
    pub fn load_file(&mut self, path: PathBuf) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "file".to_string());

        let result = self.catalog.load_file(&path);
        if result.is_ok() {
            self.file_path = Some(path.clone());
            if let Some(parent) = path.parent() {
                self.file_browser.current_dir = parent.to_path_buf();
            }
        }
        self.finish_load(result, &name);
    }

    /// Load the built-in demo catalog.
    pub fn load_demo(&mut self) {
        let result = self.catalog.load_demo();
        if result.is_ok() {
            self.file_path = None;
        }
        self.finish_load(result, "demo data");
    }

    fn finish_load(&mut self, result: Result<LoadOutcome>, source: &str) {
        match result {
            Ok(LoadOutcome::Loaded(count)) => {
                if let Some(criteria) = self.pending_criteria.take() {
                    self.catalog.set_criteria(criteria);
                }
                self.after_corpus_change();
                self.status = Status::new(
                    StatusKind::Success,
                    format!("Loaded {} items from {}.", count, source),
                );
            },
            Ok(LoadOutcome::Empty) => {
                self.after_corpus_change();
                self.status = Status::new(
                    StatusKind::Warning,
                    format!("No valid items found in {}.", source),
                );
            },
            Err(e) => {
                tracing::error!("Error loading {}: {}", source, e);
                self.status = Status::new(StatusKind::Danger, load_error_message(&e));
            },
        }
    }

    fn after_corpus_change(&mut self) {
        self.query_input.reset();
        self.results = ResultsState::default();
        self.details_visible = false;
    }

    fn after_criteria_change(&mut self) {
        self.results.clamp(self.catalog.view().len());
        if self.catalog.view().is_empty() {
            self.details_visible = false;
        }
    }

    /// Whether filter and sort controls are usable.
    pub fn controls_enabled(&self) -> bool {
        !self.catalog.is_empty()
    }

    fn require_controls(&mut self) -> bool {
        if !self.controls_enabled() {
            self.status = Status::new(StatusKind::Info, "Load a catalog first");
            return false;
        }
        true
    }

    /// Get the selected record.
    pub fn selected_record(&self) -> Option<&Record> {
        self.catalog.view().get(self.results.cursor)
    }

    /// Move the selection up.
    pub fn cursor_up(&mut self, amount: usize) {
        self.results.cursor = self.results.cursor.saturating_sub(amount);
    }

    /// Move the selection down.
    pub fn cursor_down(&mut self, amount: usize) {
        let len = self.catalog.view().len();
        if len > 0 {
            self.results.cursor = (self.results.cursor + amount).min(len - 1);
        }
    }

    /// Select the first row.
    pub fn goto_first(&mut self) {
        self.results.cursor = 0;
    }

    /// Select the last row.
    pub fn goto_last(&mut self) {
        self.results.cursor = self.catalog.view().len().saturating_sub(1);
    }

    /// Show details of the selected record.
    pub fn open_details(&mut self) {
        if self.selected_record().is_some() {
            self.details_visible = true;
        } else {
            self.status = Status::new(StatusKind::Info, "No item selected");
        }
    }

    /// Start editing the query.
    pub fn start_search(&mut self) {
        let current = self.catalog.criteria().query.clone();
        self.query_input.start(&current);
    }

    /// Type a character into the query.
    pub fn search_input(&mut self, c: char) {
        self.query_input.input(c);
        self.sync_query();
    }

    /// Delete the last query character.
    pub fn search_backspace(&mut self) {
        self.query_input.backspace();
        self.sync_query();
    }

    /// Clear the whole query.
    pub fn search_clear(&mut self) {
        self.query_input.clear();
        self.sync_query();
    }

    /// Keep the edited query.
    pub fn search_submit(&mut self) {
        self.query_input.submit();
        self.status = Status::new(
            StatusKind::Info,
            format!("{} results", self.catalog.view().len()),
        );
    }

    /// Abandon the edit and restore the previous query.
    pub fn search_cancel(&mut self) {
        let restored = self.query_input.cancel();
        self.catalog.set_query(restored);
        self.after_criteria_change();
    }

    fn sync_query(&mut self) {
        self.catalog.set_query(self.query_input.buffer());
        self.results.cursor = 0;
        self.after_criteria_change();
    }

    /// Step the category filter.
    pub fn cycle_category(&mut self) {
        if !self.require_controls() {
            return;
        }
        self.catalog.cycle_category();
        self.after_criteria_change();
        self.status = Status::new(
            StatusKind::Info,
            format!(
                "Type: {}",
                self.catalog.criteria().active_category().unwrap_or("All")
            ),
        );
    }

    /// Step the genre filter.
    pub fn cycle_genre(&mut self) {
        if !self.require_controls() {
            return;
        }
        self.catalog.cycle_genre();
        self.after_criteria_change();
        self.status = Status::new(
            StatusKind::Info,
            format!(
                "Genre: {}",
                self.catalog.criteria().active_genre().unwrap_or("All")
            ),
        );
    }

    /// Step the sort key forward or backward.
    pub fn cycle_sort(&mut self, forward: bool) {
        if !self.require_controls() {
            return;
        }
        if forward {
            self.catalog.cycle_sort();
        } else {
            self.catalog.cycle_sort_back();
        }
        self.after_criteria_change();
        self.status = Status::new(
            StatusKind::Info,
            format!("Sort: {}", self.catalog.criteria().sort.label()),
        );
    }

    /// Clear filters and restore the default sort.
    pub fn reset_filters(&mut self) {
        if !self.require_controls() {
            return;
        }
        if self.catalog.reset() {
            self.query_input.reset();
            self.results = ResultsState::default();
            self.status = Status::new(StatusKind::Info, "Filters reset");
        }
    }

    /// Copy the selected record to the clipboard.
    pub fn copy_selected(&mut self) {
        let Some(record) = self.selected_record() else {
            self.status = Status::new(StatusKind::Info, "No item selected");
            return;
        };
        let title = record.title().to_string();
        self.status = match util::copy_record_info(record) {
            Ok(()) => Status::new(StatusKind::Success, format!("Copied {}!", title)),
            Err(e) => Status::new(StatusKind::Danger, format!("Copy failed: {}", e)),
        };
    }

    /// Copy the current view to the clipboard.
    pub fn copy_view(&mut self) {
        if !self.require_controls() {
            return;
        }
        let count = self.catalog.view().len();
        self.status = match util::copy_view(self.catalog.view()) {
            Ok(()) => Status::new(StatusKind::Success, format!("Copied {} items!", count)),
            Err(e) => Status::new(StatusKind::Danger, format!("Copy failed: {}", e)),
        };
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = Status::new(StatusKind::Info, format!("Theme: {}", self.theme.name()));
    }

    /// Close any open overlays.
    pub fn close_overlay(&mut self) {
        self.details_visible = false;
    }

    /// Show a help line in the status bar.
    pub fn show_help(&mut self) {
        self.status = Status::new(
            StatusKind::Info,
            "Help: q=quit, j/k=nav, Enter=details, /=search, t=type, e=genre, s/S=sort, r=reset, o=open, d=demo, y/c=copy, T=theme",
        );
    }

    /// Open the file browser next to the current file.
    pub fn open_file_browser(&mut self) {
        if let Some(parent) = self.file_path.as_ref().and_then(|p| p.parent()) {
            self.file_browser.current_dir = parent.to_path_buf();
        }
        self.file_browser.load_directory();
        self.file_browser_mode = true;
        self.status = Status::new(
            StatusKind::Info,
            format!("Browsing: {}", self.file_browser.current_dir.display()),
        );
    }

    /// Leave the file browser without loading anything.
    pub fn close_file_browser(&mut self) {
        self.file_browser_mode = false;
    }

    /// Navigate to selected file/directory in browser.
    pub fn browser_select(&mut self) {
        if let Some(path) = self.file_browser.select_current() {
            self.load_file(path);
            self.file_browser_mode = self.status.kind == StatusKind::Danger;
        }
    }

    /// Navigate to parent directory in file browser.
    pub fn browser_parent(&mut self) {
        self.file_browser.go_to_parent();
        self.status = Status::new(
            StatusKind::Info,
            format!("Browsing: {}", self.file_browser.current_dir.display()),
        );
    }

    /// Move cursor up in file browser.
    pub fn browser_up(&mut self) {
        self.file_browser.cursor_up();
    }

    /// Move cursor down in file browser.
    pub fn browser_down(&mut self) {
        self.file_browser.cursor_down();
    }

    /// Toggle show hidden files.
    pub fn toggle_hidden(&mut self) {
        self.file_browser.toggle_hidden();
        self.status = Status::new(
            StatusKind::Info,
            format!(
                "Show hidden: {}",
                if self.file_browser.show_hidden { "ON" } else { "OFF" }
            ),
        );
    }

    /// Toggle listing of non-catalog files.
    pub fn toggle_show_all(&mut self) {
        self.file_browser.toggle_show_all();
        self.status = Status::new(
            StatusKind::Info,
            format!(
                "Show all files: {}",
                if self.file_browser.show_all { "ON" } else { "OFF" }
            ),
        );
    }
}

fn load_error_message(error: &CatalogError) -> String {
    match error {
        CatalogError::Read { .. } => "Error reading file.".to_string(),
        e if e.is_parse_error() => {
            format!("Error parsing CSV ({}): {}", e.kind(), e.to_string().replace('\n', " "))
        },
        e => format!("Error loading catalog: {}", e),
    }
}
