//! Viewer configuration.
//!
//! Built from command-line arguments in `main`; every field has a default.

use crate::app::Theme;
use crate::catalog::Criteria;
use std::path::PathBuf;

/// Column widths for the results table.
#[derive(Debug, Clone)]
pub struct ResultsLayoutConfig {
    /// Width of the category column.
    pub category_width: u16,
    /// Width of the author column.
    pub author_width: u16,
    /// Width of the year column.
    pub year_width: u16,
    /// Width of the genre column.
    pub genre_width: u16,
    /// Width of the rating column.
    pub rating_width: u16,
    /// Minimum width of the title column; it takes the remaining space.
    pub min_title_width: u16,
}

impl Default for ResultsLayoutConfig {
    fn default() -> Self {
        Self {
            category_width: 10,
            author_width: 20,
            year_width: 6,
            genre_width: 16,
            rating_width: 7,
            min_title_width: 16,
        }
    }
}

/// Size of the details overlay as a percentage of the screen.
#[derive(Debug, Clone)]
pub struct DetailsLayoutConfig {
    /// Overlay width in percent.
    pub percent_x: u16,
    /// Overlay height in percent.
    pub percent_y: u16,
}

impl Default for DetailsLayoutConfig {
    fn default() -> Self {
        Self {
            percent_x: 70,
            percent_y: 60,
        }
    }
}

/// Combined viewer configuration.
#[derive(Debug, Clone, Default)]
pub struct ViewerConfig {
    /// Catalog file or directory to open at startup.
    pub start_path: Option<PathBuf>,
    /// Load the built-in demo catalog at startup.
    pub load_demo: bool,
    /// Criteria applied by the first load that yields records, at startup or
    /// later from the file browser.
    pub initial_criteria: Criteria,
    /// Starting theme.
    pub theme: Theme,
    /// Results table layout.
    pub results: ResultsLayoutConfig,
    /// Details overlay layout.
    pub details: DetailsLayoutConfig,
}
