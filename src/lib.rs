//! Catview - A fast, terminal-based catalog viewer.
//!
//! Catview loads a seven-column comma-delimited catalog of media items and
//! presents an interactive filter, sort and search view over it.
//!
//! # Features
//!
//! - Strict, all-or-nothing catalog parsing with precise error messages
//! - Case-insensitive category and genre filters
//! - Live free-text search over title, author, genre and category
//! - Deterministic sorting by title, year or rating
//! - Vim-style keyboard shortcuts
//! - Gruvbox color themes
//! - Clipboard integration
//!
//! # Example
//!
//! ```
//! use catview::catalog::{apply_query, parse, Criteria, SortKey};
//!
//! let corpus = parse(
//!     "title,type,author,year,genre,rating,description\n\
//!      A,game,X,2020,RPG,4.5,d1\n\
//!      B,game,Y,2019,RPG,4.8,d2",
//! )?;
//!
//! let view = apply_query(&corpus, &Criteria::new().with_sort(SortKey::YearAsc));
//! assert_eq!(view[0].title(), "B");
//! # Ok::<(), catview::CatalogError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod file_browser;
pub mod search;
pub mod ui;
pub mod util;

pub use error::{CatalogError, Result};
