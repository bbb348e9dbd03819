//! Error types for Catview.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Catview operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur in Catview.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The first non-blank line is not the required header.
    #[error("Invalid header.\nExpected: {expected}\nFound:    {found}")]
    HeaderMismatch {
        /// The header every catalog must start with.
        expected: String,
        /// The line that was found instead.
        found: String,
    },

    /// A data row does not split into the required number of fields.
    #[error("Invalid number of fields on line {line} (expected {expected}, found {found})")]
    RowFieldCountMismatch {
        /// 1-based position among the non-blank lines (the header is line 1).
        line: usize,
        /// Required field count.
        expected: usize,
        /// Number of fields on the offending line.
        found: usize,
    },

    /// Failed to read a catalog file.
    #[error("Failed to read file: {path}")]
    Read {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    /// Create a HeaderMismatch error.
    pub fn header_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::HeaderMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create a Read error.
    pub fn read(path: PathBuf, source: std::io::Error) -> Self {
        Self::Read { path, source }
    }

    /// Short label for the error kind, used in the status bar.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::HeaderMismatch { .. } => "HeaderMismatch",
            Self::RowFieldCountMismatch { .. } => "RowFieldCountMismatch",
            Self::Read { .. } => "ReadFailure",
            Self::Clipboard(_) => "Clipboard",
            Self::Io(_) => "Io",
        }
    }

    /// Whether this error came out of the tabular parser.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::HeaderMismatch { .. } | Self::RowFieldCountMismatch { .. }
        )
    }
}
