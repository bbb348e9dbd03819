//! Catalog file reader.

use crate::error::{CatalogError, Result};
use std::path::Path;

/// Reads raw catalog text from disk.
#[derive(Debug)]
pub struct CatalogReader;

impl CatalogReader {
    /// Read a catalog file as text.
    ///
    /// A leading byte-order mark is dropped. Non-UTF-8 content is a read
    /// failure.
    pub fn read_file(path: &Path) -> Result<String> {
        let text =
            std::fs::read_to_string(path).map_err(|e| CatalogError::read(path.to_path_buf(), e))?;

        tracing::debug!("Read {} bytes from {}", text.len(), path.display());
        Ok(strip_bom(text))
    }

    /// Whether a path looks like a catalog file (by extension).
    pub fn is_catalog_file(path: &Path) -> bool {
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_ascii_lowercase())
            .unwrap_or_default();

        matches!(extension.as_str(), "csv" | "txt")
    }
}

fn strip_bom(text: String) -> String {
    match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_text_and_drops_bom() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "\u{feff}title,type").unwrap();
        let text = CatalogReader::read_file(file.path()).unwrap();
        assert_eq!(text, "title,type");
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CatalogReader::read_file(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
        assert_eq!(err.kind(), "ReadFailure");
    }

    #[test]
    fn invalid_utf8_is_read_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00, 0x80]).unwrap();
        assert!(CatalogReader::read_file(file.path()).is_err());
    }

    #[test]
    fn recognizes_catalog_extensions() {
        assert!(CatalogReader::is_catalog_file(Path::new("games.csv")));
        assert!(CatalogReader::is_catalog_file(Path::new("GAMES.CSV")));
        assert!(CatalogReader::is_catalog_file(Path::new("list.txt")));
        assert!(!CatalogReader::is_catalog_file(Path::new("data.nc")));
        assert!(!CatalogReader::is_catalog_file(Path::new("README")));
    }
}
