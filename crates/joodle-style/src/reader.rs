//! Reading style resources from disk.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::catalog::{StyleCatalog, StyleKey};
use crate::location::StyleLocation;
use crate::parser::{parse_keys_from_slice, parse_styles_from_slice};
use crate::{Error, Result};

/// Options for reading style resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReaderOptions {
    max_document_size: Option<u64>,
}

impl ReaderOptions {
    /// Creates default reader options (no size limit).
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects resources larger than `limit` bytes. At most `limit + 1`
    /// bytes are ever read.
    pub fn max_document_size(mut self, limit: u64) -> Self {
        self.max_document_size = Some(limit);
        self
    }

    /// Returns the size limit, if any.
    pub fn size_limit(&self) -> Option<u64> {
        self.max_document_size
    }
}

/// Reads style catalogs from resource locations.
///
/// The reader keeps no state between calls; one value can serve any number
/// of reads, from any thread.
///
/// # Example
///
/// ```ignore
/// use joodle_style::{ReaderOptions, StylesReader};
///
/// let reader = StylesReader::with_options(ReaderOptions::new().max_document_size(1 << 20));
/// let names = reader.read_keys("styles/default.json")?;
/// let catalog = reader.read_styles("styles/default.json")?;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StylesReader {
    options: ReaderOptions,
}

impl StylesReader {
    /// Creates a reader with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reader with the given options.
    pub fn with_options(options: ReaderOptions) -> Self {
        Self { options }
    }

    /// Returns the reader options.
    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Reads the style names of a resource, in document order.
    ///
    /// The whole document is validated, but definitions are not built.
    pub fn read_keys(&self, location: impl Into<StyleLocation>) -> Result<Vec<StyleKey>> {
        let location = location.into();
        let (path, bytes) = self.load(&location)?;
        let keys = parse_keys_from_slice(&bytes).inspect_err(|e| log_failure(&path, e))?;
        tracing::debug!(path = %path.display(), keys = keys.len(), "read style keys");
        Ok(keys)
    }

    /// Reads every style of a resource.
    pub fn read_styles(&self, location: impl Into<StyleLocation>) -> Result<StyleCatalog> {
        let location = location.into();
        let (path, bytes) = self.load(&location)?;
        let catalog = parse_styles_from_slice(&bytes).inspect_err(|e| log_failure(&path, e))?;
        tracing::debug!(path = %path.display(), styles = catalog.len(), "read styles");
        Ok(catalog.with_source_path(path))
    }

    fn load(&self, location: &StyleLocation) -> Result<(PathBuf, Vec<u8>)> {
        let path = location.to_file_path()?;
        tracing::trace!(path = %path.display(), "loading style resource");

        let file = File::open(&path).map_err(|e| Error::io(&path, e))?;
        let bytes = match self.options.max_document_size {
            Some(limit) => {
                let bytes = read_all(file.take(limit.saturating_add(1)), &path)?;
                let size = bytes.len() as u64;
                if size > limit {
                    return Err(Error::TooLarge { path, size, limit });
                }
                bytes
            }
            None => read_all(file, &path)?,
        };
        Ok((path, bytes))
    }
}

fn read_all(mut reader: impl Read, path: &Path) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(|e| Error::io(path, e))?;
    Ok(bytes)
}

fn log_failure(path: &Path, err: &Error) {
    tracing::warn!(path = %path.display(), "Failed to parse style resource: {}", err);
}

/// Reads the style names of a resource with default options.
pub fn read_keys(location: impl Into<StyleLocation>) -> Result<Vec<StyleKey>> {
    StylesReader::new().read_keys(location)
}

/// Reads every style of a resource with default options.
pub fn read_styles(location: impl Into<StyleLocation>) -> Result<StyleCatalog> {
    StylesReader::new().read_styles(location)
}

/// Parses style names from an in-memory document.
pub fn parse_keys(document: &str) -> Result<Vec<StyleKey>> {
    parse_keys_from_slice(document.as_bytes())
}

/// Parses a style catalog from an in-memory document.
pub fn parse_styles(document: &str) -> Result<StyleCatalog> {
    parse_styles_from_slice(document.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use std::fs;

    #[test]
    fn test_reader_options_builder() {
        assert_eq!(ReaderOptions::new().size_limit(), None);
        let reader = StylesReader::with_options(ReaderOptions::new().max_document_size(10));
        assert_eq!(reader.options().size_limit(), Some(10));
    }

    #[test]
    fn test_parse_in_memory() {
        let keys = parse_keys(r#"{"a": {}, "b": {"color": "red"}}"#).unwrap();
        assert_eq!(keys, [StyleKey::from("a"), StyleKey::from("b")]);

        let catalog = parse_styles(r#"{"a": {}, "b": {"color": "red"}}"#).unwrap();
        assert_eq!(catalog.source_path(), None);
        assert_eq!(catalog.get("b").and_then(|d| d.get_str("color")), Some("red"));
    }

    #[test]
    fn test_size_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.json");
        fs::write(&path, r#"{"a": {"color": "red"}}"#).unwrap();

        let reader = StylesReader::with_options(ReaderOptions::new().max_document_size(8));
        let err = reader.read_styles(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(matches!(err, Error::TooLarge { limit: 8, .. }));

        let roomy = StylesReader::with_options(ReaderOptions::new().max_document_size(1024));
        assert_eq!(roomy.read_styles(&path).unwrap().len(), 1);
    }

    #[test]
    fn test_size_limit_is_exact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exact.json");
        let document = r#"{"a": {"color": "red"}}"#;
        fs::write(&path, document).unwrap();
        let len = document.len() as u64;

        let fits = StylesReader::with_options(ReaderOptions::new().max_document_size(len));
        assert_eq!(fits.read_keys(&path).unwrap().len(), 1);

        let short = StylesReader::with_options(ReaderOptions::new().max_document_size(len - 1));
        match short.read_keys(&path).unwrap_err() {
            Error::TooLarge { size, limit, .. } => {
                assert_eq!(limit, len - 1);
                assert_eq!(size, len);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_size_limit_bounds_unsized_files() {
        // /dev/zero reports a length of 0 and never ends.
        let reader = StylesReader::with_options(ReaderOptions::new().max_document_size(4096));
        match reader.read_styles("/dev/zero").unwrap_err() {
            Error::TooLarge { size, limit, .. } => {
                assert_eq!(limit, 4096);
                assert_eq!(size, 4097);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
