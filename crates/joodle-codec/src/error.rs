//! Error types for codec operations.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::format::Format;

/// Error type for compression and decompression.
#[derive(Debug, thiserror::Error)]
#[error("{kind} ({format}): {message}{}", display_path(.path.as_deref()))]
pub struct CodecError {
    /// The kind of error that occurred.
    kind: CodecErrorKind,
    /// The container format being encoded or decoded.
    format: Format,
    /// Human-readable description of the failure.
    message: String,
    /// The file involved, for the file helpers.
    path: Option<PathBuf>,
    /// The underlying source error, if any.
    #[source]
    source: Option<io::Error>,
}

/// The kind of codec error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodecErrorKind {
    /// The buffer is not framed in the expected format.
    Format,
    /// The stream is truncated, malformed, or fails its checksum.
    Corruption,
    /// The decoded output exceeds the configured limit.
    TooLarge,
    /// Reading or writing a file failed, or the encoder itself failed.
    Io,
}

impl CodecError {
    /// Creates a new codec error.
    pub fn new(kind: CodecErrorKind, format: Format, message: impl Into<String>) -> Self {
        Self {
            kind,
            format,
            message: message.into(),
            path: None,
            source: None,
        }
    }

    /// Creates a format-mismatch error.
    pub fn format_mismatch(format: Format, message: impl Into<String>) -> Self {
        Self::new(CodecErrorKind::Format, format, message)
    }

    /// Creates a corruption error.
    pub fn corruption(format: Format, message: impl Into<String>) -> Self {
        Self::new(CodecErrorKind::Corruption, format, message)
    }

    /// Creates an error for output exceeding `limit` bytes.
    pub fn too_large(format: Format, limit: usize) -> Self {
        Self::new(
            CodecErrorKind::TooLarge,
            format,
            format!("decoded output exceeds {limit} bytes"),
        )
    }

    /// Creates an I/O error, optionally tied to a file.
    pub fn io(format: Format, path: Option<&Path>, source: io::Error) -> Self {
        Self {
            kind: CodecErrorKind::Io,
            format,
            message: source.to_string(),
            path: path.map(Path::to_path_buf),
            source: Some(source),
        }
    }

    /// Attaches a file path to this error.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Returns the kind of error.
    pub fn kind(&self) -> CodecErrorKind {
        self.kind
    }

    /// Returns the format being processed when the error occurred.
    pub fn format(&self) -> Format {
        self.format
    }

    /// Returns the description of the failure.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the file involved in the error, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the underlying I/O error, if any.
    pub fn io_error(&self) -> Option<&io::Error> {
        self.source.as_ref()
    }

    /// Returns true if the input was framed in a different format.
    pub fn is_format_mismatch(&self) -> bool {
        self.kind == CodecErrorKind::Format
    }

    /// Returns true if the input was truncated or corrupted.
    pub fn is_corruption(&self) -> bool {
        self.kind == CodecErrorKind::Corruption
    }
}

impl fmt::Display for CodecErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecErrorKind::Format => write!(f, "format mismatch"),
            CodecErrorKind::Corruption => write!(f, "corrupt data"),
            CodecErrorKind::TooLarge => write!(f, "output too large"),
            CodecErrorKind::Io => write!(f, "i/o error"),
        }
    }
}

fn display_path(path: Option<&Path>) -> String {
    match path {
        Some(path) => format!(": {}", path.display()),
        None => String::new(),
    }
}

/// A specialized Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CodecError::corruption(Format::Gzip, "checksum mismatch");
        assert_eq!(err.to_string(), "corrupt data (gzip): checksum mismatch");
    }

    #[test]
    fn test_error_display_with_path() {
        let err = CodecError::format_mismatch(Format::Zlib, "missing zlib header")
            .with_path("/tmp/data.zz");
        assert_eq!(
            err.to_string(),
            "format mismatch (zlib): missing zlib header: /tmp/data.zz"
        );
    }

    #[test]
    fn test_error_kind() {
        let err = CodecError::format_mismatch(Format::Deflate, "gzip header found");
        assert_eq!(err.kind(), CodecErrorKind::Format);
        assert!(err.is_format_mismatch());
        assert!(!err.is_corruption());
        assert_eq!(err.format(), Format::Deflate);
    }

    #[test]
    fn test_io_error_keeps_source() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err = CodecError::io(Format::Gzip, Some(Path::new("/missing.gz")), io_err);
        assert_eq!(err.kind(), CodecErrorKind::Io);
        assert_eq!(err.path(), Some(Path::new("/missing.gz")));
        assert_eq!(
            err.io_error().map(io::Error::kind),
            Some(io::ErrorKind::NotFound)
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
