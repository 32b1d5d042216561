//! Error types for the style reader.

use std::path::PathBuf;

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading a style resource.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The resource could not be read.
    #[error("Failed to read style resource '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The location does not name a local file.
    #[error("Unsupported style location '{location}': {message}")]
    UnsupportedLocation { location: String, message: String },

    /// The resource exceeds the configured size limit. `size` counts the
    /// bytes read before giving up, so it is a lower bound.
    #[error("Style resource '{path}' exceeds the {limit} byte limit ({size} bytes read)")]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    /// The document is not valid JSON.
    #[error("Style syntax error at line {line}, column {column}: {message}")]
    Syntax {
        message: String,
        line: usize,
        column: usize,
    },

    /// The document is valid JSON but not shaped like a style catalog.
    #[error("Invalid style document at line {line}, column {column}: {message}")]
    Structure {
        message: String,
        line: usize,
        column: usize,
    },

    /// A style name appears twice at the top level.
    #[error("Duplicate style '{name}' at line {line}, column {column}")]
    DuplicateStyle {
        name: String,
        line: usize,
        column: usize,
    },
}

/// Coarse classification of an [`Error`], for presenting diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The resource is missing, unreadable, or not a local file.
    Io,
    /// The document is malformed: bad JSON or the wrong shape.
    Syntax,
    /// The document is well formed but violates a catalog rule.
    Semantic,
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an unsupported-location error.
    pub fn unsupported_location(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::UnsupportedLocation {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Create a syntax error.
    pub fn syntax(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self::Syntax {
            message: message.into(),
            line,
            column,
        }
    }

    /// Create a structure error.
    pub fn structure(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self::Structure {
            message: message.into(),
            line,
            column,
        }
    }

    /// Create a duplicate-style error.
    pub fn duplicate_style(name: impl Into<String>, line: usize, column: usize) -> Self {
        Self::DuplicateStyle {
            name: name.into(),
            line,
            column,
        }
    }

    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io { .. } | Error::UnsupportedLocation { .. } | Error::TooLarge { .. } => {
                ErrorKind::Io
            }
            Error::Syntax { .. } | Error::Structure { .. } => ErrorKind::Syntax,
            Error::DuplicateStyle { .. } => ErrorKind::Semantic,
        }
    }

    /// Returns the 1-based line and column of the error within the document.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Error::Syntax { line, column, .. }
            | Error::Structure { line, column, .. }
            | Error::DuplicateStyle { line, column, .. } => Some((*line, *column)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        let io = Error::io("/missing.json", std::io::ErrorKind::NotFound.into());
        assert_eq!(io.kind(), ErrorKind::Io);
        assert_eq!(io.position(), None);

        assert_eq!(Error::syntax("EOF", 1, 1).kind(), ErrorKind::Syntax);
        assert_eq!(Error::structure("not an object", 1, 1).kind(), ErrorKind::Syntax);
        assert_eq!(Error::duplicate_style("number", 3, 12).kind(), ErrorKind::Semantic);
        assert_eq!(
            Error::unsupported_location("http://x", "remote").kind(),
            ErrorKind::Io
        );
    }

    #[test]
    fn test_display() {
        let err = Error::duplicate_style("number", 3, 12);
        assert_eq!(err.to_string(), "Duplicate style 'number' at line 3, column 12");
        assert_eq!(err.position(), Some((3, 12)));
    }
}
