//! Where a style resource lives.

use std::fmt;
use std::path::{Path, PathBuf};

use url::Url;

use crate::{Error, Result};

/// A reference to a style resource: a filesystem path or a `file://` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleLocation {
    /// A path on the local filesystem.
    Path(PathBuf),
    /// A URL; only the `file` scheme can be read.
    Url(Url),
}

impl StyleLocation {
    /// Interprets a string as a URL when it has a scheme, otherwise as a path.
    ///
    /// Single-letter schemes are treated as Windows drive letters.
    pub fn parse(location: &str) -> Self {
        match Url::parse(location) {
            Ok(url) if url.scheme().len() > 1 => StyleLocation::Url(url),
            _ => StyleLocation::Path(PathBuf::from(location)),
        }
    }

    /// Resolves the location to a local file path.
    pub fn to_file_path(&self) -> Result<PathBuf> {
        match self {
            StyleLocation::Path(path) => Ok(path.clone()),
            StyleLocation::Url(url) if url.scheme() == "file" => url
                .to_file_path()
                .map_err(|()| Error::unsupported_location(url.as_str(), "not a local file URL")),
            StyleLocation::Url(url) => Err(Error::unsupported_location(
                url.as_str(),
                format!("scheme '{}' cannot be read", url.scheme()),
            )),
        }
    }
}

impl fmt::Display for StyleLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleLocation::Path(path) => write!(f, "{}", path.display()),
            StyleLocation::Url(url) => write!(f, "{url}"),
        }
    }
}

impl From<PathBuf> for StyleLocation {
    fn from(path: PathBuf) -> Self {
        StyleLocation::Path(path)
    }
}

impl From<&Path> for StyleLocation {
    fn from(path: &Path) -> Self {
        StyleLocation::Path(path.to_path_buf())
    }
}

impl From<&PathBuf> for StyleLocation {
    fn from(path: &PathBuf) -> Self {
        StyleLocation::Path(path.clone())
    }
}

impl From<Url> for StyleLocation {
    fn from(url: Url) -> Self {
        StyleLocation::Url(url)
    }
}

impl From<&Url> for StyleLocation {
    fn from(url: &Url) -> Self {
        StyleLocation::Url(url.clone())
    }
}

impl From<&str> for StyleLocation {
    fn from(location: &str) -> Self {
        StyleLocation::parse(location)
    }
}

impl From<String> for StyleLocation {
    fn from(location: String) -> Self {
        StyleLocation::parse(&location)
    }
}

impl From<&String> for StyleLocation {
    fn from(location: &String) -> Self {
        StyleLocation::parse(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_parse_plain_path() {
        assert_eq!(
            StyleLocation::parse("styles/default.json"),
            StyleLocation::Path(PathBuf::from("styles/default.json"))
        );
        assert!(matches!(StyleLocation::parse("C:\\styles.json"), StyleLocation::Path(_)));
    }

    #[test]
    fn test_parse_url() {
        assert!(matches!(
            StyleLocation::parse("file:///tmp/styles.json"),
            StyleLocation::Url(_)
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_file_url_to_path() {
        let location = StyleLocation::parse("file:///tmp/styles.json");
        assert_eq!(location.to_file_path().unwrap(), PathBuf::from("/tmp/styles.json"));
    }

    #[test]
    fn test_from_owned_strings() {
        let owned = format!("styles/{}.json", "default");
        assert_eq!(
            StyleLocation::from(&owned),
            StyleLocation::Path(PathBuf::from("styles/default.json"))
        );
        assert_eq!(
            StyleLocation::from(owned),
            StyleLocation::Path(PathBuf::from("styles/default.json"))
        );
        assert!(matches!(
            StyleLocation::from(String::from("file:///tmp/styles.json")),
            StyleLocation::Url(_)
        ));
    }

    #[test]
    fn test_remote_url_rejected() {
        let location = StyleLocation::parse("https://example.com/styles.json");
        let err = location.to_file_path().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(matches!(err, Error::UnsupportedLocation { .. }));
    }
}
