//! Container formats and format detection.

use std::fmt;

/// The two magic bytes that open every gzip member.
pub(crate) const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Size of the fixed part of a gzip member header.
pub(crate) const GZIP_HEADER_LEN: usize = 10;

/// A compressed buffer container format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Raw deflate bitstream (RFC 1951) without framing.
    Deflate,
    /// Deflate wrapped in a zlib header and Adler-32 trailer (RFC 1950).
    Zlib,
    /// Deflate wrapped in a gzip member with CRC-32 and length trailer (RFC 1952).
    Gzip,
}

impl Format {
    /// Guesses the format of a compressed buffer from its header.
    ///
    /// Raw deflate carries no signature, so it is never reported; callers
    /// that get `None` may still try [`Format::Deflate`].
    pub fn detect(data: &[u8]) -> Option<Format> {
        if has_gzip_magic(data) {
            Some(Format::Gzip)
        } else if has_zlib_header(data) {
            Some(Format::Zlib)
        } else {
            None
        }
    }

    /// Returns the conventional file extension for the format.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Deflate => "deflate",
            Format::Zlib => "zz",
            Format::Gzip => "gz",
        }
    }

    /// Maps a file extension back to its format.
    pub fn from_extension(extension: &str) -> Option<Format> {
        match extension.to_ascii_lowercase().as_str() {
            "deflate" => Some(Format::Deflate),
            "zz" | "zlib" => Some(Format::Zlib),
            "gz" | "gzip" => Some(Format::Gzip),
            _ => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Deflate => write!(f, "deflate"),
            Format::Zlib => write!(f, "zlib"),
            Format::Gzip => write!(f, "gzip"),
        }
    }
}

pub(crate) fn has_gzip_magic(data: &[u8]) -> bool {
    data.starts_with(&GZIP_MAGIC)
}

/// Checks the CMF/FLG pair: deflate method, window <= 32K, and the FCHECK
/// bits making the pair a multiple of 31.
pub(crate) fn has_zlib_header(data: &[u8]) -> bool {
    match data {
        [cmf, flg, ..] => {
            cmf & 0x0f == 8 && cmf >> 4 <= 7 && (u16::from(*cmf) << 8 | u16::from(*flg)) % 31 == 0
        }
        _ => false,
    }
}
