//! Buffer compression for Joodle.
//!
//! Three container formats are supported, all built on deflate:
//!
//! - **Raw deflate** (RFC 1951): the bare bitstream, no header or checksum.
//! - **Zlib** (RFC 1950): two byte header and Adler-32 trailer.
//! - **Gzip** (RFC 1952): magic header, CRC-32 and length trailer.
//!
//! The families are not interchangeable. Handing a buffer to the decoder of
//! another family fails with [`CodecErrorKind::Format`], and a truncated or
//! damaged buffer fails with [`CodecErrorKind::Corruption`]. Decoders never
//! return partial output.
//!
//! # Buffers
//!
//! ```ignore
//! use joodle_codec::{compress_gzip, decompress_gzip};
//!
//! let compressed = compress_gzip(b"Hello, world!")?;
//! let decompressed = decompress_gzip(&compressed)?;
//! assert_eq!(decompressed, b"Hello, world!");
//! ```
//!
//! # Codec values
//!
//! ```ignore
//! use joodle_codec::{Codec, CompressionLevel};
//!
//! let codec = Codec::zlib()
//!     .with_level(CompressionLevel::Best)
//!     .with_max_output_size(64 * 1024 * 1024);
//! let packed = codec.compress(&document)?;
//! ```
//!
//! # Files
//!
//! ```ignore
//! use joodle_codec::{read_gzip, write_gzip};
//!
//! write_gzip("document.json.gz", document.as_bytes())?;
//! let restored = read_gzip("document.json.gz")?;
//! ```

mod codec;
mod deflate;
mod error;
mod file;
mod format;
mod gzip;
mod options;

pub use codec::{decompress_auto, decompress_auto_with_options, Codec};
pub use deflate::{
    compress_deflate, compress_deflate_with_options, compress_zlib, compress_zlib_with_options,
    decompress_deflate, decompress_deflate_with_options, decompress_zlib,
    decompress_zlib_with_options,
};
pub use error::{CodecError, CodecErrorKind, CodecResult};
pub use file::{
    compress_file, decompress_file, read_compressed, read_gzip, write_compressed, write_gzip,
};
pub use format::Format;
pub use gzip::{compress_gzip, compress_gzip_with_options, decompress_gzip, decompress_gzip_with_options};
pub use options::{CompressOptions, CompressionLevel, DecompressOptions};
