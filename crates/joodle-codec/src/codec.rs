//! A format plus options, bundled as a reusable value.

use crate::deflate::{
    compress_deflate_with_options, compress_zlib_with_options, decompress_deflate_with_options,
    decompress_zlib_with_options,
};
use crate::error::CodecResult;
use crate::format::Format;
use crate::gzip::{compress_gzip_with_options, decompress_gzip_with_options};
use crate::options::{CompressOptions, CompressionLevel, DecompressOptions};

/// A compressor/decompressor for one container format.
///
/// `Codec` holds no stream state; every call is independent, so a single
/// value can be shared freely between threads.
///
/// # Example
///
/// ```ignore
/// let codec = Codec::gzip().with_level(CompressionLevel::Best);
/// let packed = codec.compress(document.as_bytes())?;
/// let restored = codec.decompress(&packed)?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codec {
    format: Format,
    compress: CompressOptions,
    decompress: DecompressOptions,
}

impl Codec {
    /// Creates a codec with default options.
    pub fn new(format: Format) -> Self {
        Self {
            format,
            compress: CompressOptions::default(),
            decompress: DecompressOptions::default(),
        }
    }

    /// Creates a raw deflate codec.
    pub fn deflate() -> Self {
        Self::new(Format::Deflate)
    }

    /// Creates a zlib codec.
    pub fn zlib() -> Self {
        Self::new(Format::Zlib)
    }

    /// Creates a gzip codec.
    pub fn gzip() -> Self {
        Self::new(Format::Gzip)
    }

    /// Sets the compression level.
    pub fn with_level(mut self, level: CompressionLevel) -> Self {
        self.compress = self.compress.level(level);
        self
    }

    /// Limits the decoded output size.
    pub fn with_max_output_size(mut self, limit: usize) -> Self {
        self.decompress = self.decompress.max_output_size(limit);
        self
    }

    /// Replaces the decompression options.
    pub fn with_decompress_options(mut self, options: DecompressOptions) -> Self {
        self.decompress = options;
        self
    }

    /// Returns the container format.
    pub fn format(&self) -> Format {
        self.format
    }

    /// Compresses a buffer.
    pub fn compress(&self, data: &[u8]) -> CodecResult<Vec<u8>> {
        match self.format {
            Format::Deflate => compress_deflate_with_options(data, &self.compress),
            Format::Zlib => compress_zlib_with_options(data, &self.compress),
            Format::Gzip => compress_gzip_with_options(data, &self.compress),
        }
    }

    /// Decompresses a buffer framed in this codec's format.
    pub fn decompress(&self, data: &[u8]) -> CodecResult<Vec<u8>> {
        match self.format {
            Format::Deflate => decompress_deflate_with_options(data, &self.decompress),
            Format::Zlib => decompress_zlib_with_options(data, &self.decompress),
            Format::Gzip => decompress_gzip_with_options(data, &self.decompress),
        }
    }
}

/// Decompresses a buffer in whichever format its header announces.
///
/// Buffers without a gzip or zlib header are decoded as raw deflate.
pub fn decompress_auto(data: &[u8]) -> CodecResult<Vec<u8>> {
    decompress_auto_with_options(data, &DecompressOptions::default())
}

/// Decompresses a buffer of any supported format with custom options.
pub fn decompress_auto_with_options(data: &[u8], options: &DecompressOptions) -> CodecResult<Vec<u8>> {
    let format = Format::detect(data).unwrap_or(Format::Deflate);
    tracing::debug!(%format, len = data.len(), "auto-detected compressed format");
    Codec::new(format).with_decompress_options(*options).decompress(data)
}
