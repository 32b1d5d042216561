//! Gzip members.

use std::io::{Read, Write};

use crate::error::{CodecError, CodecErrorKind, CodecResult};
use crate::format::{has_gzip_magic, has_zlib_header, Format, GZIP_HEADER_LEN};
use crate::options::{CompressOptions, DecompressOptions};

/// Compresses data using Gzip.
///
/// # Example
///
/// ```ignore
/// let compressed = compress_gzip(b"Hello, world!")?;
/// ```
pub fn compress_gzip(data: &[u8]) -> CodecResult<Vec<u8>> {
    compress_gzip_with_options(data, &CompressOptions::default())
}

/// Compresses data using Gzip with custom options.
pub fn compress_gzip_with_options(data: &[u8], options: &CompressOptions) -> CodecResult<Vec<u8>> {
    let encoder_error =
        |e| CodecError::new(CodecErrorKind::Io, Format::Gzip, format!("encoder failed: {e}"));

    let mut encoder = flate2::write::GzEncoder::new(
        Vec::with_capacity(data.len() / 2 + 32),
        options.compression_level().to_flate2(),
    );
    encoder.write_all(data).map_err(encoder_error)?;
    let out = encoder.finish().map_err(encoder_error)?;

    tracing::trace!(input = data.len(), output = out.len(), "compressed gzip buffer");
    Ok(out)
}

/// Decompresses Gzip data.
///
/// Every member is decoded and the outputs are joined, as `gunzip` does.
/// Each member's CRC-32 and length trailer are verified; a truncated or
/// damaged member fails instead of returning partial output, and bytes after
/// the last member that do not start another member are corruption.
///
/// # Example
///
/// ```ignore
/// let decompressed = decompress_gzip(&compressed_data)?;
/// ```
pub fn decompress_gzip(data: &[u8]) -> CodecResult<Vec<u8>> {
    decompress_gzip_with_options(data, &DecompressOptions::default())
}

/// Decompresses Gzip data with custom options.
///
/// The output limit applies to the joined output of all members.
pub fn decompress_gzip_with_options(data: &[u8], options: &DecompressOptions) -> CodecResult<Vec<u8>> {
    if !has_gzip_magic(data) {
        let found = if has_zlib_header(data) {
            "input is zlib framed"
        } else {
            "missing gzip header"
        };
        tracing::debug!(found, "rejecting buffer without gzip magic");
        return Err(CodecError::format_mismatch(Format::Gzip, found));
    }
    if data.len() < GZIP_HEADER_LEN {
        return Err(CodecError::corruption(Format::Gzip, "truncated gzip header"));
    }

    let mut out = Vec::new();
    let mut rest = data;
    let mut members = 0usize;
    loop {
        rest = decode_member(rest, &mut out, options)?;
        members += 1;
        if rest.is_empty() {
            break;
        }
        if !has_gzip_magic(rest) {
            return Err(CodecError::corruption(
                Format::Gzip,
                format!("{} trailing bytes after gzip member", rest.len()),
            ));
        }
    }

    tracing::trace!(input = data.len(), output = out.len(), members, "decompressed gzip buffer");
    Ok(out)
}

/// Decodes one member from the front of `input`, appending to `out`, and
/// returns the bytes that follow it.
fn decode_member<'a>(
    input: &'a [u8],
    out: &mut Vec<u8>,
    options: &DecompressOptions,
) -> CodecResult<&'a [u8]> {
    let mut decoder = flate2::bufread::GzDecoder::new(input);
    let overflowed = match options.output_limit() {
        Some(limit) => read_limited(&mut decoder, out, limit.saturating_sub(out.len())),
        None => decoder.read_to_end(out).map(|_| false),
    }
    .map_err(|e| CodecError::corruption(Format::Gzip, e.to_string()))?;

    if let Some(limit) = options.output_limit().filter(|_| overflowed) {
        return Err(CodecError::too_large(Format::Gzip, limit));
    }
    Ok(decoder.into_inner())
}

/// Reads at most `limit` bytes, then tries one more. That extra read also drives
/// the decoder through the trailer check when the output fits exactly.
fn read_limited(reader: &mut impl Read, out: &mut Vec<u8>, limit: usize) -> std::io::Result<bool> {
    reader.by_ref().take(limit as u64).read_to_end(out)?;
    let mut extra = [0u8; 1];
    Ok(reader.read(&mut extra)? > 0)
}
