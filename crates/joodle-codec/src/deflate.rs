//! Raw deflate and zlib streams.
//!
//! Both families share one encoder and one decoder loop over
//! [`flate2::Compress`] / [`flate2::Decompress`]; they differ only in whether
//! the zlib header and Adler-32 trailer are written and checked.
//!
//! The decoder requires the deflate end-of-stream marker. The streaming
//! `read` adapters in flate2 stop quietly when the input runs out, which
//! would hand back partial output for a truncated buffer.

use flate2::{Compress, Decompress, FlushCompress, FlushDecompress, Status};

use crate::error::{CodecError, CodecErrorKind, CodecResult};
use crate::format::{has_gzip_magic, has_zlib_header, Format};
use crate::options::{CompressOptions, DecompressOptions};

/// Smallest output buffer allocation.
const MIN_CHUNK: usize = 256;

/// Compresses data into a raw deflate stream.
///
/// # Example
///
/// ```ignore
/// let compressed = compress_deflate(b"Hello, world!")?;
/// ```
pub fn compress_deflate(data: &[u8]) -> CodecResult<Vec<u8>> {
    compress_deflate_with_options(data, &CompressOptions::default())
}

/// Compresses data into a raw deflate stream with custom options.
pub fn compress_deflate_with_options(data: &[u8], options: &CompressOptions) -> CodecResult<Vec<u8>> {
    encode(data, Format::Deflate, options)
}

/// Decompresses a raw deflate stream.
///
/// Gzip and zlib framed buffers are rejected with a format-mismatch error.
pub fn decompress_deflate(data: &[u8]) -> CodecResult<Vec<u8>> {
    decompress_deflate_with_options(data, &DecompressOptions::default())
}

/// Decompresses a raw deflate stream with custom options.
pub fn decompress_deflate_with_options(
    data: &[u8],
    options: &DecompressOptions,
) -> CodecResult<Vec<u8>> {
    // 0x1f sets block type 3, which is reserved, so no raw stream starts
    // with the gzip magic.
    if has_gzip_magic(data) {
        tracing::debug!("gzip member passed to the raw deflate decoder");
        return Err(CodecError::format_mismatch(
            Format::Deflate,
            "input is gzip framed, not raw deflate",
        ));
    }
    decode(data, Format::Deflate, options).map_err(|err| {
        if err.is_corruption() && has_zlib_header(data) {
            tracing::debug!("zlib stream passed to the raw deflate decoder");
            CodecError::format_mismatch(Format::Deflate, "input is zlib framed, not raw deflate")
        } else {
            err
        }
    })
}

/// Compresses data into a zlib stream.
pub fn compress_zlib(data: &[u8]) -> CodecResult<Vec<u8>> {
    compress_zlib_with_options(data, &CompressOptions::default())
}

/// Compresses data into a zlib stream with custom options.
pub fn compress_zlib_with_options(data: &[u8], options: &CompressOptions) -> CodecResult<Vec<u8>> {
    encode(data, Format::Zlib, options)
}

/// Decompresses a zlib stream, verifying its Adler-32 checksum.
pub fn decompress_zlib(data: &[u8]) -> CodecResult<Vec<u8>> {
    decompress_zlib_with_options(data, &DecompressOptions::default())
}

/// Decompresses a zlib stream with custom options.
pub fn decompress_zlib_with_options(data: &[u8], options: &DecompressOptions) -> CodecResult<Vec<u8>> {
    if data.len() < 2 {
        return Err(CodecError::corruption(Format::Zlib, "truncated zlib header"));
    }
    if !has_zlib_header(data) {
        let found = if has_gzip_magic(data) { "gzip framed" } else { "not zlib framed" };
        tracing::debug!(found, "rejecting buffer without zlib header");
        return Err(CodecError::format_mismatch(
            Format::Zlib,
            format!("input is {found}"),
        ));
    }
    decode(data, Format::Zlib, options)
}

pub(crate) fn encode(data: &[u8], format: Format, options: &CompressOptions) -> CodecResult<Vec<u8>> {
    let mut compress = Compress::new(
        options.compression_level().to_flate2(),
        format == Format::Zlib,
    );
    let mut out = Vec::with_capacity(data.len() / 2 + MIN_CHUNK);

    loop {
        if out.len() == out.capacity() {
            out.reserve(out.capacity().max(MIN_CHUNK));
        }
        let consumed = compress.total_in() as usize;
        let status = compress
            .compress_vec(&data[consumed..], &mut out, FlushCompress::Finish)
            .map_err(|e| CodecError::new(CodecErrorKind::Io, format, format!("encoder failed: {e}")))?;
        if status == Status::StreamEnd {
            break;
        }
    }

    tracing::trace!(%format, input = data.len(), output = out.len(), "compressed buffer");
    Ok(out)
}

pub(crate) fn decode(data: &[u8], format: Format, options: &DecompressOptions) -> CodecResult<Vec<u8>> {
    if data.is_empty() {
        return Err(CodecError::corruption(format, "empty input"));
    }

    let limit = options.output_limit();
    let mut decompress = Decompress::new(format == Format::Zlib);
    let mut out = Vec::with_capacity(initial_capacity(data.len(), limit));

    loop {
        if out.len() == out.capacity() {
            out.reserve(out.capacity().max(MIN_CHUNK));
        }
        let in_before = decompress.total_in();
        let out_before = decompress.total_out();
        let status = decompress
            .decompress_vec(&data[in_before as usize..], &mut out, FlushDecompress::None)
            .map_err(|e| CodecError::corruption(format, format!("invalid stream: {e}")))?;

        if let Some(limit) = limit {
            if out.len() > limit {
                return Err(CodecError::too_large(format, limit));
            }
        }

        match status {
            Status::StreamEnd => break,
            Status::Ok | Status::BufError => {
                let stalled =
                    decompress.total_in() == in_before && decompress.total_out() == out_before;
                // No progress with room left in the output means the input
                // ran out before the end-of-stream marker.
                if stalled && out.len() < out.capacity() {
                    return Err(CodecError::corruption(format, "stream is truncated"));
                }
            }
        }
    }

    let consumed = decompress.total_in() as usize;
    if consumed < data.len() {
        return Err(CodecError::corruption(
            format,
            format!("{} trailing bytes after end of stream", data.len() - consumed),
        ));
    }

    tracing::trace!(%format, input = data.len(), output = out.len(), "decompressed buffer");
    Ok(out)
}

fn initial_capacity(input_len: usize, limit: Option<usize>) -> usize {
    let guess = input_len.saturating_mul(4).max(MIN_CHUNK);
    match limit {
        Some(limit) => guess.min(limit.saturating_add(1)).max(MIN_CHUNK),
        None => guess,
    }
}
