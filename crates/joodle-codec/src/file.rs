//! Compressing and decompressing whole files.
//!
//! Outputs are written atomically: data goes to a temporary file in the
//! destination directory, which is then renamed over the target.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::codec::Codec;
use crate::error::{CodecError, CodecResult};
use crate::format::Format;

/// Reads and decompresses a Gzip file, returning the decompressed bytes.
///
/// # Example
///
/// ```ignore
/// let data = read_gzip("document.json.gz")?;
/// ```
pub fn read_gzip(path: impl AsRef<Path>) -> CodecResult<Vec<u8>> {
    read_compressed(path, &Codec::gzip())
}

/// Compresses and writes data to a Gzip file.
pub fn write_gzip(path: impl AsRef<Path>, data: &[u8]) -> CodecResult<()> {
    write_compressed(path, data, &Codec::gzip())
}

/// Reads a file and decompresses it with `codec`.
pub fn read_compressed(path: impl AsRef<Path>, codec: &Codec) -> CodecResult<Vec<u8>> {
    let path = path.as_ref();
    let data = read_file(path, codec.format())?;
    codec.decompress(&data).map_err(|e| e.with_path(path))
}

/// Compresses data with `codec` and writes it to a file.
pub fn write_compressed(path: impl AsRef<Path>, data: &[u8], codec: &Codec) -> CodecResult<()> {
    let path = path.as_ref();
    let compressed = codec.compress(data).map_err(|e| e.with_path(path))?;
    atomic_write(path, &compressed, codec.format())
}

/// Compresses a file.
///
/// # Example
///
/// ```ignore
/// compress_file("input.json", "output.json.gz", &Codec::gzip())?;
/// ```
pub fn compress_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    codec: &Codec,
) -> CodecResult<()> {
    let data = read_file(input_path.as_ref(), codec.format())?;
    write_compressed(output_path, &data, codec)
}

/// Decompresses a file.
pub fn decompress_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    codec: &Codec,
) -> CodecResult<()> {
    let decompressed = read_compressed(input_path, codec)?;
    atomic_write(output_path.as_ref(), &decompressed, codec.format())
}

fn read_file(path: &Path, format: Format) -> CodecResult<Vec<u8>> {
    tracing::debug!(path = %path.display(), %format, "reading file");
    fs::read(path).map_err(|e| CodecError::io(format, Some(path), e))
}

fn atomic_write(path: &Path, data: &[u8], format: Format) -> CodecResult<()> {
    let io_error = |e| CodecError::io(format, Some(path), e);
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(io_error)?;
    temp.write_all(data).map_err(io_error)?;
    temp.as_file().sync_all().map_err(io_error)?;
    temp.persist(path).map_err(|e| io_error(e.error))?;

    tracing::debug!(path = %path.display(), %format, len = data.len(), "wrote file");
    Ok(())
}
