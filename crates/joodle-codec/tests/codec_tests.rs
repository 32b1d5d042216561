//! Round-trip, cross-format and corruption tests across all codecs.

use std::thread;

use joodle_codec::{
    compress_deflate, compress_gzip, compress_zlib, decompress_deflate, decompress_gzip,
    decompress_zlib, Codec, CodecErrorKind, Format,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn random_buffer(seed: u64, len: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = vec![0u8; len];
    rng.fill(data.as_mut_slice());
    data
}

fn sample_buffers() -> Vec<Vec<u8>> {
    vec![
        Vec::new(),
        vec![0],
        b"{\"key\": \"value\"}".to_vec(),
        b"abcabcabc".repeat(10_000),
        random_buffer(7, 1),
        random_buffer(42, 4096),
        random_buffer(1234, 1 << 20),
    ]
}

#[test]
fn test_round_trip_all_formats() {
    init_tracing();
    for data in sample_buffers() {
        assert_eq!(decompress_deflate(&compress_deflate(&data).unwrap()).unwrap(), data);
        assert_eq!(decompress_zlib(&compress_zlib(&data).unwrap()).unwrap(), data);
        assert_eq!(decompress_gzip(&compress_gzip(&data).unwrap()).unwrap(), data);
    }
}

#[test]
fn test_input_is_left_untouched() {
    let data = b"borrowed, never consumed".to_vec();
    let copy = data.clone();
    let compressed = compress_gzip(&data).unwrap();
    let _ = decompress_gzip(&compressed).unwrap();
    assert_eq!(data, copy);
}

#[test]
fn test_empty_input_yields_framed_output() {
    for codec in [Codec::deflate(), Codec::zlib(), Codec::gzip()] {
        let packed = codec.compress(&[]).unwrap();
        assert!(!packed.is_empty(), "{}", codec.format());
        assert!(codec.decompress(&packed).unwrap().is_empty());
    }
}

#[test]
fn test_deflate_rejects_gzip() {
    for data in sample_buffers().into_iter().filter(|d| !d.is_empty()) {
        let err = decompress_deflate(&compress_gzip(&data).unwrap()).unwrap_err();
        assert_eq!(err.kind(), CodecErrorKind::Format);
        assert_eq!(err.format(), Format::Deflate);
    }
}

#[test]
fn test_gzip_rejects_deflate() {
    for data in sample_buffers() {
        let err = decompress_gzip(&compress_deflate(&data).unwrap()).unwrap_err();
        assert_eq!(err.kind(), CodecErrorKind::Format);
    }
}

#[test]
fn test_zlib_and_gzip_are_distinct() {
    let data = b"zlib and gzip wrap the same deflate payload";
    let zlib = compress_zlib(data).unwrap();
    let gzip = compress_gzip(data).unwrap();
    assert_eq!(decompress_zlib(&gzip).unwrap_err().kind(), CodecErrorKind::Format);
    assert_eq!(decompress_gzip(&zlib).unwrap_err().kind(), CodecErrorKind::Format);
}

#[test]
fn test_truncated_gzip_fails() {
    for data in sample_buffers().into_iter().filter(|d| d.len() > 1) {
        let compressed = compress_gzip(&data).unwrap();
        let err = decompress_gzip(&compressed[..compressed.len() - 1]).unwrap_err();
        assert_eq!(err.kind(), CodecErrorKind::Corruption);
    }
}

#[test]
fn test_truncated_raw_streams_fail() {
    let data = random_buffer(99, 10_000);
    let deflate = compress_deflate(&data).unwrap();
    let zlib = compress_zlib(&data).unwrap();

    for cut in [1, deflate.len() / 2] {
        let err = decompress_deflate(&deflate[..deflate.len() - cut]).unwrap_err();
        assert_eq!(err.kind(), CodecErrorKind::Corruption);
    }
    for cut in [1, 4, zlib.len() / 2] {
        let err = decompress_zlib(&zlib[..zlib.len() - cut]).unwrap_err();
        assert_eq!(err.kind(), CodecErrorKind::Corruption);
    }
}

#[test]
fn test_detect_matches_compressor() {
    let data = b"detect me";
    assert_eq!(Format::detect(&compress_gzip(data).unwrap()), Some(Format::Gzip));
    assert_eq!(Format::detect(&compress_zlib(data).unwrap()), Some(Format::Zlib));
    assert_eq!(Format::detect(&compress_deflate(data).unwrap()), None);
}

#[test]
fn test_concurrent_calls_are_independent() {
    let handles: Vec<_> = (0..8u64)
        .map(|seed| {
            thread::spawn(move || {
                let data = random_buffer(seed, 64 * 1024);
                let codec = if seed % 2 == 0 { Codec::gzip() } else { Codec::deflate() };
                let packed = codec.compress(&data).unwrap();
                assert_eq!(codec.decompress(&packed).unwrap(), data);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_trailing_bytes_rejected_by_every_format() {
    let data = random_buffer(11, 2048);
    for codec in [Codec::deflate(), Codec::zlib(), Codec::gzip()] {
        let mut compressed = codec.compress(&data).unwrap();
        compressed.extend_from_slice(b"junk");
        let err = codec.decompress(&compressed).unwrap_err();
        assert_eq!(err.kind(), CodecErrorKind::Corruption, "{}", codec.format());
    }
}

#[test]
fn test_gzip_members_are_joined() {
    let first = random_buffer(21, 70_000);
    let second = b"{\"key\": \"value\"}".repeat(500);

    let mut joined = compress_gzip(&first).unwrap();
    joined.extend(compress_gzip(&second).unwrap());

    let out = decompress_gzip(&joined).unwrap();
    assert_eq!(out.len(), first.len() + second.len());
    assert_eq!(&out[..first.len()], first.as_slice());
    assert_eq!(&out[first.len()..], second.as_slice());
}
