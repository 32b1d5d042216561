//! Compression levels and codec options.

/// Compression level for the deflate encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionLevel {
    /// No compression (fastest, largest output).
    None,
    /// Fast compression (speed over size).
    Fast,
    /// Default compression (balanced).
    #[default]
    Default,
    /// Best compression (size over speed).
    Best,
    /// Custom compression level, clamped to 0-9.
    Custom(u32),
}

impl CompressionLevel {
    /// Converts to flate2 compression level.
    pub(crate) fn to_flate2(self) -> flate2::Compression {
        match self {
            CompressionLevel::None => flate2::Compression::none(),
            CompressionLevel::Fast => flate2::Compression::fast(),
            CompressionLevel::Default => flate2::Compression::default(),
            CompressionLevel::Best => flate2::Compression::best(),
            CompressionLevel::Custom(n) => flate2::Compression::new(n.min(9)),
        }
    }
}

/// Options for compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompressOptions {
    level: CompressionLevel,
}

impl CompressOptions {
    /// Creates default compression options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the compression level.
    pub fn level(mut self, level: CompressionLevel) -> Self {
        self.level = level;
        self
    }

    /// Returns the compression level.
    pub fn compression_level(&self) -> CompressionLevel {
        self.level
    }
}

/// Options for decompression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecompressOptions {
    max_output_size: Option<usize>,
}

impl DecompressOptions {
    /// Creates default decompression options (no output limit).
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits the decoded output to `limit` bytes.
    ///
    /// Streams that would decode to more fail with
    /// [`CodecErrorKind::TooLarge`](crate::CodecErrorKind::TooLarge).
    pub fn max_output_size(mut self, limit: usize) -> Self {
        self.max_output_size = Some(limit);
        self
    }

    /// Returns the output limit, if any.
    pub fn output_limit(&self) -> Option<usize> {
        self.max_output_size
    }
}
