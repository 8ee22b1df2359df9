/// Default limit for the size of a message head
pub const DEFAULT_MAX_HEAD_SIZE: usize = 8 * 1024;

/// How the header block is handed out by the decoder.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum HeaderGranularity {
    /// One segment per header line, then an empty one for the blank line
    #[default]
    Line,
    /// A single segment covering the whole block
    Block,
}

/// Settings of a [`MilestoneDecoder`](crate::codec::MilestoneDecoder).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    max_head_size: usize,
    header_granularity: HeaderGranularity,
}

impl DecoderConfig {
    pub fn new() -> Self {
        Self { max_head_size: DEFAULT_MAX_HEAD_SIZE, header_granularity: HeaderGranularity::Line }
    }

    /// Sets the maximum number of bytes a message head may take, start line and blank line
    /// included.
    pub fn with_max_head_size(mut self, max_head_size: usize) -> Self {
        self.max_head_size = max_head_size;
        self
    }

    pub fn with_header_granularity(mut self, header_granularity: HeaderGranularity) -> Self {
        self.header_granularity = header_granularity;
        self
    }

    #[inline]
    pub fn max_head_size(&self) -> usize {
        self.max_head_size
    }

    #[inline]
    pub fn header_granularity(&self) -> HeaderGranularity {
        self.header_granularity
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self::new()
    }
}
