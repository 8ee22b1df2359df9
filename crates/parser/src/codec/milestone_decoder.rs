//! A [`Decoder`] that hands out a message head one milestone at a time.
//!
//! The decoder drives an [`IncrementalParser`] over a [`BytesMut`] read buffer. Each call to
//! [`decode`](Decoder::decode) targets the next milestone of the grammar:
//!
//! - `Ok(Some(segment))` when the milestone was reached; the bytes up to and including its
//!   delimiter are split off the buffer and the segment is a zero-copy slice of them
//! - `Ok(None)` when more data is needed; the bytes scanned so far stay in the buffer but are
//!   not scanned again on the next call
//! - `Err(ParseError::Syntax { .. })` when the head is malformed
//! - `Err(ParseError::TooLargeHead { .. })` when the head cannot end within
//!   [`max_head_size`](DecoderConfig::max_head_size); the decoder keeps returning it until reset
//!
//! Once the blank line ending the header block has been decoded the decoder yields nothing
//! more and leaves the rest of the buffer (the body, or a pipelined message) untouched until
//! [`reset`](MilestoneDecoder::reset) is called.

use std::io;
use std::ops::Range;

use bytes::{Bytes, BytesMut};
use tokio_util::codec::Decoder;
use tracing::trace;

use crate::codec::{DecoderConfig, HeaderGranularity};
use crate::engine::{Grammar, IncrementalParser};
use crate::ensure;
use crate::grammar::{RequestGrammar, ResponseGrammar};
use crate::protocol::{Outcome, ParseError};

/// The bytes belonging to one milestone of a message head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<S> {
    milestone: S,
    bytes: Bytes,
}

impl<S: Copy> Segment<S> {
    /// The milestone that was reached.
    #[inline]
    pub fn milestone(&self) -> S {
        self.milestone
    }

    /// The token bytes of the milestone, delimiters excluded.
    #[inline]
    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    #[inline]
    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }
}

/// Streaming decoder of message heads for the grammar `G`.
pub struct MilestoneDecoder<G: Grammar> {
    parser: IncrementalParser<G>,
    config: DecoderConfig,
    /// bytes at the front of the buffer already fed to the parser
    scanned: usize,
    /// segment bytes seen so far within the buffer, when a segment spans several reads
    pending: Option<Range<usize>>,
    /// head bytes already split off the buffer
    head_size: usize,
    /// set once the head went over the size limit
    too_large: bool,
}

/// Decoder of request heads.
pub type RequestHeadDecoder = MilestoneDecoder<RequestGrammar>;

/// Decoder of response heads.
pub type ResponseHeadDecoder = MilestoneDecoder<ResponseGrammar>;

impl<G: Grammar> MilestoneDecoder<G> {
    pub fn new() -> Self {
        Self::with_config(DecoderConfig::default())
    }

    pub fn with_config(config: DecoderConfig) -> Self {
        Self { parser: IncrementalParser::new(), config, scanned: 0, pending: None, head_size: 0, too_large: false }
    }

    #[inline]
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Current state of the underlying parser.
    #[inline]
    pub fn state(&self) -> G::State {
        self.parser.state()
    }

    /// Returns true once the whole head, blank line included, was decoded.
    pub fn is_complete(&self) -> bool {
        G::MILESTONES.last() == Some(&self.parser.state())
    }

    /// Prepares the decoder for the next message on the same stream.
    ///
    /// Bytes scanned for an unfinished head are forgotten, so only call this between messages
    /// or after dropping the buffer.
    pub fn reset(&mut self) {
        self.parser.reset();
        self.scanned = 0;
        self.pending = None;
        self.head_size = 0;
        self.too_large = false;
    }

    fn next_target(&self) -> Option<G::State> {
        let state = self.parser.state();
        let per_line = self.config.header_granularity() == HeaderGranularity::Line;

        G::MILESTONES
            .iter()
            .copied()
            .find(|&milestone| if G::is_repeatable(milestone) { per_line && milestone >= state } else { milestone > state })
    }
}

impl<G: Grammar> Default for MilestoneDecoder<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Grammar> std::fmt::Debug for MilestoneDecoder<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MilestoneDecoder")
            .field("parser", &self.parser)
            .field("config", &self.config)
            .field("scanned", &self.scanned)
            .field("pending", &self.pending)
            .field("head_size", &self.head_size)
            .field("too_large", &self.too_large)
            .finish()
    }
}

impl<G: Grammar> Decoder for MilestoneDecoder<G> {
    type Item = Segment<G::State>;
    type Error = ParseError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        let max_head_size = self.config.max_head_size();
        ensure!(!self.too_large, ParseError::too_large_head(self.head_size + src.len(), max_head_size));
        ensure!(
            !self.parser.is_rejected(),
            ParseError::io(io::Error::new(io::ErrorKind::InvalidData, "message head already rejected"))
        );

        let Some(target) = self.next_target() else {
            return Ok(None);
        };

        // never scan past the size limit
        let budget = max_head_size.saturating_sub(self.head_size + self.scanned);
        let limit = src.len().min(self.scanned + budget);
        let parsed = self.parser.parse_until(target, &src[self.scanned..limit])?;
        let outcome = parsed.outcome();
        let span = parsed.span();
        let end = self.scanned + parsed.consumed();

        if !span.is_empty() {
            let start = self.pending.as_ref().map_or(self.scanned + span.start, |pending| pending.start);
            self.pending = Some(start..self.scanned + span.end);
        }

        let head_size = self.head_size + end;

        match outcome {
            Outcome::Matched => {
                let head = src.split_to(end).freeze();
                let bytes = self.pending.take().map_or_else(Bytes::new, |range| head.slice(range));
                self.scanned = 0;
                self.head_size = head_size;

                let milestone = self.parser.state();
                trace!(milestone = ?milestone, len = bytes.len(), "decoded segment");
                Ok(Some(Segment { milestone, bytes }))
            }
            Outcome::Indeterminate if head_size >= max_head_size => {
                self.too_large = true;
                Err(ParseError::too_large_head(self.head_size + src.len(), max_head_size))
            }
            Outcome::Indeterminate => {
                self.scanned = end;
                Ok(None)
            }
            Outcome::Rejected => Err(ParseError::syntax(target, head_size - 1, src[end - 1])),
        }
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        match self.decode(buf)? {
            Some(segment) => Ok(Some(segment)),
            None if self.is_complete() || (buf.is_empty() && self.parser.state() == G::INITIAL) => Ok(None),
            None => Err(ParseError::io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stream ended before the message head was complete",
            ))),
        }
    }
}
