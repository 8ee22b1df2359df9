use std::io;
use thiserror::Error;

/// Errors raised by the parser and the codec built on it.
///
/// A byte that does not fit the grammar is *not* an error of
/// [`IncrementalParser::parse_until`](crate::engine::IncrementalParser::parse_until):
/// it is reported as [`Outcome::Rejected`](crate::protocol::Outcome::Rejected). The variants
/// returned there are caller misuse, the others surface through
/// [`MilestoneDecoder`](crate::codec::MilestoneDecoder).
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("state {state} is not a milestone")]
    NotAMilestone { state: String },

    #[error("milestone {target} requested while parser is already at {current}")]
    MilestonePassed { current: String, target: String },

    #[error("syntax error before {target} at offset {offset}: unexpected byte {byte:#04x}")]
    Syntax { target: String, offset: usize, byte: u8 },

    #[error("head size too large, current: {current_size} exceed the limit {max_size}")]
    TooLargeHead { current_size: usize, max_size: usize },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl ParseError {
    pub fn not_a_milestone<S: std::fmt::Debug>(state: S) -> Self {
        Self::NotAMilestone { state: format!("{state:?}") }
    }

    pub fn milestone_passed<S: std::fmt::Debug>(current: S, target: S) -> Self {
        Self::MilestonePassed { current: format!("{current:?}"), target: format!("{target:?}") }
    }

    pub fn syntax<S: std::fmt::Debug>(target: S, offset: usize, byte: u8) -> Self {
        Self::Syntax { target: format!("{target:?}"), offset, byte }
    }

    pub fn too_large_head(current_size: usize, max_size: usize) -> Self {
        Self::TooLargeHead { current_size, max_size }
    }

    pub fn io<E: Into<io::Error>>(e: E) -> Self {
        Self::Io { source: e.into() }
    }

    /// Returns true if the error is a caller ordering mistake rather than bad input
    pub fn is_misuse(&self) -> bool {
        matches!(self, Self::NotAMilestone { .. } | Self::MilestonePassed { .. })
    }
}
