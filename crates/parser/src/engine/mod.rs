//! The incremental engine shared by the request and response grammars.
//!
//! A grammar is a finite state machine described by a pure transition function
//! `(state, byte) -> Step`. The engine owns nothing but the current state and drives the
//! transition function over whatever bytes the caller hands it, stopping at the first of:
//!
//! - the requested milestone is reached ([`Outcome::Matched`])
//! - a byte has no valid transition ([`Outcome::Rejected`])
//! - the input runs out ([`Outcome::Indeterminate`])
//!
//! Because the state is the only thing carried between calls, a caller can feed one socket read
//! at a time and resume with the unconsumed suffix plus the next read. Bytes that were consumed
//! are never looked at again.
//!
//! # States and milestones
//!
//! States are totally ordered by parse progress. A subset of them are *milestones*: the
//! checkpoints a caller may ask for, e.g. "method parsed" or "headers complete". The rest are
//! micro-states used only by the transition function. Requesting a milestone that lies behind
//! the current state is a caller bug and is reported as [`ParseError::MilestonePassed`].
//!
//! # Segments
//!
//! Every transition classifies its byte as either part of a token ([`Step::Token`]) or as
//! structural ([`Step::Delimiter`]). The range returned with a result spans the token bytes seen
//! in the call since the last milestone boundary, so the method token comes back without its
//! trailing space and a header line without its CRLF. A grammar may declare that passing some
//! milestone keeps the segment open (see [`Grammar::spans`]); this is how a whole header block is
//! returned as one range.

use std::fmt;

use tracing::{debug, trace};

use crate::ensure;
use crate::protocol::{Outcome, ParseError, Parsed};

/// Result of feeding one byte to a grammar's transition function.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Step<S> {
    /// The byte belongs to the current token
    Token(S),
    /// The byte is structural and is never part of a returned range
    Delimiter(S),
    /// The byte cannot extend the grammar at this position
    Reject,
}

impl<S> Step<S> {
    /// Maps the target state, keeping the byte classification.
    #[inline]
    pub fn map<T, F: FnOnce(S) -> T>(self, f: F) -> Step<T> {
        match self {
            Step::Token(s) => Step::Token(f(s)),
            Step::Delimiter(s) => Step::Delimiter(f(s)),
            Step::Reject => Step::Reject,
        }
    }
}

/// A character-driven grammar the [`IncrementalParser`] can run.
pub trait Grammar {
    /// Lexical position of the machine, ordered by parse progress
    type State: Copy + Ord + fmt::Debug + 'static;

    /// The lowest ordered "not started" milestone
    const INITIAL: Self::State;

    /// Terminal state entered on a rejected byte
    const ERROR: Self::State;

    /// Every milestone, in parse order. The last one ends the grammar.
    const MILESTONES: &'static [Self::State];

    /// The transition function. Must be pure.
    fn step(state: Self::State, byte: u8) -> Step<Self::State>;

    /// Whether `state` may be requested as a target or used to reset the parser.
    fn is_milestone(state: Self::State) -> bool {
        Self::MILESTONES.contains(&state)
    }

    /// Whether `milestone` may be requested again while it is the current state.
    ///
    /// Header lines repeat, so asking for the next header line from the state "header line
    /// done" makes sense; asking for the method from "method done" does not.
    fn is_repeatable(_milestone: Self::State) -> bool {
        false
    }

    /// Whether passing `passed` on the way to `target` keeps the current segment open.
    fn spans(_passed: Self::State, _target: Self::State) -> bool {
        false
    }
}

/// A restartable parser running the grammar `G`.
///
/// One instance parses one message head. It is cheap to construct (it holds a single state
/// value), never allocates and never retains the input it is given.
pub struct IncrementalParser<G: Grammar> {
    state: G::State,
}

impl<G: Grammar> IncrementalParser<G> {
    /// Creates a parser at the grammar's initial state.
    pub fn new() -> Self {
        Self { state: G::INITIAL }
    }

    /// Creates a parser that is already positioned at `milestone`.
    ///
    /// Useful when an earlier part of the message was parsed at another call site that only
    /// shares the milestone marker, not the parser.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NotAMilestone`] if `milestone` is a micro-state or the error state.
    pub fn with_state(milestone: G::State) -> Result<Self, ParseError> {
        let mut parser = Self::new();
        parser.reset_to(milestone)?;
        Ok(parser)
    }

    /// Returns the current state.
    #[inline]
    pub fn state(&self) -> G::State {
        self.state
    }

    /// Returns true if the parser is latched in the error state.
    #[inline]
    pub fn is_rejected(&self) -> bool {
        self.state == G::ERROR
    }

    /// Returns to the initial state, clearing any error.
    pub fn reset(&mut self) {
        self.state = G::INITIAL;
    }

    /// Jumps to an arbitrary milestone, clearing any error.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NotAMilestone`] if `milestone` is a micro-state or the error state.
    /// The parser is left untouched in that case.
    pub fn reset_to(&mut self, milestone: G::State) -> Result<(), ParseError> {
        ensure!(G::is_milestone(milestone), ParseError::not_a_milestone(milestone));
        self.state = milestone;
        Ok(())
    }

    /// Parses `input` until `target` is reached, a byte is rejected or the input runs out.
    ///
    /// Bytes are consumed from the start of `input`, one transition each. The returned
    /// [`Parsed`] tells which of the three happened, which bytes form the segment of this step
    /// and how many bytes were consumed. The state is updated in every case so that a later
    /// call with more input continues exactly where this one stopped.
    ///
    /// Landing on a milestone ordered after `target` also counts as a match. This only happens
    /// when the next header line is requested and the blank line ending the header block
    /// arrives instead; [`state`](IncrementalParser::state) then tells the two apart.
    ///
    /// On rejection the range runs from the start of the open segment through the offending
    /// byte, so bytes of milestones passed earlier in the same call are not part of it. Callers
    /// that want every byte this call consumed should use `&input[..parsed.consumed()]`, which
    /// ends with the offending byte as well.
    ///
    /// Once rejected, every call returns [`Outcome::Rejected`] with an empty range and consumes
    /// nothing until the parser is reset.
    ///
    /// # Errors
    ///
    /// Only caller misuse is an error; bad input is a [`Outcome::Rejected`] outcome.
    ///
    /// - [`ParseError::NotAMilestone`] if `target` is not a milestone
    /// - [`ParseError::MilestonePassed`] if `target` lies behind the current state
    pub fn parse_until<'a>(&mut self, target: G::State, input: &'a [u8]) -> Result<Parsed<'a>, ParseError> {
        if self.state == G::ERROR {
            return Ok(Parsed::new(Outcome::Rejected, input, 0..0, 0));
        }

        ensure!(G::is_milestone(target), ParseError::not_a_milestone(target));
        ensure!(self.state <= target, ParseError::milestone_passed(self.state, target));

        if self.state == target && !G::is_repeatable(target) {
            return Ok(Parsed::new(Outcome::Matched, input, 0..0, 0));
        }

        // offsets of the first and one past the last token byte of the open segment
        let mut token: Option<(usize, usize)> = None;

        for (offset, &byte) in input.iter().enumerate() {
            match G::step(self.state, byte) {
                Step::Token(next) => {
                    token = Some((token.map_or(offset, |(start, _)| start), offset + 1));
                    self.state = next;
                }
                Step::Delimiter(next) => self.state = next,
                Step::Reject => {
                    debug!(state = ?self.state, offset, byte, "rejected byte");
                    let start = token.map_or(offset, |(start, _)| start);
                    self.state = G::ERROR;
                    return Ok(Parsed::new(Outcome::Rejected, input, start..offset + 1, offset + 1));
                }
            }

            if !G::is_milestone(self.state) {
                continue;
            }

            if self.state >= target {
                trace!(state = ?self.state, consumed = offset + 1, "reached milestone");
                let span = token.map_or(offset + 1..offset + 1, |(start, end)| start..end);
                return Ok(Parsed::new(Outcome::Matched, input, span, offset + 1));
            }

            if !G::spans(self.state, target) {
                token = None;
            }
        }

        trace!(state = ?self.state, consumed = input.len(), "need more input");
        let span = token.map_or(input.len()..input.len(), |(start, end)| start..end);
        Ok(Parsed::new(Outcome::Indeterminate, input, span, input.len()))
    }
}

impl<G: Grammar> Default for IncrementalParser<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Grammar> Clone for IncrementalParser<G> {
    fn clone(&self) -> Self {
        Self { state: self.state }
    }
}

impl<G: Grammar> fmt::Debug for IncrementalParser<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IncrementalParser").field("state", &self.state).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `a+;` followed by `b+;`, with `;` delimiting both tokens.
    #[derive(Debug)]
    struct Toy;

    #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
    enum ToyState {
        Start,
        A,
        ADone,
        B,
        BDone,
        Error,
    }

    impl Grammar for Toy {
        type State = ToyState;
        const INITIAL: ToyState = ToyState::Start;
        const ERROR: ToyState = ToyState::Error;
        const MILESTONES: &'static [ToyState] = &[ToyState::Start, ToyState::ADone, ToyState::BDone];

        fn step(state: ToyState, byte: u8) -> Step<ToyState> {
            use ToyState::*;
            match (state, byte) {
                (Start | A, b'a') => Step::Token(A),
                (A, b';') => Step::Delimiter(ADone),
                (ADone | B, b'b') => Step::Token(B),
                (B, b';') => Step::Delimiter(BDone),
                _ => Step::Reject,
            }
        }
    }

    type ToyParser = IncrementalParser<Toy>;

    #[test]
    fn matched_range_excludes_delimiter() {
        let mut p = ToyParser::new();
        let parsed = p.parse_until(ToyState::ADone, b"aaa;bb").unwrap();

        assert!(parsed.is_matched());
        assert_eq!(parsed.range(), b"aaa");
        assert_eq!(parsed.consumed(), 4);
        assert_eq!(parsed.remainder(), b"bb");
        assert_eq!(p.state(), ToyState::ADone);
    }

    #[test]
    fn passing_a_milestone_resets_the_segment() {
        let mut p = ToyParser::new();
        let parsed = p.parse_until(ToyState::BDone, b"aa;bbb;").unwrap();

        assert!(parsed.is_matched());
        assert_eq!(parsed.range(), b"bbb");
    }

    #[test]
    fn indeterminate_keeps_state() {
        let mut p = ToyParser::new();
        let parsed = p.parse_until(ToyState::ADone, b"aa").unwrap();

        assert!(parsed.is_indeterminate());
        assert_eq!(parsed.range(), b"aa");
        assert_eq!(parsed.consumed(), 2);
        assert_eq!(p.state(), ToyState::A);

        let parsed = p.parse_until(ToyState::ADone, b"a;").unwrap();
        assert!(parsed.is_matched());
        assert_eq!(parsed.range(), b"a");
    }

    #[test]
    fn empty_input_is_indeterminate() {
        let mut p = ToyParser::new();
        let parsed = p.parse_until(ToyState::ADone, b"").unwrap();

        assert!(parsed.is_indeterminate());
        assert!(parsed.range().is_empty());
        assert_eq!(p.state(), ToyState::Start);
    }

    #[test]
    fn rejected_range_includes_offending_byte() {
        let mut p = ToyParser::new();
        let parsed = p.parse_until(ToyState::ADone, b"aax;").unwrap();

        assert!(parsed.is_rejected());
        assert_eq!(parsed.range(), b"aax");
        assert_eq!(parsed.consumed(), 3);
        assert!(p.is_rejected());
    }

    #[test]
    fn rejected_range_starts_at_the_open_segment() {
        let mut p = ToyParser::new();
        let input = b"aa;bx;";
        let parsed = p.parse_until(ToyState::BDone, input).unwrap();

        assert!(parsed.is_rejected());
        assert_eq!(parsed.range(), b"bx");
        assert_eq!(&input[..parsed.consumed()], b"aa;bx");
    }

    #[test]
    fn rejected_is_latched_until_reset() {
        let mut p = ToyParser::new();
        assert!(p.parse_until(ToyState::ADone, b"x").unwrap().is_rejected());

        let again = p.parse_until(ToyState::ADone, b"a;").unwrap();
        assert!(again.is_rejected());
        assert!(again.range().is_empty());
        assert_eq!(again.consumed(), 0);

        p.reset();
        assert!(p.parse_until(ToyState::ADone, b"a;").unwrap().is_matched());
    }

    #[test]
    fn reset_to_milestone() {
        let mut p = ToyParser::with_state(ToyState::ADone).unwrap();
        assert!(p.parse_until(ToyState::BDone, b"b;").unwrap().is_matched());

        p.reset_to(ToyState::ADone).unwrap();
        assert_eq!(p.state(), ToyState::ADone);
    }

    #[test]
    fn reset_to_micro_state_fails() {
        let mut p = ToyParser::new();
        let err = p.reset_to(ToyState::A).unwrap_err();

        assert!(matches!(err, ParseError::NotAMilestone { .. }));
        assert_eq!(p.state(), ToyState::Start);
        assert!(ToyParser::with_state(ToyState::Error).is_err());
    }

    #[test]
    fn target_behind_current_state_fails() {
        let mut p = ToyParser::with_state(ToyState::BDone).unwrap();
        let err = p.parse_until(ToyState::ADone, b"a;").unwrap_err();

        assert!(matches!(err, ParseError::MilestonePassed { .. }));
        assert_eq!(p.state(), ToyState::BDone);
    }

    #[test]
    fn target_must_be_milestone() {
        let mut p = ToyParser::new();
        let err = p.parse_until(ToyState::B, b"a;b").unwrap_err();

        assert!(matches!(err, ParseError::NotAMilestone { .. }));
    }

    #[test]
    fn target_equal_to_current_matches_immediately() {
        let mut p = ToyParser::with_state(ToyState::ADone).unwrap();
        let parsed = p.parse_until(ToyState::ADone, b"b;").unwrap();

        assert!(parsed.is_matched());
        assert_eq!(parsed.consumed(), 0);
        assert_eq!(p.state(), ToyState::ADone);
    }

    #[test]
    fn same_input_same_result() {
        let input = b"aaaa;bb;";
        let first = ToyParser::new().parse_until(ToyState::BDone, input).unwrap();
        let second = ToyParser::new().parse_until(ToyState::BDone, input).unwrap();

        assert_eq!(first, second);
    }
}
