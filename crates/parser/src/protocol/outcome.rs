use std::ops::Range;

/// Result of a single [`parse_until`](crate::engine::IncrementalParser::parse_until) call.
///
/// This is a three-valued logic: the target milestone was reached, the input was proven
/// invalid, or there were not enough bytes to tell either way.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The target milestone was reached
    Matched,
    /// A byte did not fit the grammar, the parser is latched in its error state
    Rejected,
    /// Input ran out before the target or an error could be determined
    Indeterminate,
}

impl Outcome {
    #[inline]
    pub fn is_matched(&self) -> bool {
        matches!(self, Outcome::Matched)
    }

    #[inline]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected)
    }

    #[inline]
    pub fn is_indeterminate(&self) -> bool {
        matches!(self, Outcome::Indeterminate)
    }
}

/// The outcome of a parse step together with a view into the input of that step.
///
/// `Parsed` borrows the input slice handed to the call that produced it; it never points into
/// the buffer of an earlier call.
///
/// - [`range`](Parsed::range) is the segment belonging to the step: the token bytes on a match
///   (delimiters excluded), the partial segment when more input is needed, or everything from
///   the segment start through the offending byte on rejection.
/// - [`consumed`](Parsed::consumed) is how many input bytes the parser used, so
///   [`remainder`](Parsed::remainder) is what the caller has to feed next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed<'a> {
    outcome: Outcome,
    input: &'a [u8],
    span: Range<usize>,
    consumed: usize,
}

impl<'a> Parsed<'a> {
    pub(crate) fn new(outcome: Outcome, input: &'a [u8], span: Range<usize>, consumed: usize) -> Self {
        debug_assert!(span.start <= span.end && span.end <= consumed && consumed <= input.len());
        Self { outcome, input, span, consumed }
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Bytes of the input that make up this step's segment.
    #[inline]
    pub fn range(&self) -> &'a [u8] {
        &self.input[self.span.clone()]
    }

    /// Offsets of [`range`](Parsed::range) within the input.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    #[inline]
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// The unconsumed suffix of the input.
    #[inline]
    pub fn remainder(&self) -> &'a [u8] {
        &self.input[self.consumed..]
    }

    #[inline]
    pub fn is_matched(&self) -> bool {
        self.outcome.is_matched()
    }

    #[inline]
    pub fn is_rejected(&self) -> bool {
        self.outcome.is_rejected()
    }

    #[inline]
    pub fn is_indeterminate(&self) -> bool {
        self.outcome.is_indeterminate()
    }
}
