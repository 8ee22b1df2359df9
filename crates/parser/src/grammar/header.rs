//! The header block shared by requests and responses.
//!
//! ```text
//! header-line = name ":" *SP value CRLF
//! name        = 1*( visible ASCII except ":", or any byte >= 0x80 )
//! value       = *( any byte except CR and LF )
//! block       = *header-line CRLF
//! ```
//!
//! The name and value are kept verbatim: no case folding, no trimming of trailing
//! whitespace. The CRLF ending a line is a delimiter, everything before it is part of the
//! line's segment.

use crate::engine::Step;

/// Position inside the header block.
///
/// The line states cycle, so the derived order is only meaningful relative to the two
/// milestones: every line state sorts before [`LineDone`](HeaderState::LineDone), which sorts
/// before [`Done`](HeaderState::Done).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeaderState {
    Name,
    /// Spaces between the colon and the value
    ValueLws,
    Value,
    /// CR ending a header line
    LineCr,
    /// CR of the blank line ending the block
    EndCr,
    /// A complete header line was consumed
    LineDone,
    /// The blank line was consumed
    Done,
}

#[inline]
fn is_name_byte(byte: u8) -> bool {
    (byte.is_ascii_graphic() || !byte.is_ascii()) && byte != b':'
}

impl HeaderState {
    /// Transition at the start of a line: after the start line, or after a complete header line.
    pub(crate) fn line_start(byte: u8) -> Step<HeaderState> {
        match byte {
            b'\r' => Step::Delimiter(HeaderState::EndCr),
            b if is_name_byte(b) => Step::Token(HeaderState::Name),
            _ => Step::Reject,
        }
    }

    pub(crate) fn advance(self, byte: u8) -> Step<HeaderState> {
        use HeaderState::*;

        match (self, byte) {
            (LineDone, b) => HeaderState::line_start(b),
            (Name, b':') => Step::Token(ValueLws),
            (Name, b) if is_name_byte(b) => Step::Token(Name),
            (ValueLws, b' ') => Step::Token(ValueLws),
            (ValueLws | Value, b'\r') => Step::Delimiter(LineCr),
            (ValueLws | Value, b'\n') => Step::Reject,
            (ValueLws | Value, _) => Step::Token(Value),
            (LineCr, b'\n') => Step::Delimiter(LineDone),
            (EndCr, b'\n') => Step::Delimiter(Done),
            _ => Step::Reject,
        }
    }
}
