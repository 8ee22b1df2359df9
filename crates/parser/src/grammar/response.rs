//! HTTP response head: status line followed by the header block.
//!
//! ```text
//! status-line   = HTTP-version SP status-code SP reason-phrase CRLF
//! status-code   = 3DIGIT
//! reason-phrase = *( any byte except CR and LF )
//! ```
//!
//! The status code is delimited, not converted: the range returned for
//! [`StatusDone`](ResponseState::StatusDone) holds the three raw digit bytes.

use crate::engine::{Grammar, IncrementalParser, Step};
use crate::grammar::header::HeaderState;
use crate::grammar::version::{VersionState, VersionStep};

const STATUS_DIGITS: u8 = 3;

/// Position inside a response head, in parse order.
///
/// The milestones are [`Start`](ResponseState::Start),
/// [`VersionDone`](ResponseState::VersionDone), [`StatusDone`](ResponseState::StatusDone),
/// [`StatusMessageDone`](ResponseState::StatusMessageDone),
/// [`HEADER_LINE_DONE`](ResponseState::HEADER_LINE_DONE) and
/// [`HEADERS_DONE`](ResponseState::HEADERS_DONE).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResponseState {
    Start,
    Version(VersionState),
    VersionDone,
    /// Number of status digits seen so far
    Status(u8),
    StatusDone,
    StatusMessage,
    StatusMessageCr,
    StatusMessageDone,
    Header(HeaderState),
    Error,
}

impl ResponseState {
    pub const HEADER_LINE_DONE: ResponseState = ResponseState::Header(HeaderState::LineDone);
    pub const HEADERS_DONE: ResponseState = ResponseState::Header(HeaderState::Done);
}

/// Transition table of the response head.
#[derive(Debug, Copy, Clone, Default)]
pub struct ResponseGrammar;

/// Incremental parser for response heads.
pub type ResponseParser = IncrementalParser<ResponseGrammar>;

impl Grammar for ResponseGrammar {
    type State = ResponseState;

    const INITIAL: ResponseState = ResponseState::Start;
    const ERROR: ResponseState = ResponseState::Error;
    const MILESTONES: &'static [ResponseState] = &[
        ResponseState::Start,
        ResponseState::VersionDone,
        ResponseState::StatusDone,
        ResponseState::StatusMessageDone,
        ResponseState::HEADER_LINE_DONE,
        ResponseState::HEADERS_DONE,
    ];

    fn step(state: ResponseState, byte: u8) -> Step<ResponseState> {
        use ResponseState::*;

        match state {
            Start => VersionState::begin(byte).map(Version),
            Version(version) => match version.advance(byte, b' ') {
                VersionStep::Next(next) => Step::Token(Version(next)),
                VersionStep::End => Step::Delimiter(VersionDone),
                VersionStep::Reject => Step::Reject,
            },
            VersionDone if byte.is_ascii_digit() => Step::Token(Status(1)),
            Status(n) if n < STATUS_DIGITS && byte.is_ascii_digit() => Step::Token(Status(n + 1)),
            Status(STATUS_DIGITS) if byte == b' ' => Step::Delimiter(StatusDone),
            StatusDone | StatusMessage => match byte {
                b'\r' => Step::Delimiter(StatusMessageCr),
                b'\n' => Step::Reject,
                _ => Step::Token(StatusMessage),
            },
            StatusMessageCr if byte == b'\n' => Step::Delimiter(StatusMessageDone),
            StatusMessageDone => HeaderState::line_start(byte).map(Header),
            Header(header) => header.advance(byte).map(Header),
            _ => Step::Reject,
        }
    }

    fn is_repeatable(milestone: ResponseState) -> bool {
        milestone == ResponseState::HEADER_LINE_DONE
    }

    fn spans(passed: ResponseState, target: ResponseState) -> bool {
        passed == ResponseState::HEADER_LINE_DONE && target == ResponseState::HEADERS_DONE
    }
}
