//! HTTP request head: request line followed by the header block.
//!
//! ```text
//! request-line = method SP request-target SP HTTP-version CRLF
//! method       = 1*( "A".."Z" )
//! target       = 1*( visible ASCII )
//! ```
//!
//! This is stricter than what browsers tolerate: lowercase methods, tabs inside the target
//! and anything but a single SP between the tokens are rejected.

use crate::engine::{Grammar, IncrementalParser, Step};
use crate::grammar::header::HeaderState;
use crate::grammar::version::{VersionState, VersionStep};

/// Position inside a request head, in parse order.
///
/// The milestones are [`Start`](RequestState::Start), [`MethodDone`](RequestState::MethodDone),
/// [`UriDone`](RequestState::UriDone), [`VersionDone`](RequestState::VersionDone),
/// [`HEADER_LINE_DONE`](RequestState::HEADER_LINE_DONE) and
/// [`HEADERS_DONE`](RequestState::HEADERS_DONE).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RequestState {
    Start,
    Method,
    MethodDone,
    Uri,
    UriDone,
    Version(VersionState),
    VersionCr,
    VersionDone,
    Header(HeaderState),
    Error,
}

impl RequestState {
    pub const HEADER_LINE_DONE: RequestState = RequestState::Header(HeaderState::LineDone);
    pub const HEADERS_DONE: RequestState = RequestState::Header(HeaderState::Done);
}

/// Transition table of the request head.
#[derive(Debug, Copy, Clone, Default)]
pub struct RequestGrammar;

/// Incremental parser for request heads.
pub type RequestParser = IncrementalParser<RequestGrammar>;

impl Grammar for RequestGrammar {
    type State = RequestState;

    const INITIAL: RequestState = RequestState::Start;
    const ERROR: RequestState = RequestState::Error;
    const MILESTONES: &'static [RequestState] = &[
        RequestState::Start,
        RequestState::MethodDone,
        RequestState::UriDone,
        RequestState::VersionDone,
        RequestState::HEADER_LINE_DONE,
        RequestState::HEADERS_DONE,
    ];

    fn step(state: RequestState, byte: u8) -> Step<RequestState> {
        use RequestState::*;

        match state {
            Start | Method if byte.is_ascii_uppercase() => Step::Token(Method),
            Method if byte == b' ' => Step::Delimiter(MethodDone),
            MethodDone | Uri if byte.is_ascii_graphic() => Step::Token(Uri),
            Uri if byte == b' ' => Step::Delimiter(UriDone),
            UriDone => VersionState::begin(byte).map(Version),
            Version(version) => match version.advance(byte, b'\r') {
                VersionStep::Next(next) => Step::Token(Version(next)),
                VersionStep::End => Step::Delimiter(VersionCr),
                VersionStep::Reject => Step::Reject,
            },
            VersionCr if byte == b'\n' => Step::Delimiter(VersionDone),
            VersionDone => HeaderState::line_start(byte).map(Header),
            Header(header) => header.advance(byte).map(Header),
            _ => Step::Reject,
        }
    }

    fn is_repeatable(milestone: RequestState) -> bool {
        milestone == RequestState::HEADER_LINE_DONE
    }

    fn spans(passed: RequestState, target: RequestState) -> bool {
        passed == RequestState::HEADER_LINE_DONE && target == RequestState::HEADERS_DONE
    }
}
