//! Incremental, restartable parsing of HTTP/1.x message heads
//!
//! This crate splits the head of an HTTP request or response into its lexical pieces
//! (method, target, version, status code, reason phrase, header lines) while the bytes are still
//! arriving. Parsing can stop at any byte boundary and resume with the next read; the only state
//! carried between calls is a small `Copy` enum, and nothing is buffered or allocated.
//!
//! # Features
//!
//! - Stop-and-resume parsing at caller chosen checkpoints ("milestones")
//! - Strict validation of the request line, the status line and the header block
//! - Zero-copy: every result is a sub-slice of the input
//! - A `tokio_util` [`Decoder`](tokio_util::codec::Decoder) that yields the head segment by segment
//!
//! # Example
//!
//! ```
//! use micro_http_parser::grammar::{RequestParser, RequestState};
//! use micro_http_parser::protocol::Outcome;
//!
//! let mut parser = RequestParser::new();
//!
//! let parsed = parser.parse_until(RequestState::MethodDone, b"GET /index.html HTTP/1.1\r\n").unwrap();
//! assert_eq!(parsed.outcome(), Outcome::Matched);
//! assert_eq!(parsed.range(), b"GET");
//!
//! // continue with what the first call left over
//! let rest = parsed.remainder();
//! let parsed = parser.parse_until(RequestState::UriDone, rest).unwrap();
//! assert_eq!(parsed.range(), b"/index.html");
//!
//! // not enough input yet: the parser keeps its place
//! let parsed = parser.parse_until(RequestState::VersionDone, b"HTTP/1").unwrap();
//! assert_eq!(parsed.outcome(), Outcome::Indeterminate);
//! assert_eq!(parser.state(), RequestState::Version(micro_http_parser::grammar::VersionState::Major));
//!
//! let parsed = parser.parse_until(RequestState::VersionDone, b".1\r\n").unwrap();
//! assert_eq!(parsed.outcome(), Outcome::Matched);
//! ```
//!
//! # Architecture
//!
//! - [`engine`]: the grammar-agnostic driver, [`IncrementalParser`](engine::IncrementalParser)
//! - [`grammar`]: the request and response grammars and their states
//! - [`protocol`]: outcomes and errors
//! - [`codec`]: the streaming decoder on top of the parsers
//!
//! # Limitations
//!
//! - Only the head is parsed; bodies, chunked encoding and trailers are left to the caller
//! - Header values are returned verbatim; nothing is decoded or folded
//! - Maximum head size in the decoder: 8KB by default

pub mod codec;
pub mod engine;
pub mod grammar;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;
