//! The concrete HTTP/1.x grammars run by the [`engine`](crate::engine).
//!
//! - [`RequestParser`]: request line, then the header block
//! - [`ResponseParser`]: status line, then the header block
//!
//! Both embed the same header sub-grammar ([`HeaderState`]) and the same `HTTP/x.y` token
//! ([`VersionState`]), so the header milestones are spelled the same way in both:
//! [`RequestState::HEADER_LINE_DONE`] / [`ResponseState::HEADER_LINE_DONE`] and
//! [`RequestState::HEADERS_DONE`] / [`ResponseState::HEADERS_DONE`].
//!
//! The grammars follow RFC 7230 §3.1 and §3.2 on the strict side. Tokens are delimited and
//! validated, never interpreted.

mod header;
mod request;
mod response;
mod version;

pub use header::HeaderState;
pub use request::{RequestGrammar, RequestParser, RequestState};
pub use response::{ResponseGrammar, ResponseParser, ResponseState};
pub use version::VersionState;
