//! Streaming codec built on the incremental parsers.
//!
//! [`MilestoneDecoder`] plugs a [`RequestParser`](crate::grammar::RequestParser) or
//! [`ResponseParser`](crate::grammar::ResponseParser) into `tokio_util::codec`, so a
//! `FramedRead` over a socket yields the segments of a message head as they arrive.
//!
//! # Example
//!
//! ```
//! use bytes::BytesMut;
//! use micro_http_parser::codec::RequestHeadDecoder;
//! use micro_http_parser::grammar::RequestState;
//! use tokio_util::codec::Decoder;
//!
//! let mut decoder = RequestHeadDecoder::new();
//! let mut buffer = BytesMut::from(&b"GET /index.html HT"[..]);
//!
//! let method = decoder.decode(&mut buffer).unwrap().unwrap();
//! assert_eq!(method.milestone(), RequestState::MethodDone);
//! assert_eq!(&method.bytes()[..], b"GET");
//!
//! let uri = decoder.decode(&mut buffer).unwrap().unwrap();
//! assert_eq!(&uri.bytes()[..], b"/index.html");
//!
//! // the version is not complete yet, more data is needed
//! assert!(decoder.decode(&mut buffer).unwrap().is_none());
//!
//! buffer.extend_from_slice(b"TP/1.1\r\n\r\n");
//! let version = decoder.decode(&mut buffer).unwrap().unwrap();
//! assert_eq!(&version.bytes()[..], b"HTTP/1.1");
//! ```
//!
//! # Limits
//!
//! The size of a head is bounded by [`DecoderConfig::max_head_size`], 8KB by default.

mod config;
mod milestone_decoder;

pub use config::{DecoderConfig, HeaderGranularity, DEFAULT_MAX_HEAD_SIZE};
pub use milestone_decoder::{MilestoneDecoder, RequestHeadDecoder, ResponseHeadDecoder, Segment};
