//! Types shared by the engine, the grammars and the codec.
//!
//! - [`Outcome`]: the three-valued result of a parse step
//! - [`Parsed`]: an outcome together with the consumed range of the caller's input
//! - [`ParseError`]: caller misuse and codec level failures

mod outcome;
pub use outcome::Outcome;
pub use outcome::Parsed;

mod error;
pub use error::ParseError;
