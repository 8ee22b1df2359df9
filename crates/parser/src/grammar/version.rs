//! `HTTP/<digits>.<digits>`, shared by the request line and the status line.
//!
//! Only the lexical shape is checked, any major/minor digits are accepted. The byte that ends
//! the token differs between the two grammars (CR for a request, SP for a response) and is
//! passed in by the caller.

use crate::engine::Step;

const PREFIX: &[u8; 5] = b"HTTP/";

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VersionState {
    /// The first `n` bytes of `HTTP/` matched
    Prefix(u8),
    Major,
    Dot,
    Minor,
}

/// What a byte did to the version token.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum VersionStep {
    Next(VersionState),
    /// The terminator after the minor digits
    End,
    Reject,
}

impl VersionState {
    /// Transition out of the milestone preceding the version token.
    pub(crate) fn begin(byte: u8) -> Step<VersionState> {
        if byte == PREFIX[0] { Step::Token(VersionState::Prefix(1)) } else { Step::Reject }
    }

    pub(crate) fn advance(self, byte: u8, terminator: u8) -> VersionStep {
        use VersionState::*;

        match self {
            Prefix(n) if usize::from(n) < PREFIX.len() => {
                if byte == PREFIX[usize::from(n)] {
                    VersionStep::Next(Prefix(n + 1))
                } else {
                    VersionStep::Reject
                }
            }
            Prefix(_) if byte.is_ascii_digit() => VersionStep::Next(Major),
            Major if byte.is_ascii_digit() => VersionStep::Next(Major),
            Major if byte == b'.' => VersionStep::Next(Dot),
            Dot | Minor if byte.is_ascii_digit() => VersionStep::Next(Minor),
            Minor if byte == terminator => VersionStep::End,
            _ => VersionStep::Reject,
        }
    }
}
