//! Utility macros used across the crate.

/// Returns early with an error if a condition is not met.
///
/// Like `assert!`, but hands the error back to the caller instead of panicking.
///
/// ```ignore
/// ensure!(G::is_milestone(target), ParseError::not_a_milestone(target));
/// ```
macro_rules! ensure {
    ($predicate:expr, $error:expr) => {
        if !$predicate {
            return Err($error);
        }
    };
}

pub(crate) use ensure;
