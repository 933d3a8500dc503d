//! Error types for koyomi-rs.
//!
//! All fallible operations in the workspace return [`Result`]; the engine
//! performs no I/O, so every error is a synchronous return value at the
//! point of call.

use thiserror::Error;

/// The top-level error type used throughout koyomi-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed or out-of-range date components.
    #[error("date error: {0}")]
    Date(String),

    /// Precondition violated (raised by the `ensure!` macro).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A solar-term name that is not one of the 24 recognized terms.
    #[error("unknown solar term: {0:?}")]
    UnknownSolarTerm(String),
}

/// Shorthand `Result` type used throughout koyomi-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Check a precondition, returning `Err(Error::Precondition(...))` if it
/// does not hold.
///
/// # Example
/// ```
/// use koyomi_core::{ensure, errors::Result};
/// fn month(m: u8) -> Result<u8> {
///     ensure!((1..=12).contains(&m), "month {m} out of range [1, 12]");
///     Ok(m)
/// }
/// assert!(month(5).is_ok());
/// assert!(month(13).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
