//! Error types for binary permutation enumeration.
//!
//! Enumeration itself cannot fail once started. The only failure is rejecting
//! a bit length that is not a non-negative integer, which happens eagerly,
//! before the first permutation is produced.
//!
//! ## Examples
//!
//! ```rust
//! use binperm::{enumerate, Error};
//!
//! let result = enumerate(-1);
//! assert!(matches!(result, Err(Error::InvalidArgument(_))));
//!
//! if let Err(err) = result {
//!     assert_eq!(err.to_string(), "n must be a non-negative integer");
//! }
//! ```

use thiserror::Error;

/// Message carried by every rejected bit length.
pub const INVALID_BIT_LENGTH: &str = "n must be a non-negative integer";

/// Represents all errors the enumerator can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An argument failed validation. The message is displayed verbatim.
    #[error("{0}")]
    InvalidArgument(String),
}

impl Error {
    /// Creates an invalid argument error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binperm::Error;
    ///
    /// let err = Error::invalid_argument("bad input");
    /// assert_eq!(err.to_string(), "bad input");
    /// ```
    pub fn invalid_argument<T: Into<String>>(msg: T) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// The error reported for a bit length that is negative, fractional,
    /// non-finite or not a number at all.
    pub fn invalid_bit_length() -> Self {
        Error::invalid_argument(INVALID_BIT_LENGTH)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_bit_length_message() {
        let err = Error::invalid_bit_length();
        assert_eq!(err.to_string(), "n must be a non-negative integer");
        assert_eq!(err, Error::InvalidArgument(INVALID_BIT_LENGTH.to_string()));
    }
}
