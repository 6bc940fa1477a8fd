//! Validation of bit lengths.
//!
//! Every entry point that takes a bit length accepts any [`IntoBitLength`]
//! value. Unsigned integers are always valid. Signed integers, floats and text
//! are checked and rejected with [`Error::InvalidArgument`] unless they denote
//! a non-negative integer. Blank text reads as zero.
//!
//! ```rust
//! use binperm::IntoBitLength;
//!
//! assert_eq!(4u32.into_bit_length(), Ok(4));
//! assert_eq!(4.0f64.into_bit_length(), Ok(4));
//! assert_eq!(" 4 ".into_bit_length(), Ok(4));
//! assert!((-1i32).into_bit_length().is_err());
//! assert!(1.5f64.into_bit_length().is_err());
//! assert!("four".into_bit_length().is_err());
//! ```

use crate::{Error, Result};

/// Conversion into a validated bit length.
pub trait IntoBitLength {
    /// Returns the bit length, or an invalid argument error if `self` is not a
    /// non-negative integer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for negative, fractional, non-finite,
    /// out-of-range or unparsable values.
    fn into_bit_length(self) -> Result<usize>;
}

macro_rules! impl_into_bit_length {
    ($($t:ty),*) => {
        $(
            impl IntoBitLength for $t {
                fn into_bit_length(self) -> Result<usize> {
                    usize::try_from(self).map_err(|_| Error::invalid_bit_length())
                }
            }
        )*
    };
}

impl_into_bit_length!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, isize);

impl IntoBitLength for usize {
    fn into_bit_length(self) -> Result<usize> {
        Ok(self)
    }
}

impl IntoBitLength for f64 {
    fn into_bit_length(self) -> Result<usize> {
        // 2^64 as f64 is the first value past usize::MAX on 64-bit targets.
        if self.is_finite() && self >= 0.0 && self.fract() == 0.0 && self < usize::MAX as f64 {
            Ok(self as usize)
        } else {
            Err(Error::invalid_bit_length())
        }
    }
}

impl IntoBitLength for f32 {
    fn into_bit_length(self) -> Result<usize> {
        f64::from(self).into_bit_length()
    }
}

impl IntoBitLength for &str {
    fn into_bit_length(self) -> Result<usize> {
        let text = self.trim();
        if text.is_empty() {
            return Ok(0);
        }
        if let Ok(n) = text.parse::<usize>() {
            return Ok(n);
        }
        text.parse::<f64>()
            .map_err(|_| Error::invalid_bit_length())?
            .into_bit_length()
    }
}

impl IntoBitLength for &String {
    fn into_bit_length(self) -> Result<usize> {
        self.as_str().into_bit_length()
    }
}

impl IntoBitLength for String {
    fn into_bit_length(self) -> Result<usize> {
        self.as_str().into_bit_length()
    }
}
