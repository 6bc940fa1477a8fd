//! # binperm
//!
//! Lazy enumeration of every binary permutation of a fixed width, optionally
//! filtered by the number of set bits and rendered as booleans, text or digits.
//!
//! ## Key Features
//!
//! - **Lazy**: Permutations are produced one at a time, on demand. Asking for the
//!   first permutation of a 50 000-bit width is as cheap as for 4 bits
//! - **Ordered**: Ascending binary counting order, from all zeros to all ones
//! - **Filtered**: Only permutations whose ones-count falls in
//!   `[min_ones, max_ones]` are yielded; the rest are skipped inside the iterator
//! - **Exact counts**: [`count_combinations`] returns `2^n` as a [`BigUint`] for
//!   any width
//! - **No Unsafe Code**: Written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use binperm::{enumerate, Permutation};
//!
//! let all: Vec<Permutation> = enumerate(2).unwrap().collect();
//! assert_eq!(
//!     all,
//!     vec![
//!         Permutation::Boolean(vec![false, false]),
//!         Permutation::Boolean(vec![false, true]),
//!         Permutation::Boolean(vec![true, false]),
//!         Permutation::Boolean(vec![true, true]),
//!     ]
//! );
//! ```
//!
//! ### Formats and Filters
//!
//! ```rust
//! use binperm::{enumerate_with_options, Format, PermutationOptions};
//!
//! let options = PermutationOptions::new()
//!     .with_format(Format::String)
//!     .with_min_ones(3);
//!
//! let strings: Vec<String> = enumerate_with_options(4, options)
//!     .unwrap()
//!     .map(String::from)
//!     .collect();
//! assert_eq!(strings, vec!["0111", "1011", "1101", "1110", "1111"]);
//! ```
//!
//! ### Validation
//!
//! The bit length is checked eagerly, before the iterator exists:
//!
//! ```rust
//! use binperm::{enumerate, Error};
//!
//! assert!(matches!(enumerate(-1), Err(Error::InvalidArgument(_))));
//! assert!(matches!(enumerate(1.5), Err(Error::InvalidArgument(_))));
//! ```
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - Enumerating in each format
//! - **`filtered.rs`** - Restricting the ones-count band
//! - **`large_n.rs`** - Pulling a few permutations from a huge width
//!
//! Run any example with: `cargo run --example <name>`

pub mod bit_length;
pub mod error;
pub mod iter;
pub mod options;
pub mod permutation;

pub use bit_length::IntoBitLength;
pub use error::{Error, Result};
pub use iter::Permutations;
pub use num_bigint::BigUint;
pub use options::{Format, PermutationOptions};
pub use permutation::Permutation;

/// Enumerates every permutation of `n` bits as booleans, unfiltered.
///
/// # Examples
///
/// ```rust
/// use binperm::enumerate;
///
/// let perms = enumerate(4).unwrap();
/// assert_eq!(perms.count(), 16);
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `n` is not a non-negative integer.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn enumerate<N>(n: N) -> Result<Permutations>
where
    N: IntoBitLength,
{
    enumerate_with_options(n, PermutationOptions::default())
}

/// Enumerates the permutations of `n` bits with custom options.
///
/// Allows choosing the output format and the band of allowed ones-counts.
/// Options are resolved once, here; an inverted band yields an empty iterator
/// rather than an error.
///
/// # Examples
///
/// ```rust
/// use binperm::{enumerate_with_options, Format, Permutation, PermutationOptions};
///
/// let options = PermutationOptions::new()
///     .with_format(Format::Number)
///     .with_max_ones(1);
/// let mut perms = enumerate_with_options(3, options).unwrap();
/// assert_eq!(perms.next(), Some(Permutation::Number(vec![0, 0, 0])));
/// assert_eq!(perms.next(), Some(Permutation::Number(vec![0, 0, 1])));
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `n` is not a non-negative integer.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn enumerate_with_options<N>(n: N, options: PermutationOptions) -> Result<Permutations>
where
    N: IntoBitLength,
{
    let bit_length = n.into_bit_length()?;
    Ok(Permutations::new(bit_length, options))
}

/// Returns the number of distinct `n`-bit combinations, `2^n`.
///
/// Filters play no part here. The result is exact for any width.
///
/// # Examples
///
/// ```rust
/// use binperm::{count_combinations, BigUint};
///
/// assert_eq!(count_combinations(0), BigUint::from(1u8));
/// assert_eq!(count_combinations(4), BigUint::from(16u8));
/// assert_eq!(count_combinations(100).bits(), 101);
/// ```
#[must_use]
pub fn count_combinations(n: usize) -> BigUint {
    BigUint::from(1u8) << n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerate_defaults() {
        let perms = enumerate(3u32).unwrap();
        assert_eq!(perms.format(), Format::Boolean);
        assert_eq!(perms.ones_range(), 0..=3);
        assert_eq!(perms.count(), 8);
    }

    #[test]
    fn test_enumerate_rejects_before_iteration() {
        assert_eq!(enumerate(-1).unwrap_err(), Error::invalid_bit_length());
        assert_eq!(enumerate(1.5).unwrap_err(), Error::invalid_bit_length());
        assert_eq!(enumerate("x").unwrap_err(), Error::invalid_bit_length());
    }

    #[test]
    fn test_count_combinations() {
        assert_eq!(count_combinations(0), BigUint::from(1u8));
        assert_eq!(count_combinations(10), BigUint::from(1024u32));
        assert_eq!(count_combinations(64), BigUint::from(u64::MAX) + 1u8);
        assert_eq!(count_combinations(50_000).bits(), 50_001);
    }
}
