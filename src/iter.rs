//! The lazy permutation iterator.
//!
//! [`Permutations`] walks every `n`-bit combination in ascending binary
//! counting order, from all zeros to all ones, and yields those whose number of
//! set bits lies in the configured band.
//!
//! ## Counter Representation
//!
//! The counter is an `n`-digit register stored most-significant bit first and
//! incremented in place, with the ones-count updated alongside it. Nothing is
//! bounded by a native integer width, so the first permutation of a
//! 50 000-bit enumeration costs one allocation and no iteration:
//!
//! ```rust
//! use binperm::{enumerate, Permutation};
//!
//! let mut perms = enumerate(50_000).unwrap();
//! assert_eq!(perms.next(), Some(Permutation::Boolean(vec![false; 50_000])));
//! ```
//!
//! Advancing is amortized O(1) per counter step plus O(n) to render each
//! yielded permutation.

use crate::options::{Format, PermutationOptions};
use crate::Permutation;
use std::iter::FusedIterator;
use std::ops::RangeInclusive;

/// Lazy, one-shot iterator over the binary permutations of a fixed width.
///
/// Created by [`enumerate`](crate::enumerate),
/// [`enumerate_with_options`](crate::enumerate_with_options) or
/// [`Permutations::new`].
#[derive(Debug)]
pub struct Permutations {
    bits: Vec<bool>,
    ones: usize,
    format: Format,
    min_ones: usize,
    max_ones: usize,
    emitted: usize,
    done: bool,
}

impl Permutations {
    /// Starts an enumeration over `bit_length` bits.
    ///
    /// Options are resolved here, once: an unset `max_ones` becomes
    /// `bit_length`. A band no permutation can satisfy yields nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binperm::{Permutations, PermutationOptions};
    ///
    /// let perms = Permutations::new(3, PermutationOptions::new().with_min_ones(2));
    /// assert_eq!(perms.ones_range(), 2..=3);
    /// assert_eq!(perms.count(), 4);
    /// ```
    #[must_use]
    pub fn new(bit_length: usize, options: PermutationOptions) -> Self {
        let max_ones = options.resolved_max_ones(bit_length);
        let min_ones = options.min_ones;
        let done = min_ones > max_ones || min_ones > bit_length;

        tracing::debug!(
            bit_length,
            format = %options.format,
            min_ones,
            max_ones,
            "starting binary permutation enumeration"
        );
        if done {
            tracing::trace!(bit_length, min_ones, max_ones, "ones band is empty");
        }

        Permutations {
            bits: vec![false; bit_length],
            ones: 0,
            format: options.format,
            min_ones,
            max_ones,
            emitted: 0,
            done,
        }
    }

    /// Width of every yielded permutation.
    #[must_use]
    pub fn bit_length(&self) -> usize {
        self.bits.len()
    }

    /// Format of every yielded permutation.
    #[must_use]
    pub fn format(&self) -> Format {
        self.format
    }

    /// Inclusive band of ones-counts that are yielded.
    #[must_use]
    pub fn ones_range(&self) -> RangeInclusive<usize> {
        self.min_ones..=self.max_ones
    }

    fn in_band(&self) -> bool {
        (self.min_ones..=self.max_ones).contains(&self.ones)
    }

    /// Current counter value. Only called when the width fits in `usize`.
    fn position(&self) -> usize {
        self.bits
            .iter()
            .fold(0usize, |acc, &bit| (acc << 1) | usize::from(bit))
    }

    /// Adds one to the counter. Returns false on wrap-around past all ones.
    fn advance(&mut self) -> bool {
        for bit in self.bits.iter_mut().rev() {
            if *bit {
                *bit = false;
                self.ones -= 1;
            } else {
                *bit = true;
                self.ones += 1;
                return true;
            }
        }
        false
    }
}

impl Iterator for Permutations {
    type Item = Permutation;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let current = self
                .in_band()
                .then(|| Permutation::from_bits(&self.bits, self.format));
            if current.is_some() {
                self.emitted += 1;
            }

            if !self.advance() {
                self.done = true;
                tracing::debug!(
                    bit_length = self.bits.len(),
                    emitted = self.emitted,
                    "binary permutation enumeration exhausted"
                );
            }

            if current.is_some() {
                return current;
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        // The remaining unfiltered domain bounds the rest, when it fits in usize.
        let upper = u32::try_from(self.bits.len())
            .ok()
            .and_then(|n| 1usize.checked_shl(n))
            .map(|total| total - self.position());
        (usize::from(self.in_band()), upper)
    }
}

impl FusedIterator for Permutations {}
