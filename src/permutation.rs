//! Rendered binary permutations.
//!
//! This module provides the [`Permutation`] enum, the item type yielded by
//! [`Permutations`](crate::Permutations). Each variant corresponds to one
//! [`Format`] and holds the same fixed-width, most-significant-bit-first digits
//! in a different shape.
//!
//! ## Converting Between Formats
//!
//! ```rust
//! use binperm::{Format, Permutation};
//!
//! let p = Permutation::from_bits(&[false, true, true], Format::String);
//! assert_eq!(p, Permutation::String("011".to_string()));
//!
//! assert_eq!(p.to_bools(), vec![false, true, true]);
//! assert_eq!(p.to_digits(), vec![0, 1, 1]);
//! assert_eq!(p.convert(Format::Number), Permutation::Number(vec![0, 1, 1]));
//! assert_eq!(p.ones_count(), 2);
//! ```
//!
//! ## JSON Shape
//!
//! Permutations serialize untagged: a boolean array, a string, or an array of
//! `0`/`1` integers. An empty array carries no element type, so it always
//! deserializes as `Boolean`, whichever format produced it.
//!
//! ```rust
//! use binperm::Permutation;
//!
//! let p = Permutation::Number(vec![1, 0]);
//! assert_eq!(serde_json::to_string(&p).unwrap(), "[1,0]");
//!
//! let empty: Permutation = serde_json::from_str("[]").unwrap();
//! assert_eq!(empty, Permutation::Boolean(vec![]));
//! ```

use crate::options::Format;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One fixed-width binary combination, rendered in a particular [`Format`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Permutation {
    /// One `bool` per bit, `true` for a set bit.
    Boolean(Vec<bool>),
    /// Zero-padded binary text made of `'0'` and `'1'`.
    String(String),
    /// One integer per bit, `0` or `1`.
    Number(Vec<u8>),
}

impl Permutation {
    /// Renders most-significant-first `bits` in the given format.
    #[must_use]
    pub fn from_bits(bits: &[bool], format: Format) -> Self {
        match format {
            Format::Boolean => Permutation::Boolean(bits.to_vec()),
            Format::String => {
                Permutation::String(bits.iter().map(|&b| if b { '1' } else { '0' }).collect())
            }
            Format::Number => Permutation::Number(bits.iter().map(|&b| u8::from(b)).collect()),
        }
    }

    /// The format this permutation is rendered in.
    #[must_use]
    pub const fn format(&self) -> Format {
        match self {
            Permutation::Boolean(_) => Format::Boolean,
            Permutation::String(_) => Format::String,
            Permutation::Number(_) => Format::Number,
        }
    }

    /// Number of bits.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Permutation::Boolean(bits) => bits.len(),
            Permutation::String(text) => text.len(),
            Permutation::Number(digits) => digits.len(),
        }
    }

    /// Returns true for the single zero-width permutation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of set bits.
    #[must_use]
    pub fn ones_count(&self) -> usize {
        match self {
            Permutation::Boolean(bits) => bits.iter().filter(|&&b| b).count(),
            Permutation::String(text) => text.bytes().filter(|&c| c == b'1').count(),
            Permutation::Number(digits) => digits.iter().filter(|&&d| d != 0).count(),
        }
    }

    /// The bits as booleans.
    ///
    /// Text digits other than `'1'` and integer digits equal to `0` read as
    /// unset.
    #[must_use]
    pub fn to_bools(&self) -> Vec<bool> {
        match self {
            Permutation::Boolean(bits) => bits.clone(),
            Permutation::String(text) => text.bytes().map(|c| c == b'1').collect(),
            Permutation::Number(digits) => digits.iter().map(|&d| d != 0).collect(),
        }
    }

    /// The bits as `0`/`1` integers.
    #[must_use]
    pub fn to_digits(&self) -> Vec<u8> {
        match self {
            Permutation::Number(digits) => digits.iter().map(|&d| u8::from(d != 0)).collect(),
            other => other.to_bools().into_iter().map(u8::from).collect(),
        }
    }

    /// The bits as zero-padded binary text.
    #[must_use]
    pub fn to_binary_string(&self) -> String {
        self.to_string()
    }

    /// Re-renders the same bits in another format.
    #[must_use]
    pub fn convert(&self, format: Format) -> Permutation {
        if self.format() == format {
            return self.clone();
        }
        Permutation::from_bits(&self.to_bools(), format)
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Permutation::String(text) => f.write_str(text),
            other => {
                for bit in other.to_bools() {
                    f.write_str(if bit { "1" } else { "0" })?;
                }
                Ok(())
            }
        }
    }
}

impl From<Vec<bool>> for Permutation {
    fn from(bits: Vec<bool>) -> Self {
        Permutation::Boolean(bits)
    }
}

impl From<Permutation> for Vec<bool> {
    fn from(p: Permutation) -> Self {
        match p {
            Permutation::Boolean(bits) => bits,
            other => other.to_bools(),
        }
    }
}

impl From<Permutation> for String {
    fn from(p: Permutation) -> Self {
        match p {
            Permutation::String(text) => text,
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bits_each_format() {
        let bits = [true, false, true, true];
        assert_eq!(
            Permutation::from_bits(&bits, Format::Boolean),
            Permutation::Boolean(vec![true, false, true, true])
        );
        assert_eq!(
            Permutation::from_bits(&bits, Format::String),
            Permutation::String("1011".to_string())
        );
        assert_eq!(
            Permutation::from_bits(&bits, Format::Number),
            Permutation::Number(vec![1, 0, 1, 1])
        );
    }

    #[test]
    fn test_zero_width() {
        for format in [Format::Boolean, Format::String, Format::Number] {
            let p = Permutation::from_bits(&[], format);
            assert!(p.is_empty());
            assert_eq!(p.ones_count(), 0);
            assert_eq!(p.to_string(), "");
        }
    }

    #[test]
    fn test_display_matches_binary_text() {
        let p = Permutation::Boolean(vec![false, true, false]);
        assert_eq!(p.to_string(), "010");
        assert_eq!(String::from(p), "010");
    }

    #[test]
    fn test_convert_same_format_is_identity() {
        let p = Permutation::Number(vec![1, 1, 0]);
        assert_eq!(p.convert(Format::Number), p);
        assert_eq!(Vec::<bool>::from(p), vec![true, true, false]);
    }

    #[test]
    fn test_json_shapes() {
        let cases = [
            (Permutation::Boolean(vec![true, false]), "[true,false]"),
            (Permutation::String("10".to_string()), "\"10\""),
            (Permutation::Number(vec![1, 0]), "[1,0]"),
        ];
        for (p, json) in cases {
            assert_eq!(serde_json::to_string(&p).unwrap(), json);
            let back: Permutation = serde_json::from_str(json).unwrap();
            assert_eq!(back, p);
        }
    }

    #[test]
    fn test_zero_width_json_reads_back_as_boolean() {
        for p in [
            Permutation::Boolean(vec![]),
            Permutation::Number(vec![]),
        ] {
            let json = serde_json::to_string(&p).unwrap();
            assert_eq!(json, "[]");
            let back: Permutation = serde_json::from_str(&json).unwrap();
            assert_eq!(back, Permutation::Boolean(vec![]));
            assert_eq!(back.to_digits(), p.to_digits());
        }

        let p = Permutation::String(String::new());
        let back: Permutation = serde_json::from_str(&serde_json::to_string(&p).unwrap()).unwrap();
        assert_eq!(back, p);
    }
}
