//! Configuration options for binary permutation enumeration.
//!
//! This module provides types to customize what the enumerator yields:
//!
//! - [`PermutationOptions`]: Main configuration struct
//! - [`Format`]: Shape of each yielded permutation (booleans, text or digits)
//!
//! ## Examples
//!
//! ```rust
//! use binperm::{enumerate_with_options, Format, PermutationOptions};
//!
//! // Render as binary text
//! let options = PermutationOptions::new().with_format(Format::String);
//! let all: Vec<String> = enumerate_with_options(2, options)
//!     .unwrap()
//!     .map(|p| p.to_binary_string())
//!     .collect();
//! assert_eq!(all, vec!["00", "01", "10", "11"]);
//!
//! // Keep only permutations with exactly one set bit
//! let options = PermutationOptions::new().with_min_ones(1).with_max_ones(1);
//! assert_eq!(enumerate_with_options(3, options).unwrap().count(), 3);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Output shape of each yielded permutation.
///
/// - **Boolean**: Default, one `bool` per bit
/// - **String**: Zero-padded `'0'`/`'1'` text
/// - **Number**: One `0`/`1` integer per bit
///
/// Names are matched leniently: anything other than `"string"` or `"number"`
/// selects [`Format::Boolean`].
///
/// # Examples
///
/// ```rust
/// use binperm::Format;
///
/// assert_eq!(Format::from_name("string"), Format::String);
/// assert_eq!(Format::from_name("number"), Format::Number);
/// assert_eq!(Format::from_name("hex"), Format::Boolean);
/// assert_eq!(Format::Number.as_str(), "number");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Format {
    #[default]
    Boolean,
    String,
    Number,
}

impl Format {
    /// Returns the name of this format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Format::Boolean => "boolean",
            Format::String => "string",
            Format::Number => "number",
        }
    }

    /// Looks up a format by name, falling back to [`Format::Boolean`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "string" => Format::String,
            "number" => Format::Number,
            _ => Format::Boolean,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Format::from_name(s))
    }
}

impl Serialize for Format {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Format {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Format::from_name(&name))
    }
}

/// Configuration options for enumeration.
///
/// Controls the output [`Format`] and the inclusive band of set-bit counts a
/// permutation must fall into to be yielded. `max_ones` left unset means "no
/// upper limit" and resolves to the bit length when enumeration starts.
///
/// The serde representation uses `format`, `minOnes` and `maxOnes` keys, each
/// optional. Bounds are read as signed integers: a negative `minOnes` loads as
/// `0`, and a negative `maxOnes` admits no ones-count at all, so it loads as
/// the empty band `1..=0`.
///
/// # Examples
///
/// ```rust
/// use binperm::{Format, PermutationOptions};
///
/// let options = PermutationOptions::new();
/// assert_eq!(options.format, Format::Boolean);
/// assert_eq!(options.min_ones, 0);
/// assert_eq!(options.max_ones, None);
///
/// let options = PermutationOptions::new()
///     .with_format(Format::Number)
///     .with_min_ones(2)
///     .with_max_ones(3);
/// assert_eq!(options.resolved_max_ones(8), 3);
///
/// let options: PermutationOptions = serde_json::from_str(r#"{"minOnes":-2}"#).unwrap();
/// assert_eq!(options, PermutationOptions::new());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawPermutationOptions")]
pub struct PermutationOptions {
    pub format: Format,
    pub min_ones: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_ones: Option<usize>,
}

/// Wire form of [`PermutationOptions`], before bounds are clamped.
#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawPermutationOptions {
    format: Format,
    min_ones: i64,
    max_ones: Option<i64>,
}

impl From<RawPermutationOptions> for PermutationOptions {
    fn from(raw: RawPermutationOptions) -> Self {
        let clamp = |bound: i64| usize::try_from(bound.max(0)).unwrap_or(usize::MAX);
        let min_ones = clamp(raw.min_ones);
        let options = PermutationOptions::new()
            .with_format(raw.format)
            .with_min_ones(min_ones);
        match raw.max_ones {
            Some(max) if max < 0 => options.with_min_ones(min_ones.max(1)).with_max_ones(0),
            Some(max) => options.with_max_ones(clamp(max)),
            None => options,
        }
    }
}

impl PermutationOptions {
    /// Creates default options (boolean format, no ones-count filtering).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output format.
    #[must_use]
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Sets the minimum number of set bits a permutation must have.
    #[must_use]
    pub fn with_min_ones(mut self, min_ones: usize) -> Self {
        self.min_ones = min_ones;
        self
    }

    /// Sets the maximum number of set bits a permutation may have.
    #[must_use]
    pub fn with_max_ones(mut self, max_ones: usize) -> Self {
        self.max_ones = Some(max_ones);
        self
    }

    /// Upper bound of the band for an enumeration over `bit_length` bits.
    #[must_use]
    pub fn resolved_max_ones(&self, bit_length: usize) -> usize {
        self.max_ones.unwrap_or(bit_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_lenient_parse() {
        assert_eq!("boolean".parse::<Format>(), Ok(Format::Boolean));
        assert_eq!("string".parse::<Format>(), Ok(Format::String));
        assert_eq!("number".parse::<Format>(), Ok(Format::Number));
        assert_eq!("String".parse::<Format>(), Ok(Format::Boolean));
        assert_eq!("".parse::<Format>(), Ok(Format::Boolean));
    }

    #[test]
    fn test_default_max_ones_resolves_to_bit_length() {
        let options = PermutationOptions::new();
        assert_eq!(options.resolved_max_ones(0), 0);
        assert_eq!(options.resolved_max_ones(12), 12);
    }

    #[test]
    fn test_options_from_json() {
        let options: PermutationOptions =
            serde_json::from_str(r#"{"format":"string","minOnes":1,"maxOnes":2}"#).unwrap();
        assert_eq!(
            options,
            PermutationOptions::new()
                .with_format(Format::String)
                .with_min_ones(1)
                .with_max_ones(2)
        );

        let options: PermutationOptions = serde_json::from_str(r#"{"format":"octal"}"#).unwrap();
        assert_eq!(options, PermutationOptions::default());
    }

    #[test]
    fn test_negative_min_ones_loads_as_zero() {
        let options: PermutationOptions = serde_json::from_str(r#"{"minOnes":-2}"#).unwrap();
        assert_eq!(options.min_ones, 0);
        assert_eq!(options.max_ones, None);
    }

    #[test]
    fn test_negative_max_ones_loads_as_empty_band() {
        let options: PermutationOptions =
            serde_json::from_str(r#"{"format":"string","maxOnes":-1}"#).unwrap();
        assert_eq!(options.format, Format::String);
        assert!(options.min_ones > options.resolved_max_ones(4));

        let options: PermutationOptions =
            serde_json::from_str(r#"{"minOnes":3,"maxOnes":-5}"#).unwrap();
        assert_eq!(options.min_ones, 3);
        assert_eq!(options.max_ones, Some(0));
    }

    #[test]
    fn test_options_to_json_omits_unset_max() {
        let json = serde_json::to_string(&PermutationOptions::new()).unwrap();
        assert_eq!(json, r#"{"format":"boolean","minOnes":0}"#);
    }
}
