// SPDX-License-Identifier: MIT
//
// Color — an immutable 8-bit RGB triple.
//
// All color math in this crate happens on integer channels. There is no
// float pipeline and no perceptual space: the quantizer wants cheap
// channel arithmetic, and highlight commands want the exact lowercase
// hex form back out. A `Color` is constructed either from a `#rrggbb`
// literal or from raw channel values, and never changes afterwards.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// ─── ParseColorError ─────────────────────────────────────────────────────────

/// Why a hex color literal failed to parse.
///
/// The accepted shape is exactly `#` followed by six hex digits,
/// case-insensitive. Anything else — a missing hash, three-digit
/// shorthand, an alpha suffix — is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// The input did not start with `#`.
    #[error("color {0:?} does not start with '#'")]
    MissingHash(String),

    /// The input did not have exactly six digits after the `#`.
    #[error("color {0:?} must have exactly six hex digits after '#'")]
    BadLength(String),

    /// A character after the `#` was not a hex digit.
    #[error("color {input:?} contains a non-hex digit {digit:?}")]
    BadDigit {
        /// The full rejected input.
        input: String,
        /// The offending character.
        digit: char,
    },
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// An immutable 8-bit RGB triple.
///
/// # Examples
///
/// ```
/// use sl_color::Color;
///
/// let sky = Color::parse("#729FCF")?;
/// assert_eq!(sky, Color::rgb(0x72, 0x9f, 0xcf));
/// assert_eq!(sky.to_hex(), "#729fcf");
/// # Ok::<(), sl_color::ParseColorError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel, 0–255.
    pub r: u8,
    /// Green channel, 0–255.
    pub g: u8,
    /// Blue channel, 0–255.
    pub b: u8,
}

impl Color {
    /// Create a color from raw channel values.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` literal, case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseColorError`] unless the input is `#` followed by
    /// exactly six hex digits.
    pub fn parse(s: &str) -> Result<Self, ParseColorError> {
        let Some(digits) = s.strip_prefix('#') else {
            return Err(ParseColorError::MissingHash(s.to_string()));
        };
        let bytes = digits.as_bytes();
        if bytes.len() != 6 {
            return Err(ParseColorError::BadLength(s.to_string()));
        }

        let mut chan = [0u8; 6];
        for (i, &byte) in bytes.iter().enumerate() {
            chan[i] = hex_digit(byte).ok_or_else(|| ParseColorError::BadDigit {
                input: s.to_string(),
                digit: char::from(byte),
            })?;
        }

        Ok(Self::rgb(
            chan[0] << 4 | chan[1],
            chan[2] << 4 | chan[3],
            chan[4] << 4 | chan[5],
        ))
    }

    /// Serialize as lowercase `#rrggbb`.
    ///
    /// Parsing and re-serializing any well-formed literal yields its
    /// lowercase form, whatever the casing of the input.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Sum of absolute per-channel differences (Manhattan distance in
    /// RGB space).
    ///
    /// This is the palette-matching metric. Euclidean distance would
    /// pick different indices for some inputs — the metric is part of
    /// the output contract, not an implementation detail.
    #[inline]
    #[must_use]
    pub fn distance(self, other: Self) -> u32 {
        u32::from(self.r.abs_diff(other.r))
            + u32::from(self.g.abs_diff(other.g))
            + u32::from(self.b.abs_diff(other.b))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Decode one ASCII hex digit.
#[inline]
const fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Parsing ─────────────────────────────────────────────────

    #[test]
    fn parse_lowercase() {
        let color = Color::parse("#ff8000").unwrap();
        assert_eq!(color, Color::rgb(255, 128, 0));
    }

    #[test]
    fn parse_uppercase() {
        let color = Color::parse("#FF8000").unwrap();
        assert_eq!(color, Color::rgb(255, 128, 0));
    }

    #[test]
    fn parse_mixed_case() {
        let color = Color::parse("#DaDaDa").unwrap();
        assert_eq!(color, Color::rgb(0xda, 0xda, 0xda));
    }

    #[test]
    fn parse_black_and_white() {
        assert_eq!(Color::parse("#000000").unwrap(), Color::rgb(0, 0, 0));
        assert_eq!(Color::parse("#ffffff").unwrap(), Color::rgb(255, 255, 255));
    }

    #[test]
    fn parse_rejects_missing_hash() {
        assert_eq!(
            Color::parse("ff8000"),
            Err(ParseColorError::MissingHash("ff8000".to_string()))
        );
    }

    #[test]
    fn parse_rejects_short_form() {
        assert_eq!(
            Color::parse("#f80"),
            Err(ParseColorError::BadLength("#f80".to_string()))
        );
    }

    #[test]
    fn parse_rejects_alpha_suffix() {
        assert_eq!(
            Color::parse("#ff800080"),
            Err(ParseColorError::BadLength("#ff800080".to_string()))
        );
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(
            Color::parse(""),
            Err(ParseColorError::MissingHash(String::new()))
        );
        assert_eq!(
            Color::parse("#"),
            Err(ParseColorError::BadLength("#".to_string()))
        );
    }

    #[test]
    fn parse_rejects_non_hex_digit() {
        assert_eq!(
            Color::parse("#ff80g0"),
            Err(ParseColorError::BadDigit {
                input: "#ff80g0".to_string(),
                digit: 'g',
            })
        );
    }

    #[test]
    fn from_str_matches_parse() {
        let via_parse = Color::parse("#729fcf").unwrap();
        let via_from_str: Color = "#729fcf".parse().unwrap();
        assert_eq!(via_parse, via_from_str);
    }

    // ── Serialization ───────────────────────────────────────────

    #[test]
    fn to_hex_is_lowercase() {
        let color = Color::parse("#DADADA").unwrap();
        assert_eq!(color.to_hex(), "#dadada");
    }

    #[test]
    fn round_trip_preserves_lowercase_form() {
        for input in ["#000000", "#729fcf", "#ef2929", "#fce94f", "#ffffff"] {
            let color = Color::parse(input).unwrap();
            assert_eq!(color.to_hex(), *input);
        }
    }

    #[test]
    fn display_matches_to_hex() {
        let color = Color::rgb(0x8a, 0xe2, 0x34);
        assert_eq!(format!("{color}"), color.to_hex());
    }

    #[test]
    fn to_hex_pads_small_channels() {
        assert_eq!(Color::rgb(0, 1, 15).to_hex(), "#00010f");
    }

    // ── Distance ────────────────────────────────────────────────

    #[test]
    fn distance_to_self_is_zero() {
        let color = Color::rgb(17, 34, 51);
        assert_eq!(color.distance(color), 0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Color::rgb(10, 200, 30);
        let b = Color::rgb(250, 5, 90);
        assert_eq!(a.distance(b), b.distance(a));
    }

    #[test]
    fn distance_sums_channel_differences() {
        let a = Color::rgb(0, 0, 0);
        let b = Color::rgb(1, 2, 3);
        assert_eq!(a.distance(b), 6);
    }

    #[test]
    fn distance_maximum() {
        let black = Color::rgb(0, 0, 0);
        let white = Color::rgb(255, 255, 255);
        assert_eq!(black.distance(white), 765);
    }
}
