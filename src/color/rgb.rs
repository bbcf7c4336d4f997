//! RGB color type
//!
//! [`Rgb`] is the multi-channel pixel type of the crate. Channels are
//! normalized reals, sRGB-encoded by convention (the way image decoders
//! deliver them). They are not clamped: error diffusion may carry a working
//! value outside `0.0..=1.0`.

use std::str::FromStr;

use super::linear_rgb::LinearRgb;
use super::srgb::linear_to_srgb;
use crate::palette::ParseColorError;

/// A three-channel color with normalized channel values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    /// Red channel (0.0..=1.0 for in-gamut colors)
    pub r: f64,
    /// Green channel (0.0..=1.0 for in-gamut colors)
    pub g: f64,
    /// Blue channel (0.0..=1.0 for in-gamut colors)
    pub b: f64,
}

/// Rec. 601 green and blue luma weights; red takes the remainder.
const LUMA_G: f64 = 0.587;
const LUMA_B: f64 = 0.114;

impl Rgb {
    /// Create a new color from normalized channel values.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create a gray color with all channels set to `value`.
    #[inline]
    pub const fn gray(value: f64) -> Self {
        Self::new(value, value, value)
    }

    /// Create a color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use ditherpunk::Rgb;
    /// let red = Rgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Convert to 8-bit channel values, rounding and clamping to `0..=255`.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            (self.r * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.g * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.b * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// Rec. 601 luma of the channel values.
    ///
    /// Written relative to red so that a gray input maps exactly to itself.
    #[inline]
    pub fn luma(self) -> f64 {
        self.r + LUMA_G * (self.g - self.r) + LUMA_B * (self.b - self.r)
    }
}

impl From<LinearRgb> for Rgb {
    /// Encode linear light back to sRGB.
    fn from(linear: LinearRgb) -> Self {
        Self {
            r: linear_to_srgb(linear.r),
            g: linear_to_srgb(linear.g),
            b: linear_to_srgb(linear.b),
        }
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Accepts `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`, case-insensitive,
    /// with surrounding whitespace trimmed.
    ///
    /// ```
    /// use ditherpunk::Rgb;
    ///
    /// let orange: Rgb = "#FF8000".parse().unwrap();
    /// assert_eq!(orange.to_bytes(), [255, 128, 0]);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        let digits = s.bytes().map(hex_digit).collect::<Result<Vec<u8>, _>>()?;
        match digits[..] {
            // Shorthand: 0xF -> 0xFF
            [r, g, b] => Ok(Self::from_u8(r * 17, g * 17, b * 17)),
            [r1, r0, g1, g0, b1, b0] => {
                Ok(Self::from_u8(r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

/// Value of one ASCII hex digit. Signs and other characters are rejected.
fn hex_digit(byte: u8) -> Result<u8, ParseColorError> {
    char::from(byte)
        .to_digit(16)
        .map(|d| d as u8)
        .ok_or(ParseColorError::InvalidHex(char::from(byte)))
}
