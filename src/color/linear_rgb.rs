//! Linear RGB color type
//!
//! Linear RGB is the color space where light addition is physically accurate.
//! Conversions to CIELAB and Oklab start from here.

use super::rgb::Rgb;
use super::srgb::srgb_to_linear;

/// A color in linear RGB color space.
///
/// Values are typically in the range 0.0..=1.0, but may exceed this range
/// for intermediate calculations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for LinearRgb {
    /// Decode an sRGB-encoded color to linear light.
    fn from(rgb: Rgb) -> Self {
        Self {
            r: srgb_to_linear(rgb.r),
            g: srgb_to_linear(rgb.g),
            b: srgb_to_linear(rgb.b),
        }
    }
}
