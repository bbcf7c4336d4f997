//! Perceptual color difference.
//!
//! Nearest-color search ranks palette entries by [`color_difference`].
//! Grayscale values compare by absolute difference; RGB colors compare with
//! the selected [`DistanceMetric`].

use serde::{Deserialize, Serialize};

use super::lab::Lab;
use super::linear_rgb::LinearRgb;
use super::oklab::Oklab;
use super::rgb::Rgb;

/// Distance metric for palette color matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    /// CIEDE2000 (ΔE00) in CIELAB, D65 white point.
    #[default]
    Ciede2000,

    /// Euclidean distance in Oklab.
    Oklab,
}

/// Perceptual distance between two sRGB-encoded colors.
///
/// The result is symmetric, non-negative and zero exactly when both colors
/// are equal.
///
/// ```
/// use ditherpunk::{color_difference, DistanceMetric, Rgb};
///
/// let red = Rgb::new(1.0, 0.0, 0.0);
/// let orange = Rgb::new(1.0, 0.5, 0.0);
/// let d = color_difference(red, orange, DistanceMetric::Ciede2000);
/// assert!(d > 0.0);
/// assert!((d - color_difference(orange, red, DistanceMetric::Ciede2000)).abs() < 1e-9);
/// ```
pub fn color_difference(a: Rgb, b: Rgb, metric: DistanceMetric) -> f64 {
    if a == b {
        return 0.0;
    }
    let (a, b) = (LinearRgb::from(a), LinearRgb::from(b));
    match metric {
        DistanceMetric::Ciede2000 => Lab::from(a).ciede2000(Lab::from(b)),
        DistanceMetric::Oklab => Oklab::from(a).distance(Oklab::from(b)),
    }
}

/// Distance between two grayscale intensities.
#[inline]
pub fn gray_difference(a: f64, b: f64) -> f64 {
    (a - b).abs()
}
