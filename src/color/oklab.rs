//! Oklab perceptual color space
//!
//! Oklab is the alternative nearest-color metric: plain Euclidean distance
//! in Oklab tracks perceived difference well and is much cheaper than
//! CIEDE2000.
//!
//! # References
//!
//! Björn Ottosson, "A perceptual color space for image processing"
//! <https://bottosson.github.io/posts/oklab/>

use super::linear_rgb::LinearRgb;

/// A color in Oklab perceptual color space.
///
/// Values are not clamped. Out-of-gamut colors (from error diffusion) may
/// have components outside typical ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    /// Lightness: 0.0 (black) to 1.0 (white) for in-gamut colors
    pub l: f64,
    /// Green-red axis: typically -0.5 to 0.5
    pub a: f64,
    /// Blue-yellow axis: typically -0.5 to 0.5
    pub b: f64,
}

impl Oklab {
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Euclidean distance in Oklab space.
    ///
    /// ```
    /// use ditherpunk::Oklab;
    ///
    /// let white = Oklab::new(1.0, 0.0, 0.0);
    /// let black = Oklab::new(0.0, 0.0, 0.0);
    /// let gray = Oklab::new(0.5, 0.0, 0.0);
    ///
    /// assert!((gray.distance(black) - gray.distance(white)).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn distance(self, other: Oklab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}

impl From<LinearRgb> for Oklab {
    /// Convert from linear RGB using the 2021-01-25 matrices.
    fn from(rgb: LinearRgb) -> Self {
        let l = 0.4122214708 * rgb.r + 0.5363325363 * rgb.g + 0.0514459929 * rgb.b;
        let m = 0.2119034982 * rgb.r + 0.6806995451 * rgb.g + 0.1073969566 * rgb.b;
        let s = 0.0883024619 * rgb.r + 0.2817188376 * rgb.g + 0.6299787005 * rgb.b;

        let l_ = l.cbrt();
        let m_ = m.cbrt();
        let s_ = s.cbrt();

        Oklab {
            l: 0.2104542553 * l_ + 0.7936177850 * m_ - 0.0040720468 * s_,
            a: 1.9779984951 * l_ - 2.4285922050 * m_ + 0.4505937099 * s_,
            b: 0.0259040371 * l_ + 0.7827717662 * m_ - 0.8086757660 * s_,
        }
    }
}
