//! CIELAB color space and the CIEDE2000 color difference.
//!
//! Colors are converted from linear RGB through CIE XYZ with the D65
//! reference white. CIEDE2000 is the default metric for nearest-color
//! search: it is symmetric and zero only for identical colors.

use std::f64::consts::PI;

use super::linear_rgb::LinearRgb;

/// D65 reference white in CIE XYZ.
const WHITE_X: f64 = 0.95047;
const WHITE_Y: f64 = 1.0;
const WHITE_Z: f64 = 1.08883;

/// CIELAB `f(t)` breakpoint, (6/29)^3.
const EPSILON: f64 = 216.0 / 24389.0;

/// 25^7, used by the CIEDE2000 chroma compensation terms.
const POW25_7: f64 = 6_103_515_625.0;

/// A color in CIELAB (L*a*b*) space, D65 white point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness: 0.0 (black) to 100.0 (white)
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

impl Lab {
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// CIEDE2000 color difference (ΔE00) with kL = kC = kH = 1.
    ///
    /// ```
    /// use ditherpunk::Lab;
    ///
    /// let a = Lab::new(50.0, 2.6772, -79.7751);
    /// let b = Lab::new(50.0, 0.0, -82.7485);
    /// assert!((a.ciede2000(b) - 2.0425).abs() < 1e-4);
    /// ```
    pub fn ciede2000(self, other: Lab) -> f64 {
        const TWO_PI: f64 = 2.0 * PI;

        let (l1, a1, b1) = (self.l, self.a, self.b);
        let (l2, a2, b2) = (other.l, other.a, other.b);

        let c1_star = (a1 * a1 + b1 * b1).sqrt();
        let c2_star = (a2 * a2 + b2 * b2).sqrt();
        let c_bar = (c1_star + c2_star) / 2.0;

        let c_bar_7 = c_bar.powi(7);
        let g = 0.5 * (1.0 - (c_bar_7 / (c_bar_7 + POW25_7)).sqrt());

        let a1_prime = a1 * (1.0 + g);
        let a2_prime = a2 * (1.0 + g);

        let c1_prime = (a1_prime * a1_prime + b1 * b1).sqrt();
        let c2_prime = (a2_prime * a2_prime + b2 * b2).sqrt();

        let hue = |b: f64, a: f64| {
            if a == 0.0 && b == 0.0 {
                0.0
            } else {
                let h = b.atan2(a);
                if h < 0.0 {
                    h + TWO_PI
                } else {
                    h
                }
            }
        };
        let h1_prime = hue(b1, a1_prime);
        let h2_prime = hue(b2, a2_prime);

        let dl_prime = l2 - l1;
        let dc_prime = c2_prime - c1_prime;

        let chroma_product = c1_prime * c2_prime;
        let dh_prime = if chroma_product == 0.0 {
            0.0
        } else {
            let diff = h2_prime - h1_prime;
            if diff.abs() <= PI {
                diff
            } else if diff > PI {
                diff - TWO_PI
            } else {
                diff + TWO_PI
            }
        };
        let dh_prime_big = 2.0 * chroma_product.sqrt() * (dh_prime / 2.0).sin();

        let l_bar_prime = (l1 + l2) / 2.0;
        let c_bar_prime = (c1_prime + c2_prime) / 2.0;

        let h_bar_prime = if chroma_product == 0.0 {
            h1_prime + h2_prime
        } else if (h1_prime - h2_prime).abs() <= PI {
            (h1_prime + h2_prime) / 2.0
        } else if h1_prime + h2_prime < TWO_PI {
            (h1_prime + h2_prime + TWO_PI) / 2.0
        } else {
            (h1_prime + h2_prime - TWO_PI) / 2.0
        };

        let t = 1.0 - 0.17 * (h_bar_prime - 30f64.to_radians()).cos()
            + 0.24 * (2.0 * h_bar_prime).cos()
            + 0.32 * (3.0 * h_bar_prime + 6f64.to_radians()).cos()
            - 0.20 * (4.0 * h_bar_prime - 63f64.to_radians()).cos();

        let l_offset_sq = (l_bar_prime - 50.0) * (l_bar_prime - 50.0);
        let sl = 1.0 + (0.015 * l_offset_sq) / (20.0 + l_offset_sq).sqrt();
        let sc = 1.0 + 0.045 * c_bar_prime;
        let sh = 1.0 + 0.015 * c_bar_prime * t;

        let delta_theta = 30f64.to_radians()
            * (-((h_bar_prime - 275f64.to_radians()) / 25f64.to_radians()).powi(2)).exp();
        let c_bar_prime_7 = c_bar_prime.powi(7);
        let rc = 2.0 * (c_bar_prime_7 / (c_bar_prime_7 + POW25_7)).sqrt();
        let rt = -rc * (2.0 * delta_theta).sin();

        let dl_term = dl_prime / sl;
        let dc_term = dc_prime / sc;
        let dh_term = dh_prime_big / sh;

        (dl_term * dl_term + dc_term * dc_term + dh_term * dh_term + rt * dc_term * dh_term)
            .max(0.0)
            .sqrt()
    }
}

/// CIELAB companding function.
#[inline]
fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        t * (24389.0 / 27.0) / 116.0 + 16.0 / 116.0
    }
}

impl From<LinearRgb> for Lab {
    fn from(rgb: LinearRgb) -> Self {
        let x = 0.4124564 * rgb.r + 0.3575761 * rgb.g + 0.1804375 * rgb.b;
        let y = 0.2126729 * rgb.r + 0.7151522 * rgb.g + 0.0721750 * rgb.b;
        let z = 0.0193339 * rgb.r + 0.1191920 * rgb.g + 0.9503041 * rgb.b;

        let fx = lab_f(x / WHITE_X);
        let fy = lab_f(y / WHITE_Y);
        let fz = lab_f(z / WHITE_Z);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    /// Reference pairs from Sharma, Wu & Dalal, "The CIEDE2000 Color-Difference
    /// Formula: Implementation Notes, Supplementary Test Data".
    #[test]
    fn test_ciede2000_reference_pairs() {
        let pairs = [
            ((50.0, 2.6772, -79.7751), (50.0, 0.0, -82.7485), 2.0425),
            ((50.0, 3.1571, -77.2803), (50.0, 0.0, -82.7485), 2.8615),
            ((50.0, 2.5, 0.0), (50.0, 0.0, -2.5), 4.3065),
            ((50.0, 2.5, 0.0), (73.0, 25.0, -18.0), 27.1492),
            ((60.2574, -34.0099, 36.2677), (60.4626, -34.1751, 39.4387), 1.2644),
            ((2.0776, 0.0795, -1.1350), (0.9033, -0.0636, -0.5514), 0.9082),
        ];
        for ((l1, a1, b1), (l2, a2, b2), expected) in pairs {
            let d = Lab::new(l1, a1, b1).ciede2000(Lab::new(l2, a2, b2));
            assert!(
                (d - expected).abs() < 1e-4,
                "ΔE00 expected {expected}, got {d}"
            );
        }
    }

    #[test]
    fn test_ciede2000_symmetric_and_zero_on_identity() {
        let a = Lab::new(40.0, 20.0, -10.0);
        let b = Lab::new(55.0, -5.0, 30.0);
        assert!((a.ciede2000(b) - b.ciede2000(a)).abs() < 1e-9);
        assert_eq!(a.ciede2000(a), 0.0);
    }

    #[test]
    fn test_white_and_black() {
        let white = Lab::from(LinearRgb::from(Rgb::gray(1.0)));
        assert!((white.l - 100.0).abs() < 1e-3);
        assert!(white.a.abs() < 1e-2);
        assert!(white.b.abs() < 1e-2);

        let black = Lab::from(LinearRgb::from(Rgb::gray(0.0)));
        assert!(black.l.abs() < 1e-9);
    }
}
