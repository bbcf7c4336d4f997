//! sRGB transfer function (IEC 61966-2-1).
//!
//! The piecewise curve has a linear toe near black and a 2.4 power law
//! above it. Both directions are total: values outside `0.0..=1.0` are
//! extrapolated along the same segments instead of being clamped, because
//! error diffusion routinely pushes working values out of the unit range.

/// sRGB value below which the decode curve is linear.
const DECODE_THRESHOLD: f64 = 0.04045;

/// Linear value below which the encode curve is linear.
const ENCODE_THRESHOLD: f64 = 0.0031308;

const LINEAR_SLOPE: f64 = 12.92;
const OFFSET: f64 = 0.055;
const SCALE: f64 = 1.055;
const GAMMA: f64 = 2.4;

/// Convert an sRGB-encoded channel value to linear light.
///
/// # Example
///
/// ```
/// use ditherpunk::srgb_to_linear;
///
/// // sRGB 0.5 is roughly 21% linear light
/// assert!((srgb_to_linear(0.5) - 0.214).abs() < 0.001);
/// ```
#[inline]
pub fn srgb_to_linear(srgb: f64) -> f64 {
    if srgb <= DECODE_THRESHOLD {
        srgb / LINEAR_SLOPE
    } else {
        ((srgb + OFFSET) / SCALE).powf(GAMMA)
    }
}

/// Convert a linear light channel value to sRGB encoding.
///
/// # Example
///
/// ```
/// use ditherpunk::linear_to_srgb;
///
/// assert!((linear_to_srgb(0.5) - 0.735).abs() < 0.001);
/// ```
#[inline]
pub fn linear_to_srgb(linear: f64) -> f64 {
    if linear <= ENCODE_THRESHOLD {
        linear * LINEAR_SLOPE
    } else {
        SCALE * linear.powf(1.0 / GAMMA) - OFFSET
    }
}
