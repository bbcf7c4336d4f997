//! Horizontal ramp fixtures for exercising the dithering strategies.

use super::buffer::Image;
use crate::color::srgb_to_linear;

/// Build a left-to-right gray ramp of `height` rows and `width` columns.
///
/// Returns `(srgb, linear)`: the first image rises linearly from 0.0 in the
/// leftmost column to 1.0 in the rightmost one, the second holds the same
/// ramp passed through [`srgb_to_linear`]. A single-column ramp is all zeros.
///
/// ```
/// use ditherpunk::gradient_image;
///
/// let (srgb, linear) = gradient_image(2, 5);
/// assert_eq!(srgb.get(2, 1), 0.5);
/// assert!(linear.get(2, 1) < 0.5);
/// ```
pub fn gradient_image(height: usize, width: usize) -> (Image<f64>, Image<f64>) {
    let span = width.saturating_sub(1).max(1) as f64;
    let srgb = Image::from_fn(width, height, |x, _| x as f64 / span);
    let linear = srgb.map(|v| srgb_to_linear(*v));
    (srgb, linear)
}
