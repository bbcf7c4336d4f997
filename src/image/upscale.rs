//! Nearest-neighbour enlargement for previewing dithered output.

use super::buffer::Image;
use super::pixel::Pixel;
use crate::error::DitherError;

/// Enlarge `image` by an integer `factor`, repeating each pixel in a
/// `factor` x `factor` block.
///
/// # Errors
///
/// [`DitherError::InvalidDimension`] when `factor` is zero.
pub fn upscale<P: Pixel>(image: &Image<P>, factor: usize) -> Result<Image<P>, DitherError> {
    if factor == 0 {
        return Err(DitherError::InvalidDimension {
            width: 0,
            height: 0,
        });
    }
    Ok(Image::from_fn(
        image.width() * factor,
        image.height() * factor,
        |x, y| image.get(x / factor, y / factor),
    ))
}
