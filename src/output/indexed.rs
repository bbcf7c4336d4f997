//! Palette-indexed dithering output.

use crate::image::{Image, Pixel};
use crate::palette::Palette;

/// One palette index per pixel, row-major, plus the palette they refer to.
///
/// Produced by [`Ditherer::dither_indexed`](crate::Ditherer::dither_indexed).
/// In binary mode the palette is [`Palette::binary`]; channel separation
/// without a palette uses [`Palette::corners`].
///
/// # Example
///
/// ```
/// use ditherpunk::{IndexedImage, Palette};
///
/// let image = IndexedImage::new(vec![0, 1, 1, 0], 2, 2, Palette::<f64>::binary());
/// assert_eq!(image.indices(), &[0, 1, 1, 0]);
/// assert_eq!(image.to_image().pixels(), &[0.0, 1.0, 1.0, 0.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedImage<P> {
    indices: Vec<usize>,
    width: usize,
    height: usize,
    palette: Palette<P>,
}

impl<P: Pixel> IndexedImage<P> {
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `indices.len() == width * height` and that every
    /// index is inside the palette.
    pub fn new(indices: Vec<usize>, width: usize, height: usize, palette: Palette<P>) -> Self {
        debug_assert_eq!(
            indices.len(),
            width * height,
            "indices length ({}) must match {width}x{height}",
            indices.len(),
        );
        debug_assert!(indices.iter().all(|&i| i < palette.len()));
        Self {
            indices,
            width,
            height,
            palette,
        }
    }

    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn palette(&self) -> &Palette<P> {
        &self.palette
    }

    /// Expand indices into palette colors.
    pub fn to_image(&self) -> Image<P> {
        let colors = self.palette.colors();
        Image::from_fn(self.width, self.height, |x, y| {
            colors[self.indices[y * self.width + x]]
        })
    }

    /// Write the palette colors into an existing buffer of the same shape.
    pub(crate) fn write_into(&self, out: &mut Image<P>) {
        let colors = self.palette.colors();
        for (dst, &index) in out.pixels_mut().iter_mut().zip(&self.indices) {
            *dst = colors[index];
        }
    }

    /// How many pixels map to each palette entry.
    pub fn histogram(&self) -> Vec<usize> {
        let mut counts = vec![0; self.palette.len()];
        for &index in &self.indices {
            counts[index] += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_to_image_uses_palette_colors() {
        let palette = Palette::new(vec![Rgb::gray(0.0), Rgb::new(1.0, 0.0, 0.0)]).unwrap();
        let image = IndexedImage::new(vec![1, 0, 0], 3, 1, palette);
        let rgb = image.to_image();
        assert_eq!(rgb.dimensions(), (3, 1));
        assert_eq!(rgb.get(0, 0), Rgb::new(1.0, 0.0, 0.0));
        assert_eq!(rgb.get(2, 0), Rgb::gray(0.0));
    }

    #[test]
    fn test_write_into() {
        let image = IndexedImage::new(vec![1, 0], 2, 1, Palette::<f64>::binary());
        let mut out = Image::filled(2, 1, 0.5);
        image.write_into(&mut out);
        assert_eq!(out.pixels(), &[1.0, 0.0]);
    }

    #[test]
    fn test_histogram() {
        let palette = Palette::new(vec![0.0, 0.5, 1.0]).unwrap();
        let image = IndexedImage::new(vec![2, 2, 0, 2], 2, 2, palette);
        assert_eq!(image.histogram(), vec![1, 0, 3]);
    }
}
