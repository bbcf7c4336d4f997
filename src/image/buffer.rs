//! Row-major image buffer.

use super::pixel::Pixel;
use crate::color::srgb_to_linear;
use crate::error::DitherError;

/// A 2D grid of pixels stored row-major with explicit dimensions.
///
/// # Example
///
/// ```
/// use ditherpunk::Image;
///
/// let image = Image::from_fn(3, 2, |x, y| (x + y) as f64 / 3.0);
/// assert_eq!(image.dimensions(), (3, 2));
/// assert_eq!(image.get(2, 1), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Image<P> {
    width: usize,
    height: usize,
    pixels: Vec<P>,
}

impl<P: Pixel> Image<P> {
    /// Wrap an existing pixel buffer.
    ///
    /// Fails with [`DitherError::BufferLength`] when `pixels.len()` is not
    /// `width * height`. Zero-sized images are representable; the dithering
    /// entry points reject them with [`DitherError::InvalidDimension`].
    pub fn new(width: usize, height: usize, pixels: Vec<P>) -> Result<Self, DitherError> {
        let expected = width * height;
        if pixels.len() != expected {
            return Err(DitherError::BufferLength {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// An image with every pixel set to `value`.
    pub fn filled(width: usize, height: usize, value: P) -> Self {
        Self {
            width,
            height,
            pixels: vec![value; width * height],
        }
    }

    /// An image whose pixel at `(x, y)` is `f(x, y)`.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> P) -> Self {
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline]
    pub fn pixels(&self) -> &[P] {
        &self.pixels
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [P] {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> Vec<P> {
        self.pixels
    }

    /// Pixel at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the image.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> P {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.pixels[y * self.width + x]
    }

    /// Overwrite the pixel at column `x`, row `y`.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: P) {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.pixels[y * self.width + x] = value;
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[P]> {
        self.pixels.chunks(self.width.max(1))
    }

    /// Apply `f` to every pixel, producing a new image of the same shape.
    pub fn map<Q: Pixel>(&self, f: impl FnMut(&P) -> Q) -> Image<Q> {
        Image {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(f).collect(),
        }
    }

    /// Extract channel `index` as a grayscale image.
    pub fn channel(&self, index: usize) -> Image<f64> {
        self.map(|p| p.channel(index))
    }

    /// Recombine per-channel grayscale images into one multi-channel image.
    ///
    /// Fails if the number of channels does not match `P::CHANNELS` or the
    /// channel images disagree on dimensions.
    pub fn from_channels(channels: &[Image<f64>]) -> Result<Self, DitherError> {
        let first = channels.first().ok_or(DitherError::BufferLength {
            expected: P::CHANNELS,
            actual: 0,
        })?;
        if channels.len() != P::CHANNELS {
            return Err(DitherError::BufferLength {
                expected: P::CHANNELS,
                actual: channels.len(),
            });
        }
        if let Some(other) = channels.iter().find(|c| c.dimensions() != first.dimensions()) {
            return Err(DitherError::DimensionMismatch {
                expected: first.dimensions(),
                actual: other.dimensions(),
            });
        }
        let pixels = (0..first.pixels.len())
            .map(|i| P::from_fn(|c| channels[c].pixels[i]))
            .collect();
        Ok(Self {
            width: first.width,
            height: first.height,
            pixels,
        })
    }

    /// Gray working values for the binary strategies.
    ///
    /// With `to_linear` every channel is decoded from sRGB before the
    /// intensity is taken.
    pub(crate) fn intensities(&self, to_linear: bool) -> Image<f64> {
        if to_linear {
            self.map(|p| p.map(srgb_to_linear).intensity())
        } else {
            self.map(|p| p.intensity())
        }
    }

    /// Reject zero-sized images.
    pub(crate) fn ensure_not_empty(&self) -> Result<(), DitherError> {
        if self.width == 0 || self.height == 0 {
            return Err(DitherError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Reject a second buffer whose dimensions differ from this one.
    pub(crate) fn ensure_same_dimensions<Q>(&self, other: &Image<Q>) -> Result<(), DitherError> {
        if self.dimensions() != (other.width, other.height) {
            return Err(DitherError::DimensionMismatch {
                expected: self.dimensions(),
                actual: (other.width, other.height),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_new_validates_length() {
        assert!(Image::new(2, 2, vec![0.0; 4]).is_ok());
        let err = Image::new(2, 2, vec![0.0; 3]).unwrap_err();
        assert!(matches!(
            err,
            DitherError::BufferLength {
                expected: 4,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_row_major_layout() {
        let image = Image::from_fn(3, 2, |x, y| (y * 10 + x) as f64);
        assert_eq!(image.pixels(), &[0.0, 1.0, 2.0, 10.0, 11.0, 12.0]);
        let rows: Vec<&[f64]> = image.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], &[10.0, 11.0, 12.0]);
    }

    #[test]
    fn test_get_set() {
        let mut image = Image::filled(2, 2, 0.0);
        image.set(1, 0, 0.5);
        assert_eq!(image.get(1, 0), 0.5);
        assert_eq!(image.pixels()[1], 0.5);
    }

    #[test]
    fn test_channel_split_and_recombine() {
        let image = Image::from_fn(2, 2, |x, y| Rgb::new(x as f64, y as f64, 0.5));
        let channels: Vec<Image<f64>> = (0..3).map(|c| image.channel(c)).collect();
        assert_eq!(channels[0].pixels(), &[0.0, 1.0, 0.0, 1.0]);
        assert_eq!(channels[1].pixels(), &[0.0, 0.0, 1.0, 1.0]);

        let back = Image::<Rgb>::from_channels(&channels).unwrap();
        assert_eq!(back, image);
    }

    #[test]
    fn test_from_channels_rejects_wrong_count() {
        let gray = Image::filled(2, 2, 0.0);
        let err = Image::<Rgb>::from_channels(&[gray.clone(), gray]).unwrap_err();
        assert!(matches!(err, DitherError::BufferLength { .. }));
    }

    #[test]
    fn test_ensure_not_empty() {
        assert!(Image::filled(1, 1, 0.0).ensure_not_empty().is_ok());
        let err = Image::<f64>::filled(0, 5, 0.0).ensure_not_empty().unwrap_err();
        assert!(matches!(
            err,
            DitherError::InvalidDimension {
                width: 0,
                height: 5
            }
        ));
    }

    #[test]
    fn test_intensities_to_linear() {
        let image = Image::filled(1, 1, 0.5);
        assert_eq!(image.intensities(false).get(0, 0), 0.5);
        assert!((image.intensities(true).get(0, 0) - srgb_to_linear(0.5)).abs() < 1e-12);
    }
}
