//! Ditherer builder, the primary entry point for the crate.
//!
//! [`Ditherer`] bundles an [`Algorithm`], an optional [`Palette`] and
//! [`DitherOptions`] behind a fluent builder, and offers both new-copy and
//! in-place dithering.

use crate::dither::{quantize, Algorithm, DitherOptions};
use crate::error::DitherError;
use crate::image::{Image, Pixel};
use crate::output::IndexedImage;
use crate::palette::Palette;

/// High-level dithering builder.
///
/// - Configuration methods consume and return `self`
/// - The `dither*` methods take `&self`, so one ditherer can process many
///   images
/// - Without a palette the output is binary: 0.0 or 1.0 in every channel
///
/// # Example
///
/// ```
/// use ditherpunk::{Algorithm, Ditherer, Image};
///
/// let image = Image::filled(2, 2, 0.5);
/// let ditherer = Ditherer::new(Algorithm::constant_threshold());
///
/// let out = ditherer.dither(&image).unwrap();
/// assert_eq!(out.pixels(), &[1.0, 1.0, 1.0, 1.0]);
/// ```
#[derive(Debug, Clone)]
pub struct Ditherer<P: Pixel = f64> {
    algorithm: Algorithm,
    palette: Option<Palette<P>>,
    options: DitherOptions,
}

impl<P: Pixel> Ditherer<P> {
    /// Binary-mode ditherer with default options.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            palette: None,
            options: DitherOptions::default(),
        }
    }

    /// Quantize against `palette` instead of binary 0/1 output.
    #[inline]
    pub fn palette(mut self, palette: Palette<P>) -> Self {
        self.palette = Some(palette);
        self
    }

    /// Replace all options at once.
    #[inline]
    pub fn options(mut self, options: DitherOptions) -> Self {
        self.options = options;
        self
    }

    /// Decode sRGB to linear light before processing.
    #[inline]
    pub fn to_linear(mut self, enabled: bool) -> Self {
        self.options = self.options.to_linear(enabled);
        self
    }

    /// Seed the white-noise threshold field.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.options = self.options.seed(seed);
        self
    }

    /// Clamp diffusion working values to `[-margin, 1 + margin]`.
    #[inline]
    pub fn error_clamp(mut self, margin: f64) -> Self {
        self.options = self.options.error_clamp(margin);
        self
    }

    pub fn algorithm(&self) -> &Algorithm {
        &self.algorithm
    }

    pub fn dither_options(&self) -> &DitherOptions {
        &self.options
    }

    pub fn palette_ref(&self) -> Option<&Palette<P>> {
        self.palette.as_ref()
    }

    /// Dither into palette indices.
    pub fn dither_indexed(&self, image: &Image<P>) -> Result<IndexedImage<P>, DitherError> {
        tracing::debug!(
            algorithm = self.algorithm.name(),
            width = image.width(),
            height = image.height(),
            to_linear = self.options.to_linear,
            palette = self.palette.as_ref().map_or(0, Palette::len),
            "Dithering image"
        );
        quantize(&self.algorithm, image, self.palette.as_ref(), &self.options)
    }

    /// Dither into a newly allocated image.
    pub fn dither(&self, image: &Image<P>) -> Result<Image<P>, DitherError> {
        Ok(self.dither_indexed(image)?.to_image())
    }

    /// Dither into a caller-supplied buffer of the same dimensions.
    ///
    /// # Errors
    ///
    /// [`DitherError::DimensionMismatch`] if `out` differs in size from
    /// `image`; `out` is untouched on any error.
    pub fn dither_into(&self, image: &Image<P>, out: &mut Image<P>) -> Result<(), DitherError> {
        image.ensure_same_dimensions(out)?;
        self.dither_indexed(image)?.write_into(out);
        Ok(())
    }

    /// Replace `image` with its dithered version.
    pub fn dither_in_place(&self, image: &mut Image<P>) -> Result<(), DitherError> {
        let indexed = self.dither_indexed(image)?;
        indexed.write_into(image);
        Ok(())
    }
}

/// Dither `image` in binary mode with default options.
///
/// ```
/// use ditherpunk::{dither, Algorithm, Image};
///
/// let image = Image::new(5, 1, vec![0.0, 0.25, 0.5, 0.75, 1.0]).unwrap();
/// let out = dither(&image, &Algorithm::FloydSteinberg).unwrap();
/// assert_eq!(out.pixels(), &[0.0, 0.0, 1.0, 1.0, 1.0]);
/// ```
pub fn dither<P: Pixel>(image: &Image<P>, algorithm: &Algorithm) -> Result<Image<P>, DitherError> {
    Ditherer::new(algorithm.clone()).dither(image)
}

/// In-place counterpart of [`dither`].
pub fn dither_in_place<P: Pixel>(
    image: &mut Image<P>,
    algorithm: &Algorithm,
) -> Result<(), DitherError> {
    Ditherer::new(algorithm.clone()).dither_in_place(image)
}
