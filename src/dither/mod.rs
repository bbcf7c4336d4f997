//! Dithering algorithms and their execution strategies.
//!
//! Every [`Algorithm`] resolves to one of four strategies:
//!
//! - **Threshold**: compare each pixel's intensity against a threshold field
//!   (constant, white noise, or a tiled matrix). Pixels are independent, so
//!   rows run in parallel.
//! - **Error diffusion**: a strict raster sweep that quantizes each pixel and
//!   pushes the residual onto not-yet-visited neighbors per a
//!   [`DiffusionKernel`]. Sequential by nature.
//! - **Closest color**: nearest palette entry per pixel, in parallel.
//! - **Channel separation**: any of the above applied per channel in binary
//!   mode, channels in parallel.

mod algorithm;
mod closest;
mod diffusion;
pub mod kernel;
mod options;
mod separate;
mod threshold;

pub use algorithm::Algorithm;
pub use kernel::DiffusionKernel;
pub use options::DitherOptions;

use algorithm::Strategy;
use closest::closest_indices;
use diffusion::{diffuse_binary, diffuse_palette};
use separate::{separate_indices, snap_to_palette};
use threshold::threshold_levels;

use crate::error::DitherError;
use crate::image::{Image, Pixel};
use crate::output::IndexedImage;
use crate::palette::Palette;

/// Quantize `image` with `algorithm` into palette indices.
///
/// Without a palette the result indexes [`Palette::binary`], or
/// [`Palette::corners`] for channel separation. All validation happens
/// before any pixel is processed.
pub(crate) fn quantize<P: Pixel>(
    algorithm: &Algorithm,
    image: &Image<P>,
    palette: Option<&Palette<P>>,
    options: &DitherOptions,
) -> Result<IndexedImage<P>, DitherError> {
    image.ensure_not_empty()?;
    let (width, height) = image.dimensions();
    let strategy = algorithm.strategy()?;

    match strategy {
        Strategy::Threshold(map) => {
            tracing::trace!(algorithm = algorithm.name(), "Threshold strategy");
            let palette = match palette {
                Some(palette) => {
                    if palette.len() > 2 {
                        tracing::warn!(
                            algorithm = algorithm.name(),
                            colors = palette.len(),
                            "Threshold dithering only uses the first and last palette colors"
                        );
                    }
                    palette.clone()
                }
                None => Palette::binary(),
            };
            let high = palette.len() - 1;
            let field = map.field(width, height, options.seed);
            let gray = image.intensities(options.to_linear);
            let indices = threshold_levels(&gray, &field)
                .into_iter()
                .map(|is_high| if is_high { high } else { 0 })
                .collect();
            Ok(IndexedImage::new(indices, width, height, palette))
        }
        Strategy::Diffusion(kernel) => {
            tracing::trace!(
                algorithm = algorithm.name(),
                gain = kernel.gain(),
                "Error diffusion strategy"
            );
            match palette {
                Some(palette) => {
                    let indices = diffuse_palette(
                        image,
                        palette,
                        &kernel,
                        options.to_linear,
                        options.error_clamp,
                    );
                    Ok(IndexedImage::new(indices, width, height, palette.clone()))
                }
                None => {
                    let gray = image.intensities(options.to_linear);
                    let indices = diffuse_binary(gray, &kernel, options.error_clamp);
                    Ok(IndexedImage::new(indices, width, height, Palette::binary()))
                }
            }
        }
        Strategy::Closest => {
            tracing::trace!("Closest color strategy");
            let palette = palette.ok_or(DitherError::EmptyPalette)?;
            let indices = closest_indices(image, palette);
            Ok(IndexedImage::new(indices, width, height, palette.clone()))
        }
        Strategy::Separate(inner) => {
            tracing::trace!(
                inner = inner.name(),
                channels = P::CHANNELS,
                "Channel separation"
            );
            let corners = separate_indices(inner, image, options)?;
            match palette {
                Some(palette) => {
                    let indices = snap_to_palette(&corners, palette);
                    Ok(IndexedImage::new(indices, width, height, palette.clone()))
                }
                None => Ok(IndexedImage::new(corners, width, height, Palette::corners())),
            }
        }
    }
}
