//! ditherpunk: dithering and digital halftoning
//!
//! Turns continuous-tone gray or RGB images into binary or palette images
//! that approximate the original through spatial patterns.
//!
//! # Quick Start
//!
//! ```
//! use ditherpunk::{Algorithm, Ditherer, Image, Palette, Rgb};
//!
//! let image = Image::from_fn(16, 16, |x, y| Rgb::new(x as f64 / 15.0, y as f64 / 15.0, 0.5));
//! let palette = Palette::<Rgb>::from_hex(&["#000000", "#ffffff", "#ff0000", "#0000ff"]).unwrap();
//!
//! let out = Ditherer::new(Algorithm::FloydSteinberg)
//!     .palette(palette.clone())
//!     .dither(&image)
//!     .unwrap();
//! assert!(out.pixels().iter().all(|p| palette.colors().contains(p)));
//! ```
//!
//! # Algorithms
//!
//! [`Algorithm`] is a closed set of named variants:
//!
//! - Threshold: constant, white noise
//! - Ordered: Bayer (any level), clustered dots, central white point,
//!   balanced centered point, rhombus, or a custom [`ThresholdMatrix`]
//! - Error diffusion: Floyd-Steinberg, Jarvis-Judice-Ninke, Stucki, Burkes,
//!   Sierra family, Atkinson, Fan, Shiau-Fan, false Floyd-Steinberg, simple,
//!   or a custom [`DiffusionKernel`]
//! - Closest color: nearest palette entry, no diffusion
//! - Channel separation: any of the above per color channel
//!
//! # Color
//!
//! Pixel values are sRGB-encoded reals. With
//! [`DitherOptions::to_linear`] the engine decodes them to linear light first,
//! so error diffusion adds physical intensities. Nearest-color search uses
//! CIEDE2000 by default, or Euclidean Oklab (see [`DistanceMetric`]).
//!
//! # Logging
//!
//! The crate emits [`tracing`] events (`debug` per call, `trace` per
//! strategy) and never installs a subscriber.

pub mod api;
pub mod color;
pub mod config;
pub mod dither;
pub mod error;
pub mod image;
pub mod output;
pub mod palette;
pub mod threshold;


pub use api::{dither, dither_in_place, Ditherer};
pub use color::{
    color_difference, gray_difference, linear_to_srgb, srgb_to_linear, DistanceMetric, Lab,
    LinearRgb, Oklab, Rgb,
};
pub use config::DitherConfig;
pub use dither::{Algorithm, DiffusionKernel, DitherOptions};
pub use error::DitherError;
pub use image::{gradient_image, upscale, Image, Pixel};
pub use output::IndexedImage;
pub use palette::{Palette, ParseColorError};
pub use threshold::{ThresholdMap, ThresholdMatrix, MAX_BAYER_LEVEL};
