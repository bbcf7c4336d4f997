//! Threshold matrices and per-pixel threshold fields.
//!
//! - [`ThresholdMatrix`]: a normalized, tileable grid of thresholds
//! - [`ThresholdMatrix::bayer`]: recursive dispersed-dot screens
//! - [`ThresholdMap`]: constant, white noise, or tiled matrix

mod bayer;
mod map;
mod matrix;
mod noise;
mod screens;

pub(crate) use bayer::bayer_levels;
pub use bayer::MAX_BAYER_LEVEL;
pub use map::{ThresholdField, ThresholdMap};
pub use matrix::{ThresholdMatrix, TiledThreshold};
pub use noise::white_noise;
