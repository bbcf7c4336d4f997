//! High-level dithering API.

mod ditherer;

pub use ditherer::{dither, dither_in_place, Ditherer};
