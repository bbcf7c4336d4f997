//! Color types and conversion utilities
//!
//! - [`Rgb`]: the multi-channel pixel type, sRGB-encoded by convention
//! - [`LinearRgb`]: linear light, the space where error adds physically
//! - [`Lab`] and [`Oklab`]: perceptual spaces used for nearest-color search
//!
//! # Example
//!
//! ```
//! use ditherpunk::{LinearRgb, Rgb};
//!
//! let pixel = Rgb::from_u8(128, 64, 32);
//! let linear = LinearRgb::from(pixel);
//! let back = Rgb::from(linear);
//! assert_eq!(back.to_bytes(), [128, 64, 32]);
//! ```

mod difference;
mod lab;
mod linear_rgb;
mod oklab;
mod rgb;
mod srgb;

pub use difference::{color_difference, gray_difference, DistanceMetric};
pub use lab::Lab;
pub use linear_rgb::LinearRgb;
pub use oklab::Oklab;
pub use rgb::Rgb;
pub use srgb::{linear_to_srgb, srgb_to_linear};
