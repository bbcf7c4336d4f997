//! Pixel abstraction shared by every dithering strategy.

use std::fmt::Debug;

use crate::color::{color_difference, gray_difference, DistanceMetric, Rgb};

/// A pixel with a fixed number of normalized real channels.
///
/// Implemented for `f64` (single-channel gray) and [`Rgb`]. Channel values
/// are plain reals: the engine never assumes they stay inside `0.0..=1.0`
/// while error is being diffused.
pub trait Pixel: Copy + Debug + PartialEq + Send + Sync + 'static {
    /// Number of channels.
    const CHANNELS: usize;

    /// Value of channel `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= Self::CHANNELS`.
    fn channel(&self, index: usize) -> f64;

    /// Build a pixel from per-channel values.
    fn from_fn(f: impl FnMut(usize) -> f64) -> Self;

    /// Gray intensity used by the binary strategies.
    fn intensity(&self) -> f64;

    /// Perceptual distance to `other`.
    fn difference(&self, other: &Self, metric: DistanceMetric) -> f64;

    /// Convert an sRGB color (e.g. a parsed hex palette entry) to this pixel type.
    fn from_rgb(rgb: Rgb) -> Self;

    /// A pixel with every channel set to `value`.
    #[inline]
    fn splat(value: f64) -> Self {
        Self::from_fn(|_| value)
    }

    /// Apply `f` to every channel.
    #[inline]
    fn map(self, mut f: impl FnMut(f64) -> f64) -> Self {
        Self::from_fn(|i| f(self.channel(i)))
    }

    /// Combine two pixels channel by channel.
    #[inline]
    fn zip_with(self, other: Self, mut f: impl FnMut(f64, f64) -> f64) -> Self {
        Self::from_fn(|i| f(self.channel(i), other.channel(i)))
    }
}

impl Pixel for f64 {
    const CHANNELS: usize = 1;

    #[inline]
    fn channel(&self, index: usize) -> f64 {
        assert!(index == 0, "channel index {index} out of range for gray");
        *self
    }

    #[inline]
    fn from_fn(mut f: impl FnMut(usize) -> f64) -> Self {
        f(0)
    }

    #[inline]
    fn intensity(&self) -> f64 {
        *self
    }

    #[inline]
    fn difference(&self, other: &Self, _metric: DistanceMetric) -> f64 {
        gray_difference(*self, *other)
    }

    #[inline]
    fn from_rgb(rgb: Rgb) -> Self {
        rgb.luma()
    }
}

impl Pixel for Rgb {
    const CHANNELS: usize = 3;

    #[inline]
    fn channel(&self, index: usize) -> f64 {
        [self.r, self.g, self.b][index]
    }

    #[inline]
    fn from_fn(mut f: impl FnMut(usize) -> f64) -> Self {
        let r = f(0);
        let g = f(1);
        let b = f(2);
        Rgb::new(r, g, b)
    }

    #[inline]
    fn intensity(&self) -> f64 {
        self.luma()
    }

    #[inline]
    fn difference(&self, other: &Self, metric: DistanceMetric) -> f64 {
        color_difference(*self, *other, metric)
    }

    #[inline]
    fn from_rgb(rgb: Rgb) -> Self {
        rgb
    }
}
