//! Assertion helpers for tests.

use ditherpunk::{Image, Palette, Pixel};
use pretty_assertions::assert_eq;

/// Assert every output pixel is exactly 0.0 or 1.0 in every channel.
pub fn assert_binary<P: Pixel>(image: &Image<P>) {
    for (i, pixel) in image.pixels().iter().enumerate() {
        for c in 0..P::CHANNELS {
            let v = pixel.channel(c);
            assert!(
                v == 0.0 || v == 1.0,
                "Pixel {i} channel {c} is {v}, expected 0.0 or 1.0"
            );
        }
    }
}

/// Assert every output pixel is a palette color.
pub fn assert_in_palette<P: Pixel>(image: &Image<P>, palette: &Palette<P>) {
    for (i, pixel) in image.pixels().iter().enumerate() {
        assert!(
            palette.colors().contains(pixel),
            "Pixel {i} ({pixel:?}) is not in the palette"
        );
    }
}

/// Assert output and input have the same dimensions.
pub fn assert_same_shape<P: Pixel, Q: Pixel>(a: &Image<P>, b: &Image<Q>) {
    assert_eq!(a.dimensions(), b.dimensions(), "Dimension mismatch");
}

/// Fraction of gray pixels that are high.
pub fn white_ratio(image: &Image<f64>) -> f64 {
    image.pixels().iter().sum::<f64>() / image.pixels().len() as f64
}
