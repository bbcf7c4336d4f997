//! Test images, palettes and configuration snippets.

use ditherpunk::{Image, Palette, Rgb};

/// Hex palettes used across tests.
pub mod palettes {
    pub const BLACK_WHITE: [&str; 2] = ["#000000", "#ffffff"];

    pub const GRAYS_4: [&str; 4] = ["#000000", "#555555", "#aaaaaa", "#ffffff"];

    /// Typical six-color e-paper panel.
    pub const SPECTRA_6: [&str; 6] = [
        "#000000", "#ffffff", "#ff0000", "#00ff00", "#0000ff", "#ffff00",
    ];
}

/// YAML configurations exercised by the config tests.
pub mod configs {
    pub const BAYER_LINEAR: &str = r##"
algorithm:
  name: bayer
  level: 2
to_linear: true
"##;

    pub const SPECTRA_ATKINSON: &str = r##"
algorithm:
  name: atkinson
palette: ["#000000", "#ffffff", "#ff0000", "#00ff00", "#0000ff", "#ffff00"]
distance_metric: oklab
error_clamp: 0.5
"##;

    pub const SEPARATE_NOISE: &str = r##"
algorithm:
  name: separate_space
  inner:
    name: white_noise_threshold
seed: 7
"##;

    pub const CUSTOM_KERNEL: &str = r##"
algorithm:
  name: error_diffusion
  kernel:
    entries: [[1, 0, 1], [0, 1, 1]]
    divisor: 2
"##;
}

/// Horizontal gray ramp, 0.0 on the left to 1.0 on the right.
pub fn gray_ramp(width: usize, height: usize) -> Image<f64> {
    let span = (width - 1).max(1) as f64;
    Image::from_fn(width, height, |x, _| x as f64 / span)
}

/// Smooth two-axis color gradient.
pub fn color_sweep(width: usize, height: usize) -> Image<Rgb> {
    let (w, h) = ((width - 1).max(1) as f64, (height - 1).max(1) as f64);
    Image::from_fn(width, height, |x, y| {
        Rgb::new(x as f64 / w, y as f64 / h, 1.0 - x as f64 / w)
    })
}

pub fn rgb_palette(hex: &[&str]) -> Palette<Rgb> {
    Palette::from_hex(hex).unwrap()
}
