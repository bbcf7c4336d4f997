//! Error-diffusion strategy: sequential raster sweep over a full-image
//! accumulator.

use super::kernel::DiffusionKernel;
use crate::color::{linear_to_srgb, srgb_to_linear};
use crate::image::{Image, Pixel};
use crate::palette::Palette;

/// Full-image float accumulator for the diffusion sweep.
///
/// Sized to the whole image rather than a window of rows: kernels such as
/// Jarvis-Judice-Ninke write two rows ahead, and keeping every row makes the
/// additive, out-of-order writes explicit.
#[derive(Debug)]
pub(crate) struct WorkingBuffer<P> {
    width: usize,
    height: usize,
    values: Vec<P>,
}

impl<P: Pixel> WorkingBuffer<P> {
    pub(crate) fn new(image: Image<P>) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            values: image.into_pixels(),
        }
    }

    #[inline]
    pub(crate) fn get(&self, x: usize, y: usize) -> P {
        self.values[y * self.width + x]
    }

    /// Add `error * weight` to the pixel at `(x + dx, y + dy)`.
    ///
    /// Targets outside the image are skipped; their share of the error is
    /// lost.
    #[inline]
    pub(crate) fn add_error(&mut self, x: usize, y: usize, dx: i32, dy: usize, error: P, weight: f64) {
        let Some(tx) = x.checked_add_signed(dx as isize) else {
            return;
        };
        let ty = y + dy;
        if tx >= self.width || ty >= self.height {
            return;
        }
        let slot = &mut self.values[ty * self.width + tx];
        *slot = slot.zip_with(error, |v, e| v + e * weight);
    }
}

/// Run the raster sweep.
///
/// `quantize` maps a working value to `(palette index, quantized value)`,
/// with the quantized value expressed in the same space as the working
/// buffer. The residual `working - quantized` is spread over the kernel's
/// neighbors.
pub(crate) fn diffuse<P: Pixel>(
    working: Image<P>,
    kernel: &DiffusionKernel,
    error_clamp: Option<f64>,
    mut quantize: impl FnMut(P) -> (usize, P),
) -> Vec<usize> {
    let weights = kernel.scaled_weights();
    let mut buffer = WorkingBuffer::new(working);
    let (width, height) = (buffer.width, buffer.height);
    let mut indices = Vec::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            let mut value = buffer.get(x, y);
            if let Some(margin) = error_clamp {
                value = value.map(|v| v.clamp(-margin, 1.0 + margin));
            }
            let (index, quantized) = quantize(value);
            let error = value.zip_with(quantized, |v, q| v - q);
            for &(dx, dy, weight) in &weights {
                buffer.add_error(x, y, dx, dy, error, weight);
            }
            indices.push(index);
        }
    }
    indices
}

/// Binary diffusion on gray values: high iff the working value is at least
/// one half.
pub(crate) fn diffuse_binary(
    gray: Image<f64>,
    kernel: &DiffusionKernel,
    error_clamp: Option<f64>,
) -> Vec<usize> {
    diffuse(gray, kernel, error_clamp, |v| {
        if v >= 0.5 {
            (1, 1.0)
        } else {
            (0, 0.0)
        }
    })
}

/// Diffusion against an arbitrary palette.
///
/// With `to_linear` the residual is computed and spread in linear light,
/// while the nearest-color search still compares sRGB-encoded values so the
/// perceptual metric sees what it expects.
pub(crate) fn diffuse_palette<P: Pixel>(
    image: &Image<P>,
    palette: &Palette<P>,
    kernel: &DiffusionKernel,
    to_linear: bool,
    error_clamp: Option<f64>,
) -> Vec<usize> {
    if to_linear {
        let working = image.map(|p| p.map(srgb_to_linear));
        let linear = palette.map(|c| c.map(srgb_to_linear));
        diffuse(working, kernel, error_clamp, |v| {
            let index = palette.nearest(&v.map(linear_to_srgb));
            (index, linear.colors()[index])
        })
    } else {
        diffuse(image.clone(), kernel, error_clamp, |v| {
            let index = palette.nearest(&v);
            (index, palette.colors()[index])
        })
    }
}
