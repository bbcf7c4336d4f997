//! Channel separation: run a gray algorithm on each channel independently.

use rayon::prelude::*;

use super::algorithm::Algorithm;
use super::options::DitherOptions;
use super::quantize;
use crate::error::DitherError;
use crate::image::{Image, Pixel};
use crate::palette::Palette;

/// Dither each channel of `image` with `inner` in binary mode and recombine.
///
/// Returns one index per pixel into [`Palette::corners`]: bit `c` of the
/// index is the binary result for channel `c`. Channels are processed in
/// parallel; each gets [`DitherOptions::for_channel`] so white noise is
/// independent per channel.
pub(crate) fn separate_indices<P: Pixel>(
    inner: &Algorithm,
    image: &Image<P>,
    options: &DitherOptions,
) -> Result<Vec<usize>, DitherError> {
    let channels: Vec<Vec<usize>> = (0..P::CHANNELS)
        .into_par_iter()
        .map(|c| {
            let channel = image.channel(c);
            quantize(inner, &channel, None, &options.for_channel(c))
                .map(|indexed| indexed.indices().to_vec())
        })
        .collect::<Result<_, _>>()?;

    let mut indices = vec![0usize; image.pixels().len()];
    for (c, bits) in channels.iter().enumerate() {
        for (dst, &bit) in indices.iter_mut().zip(bits) {
            *dst |= bit << c;
        }
    }
    Ok(indices)
}

/// Snap separated corner indices onto a caller palette.
pub(crate) fn snap_to_palette<P: Pixel>(corner_indices: &[usize], palette: &Palette<P>) -> Vec<usize> {
    let corners = Palette::<P>::corners();
    let lookup: Vec<usize> = corners.colors().iter().map(|c| palette.nearest(c)).collect();
    corner_indices.iter().map(|&i| lookup[i]).collect()
}
