//! Threshold strategy: independent per-pixel comparison.

use rayon::prelude::*;

use crate::image::Image;
use crate::threshold::ThresholdField;

/// Compare each gray value against its threshold; `true` means "high".
///
/// The comparison is inclusive (`value >= threshold`). Rows are processed in
/// parallel since no pixel depends on another.
pub(crate) fn threshold_levels(gray: &Image<f64>, field: &ThresholdField<'_>) -> Vec<bool> {
    let width = gray.width();
    let mut out = vec![false; gray.pixels().len()];
    out.par_chunks_mut(width.max(1))
        .zip(gray.pixels().par_chunks(width.max(1)))
        .enumerate()
        .for_each(|(y, (out_row, in_row))| {
            for (x, (dst, &value)) in out_row.iter_mut().zip(in_row).enumerate() {
                *dst = value >= field.at(x, y);
            }
        });
    out
}
