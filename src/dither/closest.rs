//! Plain nearest-color quantization, no error propagation.

use rayon::prelude::*;

use crate::image::{Image, Pixel};
use crate::palette::Palette;

/// Map every pixel to its nearest palette entry, in parallel.
pub(crate) fn closest_indices<P: Pixel>(image: &Image<P>, palette: &Palette<P>) -> Vec<usize> {
    image
        .pixels()
        .par_iter()
        .map(|pixel| palette.nearest(pixel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_closest_gray() {
        let image = Image::new(4, 1, vec![0.1, 0.4, 0.6, 0.95]).unwrap();
        let palette = Palette::new(vec![0.0, 0.5, 1.0]).unwrap();
        assert_eq!(closest_indices(&image, &palette), vec![0, 1, 1, 2]);
    }

    #[test]
    fn test_closest_rgb() {
        let image = Image::new(
            2,
            1,
            vec![Rgb::new(0.9, 0.8, 0.1), Rgb::new(0.1, 0.1, 0.9)],
        )
        .unwrap();
        let palette = Palette::<Rgb>::from_hex(&["#000000", "#ffff00", "#0000ff"]).unwrap();
        assert_eq!(closest_indices(&image, &palette), vec![1, 2]);
    }
}
