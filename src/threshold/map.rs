//! Per-pixel threshold sources for the threshold strategy.

use super::matrix::{ThresholdMatrix, TiledThreshold};
use super::noise::white_noise;

/// Where a pixel's threshold comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum ThresholdMap {
    /// The same threshold everywhere.
    Constant(f64),
    /// An independent uniform sample per pixel.
    WhiteNoise,
    /// A matrix tiled over the image, optionally inverted.
    Ordered {
        matrix: ThresholdMatrix,
        invert: bool,
    },
}

impl ThresholdMap {
    /// Resolve the thresholds for one `width x height` invocation.
    pub fn field(&self, width: usize, height: usize, seed: Option<u64>) -> ThresholdField<'_> {
        match self {
            Self::Constant(t) => ThresholdField::Constant(*t),
            Self::WhiteNoise => ThresholdField::Noise {
                width,
                values: white_noise(width, height, seed),
            },
            Self::Ordered { matrix, invert } => ThresholdField::Tiled(matrix.tile(*invert)),
        }
    }
}

/// Thresholds resolved for a single image; read-only and shareable across
/// threads.
#[derive(Debug, Clone)]
pub enum ThresholdField<'a> {
    Constant(f64),
    Noise { width: usize, values: Vec<f64> },
    Tiled(TiledThreshold<'a>),
}

impl ThresholdField<'_> {
    #[inline]
    pub fn at(&self, x: usize, y: usize) -> f64 {
        match self {
            Self::Constant(t) => *t,
            Self::Noise { width, values } => values[y * width + x],
            Self::Tiled(tiled) => tiled.at(x, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_field() {
        let field = ThresholdMap::Constant(0.3).field(4, 4, None);
        assert_eq!(field.at(0, 0), 0.3);
        assert_eq!(field.at(3, 2), 0.3);
    }

    #[test]
    fn test_noise_field_matches_generator() {
        let field = ThresholdMap::WhiteNoise.field(3, 2, Some(11));
        let raw = white_noise(3, 2, Some(11));
        assert_eq!(field.at(2, 1), raw[5]);
        assert_eq!(field.at(0, 1), raw[3]);
    }

    #[test]
    fn test_ordered_field_tiles() {
        let map = ThresholdMap::Ordered {
            matrix: ThresholdMatrix::bayer(0).unwrap(),
            invert: false,
        };
        let field = map.field(10, 10, None);
        assert_eq!(field.at(0, 0), field.at(2, 2));
        assert_eq!(field.at(1, 0), 0.6);
    }
}
