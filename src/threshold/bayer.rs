//! Recursive Bayer dispersed-dot matrices.

use super::matrix::ThresholdMatrix;
use crate::error::DitherError;

/// Largest supported Bayer level (a 2048 x 2048 matrix).
pub const MAX_BAYER_LEVEL: u32 = 10;

/// Integer ranks of the Bayer matrix of `level`, side `2^(level + 1)`.
///
/// Level 0 is `[[0, 2], [3, 1]]`. Level `n` tiles four copies of level
/// `n - 1` scaled by four and offset by 0, 2, 3 and 1 in the same quadrant
/// order, so every rank in `0..4^(n+1)` appears exactly once. Callers cap
/// `level` at [`MAX_BAYER_LEVEL`].
pub(crate) fn bayer_levels(level: u32) -> Vec<Vec<u32>> {
    if level == 0 {
        return vec![vec![0, 2], vec![3, 1]];
    }
    let previous = bayer_levels(level - 1);
    let n = previous.len();
    let mut out = vec![vec![0; 2 * n]; 2 * n];
    for (y, row) in previous.iter().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            let base = 4 * v;
            out[y][x] = base;
            out[y][x + n] = base + 2;
            out[y + n][x] = base + 3;
            out[y + n][x + n] = base + 1;
        }
    }
    out
}

impl ThresholdMatrix {
    /// Normalized Bayer matrix of `level`.
    ///
    /// # Errors
    ///
    /// [`DitherError::InvalidMatrix`] above [`MAX_BAYER_LEVEL`].
    ///
    /// ```
    /// use ditherpunk::ThresholdMatrix;
    ///
    /// let m = ThresholdMatrix::bayer(1).unwrap();
    /// assert_eq!(m.dimensions(), (4, 4));
    /// ```
    pub fn bayer(level: u32) -> Result<Self, DitherError> {
        if level > MAX_BAYER_LEVEL {
            return Err(DitherError::InvalidMatrix(format!(
                "Bayer level {level} exceeds maximum {MAX_BAYER_LEVEL}"
            )));
        }
        Self::from_levels(&bayer_levels(level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_zero() {
        assert_eq!(bayer_levels(0), vec![vec![0, 2], vec![3, 1]]);
    }

    #[test]
    fn test_level_one_classic_4x4() {
        assert_eq!(
            bayer_levels(1),
            vec![
                vec![0, 8, 2, 10],
                vec![12, 4, 14, 6],
                vec![3, 11, 1, 9],
                vec![15, 7, 13, 5],
            ]
        );
    }

    #[test]
    fn test_dimensions_and_unique_ranks() {
        for level in 0..5 {
            let side = 1usize << (level + 1);
            let ranks = bayer_levels(level);
            assert_eq!(ranks.len(), side);
            assert!(ranks.iter().all(|r| r.len() == side));

            let mut flat: Vec<u32> = ranks.into_iter().flatten().collect();
            flat.sort_unstable();
            let expected: Vec<u32> = (0..(side * side) as u32).collect();
            assert_eq!(flat, expected, "level {level}");
        }
    }

    #[test]
    fn test_normalized_matrix_in_unit_range() {
        let m = ThresholdMatrix::bayer(2).unwrap();
        assert_eq!(m.dimensions(), (8, 8));
        assert!(m.values().iter().all(|&v| v > 0.0 && v < 1.0));
    }

    #[test]
    fn test_largest_level_fits_rank_type() {
        let m = ThresholdMatrix::bayer(MAX_BAYER_LEVEL).unwrap();
        assert_eq!(m.dimensions(), (2048, 2048));
        assert!(m.values().iter().all(|&v| v > 0.0 && v < 1.0));
    }

    #[test]
    fn test_level_cap() {
        assert!(matches!(
            ThresholdMatrix::bayer(MAX_BAYER_LEVEL + 1),
            Err(DitherError::InvalidMatrix(_))
        ));
    }
}
