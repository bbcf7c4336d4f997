//! Normalized threshold matrices and their tiling over an image.

use serde::{Deserialize, Serialize};

use crate::error::DitherError;

/// An immutable `rows x cols` grid of thresholds in `[0, 1]`.
///
/// Serializes as a list of rows, so a custom screen can be written inline in
/// a YAML configuration:
///
/// ```yaml
/// matrix:
///   - [0.2, 0.6]
///   - [0.8, 0.4]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct ThresholdMatrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl ThresholdMatrix {
    /// Build a matrix from rows of normalized thresholds.
    ///
    /// # Errors
    ///
    /// [`DitherError::InvalidMatrix`] if there are no rows, a row is empty,
    /// rows differ in length, or a value lies outside `[0, 1]`.
    ///
    /// ```
    /// use ditherpunk::ThresholdMatrix;
    ///
    /// let m = ThresholdMatrix::new(vec![vec![0.25, 0.75]]).unwrap();
    /// assert_eq!(m.dimensions(), (1, 2));
    /// assert!(ThresholdMatrix::new(vec![vec![1.5]]).is_err());
    /// ```
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, DitherError> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(DitherError::InvalidMatrix(
                "matrix must have at least one row and one column".into(),
            ));
        }
        if let Some(row) = rows.iter().position(|r| r.len() != cols) {
            return Err(DitherError::InvalidMatrix(format!(
                "row {row} has {} entries, expected {cols}",
                rows[row].len()
            )));
        }
        let height = rows.len();
        let values: Vec<f64> = rows.into_iter().flatten().collect();
        if let Some(v) = values.iter().find(|v| !(0.0..=1.0).contains(*v)) {
            return Err(DitherError::InvalidMatrix(format!(
                "threshold {v} outside [0, 1]"
            )));
        }
        Ok(Self {
            rows: height,
            cols,
            values,
        })
    }

    /// Build a matrix from integer ranks.
    ///
    /// Rank `v` maps to `(v + 1) / (max + 2)`, so every threshold lies
    /// strictly inside `(0, 1)`: pure black always stays low and pure white
    /// always goes high.
    pub fn from_levels<R: AsRef<[u32]>>(levels: &[R]) -> Result<Self, DitherError> {
        let max = levels
            .iter()
            .flat_map(|r| r.as_ref().iter().copied())
            .max()
            .unwrap_or(0);
        let scale = f64::from(max) + 2.0;
        let rows = levels
            .iter()
            .map(|r| r.as_ref().iter().map(|&v| (f64::from(v) + 1.0) / scale).collect())
            .collect();
        Self::new(rows)
    }

    /// Normalize a fixed-width rank table; rectangular by construction.
    pub(crate) fn from_rank_table<const N: usize>(table: &[[u32; N]]) -> Self {
        let max = table.iter().flatten().copied().max().unwrap_or(0);
        let scale = f64::from(max) + 2.0;
        Self {
            rows: table.len(),
            cols: N,
            values: table
                .iter()
                .flatten()
                .map(|&v| (f64::from(v) + 1.0) / scale)
                .collect(),
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Threshold at `row`, `col`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.cols + col]
    }

    /// All thresholds, row-major.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Repeat the matrix over the whole image plane.
    pub fn tile(&self, invert: bool) -> TiledThreshold<'_> {
        TiledThreshold {
            matrix: self,
            invert,
        }
    }
}

impl TryFrom<Vec<Vec<f64>>> for ThresholdMatrix {
    type Error = DitherError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<ThresholdMatrix> for Vec<Vec<f64>> {
    fn from(matrix: ThresholdMatrix) -> Self {
        matrix
            .values
            .chunks(matrix.cols)
            .map(<[f64]>::to_vec)
            .collect()
    }
}

/// A [`ThresholdMatrix`] wrapped over the image plane via modulo indexing.
#[derive(Debug, Clone, Copy)]
pub struct TiledThreshold<'a> {
    matrix: &'a ThresholdMatrix,
    invert: bool,
}

impl TiledThreshold<'_> {
    /// Threshold for pixel `(x, y)`: `matrix[y mod R][x mod C]`, or one minus
    /// that when inverted.
    #[inline]
    pub fn at(&self, x: usize, y: usize) -> f64 {
        let v = self
            .matrix
            .get(y % self.matrix.rows, x % self.matrix.cols);
        if self.invert {
            1.0 - v
        } else {
            v
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_malformed_matrices() {
        assert!(matches!(
            ThresholdMatrix::new(Vec::new()),
            Err(DitherError::InvalidMatrix(_))
        ));
        assert!(matches!(
            ThresholdMatrix::new(vec![vec![]]),
            Err(DitherError::InvalidMatrix(_))
        ));
        assert!(matches!(
            ThresholdMatrix::new(vec![vec![0.1, 0.2], vec![0.3]]),
            Err(DitherError::InvalidMatrix(_))
        ));
        assert!(matches!(
            ThresholdMatrix::new(vec![vec![-0.1]]),
            Err(DitherError::InvalidMatrix(_))
        ));
        assert!(matches!(
            ThresholdMatrix::new(vec![vec![f64::NAN]]),
            Err(DitherError::InvalidMatrix(_))
        ));
    }

    #[test]
    fn test_from_levels_normalization() {
        let m = ThresholdMatrix::from_levels(&[[0u32, 2], [3, 1]]).unwrap();
        assert_eq!(m.values(), &[0.2, 0.6, 0.8, 0.4]);
    }

    #[test]
    fn test_tile_wraps_and_inverts() {
        let m = ThresholdMatrix::new(vec![vec![0.1, 0.2, 0.3], vec![0.4, 0.5, 0.6]]).unwrap();
        let tiled = m.tile(false);
        assert_eq!(tiled.at(0, 0), 0.1);
        assert_eq!(tiled.at(4, 0), 0.2);
        assert_eq!(tiled.at(5, 3), 0.6);

        let inverted = m.tile(true);
        assert_eq!(inverted.at(0, 0), 1.0 - 0.1);
        assert_eq!(inverted.at(2, 1), 1.0 - 0.6);
    }

    #[test]
    fn test_serde_as_nested_rows() {
        let m: ThresholdMatrix = serde_yaml::from_str("- [0.25, 0.75]\n- [1.0, 0.0]\n").unwrap();
        assert_eq!(m.dimensions(), (2, 2));
        assert_eq!(m.get(1, 0), 1.0);

        let yaml = serde_yaml::to_string(&m).unwrap();
        let back: ThresholdMatrix = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, m);

        assert!(serde_yaml::from_str::<ThresholdMatrix>("- [2.0]\n").is_err());
    }
}
