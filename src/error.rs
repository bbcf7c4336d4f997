//! Unified error type for the ditherpunk public API.

use thiserror::Error;

use crate::palette::ParseColorError;

/// Errors reported by the dithering engine and its configuration layer.
///
/// Every error is detected before the first output pixel is written, so a
/// failed call never leaves a partially dithered buffer behind.
#[derive(Debug, Error)]
pub enum DitherError {
    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    #[error("Invalid diffusion kernel: {0}")]
    InvalidKernel(String),

    #[error("Invalid threshold matrix: {0}")]
    InvalidMatrix(String),

    #[error("Palette cannot be empty")]
    EmptyPalette,

    #[error(
        "Dimension mismatch: expected {}x{}, got {}x{}",
        expected.0, expected.1, actual.0, actual.1
    )]
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("Pixel buffer length {actual} does not match {expected} pixels")]
    BufferLength { expected: usize, actual: usize },

    #[error("Color parse error: {0}")]
    ParseColor(#[from] ParseColorError),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimension_message() {
        let error = DitherError::InvalidDimension {
            width: 0,
            height: 10,
        };
        assert_eq!(error.to_string(), "Invalid image dimensions: 0x10");
    }

    #[test]
    fn test_dimension_mismatch_message() {
        let error = DitherError::DimensionMismatch {
            expected: (4, 3),
            actual: (3, 4),
        };
        assert_eq!(error.to_string(), "Dimension mismatch: expected 4x3, got 3x4");
    }

    #[test]
    fn test_empty_palette_message() {
        assert_eq!(DitherError::EmptyPalette.to_string(), "Palette cannot be empty");
    }

    #[test]
    fn test_from_parse_color_error() {
        let error: DitherError = ParseColorError::InvalidLength.into();
        match error {
            DitherError::ParseColor(_) => {}
            _ => panic!("Expected ParseColor variant"),
        }
    }
}
