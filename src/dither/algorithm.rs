//! The closed set of dithering algorithms.

use serde::{Deserialize, Serialize};

use super::kernel::{self, DiffusionKernel};
use crate::error::DitherError;
use crate::threshold::{ThresholdMap, ThresholdMatrix};

/// A dithering algorithm together with its fixed configuration.
///
/// Serializes as an internally tagged map, so an algorithm can be written in
/// YAML as `{ name: bayer, level: 2 }` or
/// `{ name: separate_space, inner: { name: floyd_steinberg } }`.
///
/// # Example
///
/// ```
/// use ditherpunk::Algorithm;
///
/// let algorithm: Algorithm = serde_yaml::from_str("name: bayer\nlevel: 2").unwrap();
/// assert_eq!(algorithm, Algorithm::Bayer { level: 2, invert: false });
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Algorithm {
    /// The same threshold for every pixel.
    ConstantThreshold {
        #[serde(default = "default_threshold")]
        threshold: f64,
    },

    /// A fresh uniform random threshold per pixel.
    WhiteNoiseThreshold,

    /// Recursive Bayer matrix of side `2^(level + 1)`.
    Bayer {
        #[serde(default = "default_bayer_level")]
        level: u32,
        #[serde(default)]
        invert: bool,
    },

    /// 6 x 6 clustered-dot screen.
    ClusteredDots {
        #[serde(default)]
        invert: bool,
    },

    /// 6 x 6 central white-point screen.
    CentralWhitePoint {
        #[serde(default)]
        invert: bool,
    },

    /// 6 x 6 balanced centered-point screen.
    BalancedCenteredPoint {
        #[serde(default)]
        invert: bool,
    },

    /// 8 x 8 diamond screen.
    Rhombus {
        #[serde(default)]
        invert: bool,
    },

    /// Any caller-supplied threshold matrix.
    Ordered {
        matrix: ThresholdMatrix,
        #[serde(default)]
        invert: bool,
    },

    SimpleErrorDiffusion,
    #[default]
    FloydSteinberg,
    JarvisJudice,
    Stucki,
    Burkes,
    Sierra,
    TwoRowSierra,
    SierraLite,
    Atkinson,
    Fan93,
    ShiauFan,
    ShiauFan2,
    FalseFloydSteinberg,

    /// Error diffusion with a caller-supplied kernel.
    ErrorDiffusion { kernel: DiffusionKernel },

    /// Nearest palette color per pixel, no diffusion. Needs a palette.
    ClosestColor,

    /// Apply `inner` to each color channel independently.
    SeparateSpace { inner: Box<Algorithm> },
}

fn default_threshold() -> f64 {
    0.5
}

fn default_bayer_level() -> u32 {
    1
}

/// How an [`Algorithm`] is executed.
#[derive(Debug)]
pub(crate) enum Strategy<'a> {
    Threshold(ThresholdMap),
    Diffusion(DiffusionKernel),
    Closest,
    Separate(&'a Algorithm),
}

impl Algorithm {
    /// Threshold-based constant algorithm with the default 0.5 threshold.
    pub fn constant_threshold() -> Self {
        Self::ConstantThreshold {
            threshold: default_threshold(),
        }
    }

    /// Bayer matrix at the default level.
    pub fn bayer() -> Self {
        Self::Bayer {
            level: default_bayer_level(),
            invert: false,
        }
    }

    /// Wrap `inner` in channel separation.
    pub fn separate(inner: Algorithm) -> Self {
        Self::SeparateSpace {
            inner: Box::new(inner),
        }
    }

    /// Configuration name, as used in the `name` tag.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ConstantThreshold { .. } => "constant_threshold",
            Self::WhiteNoiseThreshold => "white_noise_threshold",
            Self::Bayer { .. } => "bayer",
            Self::ClusteredDots { .. } => "clustered_dots",
            Self::CentralWhitePoint { .. } => "central_white_point",
            Self::BalancedCenteredPoint { .. } => "balanced_centered_point",
            Self::Rhombus { .. } => "rhombus",
            Self::Ordered { .. } => "ordered",
            Self::SimpleErrorDiffusion => "simple_error_diffusion",
            Self::FloydSteinberg => "floyd_steinberg",
            Self::JarvisJudice => "jarvis_judice",
            Self::Stucki => "stucki",
            Self::Burkes => "burkes",
            Self::Sierra => "sierra",
            Self::TwoRowSierra => "two_row_sierra",
            Self::SierraLite => "sierra_lite",
            Self::Atkinson => "atkinson",
            Self::Fan93 => "fan93",
            Self::ShiauFan => "shiau_fan",
            Self::ShiauFan2 => "shiau_fan2",
            Self::FalseFloydSteinberg => "false_floyd_steinberg",
            Self::ErrorDiffusion { .. } => "error_diffusion",
            Self::ClosestColor => "closest_color",
            Self::SeparateSpace { .. } => "separate_space",
        }
    }

    /// Diffusion kernel of an error-diffusion variant.
    pub fn kernel(&self) -> Option<DiffusionKernel> {
        let kernel = match self {
            Self::SimpleErrorDiffusion => kernel::SIMPLE,
            Self::FloydSteinberg => kernel::FLOYD_STEINBERG,
            Self::JarvisJudice => kernel::JARVIS_JUDICE_NINKE,
            Self::Stucki => kernel::STUCKI,
            Self::Burkes => kernel::BURKES,
            Self::Sierra => kernel::SIERRA,
            Self::TwoRowSierra => kernel::TWO_ROW_SIERRA,
            Self::SierraLite => kernel::SIERRA_LITE,
            Self::Atkinson => kernel::ATKINSON,
            Self::Fan93 => kernel::FAN_93,
            Self::ShiauFan => kernel::SHIAU_FAN,
            Self::ShiauFan2 => kernel::SHIAU_FAN_2,
            Self::FalseFloydSteinberg => kernel::FALSE_FLOYD_STEINBERG,
            Self::ErrorDiffusion { kernel } => kernel.clone(),
            _ => return None,
        };
        Some(kernel)
    }

    /// True for the variants that compare against a threshold field.
    pub fn is_threshold(&self) -> bool {
        matches!(
            self,
            Self::ConstantThreshold { .. }
                | Self::WhiteNoiseThreshold
                | Self::Bayer { .. }
                | Self::ClusteredDots { .. }
                | Self::CentralWhitePoint { .. }
                | Self::BalancedCenteredPoint { .. }
                | Self::Rhombus { .. }
                | Self::Ordered { .. }
        )
    }

    /// Check thresholds, levels and custom kernels, including those of a
    /// separated inner algorithm.
    ///
    /// # Errors
    ///
    /// [`DitherError::InvalidMatrix`] or [`DitherError::InvalidKernel`].
    pub fn validate(&self) -> Result<(), DitherError> {
        match self.strategy()? {
            Strategy::Separate(inner) => inner.validate(),
            _ => Ok(()),
        }
    }

    /// Resolve the execution strategy, validating any custom configuration.
    pub(crate) fn strategy(&self) -> Result<Strategy<'_>, DitherError> {
        let ordered = |matrix: ThresholdMatrix, invert: bool| {
            Strategy::Threshold(ThresholdMap::Ordered { matrix, invert })
        };
        let strategy = match self {
            Self::ConstantThreshold { threshold } => {
                if !(0.0..=1.0).contains(threshold) {
                    return Err(DitherError::InvalidMatrix(format!(
                        "constant threshold {threshold} outside [0, 1]"
                    )));
                }
                Strategy::Threshold(ThresholdMap::Constant(*threshold))
            }
            Self::WhiteNoiseThreshold => Strategy::Threshold(ThresholdMap::WhiteNoise),
            Self::Bayer { level, invert } => ordered(ThresholdMatrix::bayer(*level)?, *invert),
            Self::ClusteredDots { invert } => ordered(ThresholdMatrix::clustered_dots(), *invert),
            Self::CentralWhitePoint { invert } => {
                ordered(ThresholdMatrix::central_white_point(), *invert)
            }
            Self::BalancedCenteredPoint { invert } => {
                ordered(ThresholdMatrix::balanced_centered_point(), *invert)
            }
            Self::Rhombus { invert } => ordered(ThresholdMatrix::rhombus(), *invert),
            Self::Ordered { matrix, invert } => ordered(matrix.clone(), *invert),
            Self::ClosestColor => Strategy::Closest,
            Self::SeparateSpace { inner } => Strategy::Separate(inner),
            diffusion => {
                let kernel = diffusion.kernel().ok_or_else(|| {
                    DitherError::InvalidKernel(format!("{} has no kernel", diffusion.name()))
                })?;
                kernel.validate()?;
                Strategy::Diffusion(kernel)
            }
        };
        Ok(strategy)
    }
}
