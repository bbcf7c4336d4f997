//! YAML configuration for a dithering run.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::api::Ditherer;
use crate::color::DistanceMetric;
use crate::dither::{Algorithm, DitherOptions};
use crate::error::DitherError;
use crate::image::Pixel;
use crate::palette::Palette;

/// A complete dithering setup as written in YAML.
///
/// ```yaml
/// algorithm:
///   name: bayer
///   level: 2
/// to_linear: true
/// palette: ["#000000", "#ffffff"]
/// distance_metric: oklab
/// ```
///
/// Every field is optional; an empty document selects binary
/// Floyd-Steinberg.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DitherConfig {
    #[serde(default)]
    pub algorithm: Algorithm,

    #[serde(default)]
    pub to_linear: bool,

    /// Hex colors; empty means binary output.
    #[serde(default)]
    pub palette: Vec<String>,

    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub error_clamp: Option<f64>,

    #[serde(default)]
    pub distance_metric: DistanceMetric,
}

impl DitherConfig {
    /// Parse a configuration from YAML text.
    ///
    /// The algorithm is validated here, so a bad threshold or kernel fails
    /// at load time rather than on the first image.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, DitherError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.algorithm.validate()?;
        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DitherError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            algorithm = config.algorithm.name(),
            palette = config.palette.len(),
            "Loaded dither configuration"
        );
        Ok(config)
    }

    /// Options carried by this configuration.
    pub fn options(&self) -> DitherOptions {
        DitherOptions {
            to_linear: self.to_linear,
            seed: self.seed,
            error_clamp: self.error_clamp,
        }
    }

    /// Build a ready-to-use [`Ditherer`].
    ///
    /// # Errors
    ///
    /// [`DitherError::ParseColor`] for a malformed hex color.
    pub fn ditherer<P: Pixel>(&self) -> Result<Ditherer<P>, DitherError> {
        let ditherer = Ditherer::new(self.algorithm.clone()).options(self.options());
        if self.palette.is_empty() {
            return Ok(ditherer);
        }
        let palette = Palette::from_hex(&self.palette)?.with_distance_metric(self.distance_metric);
        Ok(ditherer.palette(palette))
    }
}
