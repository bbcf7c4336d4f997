//! Per-call dithering options.

/// Options shared by every algorithm.
///
/// # Defaults
///
/// - `to_linear`: `false` (values are compared as given)
/// - `seed`: `None` (white noise draws fresh entropy each call)
/// - `error_clamp`: `None` (working values accumulate unclamped)
///
/// # Example
///
/// ```
/// use ditherpunk::DitherOptions;
///
/// let options = DitherOptions::new().to_linear(true).seed(42);
/// assert!(options.to_linear);
/// assert_eq!(options.seed, Some(42));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DitherOptions {
    /// Decode sRGB to linear light before thresholding or diffusing.
    pub to_linear: bool,

    /// Seed for the white-noise threshold field.
    pub seed: Option<u64>,

    /// Clamp error-diffusion working values to `[-m, 1 + m]` before
    /// quantizing.
    ///
    /// Keeps small palettes from "blooming" when large residuals pile up.
    pub error_clamp: Option<f64>,
}

impl DitherOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn to_linear(mut self, enabled: bool) -> Self {
        self.to_linear = enabled;
        self
    }

    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the error clamp margin.
    #[inline]
    pub fn error_clamp(mut self, margin: f64) -> Self {
        self.error_clamp = Some(margin);
        self
    }

    /// Options for channel `index` of a separated image: white noise gets
    /// an independent stream per channel.
    pub(crate) fn for_channel(&self, index: usize) -> Self {
        Self {
            seed: self.seed.map(|s| s.wrapping_add(index as u64)),
            ..self.clone()
        }
    }
}
