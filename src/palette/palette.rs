//! Ordered color set with nearest-color matching.

use std::str::FromStr;

use crate::color::{DistanceMetric, Rgb};
use crate::error::DitherError;
use crate::image::Pixel;

/// An ordered, non-empty set of output colors.
///
/// Duplicates are allowed; an index into the palette identifies an output
/// color. Matching is a linear scan, which is fast enough for the palette
/// sizes dithering deals with (a few hundred entries at most).
///
/// # Example
///
/// ```
/// use ditherpunk::Palette;
///
/// let palette = Palette::new(vec![0.0, 1.0]).unwrap();
/// assert_eq!(palette.nearest(&0.3), 0);
/// assert_eq!(palette.nearest(&0.7), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette<P> {
    colors: Vec<P>,
    distance_metric: DistanceMetric,
}

impl<P: Pixel> Palette<P> {
    /// Create a palette from its colors, in output order.
    ///
    /// # Errors
    ///
    /// [`DitherError::EmptyPalette`] if `colors` is empty.
    pub fn new(colors: Vec<P>) -> Result<Self, DitherError> {
        if colors.is_empty() {
            return Err(DitherError::EmptyPalette);
        }
        Ok(Self {
            colors,
            distance_metric: DistanceMetric::default(),
        })
    }

    /// The two-color palette of binary mode: all channels 0.0, then all 1.0.
    pub fn binary() -> Self {
        Self {
            colors: vec![P::splat(0.0), P::splat(1.0)],
            distance_metric: DistanceMetric::default(),
        }
    }

    /// Every combination of 0.0/1.0 channels; entry `i` has channel `c` set
    /// iff bit `c` of `i` is set. For gray this equals [`binary`](Self::binary).
    pub fn corners() -> Self {
        let colors = (0..1usize << P::CHANNELS)
            .map(|i| P::from_fn(|c| ((i >> c) & 1) as f64))
            .collect();
        Self {
            colors,
            distance_metric: DistanceMetric::default(),
        }
    }

    /// Parse a palette from hex strings such as `"#FF8000"` or `"#fff"`.
    ///
    /// For gray palettes each color is reduced to its luma.
    pub fn from_hex<S: AsRef<str>>(hex: &[S]) -> Result<Self, DitherError> {
        let colors = hex
            .iter()
            .map(|s| Rgb::from_str(s.as_ref()).map(P::from_rgb))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    /// Select the metric used by [`nearest`](Self::nearest).
    #[inline]
    pub fn with_distance_metric(mut self, metric: DistanceMetric) -> Self {
        self.distance_metric = metric;
        self
    }

    #[inline]
    pub fn distance_metric(&self) -> DistanceMetric {
        self.distance_metric
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false: construction rejects empty palettes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    pub fn colors(&self) -> &[P] {
        &self.colors
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<P> {
        self.colors.get(index).copied()
    }

    /// Color emitted for "low" pixels by the threshold strategies.
    #[inline]
    pub fn first(&self) -> P {
        self.colors[0]
    }

    /// Color emitted for "high" pixels by the threshold strategies.
    #[inline]
    pub fn last(&self) -> P {
        self.colors[self.colors.len() - 1]
    }

    /// Index of the entry closest to `color`.
    ///
    /// Ties resolve to the lowest index.
    #[inline]
    pub fn nearest(&self, color: &P) -> usize {
        self.find_nearest(color).0
    }

    /// Index of the closest entry together with its distance.
    pub fn find_nearest(&self, color: &P) -> (usize, f64) {
        let mut best = 0;
        let mut best_distance = f64::INFINITY;
        for (index, entry) in self.colors.iter().enumerate() {
            let distance = entry.difference(color, self.distance_metric);
            if distance < best_distance {
                best = index;
                best_distance = distance;
            }
        }
        (best, best_distance)
    }

    /// Apply `f` to every color, keeping order and metric.
    pub(crate) fn map(&self, f: impl FnMut(&P) -> P) -> Self {
        Self {
            colors: self.colors.iter().map(f).collect(),
            distance_metric: self.distance_metric,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::ParseColorError;

    #[test]
    fn test_empty_palette_rejected() {
        let result = Palette::<f64>::new(Vec::new());
        assert!(matches!(result, Err(DitherError::EmptyPalette)));
    }

    #[test]
    fn test_black_white_gray_lookup() {
        let palette = Palette::new(vec![0.0, 1.0]).unwrap();
        assert_eq!(palette.nearest(&0.3), 0);
        assert_eq!(palette.nearest(&0.7), 1);
        assert_eq!(palette.nearest(&0.5), 0, "ties resolve to the lowest index");
    }

    #[test]
    fn test_duplicates_resolve_to_first() {
        let palette = Palette::new(vec![0.2, 0.8, 0.8]).unwrap();
        assert_eq!(palette.nearest(&0.9), 1);
    }

    #[test]
    fn test_find_nearest_reports_distance() {
        let palette = Palette::new(vec![0.0, 0.5, 1.0]).unwrap();
        let (index, distance) = palette.find_nearest(&0.6);
        assert_eq!(index, 1);
        assert!((distance - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_rgb_lookup_both_metrics() {
        let colors = vec![
            Rgb::new(0.0, 0.0, 0.0),
            Rgb::new(1.0, 1.0, 1.0),
            Rgb::new(1.0, 0.0, 0.0),
            Rgb::new(0.0, 0.0, 1.0),
        ];
        for metric in [DistanceMetric::Ciede2000, DistanceMetric::Oklab] {
            let palette = Palette::new(colors.clone())
                .unwrap()
                .with_distance_metric(metric);
            assert_eq!(palette.nearest(&Rgb::new(0.9, 0.1, 0.1)), 2, "{metric:?}");
            assert_eq!(palette.nearest(&Rgb::new(0.1, 0.1, 0.8)), 3, "{metric:?}");
            assert_eq!(palette.nearest(&Rgb::gray(0.95)), 1, "{metric:?}");
            assert_eq!(palette.nearest(&Rgb::gray(0.05)), 0, "{metric:?}");
        }
    }

    #[test]
    fn test_binary_and_corners() {
        assert_eq!(Palette::<f64>::binary().colors(), &[0.0, 1.0]);
        assert_eq!(Palette::<f64>::corners(), Palette::<f64>::binary());
        assert_eq!(
            Palette::<Rgb>::binary().colors(),
            &[Rgb::gray(0.0), Rgb::gray(1.0)]
        );

        let corners = Palette::<Rgb>::corners();
        assert_eq!(corners.len(), 8);
        assert_eq!(corners.get(1), Some(Rgb::new(1.0, 0.0, 0.0)));
        assert_eq!(corners.get(6), Some(Rgb::new(0.0, 1.0, 1.0)));
        assert_eq!(corners.last(), Rgb::gray(1.0));
    }

    #[test]
    fn test_from_hex() {
        let palette = Palette::<Rgb>::from_hex(&["#000", "#FFFFFF", "#ff0000"]).unwrap();
        assert_eq!(palette.len(), 3);
        assert_eq!(palette.get(2), Some(Rgb::new(1.0, 0.0, 0.0)));
        assert_eq!(palette.first(), Rgb::gray(0.0));
        assert_eq!(palette.last(), Rgb::new(1.0, 0.0, 0.0));

        let gray = Palette::<f64>::from_hex(&["#000000", "#ffffff"]).unwrap();
        assert_eq!(gray.colors(), &[0.0, 1.0]);
    }

    #[test]
    fn test_from_hex_errors() {
        let err = Palette::<Rgb>::from_hex(&["#12"]).unwrap_err();
        assert!(matches!(
            err,
            DitherError::ParseColor(ParseColorError::InvalidLength)
        ));
        let empty: [&str; 0] = [];
        assert!(matches!(
            Palette::<Rgb>::from_hex(&empty),
            Err(DitherError::EmptyPalette)
        ));
    }
}
