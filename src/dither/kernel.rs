//! Error diffusion kernel definitions.
//!
//! Each kernel lists the not-yet-visited neighbors that receive a share of a
//! pixel's quantization error. Offsets are `(dx, dy)` relative to the current
//! pixel in raster order: `dy` never negative, and on the current row
//! (`dy == 0`) only pixels to the right (`dx > 0`) are valid targets.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::DitherError;

/// An error diffusion kernel.
///
/// A neighbor at `(dx, dy)` with weight `w` receives `error * w / divisor`.
/// The weights therefore split into a normalized distribution
/// ([`normalized_weights`](Self::normalized_weights), summing to 1) and a
/// propagation [`gain`](Self::gain) of `sum(w) / divisor`. Every named kernel
/// has gain 1 except [`ATKINSON`], which deliberately drops a quarter of the
/// error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "KernelTable", into = "KernelTable")]
pub struct DiffusionKernel {
    entries: Cow<'static, [(i32, i32, u32)]>,
    divisor: u32,
}

/// Serialized form: `{ entries: [[dx, dy, weight], ...], divisor: n }`.
#[derive(Serialize, Deserialize)]
struct KernelTable {
    entries: Vec<(i32, i32, u32)>,
    divisor: u32,
}

impl TryFrom<KernelTable> for DiffusionKernel {
    type Error = DitherError;

    fn try_from(table: KernelTable) -> Result<Self, Self::Error> {
        Self::new(table.entries, table.divisor)
    }
}

impl From<DiffusionKernel> for KernelTable {
    fn from(kernel: DiffusionKernel) -> Self {
        Self {
            entries: kernel.entries.into_owned(),
            divisor: kernel.divisor,
        }
    }
}

impl DiffusionKernel {
    /// Build a custom kernel from `(dx, dy, weight)` entries.
    ///
    /// # Errors
    ///
    /// [`DitherError::InvalidKernel`] if the kernel is empty, the divisor is
    /// zero, the weights sum to zero or to more than the divisor, or an
    /// offset points at an already visited pixel.
    ///
    /// ```
    /// use ditherpunk::DiffusionKernel;
    ///
    /// assert!(DiffusionKernel::new(vec![(1, 0, 1), (0, 1, 1)], 2).is_ok());
    /// assert!(DiffusionKernel::new(vec![(-1, 0, 1)], 1).is_err());
    /// ```
    pub fn new(entries: Vec<(i32, i32, u32)>, divisor: u32) -> Result<Self, DitherError> {
        let kernel = Self {
            entries: Cow::Owned(entries),
            divisor,
        };
        kernel.validate()?;
        Ok(kernel)
    }

    /// Wrap a static table without validation; used for the named kernels.
    pub const fn from_static(entries: &'static [(i32, i32, u32)], divisor: u32) -> Self {
        Self {
            entries: Cow::Borrowed(entries),
            divisor,
        }
    }

    /// Check the causal-offset and weight invariants.
    pub fn validate(&self) -> Result<(), DitherError> {
        if self.entries.is_empty() {
            return Err(DitherError::InvalidKernel("kernel has no entries".into()));
        }
        if self.divisor == 0 {
            return Err(DitherError::InvalidKernel("divisor must be positive".into()));
        }
        for &(dx, dy, _) in self.entries.iter() {
            if dy < 0 || (dy == 0 && dx <= 0) {
                return Err(DitherError::InvalidKernel(format!(
                    "offset ({dx}, {dy}) is not causal"
                )));
            }
        }
        let sum = self.weight_sum();
        if sum == 0 {
            return Err(DitherError::InvalidKernel("weights sum to zero".into()));
        }
        if sum > u64::from(self.divisor) {
            return Err(DitherError::InvalidKernel(format!(
                "weights sum to {sum}, more than divisor {}",
                self.divisor
            )));
        }
        Ok(())
    }

    /// Raw `(dx, dy, weight)` entries.
    #[inline]
    pub fn entries(&self) -> &[(i32, i32, u32)] {
        &self.entries
    }

    #[inline]
    pub fn divisor(&self) -> u32 {
        self.divisor
    }

    /// Fraction of the error that is propagated at all.
    pub fn gain(&self) -> f64 {
        self.weight_sum() as f64 / f64::from(self.divisor)
    }

    /// Entries with weights rescaled to sum to 1.
    pub fn normalized_weights(&self) -> impl Iterator<Item = (i32, i32, f64)> + '_ {
        let sum = self.weight_sum() as f64;
        self.entries
            .iter()
            .map(move |&(dx, dy, w)| (dx, dy, f64::from(w) / sum))
    }

    /// Entries with the share of error each neighbor actually receives.
    pub(crate) fn scaled_weights(&self) -> Vec<(i32, usize, f64)> {
        let divisor = f64::from(self.divisor);
        self.entries
            .iter()
            .map(|&(dx, dy, w)| (dx, dy.max(0) as usize, f64::from(w) / divisor))
            .collect()
    }

    fn weight_sum(&self) -> u64 {
        self.entries.iter().map(|&(_, _, w)| u64::from(w)).sum()
    }
}

/// Two-neighbor kernel: half right, half below.
///
/// ```text
///    X   1
///    1
/// ```
pub const SIMPLE: DiffusionKernel = DiffusionKernel::from_static(&[(1, 0, 1), (0, 1, 1)], 2);

/// Floyd-Steinberg.
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: DiffusionKernel =
    DiffusionKernel::from_static(&[(1, 0, 7), (-1, 1, 3), (0, 1, 5), (1, 1, 1)], 16);

/// Jarvis-Judice-Ninke, spanning two rows below.
///
/// ```text
///            X   7   5
///    3   5   7   5   3
///    1   3   5   3   1
/// ```
pub const JARVIS_JUDICE_NINKE: DiffusionKernel = DiffusionKernel::from_static(
    &[
        (1, 0, 7),
        (2, 0, 5),
        (-2, 1, 3),
        (-1, 1, 5),
        (0, 1, 7),
        (1, 1, 5),
        (2, 1, 3),
        (-2, 2, 1),
        (-1, 2, 3),
        (0, 2, 5),
        (1, 2, 3),
        (2, 2, 1),
    ],
    48,
);

/// Stucki.
///
/// ```text
///            X   8   4
///    2   4   8   4   2
///    1   2   4   2   1
/// ```
pub const STUCKI: DiffusionKernel = DiffusionKernel::from_static(
    &[
        (1, 0, 8),
        (2, 0, 4),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 8),
        (1, 1, 4),
        (2, 1, 2),
        (-2, 2, 1),
        (-1, 2, 2),
        (0, 2, 4),
        (1, 2, 2),
        (2, 2, 1),
    ],
    42,
);

/// Burkes, the two-row cut of Stucki.
///
/// ```text
///            X   8   4
///    2   4   8   4   2
/// ```
pub const BURKES: DiffusionKernel = DiffusionKernel::from_static(
    &[
        (1, 0, 8),
        (2, 0, 4),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 8),
        (1, 1, 4),
        (2, 1, 2),
    ],
    32,
);

/// Sierra (Sierra-3).
///
/// ```text
///            X   5   3
///    2   4   5   4   2
///        2   3   2
/// ```
pub const SIERRA: DiffusionKernel = DiffusionKernel::from_static(
    &[
        (1, 0, 5),
        (2, 0, 3),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 5),
        (1, 1, 4),
        (2, 1, 2),
        (-1, 2, 2),
        (0, 2, 3),
        (1, 2, 2),
    ],
    32,
);

/// Two-row Sierra.
///
/// ```text
///            X   4   3
///    1   2   3   2   1
/// ```
pub const TWO_ROW_SIERRA: DiffusionKernel = DiffusionKernel::from_static(
    &[
        (1, 0, 4),
        (2, 0, 3),
        (-2, 1, 1),
        (-1, 1, 2),
        (0, 1, 3),
        (1, 1, 2),
        (2, 1, 1),
    ],
    16,
);

/// Sierra Lite.
///
/// ```text
///    X   2
///    1   1
/// ```
pub const SIERRA_LITE: DiffusionKernel =
    DiffusionKernel::from_static(&[(1, 0, 2), (-1, 1, 1), (0, 1, 1)], 4);

/// Atkinson. Propagates 6/8 of the error.
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
pub const ATKINSON: DiffusionKernel = DiffusionKernel::from_static(
    &[
        (1, 0, 1),
        (2, 0, 1),
        (-1, 1, 1),
        (0, 1, 1),
        (1, 1, 1),
        (0, 2, 1),
    ],
    8,
);

/// Fan (1993).
///
/// ```text
///            X   7
///    1   3   5
/// ```
pub const FAN_93: DiffusionKernel =
    DiffusionKernel::from_static(&[(1, 0, 7), (-2, 1, 1), (-1, 1, 3), (0, 1, 5)], 16);

/// Shiau-Fan.
///
/// ```text
///            X   4
///    1   1   2
/// ```
pub const SHIAU_FAN: DiffusionKernel =
    DiffusionKernel::from_static(&[(1, 0, 4), (-2, 1, 1), (-1, 1, 1), (0, 1, 2)], 8);

/// Shiau-Fan, second variant.
///
/// ```text
///                X   8
///    1   1   2   4
/// ```
pub const SHIAU_FAN_2: DiffusionKernel = DiffusionKernel::from_static(
    &[(1, 0, 8), (-3, 1, 1), (-2, 1, 1), (-1, 1, 2), (0, 1, 4)],
    16,
);

/// "False" Floyd-Steinberg: three neighbors only.
///
/// ```text
///    X   3
///    3   2
/// ```
pub const FALSE_FLOYD_STEINBERG: DiffusionKernel =
    DiffusionKernel::from_static(&[(1, 0, 3), (0, 1, 3), (1, 1, 2)], 8);

#[cfg(test)]
mod tests {
    use super::*;

    const NAMED: [(&str, DiffusionKernel); 13] = [
        ("simple", SIMPLE),
        ("floyd_steinberg", FLOYD_STEINBERG),
        ("jarvis_judice_ninke", JARVIS_JUDICE_NINKE),
        ("stucki", STUCKI),
        ("burkes", BURKES),
        ("sierra", SIERRA),
        ("two_row_sierra", TWO_ROW_SIERRA),
        ("sierra_lite", SIERRA_LITE),
        ("atkinson", ATKINSON),
        ("fan_93", FAN_93),
        ("shiau_fan", SHIAU_FAN),
        ("shiau_fan_2", SHIAU_FAN_2),
        ("false_floyd_steinberg", FALSE_FLOYD_STEINBERG),
    ];

    #[test]
    fn test_named_kernels_are_valid() {
        for (name, kernel) in NAMED.iter() {
            assert!(kernel.validate().is_ok(), "{name} failed validation");
        }
    }

    #[test]
    fn test_normalized_weights_sum_to_one() {
        for (name, kernel) in NAMED.iter() {
            let sum: f64 = kernel.normalized_weights().map(|(_, _, w)| w).sum();
            assert!((sum - 1.0).abs() < 1e-9, "{name} sums to {sum}");
        }
    }

    #[test]
    fn test_named_kernels_are_causal() {
        for (name, kernel) in NAMED.iter() {
            for &(dx, dy, _) in kernel.entries() {
                assert!(dy >= 0, "{name} has negative dy");
                assert!(dy > 0 || dx > 0, "{name} points back at ({dx}, {dy})");
            }
        }
    }

    #[test]
    fn test_gain() {
        assert_eq!(ATKINSON.gain(), 0.75);
        for (name, kernel) in NAMED.iter().filter(|(n, _)| *n != "atkinson") {
            assert_eq!(kernel.gain(), 1.0, "{name} should propagate all error");
        }
    }

    #[test]
    fn test_invalid_custom_kernels() {
        let cases = [
            (vec![], 1),
            (vec![(1, 0, 1)], 0),
            (vec![(0, 0, 1)], 1),
            (vec![(-1, 0, 1)], 1),
            (vec![(0, -1, 1)], 1),
            (vec![(1, 0, 0)], 1),
            (vec![(1, 0, 3)], 2),
        ];
        for (entries, divisor) in cases {
            let result = DiffusionKernel::new(entries.clone(), divisor);
            assert!(
                matches!(result, Err(DitherError::InvalidKernel(_))),
                "{entries:?} / {divisor} should be rejected"
            );
        }
    }

    #[test]
    fn test_serde_roundtrip_and_validation() {
        let yaml = "entries: [[1, 0, 7], [-1, 1, 3], [0, 1, 5], [1, 1, 1]]\ndivisor: 16\n";
        let kernel: DiffusionKernel = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(kernel, FLOYD_STEINBERG);

        let bad = "entries: [[-1, 0, 1]]\ndivisor: 1\n";
        assert!(serde_yaml::from_str::<DiffusionKernel>(bad).is_err());
    }
}
