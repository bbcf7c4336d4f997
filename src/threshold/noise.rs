//! Uniform white-noise threshold fields.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draw one uniform `[0, 1)` threshold per pixel, row-major.
///
/// With a seed the field is reproducible; without one it is drawn from OS
/// entropy and differs on every call. The field is generated sequentially
/// so a given seed yields the same values regardless of how the comparison
/// pass is parallelized.
pub fn white_noise(width: usize, height: usize, seed: Option<u64>) -> Vec<f64> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    (0..width * height).map(|_| rng.gen::<f64>()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_noise_is_reproducible() {
        let a = white_noise(8, 4, Some(7));
        let b = white_noise(8, 4, Some(7));
        assert_eq!(a.len(), 32);
        assert_eq!(a, b);
        assert_ne!(a, white_noise(8, 4, Some(8)));
    }

    #[test]
    fn test_noise_in_unit_interval() {
        let field = white_noise(64, 64, Some(1));
        assert!(field.iter().all(|&v| (0.0..1.0).contains(&v)));
        let mean = field.iter().sum::<f64>() / field.len() as f64;
        assert!((mean - 0.5).abs() < 0.05, "mean {mean}");
    }
}
