//! Synthetic data for the demos: a noisy version of the line `y = x + 1`.

use crate::datasets::linear_dataset::LinearDataset;
use descent_core::DescentError;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// `n` evenly spaced points from `start` to `end`, both included.
///
/// `n == 1` yields `[start]`, `n == 0` an empty vector.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Generates `n` points with `x` evenly spaced over `[0, 1]` and
/// `y = x + noise_scale * N(0, 1) + 1.0`.
///
/// # Errors
/// `EmptyInput` if `n == 0`, `ConfigurationError` if `noise_scale` is negative or not finite.
pub fn noisy_line<R: Rng + ?Sized>(
    n: usize,
    noise_scale: f64,
    rng: &mut R,
) -> Result<LinearDataset, DescentError> {
    if n == 0 {
        return Err(DescentError::EmptyInput {
            operation: "noisy_line".to_string(),
        });
    }
    if !(noise_scale >= 0.0 && noise_scale.is_finite()) {
        return Err(DescentError::ConfigurationError(format!(
            "Noise scale must be non-negative, got {}",
            noise_scale
        )));
    }
    let xs = linspace(0.0, 1.0, n);
    let ys = xs
        .iter()
        .map(|&x| {
            let noise: f64 = StandardNormal.sample(&mut *rng);
            x + noise_scale * noise + 1.0
        })
        .collect();
    log::debug!("Generated noisy line with {} points", n);
    LinearDataset::new(xs, ys)
}

/// [`noisy_line`] with standard-normal noise.
pub fn standard_noisy_line<R: Rng + ?Sized>(
    n: usize,
    rng: &mut R,
) -> Result<LinearDataset, DescentError> {
    noisy_line(n, 1.0, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::Dataset;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_linspace() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
        let points = linspace(0.0, 1.0, 5);
        assert_eq!(points.len(), 5);
        assert_abs_diff_eq!(points[1], 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(points[4], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_noiseless_line() -> Result<(), DescentError> {
        let mut rng = StdRng::seed_from_u64(0);
        let dataset = noisy_line(3, 0.0, &mut rng)?;
        assert_eq!(dataset.xs(), &[0.0, 0.5, 1.0]);
        assert_eq!(dataset.ys(), &[1.0, 1.5, 2.0]);
        Ok(())
    }

    #[test]
    fn test_noisy_line_is_reproducible() -> Result<(), DescentError> {
        let a = standard_noisy_line(50, &mut StdRng::seed_from_u64(42))?;
        let b = standard_noisy_line(50, &mut StdRng::seed_from_u64(42))?;
        let c = standard_noisy_line(50, &mut StdRng::seed_from_u64(43))?;
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 50);
        Ok(())
    }

    #[test]
    fn test_noisy_line_invalid_inputs() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            noisy_line(0, 1.0, &mut rng),
            Err(DescentError::EmptyInput { .. })
        ));
        assert!(matches!(
            noisy_line(10, -1.0, &mut rng),
            Err(DescentError::ConfigurationError(_))
        ));
    }
}
