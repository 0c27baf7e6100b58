//! Pseudo-random number generator wrapper for Monte Carlo simulations.
//!
//! This module provides [`PathRng`], a seeded PRNG wrapper that offers
//! reproducible random number generation with efficient batch operations.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

/// Monte Carlo simulation random number generator.
///
/// Provides seeded, reproducible standard-normal generation with batch
/// fills. The same seed always produces the same sequence, which the
/// simulation engine relies on for bit-identical repeat runs.
///
/// # Examples
///
/// ```rust
/// use heston_pricing::rng::PathRng;
///
/// let mut rng = PathRng::from_seed(42);
///
/// // Single value generation
/// let n: f64 = rng.gen_normal();
///
/// // Batch generation (zero allocation)
/// let mut buffer = vec![0.0; 100];
/// rng.fill_normal(&mut buffer);
/// ```
pub struct PathRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation (stored for reproducibility tracking).
    seed: u64,
}

impl PathRng {
    /// Creates a new RNG instance initialised with the given seed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use heston_pricing::rng::PathRng;
    ///
    /// let mut rng1 = PathRng::from_seed(12345);
    /// let mut rng2 = PathRng::from_seed(12345);
    ///
    /// // Same seed produces identical sequences
    /// assert_eq!(rng1.gen_normal(), rng2.gen_normal());
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed used for initialisation.
    ///
    /// Useful for logging and debugging reproducibility issues.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates a single standard normal N(0, 1) value.
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Fills a buffer with standard normal N(0, 1) values.
    ///
    /// Batch equivalent of [`gen_normal`](Self::gen_normal); consumes the
    /// stream in buffer order.
    #[inline]
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = StandardNormal.sample(&mut self.inner);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut rng1 = PathRng::from_seed(42);
        let mut rng2 = PathRng::from_seed(42);
        for _ in 0..100 {
            assert_eq!(rng1.gen_normal(), rng2.gen_normal());
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut rng1 = PathRng::from_seed(1);
        let mut rng2 = PathRng::from_seed(2);
        let a: Vec<f64> = (0..16).map(|_| rng1.gen_normal()).collect();
        let b: Vec<f64> = (0..16).map(|_| rng2.gen_normal()).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_fill_matches_single_draws() {
        let mut rng1 = PathRng::from_seed(7);
        let mut rng2 = PathRng::from_seed(7);
        let mut buffer = vec![0.0; 32];
        rng1.fill_normal(&mut buffer);
        for &value in &buffer {
            assert_eq!(value, rng2.gen_normal());
        }
    }

    #[test]
    fn test_seed_reported() {
        assert_eq!(PathRng::from_seed(42).seed(), 42);
    }

    #[test]
    fn test_normal_moments_plausible() {
        let mut rng = PathRng::from_seed(42);
        let n = 100_000;
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        for _ in 0..n {
            let x = rng.gen_normal();
            sum += x;
            sum_sq += x * x;
        }
        let mean = sum / n as f64;
        let var = sum_sq / n as f64 - mean * mean;
        assert!(mean.abs() < 0.02);
        assert!((var - 1.0).abs() < 0.02);
    }
}
