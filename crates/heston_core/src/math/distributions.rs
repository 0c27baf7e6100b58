//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//! - `inverse_norm_cdf`: Inverse CDF (quantile function)
//!
//! All functions are generic over `T: Float` so they can be reused with
//! `f64` or `f32` without duplication.

use num_traits::Float;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Complementary error function approximation using Horner's method.
///
/// Uses the Abramowitz and Stegun approximation (formula 7.1.26) which provides
/// maximum error of 1.5e-7 for all x.
///
/// # Mathematical Definition
/// erfc(x) = 1 - erf(x) = (2/√π) ∫_x^∞ e^(-t²) dt
#[inline]
fn erfc_approx<T: Float>(x: T) -> T {
    let one = T::one();
    let zero = T::zero();

    // For negative x, use erfc(-x) = 2 - erfc(x)
    let abs_x = x.abs();

    // Abramowitz and Stegun constants (7.1.26)
    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    // t = 1 / (1 + p * |x|)
    let t = one / (one + p * abs_x);

    // Horner's method for polynomial evaluation
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));

    // erfc(|x|) = t * poly * exp(-x²)
    let erfc_abs = t * poly * (-abs_x * abs_x).exp();

    // Handle sign: erfc(-x) = 2 - erfc(x)
    let two = T::from(2.0).unwrap();
    if x < zero {
        two - erfc_abs
    } else {
        erfc_abs
    }
}

/// Standard normal cumulative distribution function.
///
/// Computes Φ(x) = P(Z ≤ x) for Z ~ N(0, 1) via the complementary error
/// function: Φ(x) = erfc(-x/√2) / 2.
///
/// # Examples
///
/// ```
/// use heston_core::math::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(5.0_f64) > 0.999);
/// assert!(norm_cdf(-5.0_f64) < 0.001);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let sqrt_2 = T::from(SQRT_2).unwrap();
    let half = T::from(0.5).unwrap();
    half * erfc_approx(-x / sqrt_2)
}

/// Standard normal probability density function.
///
/// Computes φ(x) = exp(-x²/2) / √(2π).
///
/// # Examples
///
/// ```
/// use heston_core::math::distributions::norm_pdf;
///
/// // Peak at zero
/// assert!((norm_pdf(0.0_f64) - 0.3989422804014327).abs() < 1e-12);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let coeff = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();
    coeff * (-half * x * x).exp()
}

/// Inverse of the standard normal CDF (quantile function).
///
/// Uses the Beasley-Springer-Moro algorithm: a rational approximation in the
/// central region |Φ(x) - 0.5| ≤ 0.42 and a log-log polynomial expansion in
/// the tails. Accuracy is around 1e-9 over (0, 1).
///
/// The argument is clamped into (1e-15, 1 - 1e-15) so the tails never
/// produce infinities.
///
/// # Examples
///
/// ```
/// use heston_core::math::distributions::{inverse_norm_cdf, norm_cdf};
///
/// let z = inverse_norm_cdf(0.25_f64);
/// assert!((norm_cdf(z) - 0.25).abs() < 1e-6);
/// assert!((inverse_norm_cdf(0.5_f64)).abs() < 1e-9);
/// ```
pub fn inverse_norm_cdf<T: Float>(u: T) -> T {
    // Beasley-Springer-Moro coefficients
    let a = [
        T::from(2.50662823884).unwrap(),
        T::from(-18.61500062529).unwrap(),
        T::from(41.39119773534).unwrap(),
        T::from(-25.44106049637).unwrap(),
    ];
    let b = [
        T::from(-8.47351093090).unwrap(),
        T::from(23.08336743743).unwrap(),
        T::from(-21.06224101826).unwrap(),
        T::from(3.13082909833).unwrap(),
    ];
    let c = [
        T::from(0.3374754822726147).unwrap(),
        T::from(0.9761690190917186).unwrap(),
        T::from(0.1607979714918209).unwrap(),
        T::from(0.0276438810333863).unwrap(),
        T::from(0.0038405729373609).unwrap(),
        T::from(0.0003951896511919).unwrap(),
        T::from(0.0000321767881768).unwrap(),
        T::from(0.0000002888167364).unwrap(),
        T::from(0.0000003960315187).unwrap(),
    ];

    let one = T::one();
    let eps = T::from(1e-15).unwrap();
    let u_safe = u.max(eps).min(one - eps);

    let half = T::from(0.5).unwrap();
    let y = u_safe - half;
    let threshold = T::from(0.42).unwrap();

    if y.abs() <= threshold {
        // Rational approximation for the central region
        let r = y * y;
        let numer = a[0] + r * (a[1] + r * (a[2] + r * a[3]));
        let denom = one + r * (b[0] + r * (b[1] + r * (b[2] + r * b[3])));
        y * numer / denom
    } else {
        // Tail approximation
        let r = if y < T::zero() { u_safe } else { one - u_safe };
        let s = (-r.ln()).ln();

        let z = c[0]
            + s * (c[1]
                + s * (c[2]
                    + s * (c[3] + s * (c[4] + s * (c[5] + s * (c[6] + s * (c[7] + s * c[8])))))));

        if y < T::zero() {
            -z
        } else {
            z
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_norm_cdf_at_zero() {
        assert_relative_eq!(norm_cdf(0.0_f64), 0.5, epsilon = 1e-7);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        for &x in &[0.3_f64, 1.0, 1.96, 2.5] {
            let sum = norm_cdf(x) + norm_cdf(-x);
            assert_relative_eq!(sum, 1.0, epsilon = 1e-7);
        }
    }

    #[test]
    fn test_norm_cdf_known_values() {
        // Φ(1.96) ≈ 0.975 (within the A&S approximation error)
        assert_relative_eq!(norm_cdf(1.959963985_f64), 0.975, epsilon = 1e-6);
        // Φ(1.0) ≈ 0.8413447
        assert_relative_eq!(norm_cdf(1.0_f64), 0.841344746, epsilon = 1e-6);
    }

    #[test]
    fn test_norm_cdf_tails() {
        assert!(norm_cdf(8.0_f64) > 0.9999999);
        assert!(norm_cdf(-8.0_f64) < 1e-7);
    }

    #[test]
    fn test_norm_pdf_peak_and_symmetry() {
        assert_relative_eq!(norm_pdf(0.0_f64), 0.3989422804014327, epsilon = 1e-12);
        assert_relative_eq!(norm_pdf(1.3_f64), norm_pdf(-1.3_f64), epsilon = 1e-15);
    }

    #[test]
    fn test_inverse_norm_cdf_median() {
        assert!(inverse_norm_cdf(0.5_f64).abs() < 1e-9);
    }

    #[test]
    fn test_inverse_norm_cdf_quartiles() {
        // Φ⁻¹(0.25) ≈ -0.6744897
        assert_relative_eq!(inverse_norm_cdf(0.25_f64), -0.67448975, epsilon = 1e-6);
        assert_relative_eq!(inverse_norm_cdf(0.75_f64), 0.67448975, epsilon = 1e-6);
    }

    #[test]
    fn test_inverse_norm_cdf_round_trip() {
        for &u in &[0.01_f64, 0.1, 0.25, 0.5, 0.75, 0.9, 0.99] {
            let z = inverse_norm_cdf(u);
            assert_relative_eq!(norm_cdf(z), u, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_inverse_norm_cdf_clamps_extremes() {
        // Degenerate inputs must not produce infinities
        assert!(inverse_norm_cdf(0.0_f64).is_finite());
        assert!(inverse_norm_cdf(1.0_f64).is_finite());
        assert!(inverse_norm_cdf(0.0_f64) < -7.0);
        assert!(inverse_norm_cdf(1.0_f64) > 7.0);
    }

    #[test]
    fn test_inverse_norm_cdf_antisymmetry() {
        for &u in &[0.05_f64, 0.2, 0.35] {
            let lo = inverse_norm_cdf(u);
            let hi = inverse_norm_cdf(1.0 - u);
            assert_relative_eq!(lo, -hi, epsilon = 1e-7);
        }
    }

    proptest::proptest! {
        #[test]
        fn prop_norm_cdf_in_unit_interval(x in -20.0f64..20.0) {
            let p = norm_cdf(x);
            proptest::prop_assert!((0.0..=1.0).contains(&p));
        }

        #[test]
        fn prop_norm_cdf_monotone(x in -8.0f64..8.0, dx in 1e-3f64..2.0) {
            proptest::prop_assert!(norm_cdf(x + dx) >= norm_cdf(x));
        }

        #[test]
        fn prop_inverse_round_trip(u in 0.001f64..0.999) {
            let z = inverse_norm_cdf(u);
            proptest::prop_assert!((norm_cdf(z) - u).abs() < 1e-5);
        }
    }
}
