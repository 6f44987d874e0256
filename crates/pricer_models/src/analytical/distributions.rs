//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! The CDF is expressed through the complementary error function from
//! `statrs`. Absolute error is below 1e-10 near the centre and the
//! relative error stays small in both tails.

use statrs::function::erf::erfc;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1).
///
/// # Mathematical Definition
/// Φ(x) = (1/2) * erfc(-x / sqrt(2))
///
/// Using erfc rather than `1 + erf` avoids cancellation for large negative
/// `x`. Absolute accuracy is about 1e-10; put-call parity does not depend on
/// it because `Φ(x) + Φ(-x) = 1` holds to rounding.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
/// assert!(norm_cdf(-3.0) < 0.01);
/// assert!(norm_cdf(3.0) > 0.99);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / std::f64::consts::SQRT_2)
}

/// Standard normal probability density function.
///
/// # Mathematical Definition
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_pdf;
///
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((norm_pdf(0.0) - 0.3989422804).abs() < 1e-10);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==========================================================
    // norm_cdf tests
    // ==========================================================

    #[test]
    fn test_norm_cdf_at_zero() {
        assert_relative_eq!(norm_cdf(0.0), 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        // Φ(-x) + Φ(x) = 1 for all x
        let test_values = [-6.0, -3.0, -2.0, -1.0, -0.5, 0.0, 0.5, 1.0, 2.0, 3.0, 6.0];
        for x in test_values {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_norm_cdf_reference_values() {
        // Reference values from standard normal tables; statrs erf is
        // accurate to ~1.4e-11 for 0.5 <= |z| < 0.75
        assert_relative_eq!(norm_cdf(1.0), 0.8413447460685429, epsilon = 1e-10);
        assert_relative_eq!(norm_cdf(-1.0), 0.15865525393145707, epsilon = 1e-10);
        assert_relative_eq!(norm_cdf(2.0), 0.9772498680518208, epsilon = 1e-10);
        assert_relative_eq!(norm_cdf(-2.0), 0.022750131948179195, epsilon = 1e-10);
        assert_relative_eq!(norm_cdf(3.0), 0.9986501019683699, epsilon = 1e-10);
        assert_relative_eq!(norm_cdf(0.5), 0.6914624612740131, epsilon = 1e-10);
    }

    #[test]
    fn test_norm_cdf_deep_tail_keeps_precision() {
        // Φ(-10) ≈ 7.6199e-24; a `1 + erf` formulation would return 0
        let tail = norm_cdf(-10.0);
        assert!(tail > 0.0);
        assert_relative_eq!(tail, 7.619853024160527e-24, max_relative = 1e-9);
    }

    #[test]
    fn test_norm_cdf_bounds_and_monotonic() {
        let values: Vec<f64> = (-80..=80).map(|i| i as f64 * 0.1).collect();
        for pair in values.windows(2) {
            let (a, b) = (norm_cdf(pair[0]), norm_cdf(pair[1]));
            assert!((0.0..=1.0).contains(&a));
            assert!(b > a, "CDF not monotonic at x = {}", pair[0]);
        }
    }

    // ==========================================================
    // norm_pdf tests
    // ==========================================================

    #[test]
    fn test_norm_pdf_reference_values() {
        assert_relative_eq!(norm_pdf(0.0), FRAC_1_SQRT_2PI, epsilon = 1e-15);
        assert_relative_eq!(norm_pdf(1.0), 0.24197072451914337, epsilon = 1e-12);
        assert_relative_eq!(norm_pdf(-2.0), 0.05399096651318806, epsilon = 1e-12);
    }

    #[test]
    fn test_cdf_pdf_relationship() {
        // Numerical derivative of the CDF matches the PDF
        let h = 1e-5;
        for x in [-2.0, -1.0, 0.0, 1.0, 2.0] {
            let numerical_derivative = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            assert_relative_eq!(numerical_derivative, norm_pdf(x), epsilon = 1e-8);
        }
    }
}
