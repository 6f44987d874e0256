//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Parameter validation failures carrying the offending value

use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// # Variants
/// - `InvalidSpot`: Non-positive spot price
/// - `InvalidStrike`: Non-positive strike
/// - `InvalidExpiry`: Negative time to maturity
/// - `InvalidVolatility`: Non-positive volatility
/// - `NonFiniteParameter`: NaN or infinite parameter
/// - `ZeroExpiry`: Time to maturity of exactly zero (σ√T vanishes in d₁)
/// - `ArbitrageViolation`: Call price below its no-arbitrage lower bound
/// - `NumericalInstability`: Valid inputs produced a non-finite result
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid spot price (non-positive).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike (non-positive).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid time to maturity (negative).
    #[error("Invalid time to maturity: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Parameter is NaN or infinite.
    #[error("Non-finite parameter: {name} = {value}")]
    NonFiniteParameter {
        /// Parameter name
        name: &'static str,
        /// The offending value
        value: f64,
    },

    /// Time to maturity is exactly zero.
    #[error("Undefined at T = 0: d1 divides by σ√T")]
    ZeroExpiry,

    /// Call price below max(S·e^(-qT) - K·e^(-rT), 0); parity would imply a
    /// negative put.
    #[error("Call price {call} is below its no-arbitrage lower bound {lower_bound}")]
    ArbitrageViolation {
        /// The call price supplied
        call: f64,
        /// max(S·e^(-qT) - K·e^(-rT), 0)
        lower_bound: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {message}")]
    NumericalInstability {
        /// Description of the numerical issue
        message: String,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::ZeroExpiry => PricingError::DomainError(err.to_string()),
            AnalyticalError::NumericalInstability { .. } => {
                PricingError::NumericalInstability(err.to_string())
            }
            AnalyticalError::InvalidSpot { .. }
            | AnalyticalError::InvalidStrike { .. }
            | AnalyticalError::InvalidExpiry { .. }
            | AnalyticalError::InvalidVolatility { .. }
            | AnalyticalError::NonFiniteParameter { .. }
            | AnalyticalError::ArbitrageViolation { .. } => {
                PricingError::InvalidInput(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            AnalyticalError::InvalidSpot { spot: -100.0 }.to_string(),
            "Invalid spot price: S = -100"
        );
        assert_eq!(
            AnalyticalError::InvalidStrike { strike: 0.0 }.to_string(),
            "Invalid strike: K = 0"
        );
        assert_eq!(
            AnalyticalError::InvalidExpiry { expiry: -1.0 }.to_string(),
            "Invalid time to maturity: T = -1"
        );
        assert_eq!(
            AnalyticalError::InvalidVolatility { volatility: -0.2 }.to_string(),
            "Invalid volatility: σ = -0.2"
        );
        assert_eq!(
            AnalyticalError::NonFiniteParameter {
                name: "rate",
                value: f64::INFINITY
            }
            .to_string(),
            "Non-finite parameter: rate = inf"
        );
    }

    #[test]
    fn test_zero_expiry_maps_to_domain_error() {
        let pricing_err: PricingError = AnalyticalError::ZeroExpiry.into();
        assert!(pricing_err.is_domain_error());
    }

    #[test]
    fn test_range_errors_map_to_invalid_input() {
        let errors = [
            AnalyticalError::InvalidSpot { spot: -5.0 },
            AnalyticalError::InvalidStrike { strike: 0.0 },
            AnalyticalError::InvalidExpiry { expiry: -1.0 },
            AnalyticalError::InvalidVolatility { volatility: 0.0 },
            AnalyticalError::NonFiniteParameter {
                name: "dividend_yield",
                value: f64::NAN,
            },
            AnalyticalError::ArbitrageViolation {
                call: 1.0,
                lower_bound: 4.9,
            },
        ];
        for err in errors {
            let pricing_err: PricingError = err.clone().into();
            match pricing_err {
                PricingError::InvalidInput(msg) => assert_eq!(msg, err.to_string()),
                other => panic!("Expected InvalidInput, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_numerical_instability_to_pricing_error() {
        let err = AnalyticalError::NumericalInstability {
            message: "discount factor overflow".to_string(),
        };
        match PricingError::from(err) {
            PricingError::NumericalInstability(msg) => assert!(msg.contains("overflow")),
            other => panic!("Expected NumericalInstability, got {:?}", other),
        }
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = AnalyticalError::ZeroExpiry;
        let _: &dyn std::error::Error = &err;
    }
}
