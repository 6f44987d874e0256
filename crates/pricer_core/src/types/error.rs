//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from pricing operations
//! - `DateError`: Errors from date parsing and year-fraction calculation

use std::fmt;
use thiserror::Error;

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing operations with
/// descriptive context for each failure mode. Every variant is raised
/// before the pricing formula is evaluated, so a caller never receives
/// a NaN or infinite price in place of an error.
///
/// # Variants
/// - `InvalidInput`: Parameter outside its valid range (S<=0, K<=0, T<0, σ<=0, non-finite)
/// - `DomainError`: Parameter at a point where the formula is undefined (T=0)
/// - `NumericalInstability`: Computation produced a non-finite value
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PricingError {
    /// Invalid input data or parameters
    InvalidInput(String),

    /// Formula undefined at the supplied parameters
    DomainError(String),

    /// Numerical instability during computation
    NumericalInstability(String),
}

impl PricingError {
    /// Returns whether this error was caused by an out-of-range parameter.
    #[inline]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PricingError::InvalidInput(_))
    }

    /// Returns whether this error was caused by a singular point of the formula.
    #[inline]
    pub fn is_domain_error(&self) -> bool {
        matches!(self, PricingError::DomainError(_))
    }
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            PricingError::DomainError(msg) => write!(f, "Domain error: {}", msg),
            PricingError::NumericalInstability(msg) => {
                write!(f, "Numerical instability: {}", msg)
            }
        }
    }
}

impl std::error::Error for PricingError {}

/// Date-related errors.
///
/// # Variants
/// - `ParseError`: Failed to parse a date string
/// - `ReversedRange`: End date falls before start date
///
/// # Examples
/// ```
/// use pricer_core::types::DateError;
///
/// let err = DateError::ParseError("2024-13-01".to_string());
/// assert_eq!(format!("{}", err), "Date parse error: 2024-13-01");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),

    /// End date precedes start date.
    #[error("End date {end} precedes start date {start}")]
    ReversedRange {
        /// Start of the period
        start: String,
        /// End of the period
        end: String,
    },
}

impl From<DateError> for PricingError {
    fn from(err: DateError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
