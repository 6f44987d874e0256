//! Core error and time types.
//!
//! This module provides:
//! - `time`: Day count conventions and time-to-maturity helpers
//! - `error`: Structured error types for pricing and date operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`DayCountConvention`], [`time_to_maturity`], [`parse_date`] from `time`
//! - [`PricingError`], [`DateError`] from `error`

pub mod error;
pub mod time;

// Re-export commonly used types at module level
pub use error::{DateError, PricingError};
pub use time::{parse_date, time_to_maturity, DayCountConvention};
