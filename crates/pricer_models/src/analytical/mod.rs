//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes call and put with continuous dividend yield
//! - Put-call parity derivation of the put from the call
//! - Standard normal CDF/PDF
//!
//! ## Design Principles
//!
//! - **Validate first**: parameters are checked before any arithmetic, so a
//!   singular or out-of-range input is an error, never a NaN
//! - **Numerical Stability**: Uses the `statrs` erfc for the normal CDF

pub mod black_scholes;
pub mod distributions;
pub mod error;

// Re-export main types at module level
pub use black_scholes::{
    call_price_with_dividend, put_price, put_price_with_dividend, BlackScholes, PARITY_TOLERANCE,
};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
