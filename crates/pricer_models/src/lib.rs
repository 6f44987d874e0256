//! # Pricer Models (L2: Business Logic)
//!
//! European put pricing under Black-Scholes dynamics.
//!
//! This crate provides:
//! - The closed-form put price, with an optional continuous dividend yield
//! - The call price and the put-call parity relation linking the two
//! - A standard normal CDF backed by `statrs`
//! - `OptionQuoteRequest`, the validated bundle of market parameters
//!
//! ## Quick Start
//!
//! ```
//! use pricer_models::analytical::{put_price, put_price_with_dividend};
//!
//! let put = put_price(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
//! assert!((put - 5.57).abs() < 0.01);
//!
//! let same = put_price_with_dividend(100.0, 100.0, 1.0, 0.05, 0.2, 0.0).unwrap();
//! assert!((put - same).abs() < 1e-12);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
