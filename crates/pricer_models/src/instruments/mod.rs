//! Option quote definitions.
//!
//! - [`PayoffType`]: Call or put, with intrinsic value
//! - [`OptionQuoteRequest`]: The market parameters of a single European
//!   option price request
//!
//! # Examples
//!
//! ```
//! use pricer_core::traits::Priceable;
//! use pricer_models::instruments::{OptionQuoteRequest, PayoffType};
//!
//! let quote = OptionQuoteRequest::new(100.0, 100.0, 1.0, 0.05, 0.2);
//! let put = quote.price().unwrap();
//! assert!((put - 5.57).abs() < 0.01);
//!
//! assert_eq!(PayoffType::Put.intrinsic(90.0, 100.0), 10.0);
//! ```

mod payoff;
mod quote;

pub use payoff::PayoffType;
pub use quote::OptionQuoteRequest;
