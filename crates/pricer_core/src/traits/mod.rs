//! Core traits for priceable quotes.
//!
//! This module defines:
//! - Price calculation (`Priceable` trait)
//!
//! Implementations are expected to validate their inputs and return a
//! `PricingError` rather than a NaN or infinite price.

pub mod priceable;

pub use priceable::Priceable;
