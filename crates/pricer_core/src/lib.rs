//! # pricer_core: Foundation layer for put-pricer
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Error types: `PricingError`, `DateError` (`types::error`)
//! - Time types: `DayCountConvention`, `time_to_maturity` (`types::time`)
//! - The `Priceable` trait implemented by quote types in `pricer_models`
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates:
//! - chrono: Date arithmetic
//! - thiserror: Error derives
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use pricer_core::types::{time_to_maturity, DayCountConvention};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//!
//! let t = time_to_maturity(start, end).unwrap();
//! assert!((t - 366.0 / 365.0).abs() < 1e-12);
//!
//! let t_360 = DayCountConvention::Act360.year_fraction(start, end).unwrap();
//! assert!(t_360 > t);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `DayCountConvention` and errors

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod traits;
pub mod types;
