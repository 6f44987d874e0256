//! # put-pricer CLI
//!
//! Command line front end for the Black-Scholes put pricer.
//!
//! - `put-pricer price` - price one quote given as flags
//! - `put-pricer batch --input <file>` - price every row of a CSV file
//! - `put-pricer check` - validate and print the effective configuration
//!
//! The commands are exposed as a library so they can be driven from tests
//! with in-memory writers.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use error::{CliError, Result};
