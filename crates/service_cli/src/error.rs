//! Error types for the put-pricer CLI.

use pricer_core::types::{DateError, PricingError};
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Invalid command argument or input row
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Quote rejected by the pricing formula
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Date parsing or day count error
    #[error("Date error: {0}")]
    Date(#[from] DateError),

    /// CSV read/write error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialisation error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
