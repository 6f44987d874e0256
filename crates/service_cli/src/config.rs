//! CLI configuration management.
//!
//! Handles loading of pricer configuration from a TOML file with
//! environment variable override support.
//!
//! ```toml
//! log_level = "info"
//! format = "table"
//! day_count = "ACT/365F"
//!
//! [defaults]
//! rate = 0.05
//! dividend_yield = 0.0
//! ```

use std::path::Path;

use pricer_core::types::DayCountConvention;
use serde::Deserialize;

use crate::output::OutputFormat;

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "PRICER_";

/// Market defaults applied when a quote omits a field.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MarketDefaults {
    /// Risk-free rate used when a quote has none
    #[serde(default)]
    pub rate: f64,

    /// Dividend yield used when a quote has none
    #[serde(default)]
    pub dividend_yield: f64,
}

/// Pricer configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PricerConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Day count used to turn valuation/expiry dates into a maturity
    #[serde(default)]
    pub day_count: DayCountConvention,

    /// Market defaults
    #[serde(default)]
    pub defaults: MarketDefaults,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for PricerConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            format: OutputFormat::default(),
            day_count: DayCountConvention::default(),
            defaults: MarketDefaults::default(),
        }
    }
}

impl PricerConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or the defaults when the file does not exist.
    ///
    /// A file that exists but fails to parse is an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `PRICER_*` environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(format!("{}{}", ENV_PREFIX, key)).ok())
    }

    /// Apply overrides from a key lookup (`LOG_LEVEL`, `FORMAT`, `RATE`, `DIVIDEND_YIELD`, `DAY_COUNT`)
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(log_level) = lookup("LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Some(format) = lookup("FORMAT") {
            self.format = format
                .parse()
                .map_err(|e: String| ConfigError::Override("FORMAT".to_string(), e))?;
        }

        if let Some(day_count) = lookup("DAY_COUNT") {
            self.day_count = day_count
                .parse()
                .map_err(|e| ConfigError::Override("DAY_COUNT".to_string(), format!("{}", e)))?;
        }

        if let Some(rate) = lookup("RATE") {
            self.defaults.rate = parse_number("RATE", &rate)?;
        }

        if let Some(dividend_yield) = lookup("DIVIDEND_YIELD") {
            self.defaults.dividend_yield = parse_number("DIVIDEND_YIELD", &dividend_yield)?;
        }

        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if !self.defaults.rate.is_finite() {
            errors.push(format!(
                "defaults.rate must be finite, got {}",
                self.defaults.rate
            ));
        }

        if !self.defaults.dividend_yield.is_finite() {
            errors.push(format!(
                "defaults.dividend_yield must be finite, got {}",
                self.defaults.dividend_yield
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file (or defaults) with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override()?;
        config.validate()?;
        Ok(config)
    }
}

fn parse_number(key: &str, value: &str) -> Result<f64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|e| ConfigError::Override(key.to_string(), format!("'{}': {}", value, e)))
}

/// Configuration error type
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// IO error reading config file
    Io(String),
    /// Parse error in config file
    Parse(String),
    /// Unparsable environment override (key, reason)
    Override(String, String),
    /// Validation error
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "IO error: {}", msg),
            Self::Parse(msg) => write!(f, "Parse error: {}", msg),
            Self::Override(key, msg) => {
                write!(f, "Invalid override {}{}: {}", ENV_PREFIX, key, msg)
            }
            Self::Validation(errors) => write!(f, "Validation errors: {}", errors.join("; ")),
        }
    }
}

impl std::error::Error for ConfigError {}
