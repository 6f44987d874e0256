//! Pricing results and their output formats.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use pricer_core::types::PricingError;
use pricer_models::analytical::AnalyticalError;
use pricer_models::instruments::OptionQuoteRequest;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Output format for pricing results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON array
    Json,
    /// CSV with a header row
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => f.write_str("table"),
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Csv => f.write_str("csv"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!(
                "Unknown format: {}. Supported: table, json, csv",
                other
            )),
        }
    }
}

/// Result of pricing one quote.
///
/// Either every numeric field is set and `error` is empty, or the quote was
/// rejected and only `id` and `error` are set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteResult {
    /// Caller-supplied identifier
    pub id: String,
    /// Put price
    pub put: Option<f64>,
    /// Call price
    pub call: Option<f64>,
    /// d₁ term
    pub d1: Option<f64>,
    /// d₂ term
    pub d2: Option<f64>,
    /// (C - P) - (S·e^(-qT) - K·e^(-rT))
    pub parity_residual: Option<f64>,
    /// Rejection reason
    pub error: Option<String>,
}

impl QuoteResult {
    /// Prices a quote, capturing any rejection as an error row.
    pub fn from_quote(id: impl Into<String>, quote: &OptionQuoteRequest) -> Self {
        let id = id.into();
        match Self::try_from_quote(id.clone(), quote) {
            Ok(result) => result,
            Err(err) => Self::rejected(id, err.to_string()),
        }
    }

    /// Prices a quote, returning the rejection as an error.
    pub fn try_from_quote(
        id: impl Into<String>,
        quote: &OptionQuoteRequest,
    ) -> std::result::Result<Self, PricingError> {
        let (put, call, d1, d2, parity_residual) = Self::evaluate(quote)?;
        Ok(Self {
            id: id.into(),
            put: Some(put),
            call: Some(call),
            d1: Some(d1),
            d2: Some(d2),
            parity_residual: Some(parity_residual),
            error: None,
        })
    }

    /// A row that never reached the pricer.
    pub fn rejected(id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            put: None,
            call: None,
            d1: None,
            d2: None,
            parity_residual: None,
            error: Some(error.into()),
        }
    }

    /// Returns whether the quote was priced.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    fn evaluate(
        quote: &OptionQuoteRequest,
    ) -> std::result::Result<(f64, f64, f64, f64, f64), AnalyticalError> {
        let model = quote.model()?;
        let put = model.price_put(quote.strike, quote.expiry)?;
        let call = model.price_call(quote.strike, quote.expiry)?;
        let d1 = model.d1(quote.strike, quote.expiry)?;
        let d2 = model.d2(quote.strike, quote.expiry)?;
        let residual = model.parity_residual(quote.strike, quote.expiry)?;
        Ok((put, call, d1, d2, residual))
    }
}

/// Writes results in the requested format.
pub fn write_results<W: Write>(
    writer: W,
    results: &[QuoteResult],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => write_table(writer, results),
        OutputFormat::Json => write_json(writer, results),
        OutputFormat::Csv => write_csv(writer, results),
    }
}

/// Writes results as a pretty-printed JSON array.
pub fn write_json<W: Write>(mut writer: W, results: &[QuoteResult]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, results)?;
    writeln!(writer)?;
    Ok(())
}

/// Writes results as CSV with a header row.
pub fn write_csv<W: Write>(writer: W, results: &[QuoteResult]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for result in results {
        csv_writer.serialize(result)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes results as a fixed-width table.
pub fn write_table<W: Write>(mut writer: W, results: &[QuoteResult]) -> Result<()> {
    writeln!(
        writer,
        "{:<12} {:>12} {:>12} {:>10} {:>10} {:>12}",
        "ID", "Put", "Call", "d1", "d2", "Parity"
    )?;
    writeln!(writer, "{}", "-".repeat(73))?;

    for result in results {
        match (&result.error, result.put, result.call, result.d1, result.d2) {
            (None, Some(put), Some(call), Some(d1), Some(d2)) => writeln!(
                writer,
                "{:<12} {:>12.6} {:>12.6} {:>10.6} {:>10.6} {:>12.3e}",
                result.id,
                put,
                call,
                d1,
                d2,
                result.parity_residual.unwrap_or(0.0)
            )?,
            (error, ..) => writeln!(
                writer,
                "{:<12} error: {}",
                result.id,
                error.as_deref().unwrap_or("incomplete result")
            )?,
        }
    }
    Ok(())
}
