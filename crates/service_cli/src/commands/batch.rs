//! Batch command implementation
//!
//! Prices every quote in a CSV file. Rows are independent: a row that
//! fails to parse or is rejected by the pricer becomes an error row in the
//! output and the remaining rows are still priced.
//!
//! Input columns (header row required, optional columns may be omitted):
//!
//! | column | required | meaning |
//! |--------|----------|---------|
//! | `id` | yes | quote identifier |
//! | `spot`, `strike`, `volatility` | yes | S, K, σ |
//! | `maturity` | one of | T in years |
//! | `valuation_date`, `expiry_date` | one of | `YYYY-MM-DD`, converted with the configured day count |
//! | `rate`, `dividend_yield` | no | fall back to the configured defaults |

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use pricer_core::types::parse_date;
use pricer_models::instruments::OptionQuoteRequest;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::config::PricerConfig;
use crate::output::{write_results, OutputFormat, QuoteResult};
use crate::{CliError, Result};

/// One input row.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct QuoteRow {
    /// Quote identifier
    pub id: String,
    /// Spot price
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Time to maturity in years
    #[serde(default)]
    pub maturity: Option<f64>,
    /// Valuation date (`YYYY-MM-DD`)
    #[serde(default)]
    pub valuation_date: Option<String>,
    /// Expiry date (`YYYY-MM-DD`)
    #[serde(default)]
    pub expiry_date: Option<String>,
    /// Risk-free rate
    #[serde(default)]
    pub rate: Option<f64>,
    /// Volatility
    pub volatility: f64,
    /// Continuous dividend yield
    #[serde(default)]
    pub dividend_yield: Option<f64>,
}

impl QuoteRow {
    /// Resolves the row into a quote request, filling gaps from `config`.
    pub fn to_request(&self, config: &PricerConfig) -> Result<OptionQuoteRequest> {
        let expiry = self.resolve_maturity(config)?;
        let rate = self.rate.unwrap_or(config.defaults.rate);
        let dividend_yield = self
            .dividend_yield
            .unwrap_or(config.defaults.dividend_yield);

        Ok(
            OptionQuoteRequest::new(self.spot, self.strike, expiry, rate, self.volatility)
                .with_dividend_yield(dividend_yield),
        )
    }

    fn resolve_maturity(&self, config: &PricerConfig) -> Result<f64> {
        let dates = (self.valuation_date.as_deref(), self.expiry_date.as_deref());
        match (self.maturity, dates) {
            (Some(maturity), (None, None)) => Ok(maturity),
            (None, (Some(valuation), Some(expiry))) => {
                let valuation = parse_date(valuation)?;
                let expiry = parse_date(expiry)?;
                Ok(config.day_count.year_fraction(valuation, expiry)?)
            }
            (Some(_), _) => Err(CliError::InvalidArgument(format!(
                "{}: give maturity or dates, not both",
                self.id
            ))),
            (None, _) => Err(CliError::InvalidArgument(format!(
                "{}: missing maturity (or valuation_date and expiry_date)",
                self.id
            ))),
        }
    }
}

/// Summary of a batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Rows priced successfully
    pub priced: usize,
    /// Rows rejected
    pub rejected: usize,
}

impl BatchSummary {
    fn from_results(results: &[QuoteResult]) -> Self {
        let priced = results.iter().filter(|r| r.is_ok()).count();
        Self {
            priced,
            rejected: results.len() - priced,
        }
    }
}

/// Prices every row from a CSV reader.
///
/// Only a broken header or an unreadable stream fails the whole batch.
pub fn price_reader<R: Read>(reader: R, config: &PricerConfig) -> Result<Vec<QuoteResult>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    // Surface a malformed header once instead of on every row
    csv_reader.headers()?;

    let mut results = Vec::new();
    for (index, record) in csv_reader.deserialize::<QuoteRow>().enumerate() {
        // Header is line 1
        let line = index + 2;
        let result = match record {
            Ok(row) => match row.to_request(config) {
                Ok(quote) => QuoteResult::from_quote(row.id.clone(), &quote),
                Err(err) => QuoteResult::rejected(row.id.clone(), err.to_string()),
            },
            Err(err) if err.is_io_error() => return Err(err.into()),
            Err(err) => QuoteResult::rejected(format!("line {}", line), err.to_string()),
        };

        if let Some(error) = &result.error {
            warn!("Rejected {}: {}", result.id, error);
        } else {
            debug!("Priced {}: put = {:?}", result.id, result.put);
        }
        results.push(result);
    }

    Ok(results)
}

/// Run the batch command
pub fn run(
    input: &Path,
    output: Option<&Path>,
    format: OutputFormat,
    config: &PricerConfig,
) -> Result<BatchSummary> {
    info!("Starting batch pricing...");
    info!("  Input: {}", input.display());
    info!("  Output format: {}", format);

    if !input.exists() {
        return Err(CliError::FileNotFound(input.display().to_string()));
    }

    let results = price_reader(File::open(input)?, config)?;

    match output {
        Some(path) => {
            info!("  Writing results to {}", path.display());
            let mut writer = BufWriter::new(File::create(path)?);
            write_results(&mut writer, &results, format)?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            write_results(stdout.lock(), &results, format)?;
        }
    }

    let summary = BatchSummary::from_results(&results);
    info!(
        "Batch complete: {} priced, {} rejected",
        summary.priced, summary.rejected
    );
    Ok(summary)
}
