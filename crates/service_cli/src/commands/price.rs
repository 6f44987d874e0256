//! Price command implementation
//!
//! Prices a single quote given on the command line.

use std::io::Write;

use pricer_models::instruments::OptionQuoteRequest;
use tracing::info;

use crate::output::{write_results, OutputFormat, QuoteResult};
use crate::{CliError, Result};

/// Run the price command
///
/// A quote rejected by validation or during pricing is returned as
/// `CliError::Pricing` so the process exits with a failure status; nothing
/// is written in that case.
pub fn run<W: Write>(
    quote: &OptionQuoteRequest,
    format: OutputFormat,
    writer: W,
) -> Result<QuoteResult> {
    info!("Pricing quote...");
    info!(
        "  S = {}, K = {}, T = {}, r = {}, σ = {}, q = {}",
        quote.spot, quote.strike, quote.expiry, quote.rate, quote.volatility, quote.dividend_yield
    );

    let result = QuoteResult::try_from_quote("quote", quote).map_err(CliError::Pricing)?;
    write_results(writer, std::slice::from_ref(&result), format)?;

    info!("Pricing complete");
    Ok(result)
}
