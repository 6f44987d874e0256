//! put-pricer - Black-Scholes put prices from the command line
//!
//! # Commands
//!
//! - `put-pricer price --spot <S> --strike <K> --maturity <T> --volatility <σ>`
//! - `put-pricer batch --input <file>` - price a CSV file of quotes
//! - `put-pricer check` - validate configuration
//!
//! Logs go to stderr so priced output on stdout can be piped.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use pricer_models::instruments::OptionQuoteRequest;
use service_cli::commands;
use service_cli::config::PricerConfig;
use service_cli::output::OutputFormat;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Black-Scholes put pricer
#[derive(Parser)]
#[command(name = "put-pricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "put_pricer.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a single European put
    Price {
        /// Spot price S
        #[arg(long)]
        spot: f64,

        /// Strike price K
        #[arg(long)]
        strike: f64,

        /// Time to maturity T in years
        #[arg(short = 't', long)]
        maturity: f64,

        /// Volatility σ (annualised)
        #[arg(long)]
        volatility: f64,

        /// Risk-free rate r [default: config]
        #[arg(short, long, allow_negative_numbers = true)]
        rate: Option<f64>,

        /// Continuous dividend yield q [default: config]
        #[arg(short = 'q', long, allow_negative_numbers = true)]
        dividend_yield: Option<f64>,

        /// Output format [default: config]
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Price every quote in a CSV file
    Batch {
        /// Input CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format [default: config]
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Check configuration
    Check,
}

fn init_tracing(verbose: bool, config: &PricerConfig) {
    let level = if verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = Path::new(&cli.config);

    // `check` reports validation problems itself, so it loads unvalidated
    let config = match cli.command {
        Commands::Check => {
            PricerConfig::load_or_default(config_path).and_then(PricerConfig::with_env_override)
        }
        _ => PricerConfig::load_with_env_and_validate(config_path),
    }
    .with_context(|| format!("Failed to load configuration from {}", cli.config))?;

    init_tracing(cli.verbose, &config);
    debug!("Effective configuration: {:?}", config);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Price {
            spot,
            strike,
            maturity,
            volatility,
            rate,
            dividend_yield,
            format,
        } => {
            let quote = OptionQuoteRequest::new(
                spot,
                strike,
                maturity,
                rate.unwrap_or(config.defaults.rate),
                volatility,
            )
            .with_dividend_yield(dividend_yield.unwrap_or(config.defaults.dividend_yield));

            commands::price::run(
                &quote,
                format.unwrap_or(config.format),
                io::stdout().lock(),
            )
            .context("Pricing failed")?;
        }
        Commands::Batch {
            input,
            output,
            format,
        } => {
            commands::batch::run(
                &input,
                output.as_deref(),
                format.unwrap_or(config.format),
                &config,
            )
            .with_context(|| format!("Batch pricing of {} failed", input.display()))?;
        }
        Commands::Check => {
            commands::check::run(config_path, &config, io::stdout().lock())
                .context("Configuration check failed")?;
        }
    }

    Ok(())
}
