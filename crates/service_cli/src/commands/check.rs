//! Check command implementation
//!
//! Validates the configuration and prints the effective values.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::config::PricerConfig;
use crate::Result;

/// Run the check command
pub fn run<W: Write>(config_path: &Path, config: &PricerConfig, mut writer: W) -> Result<()> {
    info!("Checking configuration...");

    let source = if config_path.exists() {
        config_path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", config_path.display())
    };

    writeln!(writer, "Config file:      {}", source)?;
    writeln!(writer, "Log level:        {}", config.log_level)?;
    writeln!(writer, "Output format:    {}", config.format)?;
    writeln!(writer, "Day count:        {}", config.day_count)?;
    writeln!(writer, "Default rate:     {}", config.defaults.rate)?;
    writeln!(writer, "Default yield:    {}", config.defaults.dividend_yield)?;

    config.validate()?;

    writeln!(writer, "Configuration OK")?;
    info!("Configuration check passed");
    Ok(())
}
