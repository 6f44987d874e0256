//! End-to-end tests for batch pricing and configuration loading.

use std::fs;

use approx::assert_relative_eq;
use service_cli::commands::batch::{self, BatchSummary};
use service_cli::config::{ConfigError, PricerConfig};
use service_cli::output::OutputFormat;
use tempfile::tempdir;

const QUOTES: &str = "\
id,spot,strike,maturity,valuation_date,expiry_date,rate,volatility,dividend_yield
atm,100,100,1.0,,,0.05,0.2,
div,50,60,0.5,,,0.03,0.25,0.02
dated,100,100,,2024-01-01,2025-01-01,0.05,0.2,0
defaulted,100,100,1.0,,,,0.2,
expired,100,100,0,,,0.05,0.2,
";

#[test]
fn test_batch_writes_csv_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("quotes.csv");
    let output = dir.path().join("prices.csv");
    fs::write(&input, QUOTES).unwrap();

    let mut config = PricerConfig::default();
    config.defaults.rate = 0.05;

    let summary = batch::run(&input, Some(&output), OutputFormat::Csv, &config).unwrap();
    assert_eq!(summary, BatchSummary { priced: 4, rejected: 1 });

    let mut reader = csv::Reader::from_path(&output).unwrap();
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 5);

    let put_of = |row: &csv::StringRecord| row[1].parse::<f64>().unwrap();
    assert_eq!(&rows[0][0], "atm");
    assert_relative_eq!(put_of(&rows[0]), 5.573526022256971, epsilon = 1e-9);

    // 2024 is a leap year: 366 days under ACT/365F
    let dated = put_of(&rows[2]);
    let direct = pricer_models::analytical::put_price(100.0, 100.0, 366.0 / 365.0, 0.05, 0.2)
        .unwrap();
    assert_relative_eq!(dated, direct, epsilon = 1e-12);

    // Rate came from the configured default
    assert_relative_eq!(put_of(&rows[3]), put_of(&rows[0]), epsilon = 1e-12);

    assert_eq!(&rows[4][0], "expired");
    assert!(rows[4][1].is_empty());
    assert!(rows[4][6].starts_with("Domain error"));
}

#[test]
fn test_batch_writes_json_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("quotes.csv");
    let output = dir.path().join("prices.json");
    fs::write(&input, QUOTES).unwrap();

    batch::run(&input, Some(&output), OutputFormat::Json, &PricerConfig::default()).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[1]["id"], "div");
    assert!(rows[1]["parity_residual"].as_f64().unwrap().abs() < 1e-10);
    assert!(rows[4]["put"].is_null());
}

#[test]
fn test_batch_rows_missing_columns_are_rejected() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("quotes.csv");
    fs::write(&input, "id,spot,strike\na,100,100\nb,90,100\n").unwrap();

    let results =
        batch::price_reader(fs::File::open(&input).unwrap(), &PricerConfig::default()).unwrap();
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| !r.is_ok()));
    assert_eq!(results[0].id, "line 2");
}

#[test]
fn test_config_file_and_overrides() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("put_pricer.toml");
    fs::write(
        &path,
        "format = \"json\"\nday_count = \"ACT/360\"\n\n[defaults]\nrate = 0.04\n",
    )
    .unwrap();

    let config = PricerConfig::load_or_default(&path)
        .unwrap()
        .with_overrides(|key| (key == "DIVIDEND_YIELD").then(|| "0.01".to_string()))
        .unwrap();

    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.defaults.rate, 0.04);
    assert_eq!(config.defaults.dividend_yield, 0.01);
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_config_uses_defaults_but_bad_config_fails() {
    let dir = tempdir().unwrap();

    let missing = PricerConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(missing, PricerConfig::default());

    let bad = dir.path().join("bad.toml");
    fs::write(&bad, "format = \"xml\"\n").unwrap();
    assert!(matches!(
        PricerConfig::load_or_default(&bad),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_load_with_env_and_validate() {
    let dir = tempdir().unwrap();

    let missing = PricerConfig::load_with_env_and_validate(&dir.path().join("absent.toml"));
    assert!(missing.is_ok());

    let noisy = dir.path().join("noisy.toml");
    fs::write(&noisy, "log_level = \"loud\"\n").unwrap();
    match PricerConfig::load_with_env_and_validate(&noisy) {
        Err(ConfigError::Validation(errors)) => {
            assert!(errors.iter().any(|e| e.contains("log_level")));
        }
        other => panic!("Expected validation error, got {:?}", other),
    }
}
