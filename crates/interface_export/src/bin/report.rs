//! Fleet Prepaid Core - Report Binary
//!
//! Reads the fleet entry file, builds the consolidated prepaid
//! statement, and writes the statement, split, schedule and journal
//! tables as CSV files.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin fleet-report
//!
//! # Run with environment variables
//! REPORT_ENTRIES_PATH=fleet.json REPORT_OUTPUT_DIR=out cargo run --bin fleet-report
//! ```
//!
//! # Environment Variables
//!
//! * `REPORT_CURRENCY` - Reporting currency code (default: BTN)
//! * `REPORT_FISCAL_YEAR_END_MONTH` - Month the books close (default: 12)
//! * `REPORT_FISCAL_YEAR_END_DAY` - Day the books close (default: 31)
//! * `REPORT_ENTRIES_PATH` - JSON entry file to read (default: entries.json)
//! * `REPORT_OUTPUT_DIR` - Directory for the CSV tables (default: reports)
//! * `REPORT_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::fs::File;
use std::path::Path;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_statement::{AggregateStatement, StatementBuilder, VehicleRegistry};
use interface_export::csv as tables;
use interface_export::{ExportError, ReportConfig, VehicleEntryInput};

/// Main entry point for the report binary.
///
/// Initializes logging, loads configuration, reads the entry file, and
/// writes the four report tables.
///
/// # Errors
///
/// Returns an error if:
/// - The configured currency or fiscal year end is invalid
/// - The entry file cannot be read or parsed
/// - The statement cannot be built (no entries, reversed periods)
/// - Any output file cannot be written
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    // Load configuration from environment
    let config = load_config();

    // Initialize tracing/logging
    init_tracing(&config.log_level);

    tracing::info!(
        entries = %config.entries_path,
        output = %config.output_dir,
        "Starting fleet prepaid report"
    );

    let currency = config.currency()?;
    let fiscal_year_end = config.fiscal_year_end()?;

    // Load entries and fold resubmissions
    let mut registry = VehicleRegistry::new();
    for input in read_entries(&config.entries_path)? {
        registry.upsert(input.into_entry(currency)?);
    }
    tracing::info!(vehicles = registry.len(), "Entries loaded");

    // Build the consolidated statement
    let statement = StatementBuilder::new(currency)
        .with_fiscal_year_end(fiscal_year_end)
        .build(&registry)?;

    // Write the report tables
    write_reports(&config.output_dir, &statement)?;

    tracing::info!("Report complete");
    Ok(())
}

/// Loads report configuration from environment variables.
///
/// Falls back to individual env vars or defaults if the combined load
/// fails.
fn load_config() -> ReportConfig {
    ReportConfig::from_env().unwrap_or_else(|_| ReportConfig {
        currency: std::env::var("REPORT_CURRENCY").unwrap_or_else(|_| "BTN".to_string()),
        fiscal_year_end_month: std::env::var("REPORT_FISCAL_YEAR_END_MONTH")
            .ok()
            .and_then(|m| m.parse().ok())
            .unwrap_or(12),
        fiscal_year_end_day: std::env::var("REPORT_FISCAL_YEAR_END_DAY")
            .ok()
            .and_then(|d| d.parse().ok())
            .unwrap_or(31),
        entries_path: std::env::var("REPORT_ENTRIES_PATH")
            .unwrap_or_else(|_| "entries.json".to_string()),
        output_dir: std::env::var("REPORT_OUTPUT_DIR").unwrap_or_else(|_| "reports".to_string()),
        log_level: std::env::var("REPORT_LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string()),
    })
}

/// Initializes the tracing subscriber for structured logging.
///
/// # Arguments
///
/// * `log_level` - The minimum log level to output (trace, debug, info, warn, error)
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Parses the JSON entry file into input records.
///
/// # Errors
///
/// Returns an error if the file is missing or not a valid JSON array
/// of entry records.
fn read_entries(path: &str) -> Result<Vec<VehicleEntryInput>, ExportError> {
    let file = File::open(path)?;
    let entries = serde_json::from_reader(file)?;
    Ok(entries)
}

/// Writes the four report tables into the output directory.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or a table
/// cannot be serialized.
fn write_reports(output_dir: &str, statement: &AggregateStatement) -> Result<(), ExportError> {
    let dir = Path::new(output_dir);
    std::fs::create_dir_all(dir)?;

    let statement_path = dir.join("statement.csv");
    tables::write_statement(File::create(&statement_path)?, statement)?;
    tracing::info!(path = %statement_path.display(), "Statement table written");

    let splits_path = dir.join("splits.csv");
    tables::write_splits(File::create(&splits_path)?, statement)?;
    tracing::info!(path = %splits_path.display(), "Split table written");

    let schedules_path = dir.join("schedules.csv");
    tables::write_schedules(File::create(&schedules_path)?, statement)?;
    tracing::info!(path = %schedules_path.display(), "Schedule table written");

    let journal_path = dir.join("journal.csv");
    tables::write_journal(File::create(&journal_path)?, statement)?;
    tracing::info!(path = %journal_path.display(), "Journal table written");

    Ok(())
}
