//! Report configuration

use serde::Deserialize;

use core_kernel::{CoreError, Currency};
use domain_proration::FiscalYearEnd;

use crate::error::ExportError;

/// Report configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Reporting currency code
    pub currency: String,
    /// Month the books close
    pub fiscal_year_end_month: u32,
    /// Day of month the books close
    pub fiscal_year_end_day: u32,
    /// Path of the JSON entry file
    pub entries_path: String,
    /// Directory the report tables are written to
    pub output_dir: String,
    /// Log level
    pub log_level: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency: "BTN".to_string(),
            fiscal_year_end_month: 12,
            fiscal_year_end_day: 31,
            entries_path: "entries.json".to_string(),
            output_dir: "reports".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ReportConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("REPORT"))
            .build()?
            .try_deserialize()
    }

    /// The configured reporting currency
    pub fn currency(&self) -> Result<Currency, ExportError> {
        let currency = self.currency.parse().map_err(CoreError::from)?;
        Ok(currency)
    }

    /// The configured closing day of the accounting year
    pub fn fiscal_year_end(&self) -> Result<FiscalYearEnd, ExportError> {
        let fiscal_year_end =
            FiscalYearEnd::new(self.fiscal_year_end_month, self.fiscal_year_end_day)
                .map_err(CoreError::from)?;
        Ok(fiscal_year_end)
    }
}
