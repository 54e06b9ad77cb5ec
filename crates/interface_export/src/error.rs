//! Export error handling

use thiserror::Error;

use core_kernel::CoreError;
use domain_statement::StatementError;

/// Errors raised while loading entries or writing report tables
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Entry file error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Statement error: {0}")]
    Statement(#[from] StatementError),

    #[error("Invalid entry: {0}")]
    Core(#[from] CoreError),
}
