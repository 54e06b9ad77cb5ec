//! Proration domain errors

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while prorating a charge
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProrationError {
    /// The coverage end date precedes the start date
    #[error("Invalid date range: end {end} precedes start {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}
