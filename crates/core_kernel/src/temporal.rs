//! Calendar types for coverage periods
//!
//! Coverage runs in whole days and counts both endpoints: a policy from
//! Jan 1 to Dec 31 covers 365 days, and a single-day period covers 1 day.
//! Every day count in this workspace follows that inclusive convention.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid period: start {start} must not be after end {end}")]
    InvalidPeriod { start: String, end: String },

    #[error("Invalid fiscal year end: month {month} day {day} does not exist in every year")]
    InvalidFiscalYearEnd { month: u32, day: u32 },
}

/// A date span with inclusive endpoints
///
/// This is the validity window printed on the paper documents: an
/// insurance certificate valid "from 25 Dec 2025 to 24 Dec 2026"
/// covers every day named, both ends included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoveragePeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl CoveragePeriod {
    /// Creates a period, rejecting ranges whose end precedes the start
    ///
    /// A period may start and end on the same day.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        if start > end {
            return Err(TemporalError::InvalidPeriod {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Number of days covered, counting both endpoints
    pub fn inclusive_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Returns the last calendar day of the month containing `date`
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let first_of_next = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    first_of_next.and_then(|d| d.pred_opt()).unwrap_or(date)
}

/// Formats a date's month as a schedule label, e.g. "Jan 2026"
pub fn month_label(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}
