//! Fiscal year boundary configuration
//!
//! The office closes its books on Dec 31, but the boundary is kept
//! configurable for ledgers maintained on a different fiscal calendar.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use core_kernel::TemporalError;

/// The closing day of the accounting year, as a (month, day) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FiscalYearEnd {
    month: u32,
    day: u32,
}

impl FiscalYearEnd {
    /// Creates a fiscal year end
    ///
    /// The pair must exist in every calendar year, so Feb caps at 28;
    /// a Feb 29 boundary would vanish in common years and is rejected.
    pub fn new(month: u32, day: u32) -> Result<Self, TemporalError> {
        // Validated against a common year.
        const COMMON_YEAR: i32 = 2023;
        if NaiveDate::from_ymd_opt(COMMON_YEAR, month, day).is_none() {
            return Err(TemporalError::InvalidFiscalYearEnd { month, day });
        }
        Ok(Self { month, day })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Returns the first occurrence of this boundary on or after `date`,
    /// i.e. the last day of the fiscal year containing `date`
    ///
    /// For the default Dec 31 boundary this is always Dec 31 of the
    /// date's own year.
    pub fn boundary_on_or_after(&self, date: NaiveDate) -> NaiveDate {
        let this_year = self.on(date.year());
        if this_year >= date {
            this_year
        } else {
            self.on(date.year() + 1)
        }
    }

    fn on(&self, year: i32) -> NaiveDate {
        // Construction guarantees the pair exists in every year.
        NaiveDate::from_ymd_opt(year, self.month, self.day).unwrap_or(NaiveDate::MAX)
    }
}

impl Default for FiscalYearEnd {
    fn default() -> Self {
        Self { month: 12, day: 31 }
    }
}
