//! Proration Domain
//!
//! This crate implements the fiscal year split at the heart of the prepaid
//! ledger: given a charge and the date range it covers, how much belongs to
//! the accounting year the coverage starts in, and how much is deferred as
//! prepaid into the months that follow.
//!
//! # Conventions
//!
//! - Day counts are inclusive of both endpoints everywhere.
//! - The per-day rate is rounded once, to currency precision; all derived
//!   figures reuse it.
//! - The current portion is the complement of the prepaid portion, so the
//!   two always reconstruct the original charge exactly.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_proration::{prorate, FiscalYearEnd};
//!
//! let result = prorate(premium, start_date, end_date, FiscalYearEnd::default())?;
//! println!("prepaid {} over {} months", result.prepaid_amount, result.monthly_breakdown.len());
//! ```

pub mod engine;
pub mod error;
pub mod fiscal;

pub use engine::{prorate, BreakdownCheck, MonthlySlice, ProrationResult};
pub use error::ProrationError;
pub use fiscal::FiscalYearEnd;
