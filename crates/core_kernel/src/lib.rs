//! Core Kernel - Foundational types for the fleet prepaid ledger
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic
//! - Calendar types with inclusive day counting
//! - The vehicle registration number value object

pub mod error;
pub mod identifiers;
pub mod money;
pub mod temporal;

pub use error::CoreError;
pub use identifiers::{IdentifierError, VehicleNo};
pub use money::{Currency, Money, MoneyError};
pub use temporal::{last_day_of_month, month_label, CoveragePeriod, TemporalError};
