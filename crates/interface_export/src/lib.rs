//! Tabular export layer
//!
//! Turns a built `AggregateStatement` into the four report tables and
//! hosts the `fleet-report` binary driving the pipeline end to end:
//! entry file in, CSV tables out.
//!
//! - **DTOs**: entry-file records mapped into domain entries
//! - **CSV**: statement, split, schedule and journal table writers
//! - **Config**: `REPORT_*` environment configuration
//! - **Error Handling**: one error type over I/O, parsing and domain failures

pub mod config;
pub mod csv;
pub mod dto;
pub mod error;

pub use crate::config::ReportConfig;
pub use crate::csv::{write_journal, write_schedules, write_splits, write_statement};
pub use crate::dto::{DocumentInput, VehicleEntryInput};
pub use crate::error::ExportError;
