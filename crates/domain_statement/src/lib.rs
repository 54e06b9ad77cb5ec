//! Fleet prepaid statement domain
//!
//! Collects per-vehicle document charges, prorates them against the
//! fiscal year end, and produces the consolidated statement with its
//! balanced year-end adjustment journal.
//!
//! A vehicle carries four dated documents (insurance, blue book,
//! fitness, emission) and one undated fuel prepaid balance. Dated
//! charges are split by `domain_proration`; fuel is carried forward
//! whole. Resubmitting a vehicle merges field by field, so partial
//! corrections never wipe figures submitted earlier.

pub mod entry;
pub mod error;
pub mod journal;
pub mod registry;
pub mod statement;

pub use entry::{DocumentCharge, DocumentKind, VehicleEntry};
pub use error::StatementError;
pub use journal::{
    is_balanced, journal_totals, AccountType, JournalLine, LedgerAccount, PostingCategory,
    PostingType,
};
pub use registry::{UpsertOutcome, VehicleRegistry};
pub use statement::{
    AggregateStatement, KindTotals, StatementBuilder, StatementTotals, VehicleRow,
};
