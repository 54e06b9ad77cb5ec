//! Statement error types

use thiserror::Error;

use core_kernel::MoneyError;
use domain_proration::ProrationError;

#[derive(Debug, Error)]
pub enum StatementError {
    #[error("no vehicle entries have been added")]
    NoEntries,

    #[error("proration failed: {0}")]
    Proration(#[from] ProrationError),

    #[error("money arithmetic failed: {0}")]
    Money(#[from] MoneyError),
}
