//! Core error types used across the system

use crate::identifiers::IdentifierError;
use crate::money::MoneyError;
use crate::temporal::TemporalError;
use thiserror::Error;

/// Core error type for the kernel
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    #[error("Temporal error: {0}")]
    Temporal(#[from] TemporalError),

    #[error("Identifier error: {0}")]
    Identifier(#[from] IdentifierError),
}
