//! Strongly-typed identifiers for domain entities
//!
//! Vehicles are keyed by their registration plate number, the natural
//! identifier every paper document in the office already carries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while constructing identifiers
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("Vehicle number must not be empty")]
    EmptyVehicleNo,
}

/// A vehicle registration number, e.g. "BG-3-A0394"
///
/// Input is normalized on construction: surrounding whitespace is trimmed
/// and letters are uppercased, so "bg-3-a0394" and "BG-3-A0394 " name the
/// same vehicle. Two values are equal exactly when their normalized forms
/// are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VehicleNo(String);

impl VehicleNo {
    /// Creates a vehicle number, normalizing and rejecting blank input
    pub fn new(raw: &str) -> Result<Self, IdentifierError> {
        let normalized = raw.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(IdentifierError::EmptyVehicleNo);
        }
        Ok(Self(normalized))
    }

    /// Returns the normalized plate number
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VehicleNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for VehicleNo {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for VehicleNo {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<VehicleNo> for String {
    fn from(vehicle_no: VehicleNo) -> String {
        vehicle_no.0
    }
}
