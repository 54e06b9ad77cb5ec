//! Entry input DTOs
//!
//! The entry file is a JSON array of per-vehicle records. Amounts are
//! plain decimal strings and dates are ISO `YYYY-MM-DD`. Absent or null
//! fields stay blank, which the registry's merge treats as "keep the
//! previous figure".

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use core_kernel::{CoreError, Currency, Money, VehicleNo};
use domain_statement::{DocumentCharge, DocumentKind, VehicleEntry};

/// One dated document as it appears in the entry file
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentInput {
    pub amount: Decimal,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DocumentInput {
    fn into_charge(self, currency: Currency) -> Result<DocumentCharge, CoreError> {
        let charge = DocumentCharge::new(Money::new(self.amount, currency), self.from, self.to)?;
        Ok(charge)
    }
}

/// One vehicle record from the entry file
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleEntryInput {
    pub vehicle_no: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub fuel_prepaid: Option<Decimal>,
    #[serde(default)]
    pub insurance: Option<DocumentInput>,
    #[serde(default)]
    pub blue_book: Option<DocumentInput>,
    #[serde(default)]
    pub fitness: Option<DocumentInput>,
    #[serde(default)]
    pub emission: Option<DocumentInput>,
}

impl VehicleEntryInput {
    /// Maps the parsed record into a domain entry
    pub fn into_entry(self, currency: Currency) -> Result<VehicleEntry, CoreError> {
        let vehicle_no = VehicleNo::new(&self.vehicle_no)?;
        let mut entry = VehicleEntry::new(vehicle_no, self.description, currency);

        if let Some(fuel) = self.fuel_prepaid {
            entry.fuel_prepaid = Money::new(fuel, currency);
        }
        if let Some(input) = self.insurance {
            entry.set_charge(DocumentKind::Insurance, input.into_charge(currency)?);
        }
        if let Some(input) = self.blue_book {
            entry.set_charge(DocumentKind::BlueBook, input.into_charge(currency)?);
        }
        if let Some(input) = self.fitness {
            entry.set_charge(DocumentKind::Fitness, input.into_charge(currency)?);
        }
        if let Some(input) = self.emission {
            entry.set_charge(DocumentKind::Emission, input.into_charge(currency)?);
        }

        Ok(entry)
    }
}
