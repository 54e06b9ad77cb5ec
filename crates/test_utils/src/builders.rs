//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use core_kernel::{Currency, Money, VehicleNo};
use domain_statement::{DocumentCharge, DocumentKind, VehicleEntry};

use crate::fixtures::VehicleFixtures;

/// Builder for constructing vehicle entries
pub struct VehicleEntryBuilder {
    vehicle_no: VehicleNo,
    description: String,
    currency: Currency,
    fuel_prepaid: Option<Money>,
    charges: Vec<(DocumentKind, DocumentCharge)>,
}

impl Default for VehicleEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl VehicleEntryBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            vehicle_no: VehicleFixtures::hilux_no(),
            description: VehicleFixtures::hilux_description().to_string(),
            currency: Currency::BTN,
            fuel_prepaid: None,
            charges: Vec::new(),
        }
    }

    /// Sets the vehicle number
    pub fn with_vehicle_no(mut self, vehicle_no: VehicleNo) -> Self {
        self.vehicle_no = vehicle_no;
        self
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the currency used for all amounts
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Sets the fuel prepaid balance
    pub fn with_fuel_prepaid(mut self, amount: Decimal) -> Self {
        self.fuel_prepaid = Some(Money::new(amount, self.currency));
        self
    }

    /// Adds a dated charge for a document kind
    pub fn with_charge(
        mut self,
        kind: DocumentKind,
        amount: Decimal,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Self {
        let charge = DocumentCharge::new(Money::new(amount, self.currency), from, to)
            .expect("builder periods must be ordered");
        self.charges.push((kind, charge));
        self
    }

    /// Adds an insurance charge
    pub fn with_insurance(self, amount: Decimal, from: NaiveDate, to: NaiveDate) -> Self {
        self.with_charge(DocumentKind::Insurance, amount, from, to)
    }

    /// Adds a blue book charge
    pub fn with_blue_book(self, amount: Decimal, from: NaiveDate, to: NaiveDate) -> Self {
        self.with_charge(DocumentKind::BlueBook, amount, from, to)
    }

    /// Adds a fitness charge
    pub fn with_fitness(self, amount: Decimal, from: NaiveDate, to: NaiveDate) -> Self {
        self.with_charge(DocumentKind::Fitness, amount, from, to)
    }

    /// Adds an emission charge
    pub fn with_emission(self, amount: Decimal, from: NaiveDate, to: NaiveDate) -> Self {
        self.with_charge(DocumentKind::Emission, amount, from, to)
    }

    /// Builds the vehicle entry
    pub fn build(self) -> VehicleEntry {
        let mut entry = VehicleEntry::new(self.vehicle_no, self.description, self.currency);
        if let Some(fuel) = self.fuel_prepaid {
            entry.fuel_prepaid = fuel;
        }
        for (kind, charge) in self.charges {
            entry.set_charge(kind, charge);
        }
        entry
    }
}
