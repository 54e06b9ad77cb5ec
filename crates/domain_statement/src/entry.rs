//! Vehicle prepaid entries
//!
//! One entry per vehicle, holding the figures typed in from the paper
//! documents: a dated charge per document kind plus the undated fuel
//! prepaid balance. Entries are value objects; the registry owns them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{CoveragePeriod, Currency, Money, TemporalError, VehicleNo};

/// The four dated documents every fleet vehicle carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    Insurance,
    BlueBook,
    Fitness,
    Emission,
}

impl DocumentKind {
    /// All kinds in statement column order
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::Insurance,
        DocumentKind::BlueBook,
        DocumentKind::Fitness,
        DocumentKind::Emission,
    ];

    /// Column heading used on the statement and schedules
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Insurance => "Insurance",
            DocumentKind::BlueBook => "Blue Book",
            DocumentKind::Fitness => "Fitness",
            DocumentKind::Emission => "Emission",
        }
    }
}

/// A dated charge for one document: the fee paid and the validity window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentCharge {
    pub amount: Money,
    pub period: CoveragePeriod,
}

impl DocumentCharge {
    /// Creates a charge from the dates printed on the document
    pub fn new(amount: Money, from: NaiveDate, to: NaiveDate) -> Result<Self, TemporalError> {
        Ok(Self {
            amount,
            period: CoveragePeriod::new(from, to)?,
        })
    }
}

/// One vehicle's submitted figures
///
/// A charge is considered blank when absent or zero-amount; blank fields
/// never overwrite previously submitted figures on resubmission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleEntry {
    pub vehicle_no: VehicleNo,
    pub description: String,
    pub fuel_prepaid: Money,
    pub insurance: Option<DocumentCharge>,
    pub blue_book: Option<DocumentCharge>,
    pub fitness: Option<DocumentCharge>,
    pub emission: Option<DocumentCharge>,
}

impl VehicleEntry {
    /// Creates an entry with no figures yet
    pub fn new(vehicle_no: VehicleNo, description: impl Into<String>, currency: Currency) -> Self {
        Self {
            vehicle_no,
            description: description.into(),
            fuel_prepaid: Money::zero(currency),
            insurance: None,
            blue_book: None,
            fitness: None,
            emission: None,
        }
    }

    /// Returns the charge for a document kind, if submitted
    pub fn charge(&self, kind: DocumentKind) -> Option<&DocumentCharge> {
        match kind {
            DocumentKind::Insurance => self.insurance.as_ref(),
            DocumentKind::BlueBook => self.blue_book.as_ref(),
            DocumentKind::Fitness => self.fitness.as_ref(),
            DocumentKind::Emission => self.emission.as_ref(),
        }
    }

    /// Sets the charge for a document kind
    pub fn set_charge(&mut self, kind: DocumentKind, charge: DocumentCharge) {
        match kind {
            DocumentKind::Insurance => self.insurance = Some(charge),
            DocumentKind::BlueBook => self.blue_book = Some(charge),
            DocumentKind::Fitness => self.fitness = Some(charge),
            DocumentKind::Emission => self.emission = Some(charge),
        }
    }

    /// Folds a resubmission into this entry
    ///
    /// Non-blank incoming fields overwrite; blank fields (empty
    /// description, zero fuel, absent or zero-amount charges) preserve
    /// whatever was submitted before. A charge merges as a whole, dates
    /// and amount together.
    pub fn merge_from(&mut self, incoming: VehicleEntry) {
        if !incoming.description.trim().is_empty() {
            self.description = incoming.description.clone();
        }
        if !incoming.fuel_prepaid.is_zero() {
            self.fuel_prepaid = incoming.fuel_prepaid;
        }
        for kind in DocumentKind::ALL {
            if let Some(charge) = incoming.charge(kind) {
                if !charge.amount.is_zero() {
                    self.set_charge(kind, charge.clone());
                }
            }
        }
    }
}
