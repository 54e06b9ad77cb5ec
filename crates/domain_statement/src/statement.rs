//! Consolidated prepaid statement
//!
//! Walks the registry once, prorates every dated charge against the
//! fiscal year end, and assembles the statement the accountant signs
//! off: one row per vehicle, column totals per document kind, and the
//! balanced year-end adjustment journal.

use serde::Serialize;
use tracing::info;

use core_kernel::{Currency, Money, VehicleNo};
use domain_proration::{prorate, FiscalYearEnd, ProrationResult};

use crate::entry::DocumentKind;
use crate::error::StatementError;
use crate::journal::{journal_totals, JournalLine, PostingCategory};
use crate::registry::VehicleRegistry;

/// One statement row: a vehicle and its prorated charges
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleRow {
    pub vehicle_no: VehicleNo,
    pub description: String,
    pub fuel_prepaid: Money,
    pub insurance: Option<ProrationResult>,
    pub blue_book: Option<ProrationResult>,
    pub fitness: Option<ProrationResult>,
    pub emission: Option<ProrationResult>,
}

impl VehicleRow {
    /// Returns the proration for a document kind, if the charge was submitted
    pub fn proration(&self, kind: DocumentKind) -> Option<&ProrationResult> {
        match kind {
            DocumentKind::Insurance => self.insurance.as_ref(),
            DocumentKind::BlueBook => self.blue_book.as_ref(),
            DocumentKind::Fitness => self.fitness.as_ref(),
            DocumentKind::Emission => self.emission.as_ref(),
        }
    }

    fn set_proration(&mut self, kind: DocumentKind, result: ProrationResult) {
        match kind {
            DocumentKind::Insurance => self.insurance = Some(result),
            DocumentKind::BlueBook => self.blue_book = Some(result),
            DocumentKind::Fitness => self.fitness = Some(result),
            DocumentKind::Emission => self.emission = Some(result),
        }
    }
}

/// Column sums for one document kind
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KindTotals {
    pub current: Money,
    pub prepaid: Money,
}

impl KindTotals {
    fn zero(currency: Currency) -> Self {
        Self {
            current: Money::zero(currency),
            prepaid: Money::zero(currency),
        }
    }
}

/// Statement footer totals
///
/// `grand_prepaid` covers everything carried into the next year, fuel
/// included, and therefore matches the journal's debit total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatementTotals {
    pub insurance: KindTotals,
    pub blue_book: KindTotals,
    pub fitness: KindTotals,
    pub emission: KindTotals,
    pub fuel_prepaid: Money,
    pub grand_current: Money,
    pub grand_prepaid: Money,
}

impl StatementTotals {
    fn zero(currency: Currency) -> Self {
        Self {
            insurance: KindTotals::zero(currency),
            blue_book: KindTotals::zero(currency),
            fitness: KindTotals::zero(currency),
            emission: KindTotals::zero(currency),
            fuel_prepaid: Money::zero(currency),
            grand_current: Money::zero(currency),
            grand_prepaid: Money::zero(currency),
        }
    }

    /// Column sums for a document kind
    pub fn for_kind(&self, kind: DocumentKind) -> &KindTotals {
        match kind {
            DocumentKind::Insurance => &self.insurance,
            DocumentKind::BlueBook => &self.blue_book,
            DocumentKind::Fitness => &self.fitness,
            DocumentKind::Emission => &self.emission,
        }
    }

    fn for_kind_mut(&mut self, kind: DocumentKind) -> &mut KindTotals {
        match kind {
            DocumentKind::Insurance => &mut self.insurance,
            DocumentKind::BlueBook => &mut self.blue_book,
            DocumentKind::Fitness => &mut self.fitness,
            DocumentKind::Emission => &mut self.emission,
        }
    }
}

/// The built statement: rows, totals and adjustment journal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateStatement {
    pub fiscal_year_end: FiscalYearEnd,
    pub currency: Currency,
    pub rows: Vec<VehicleRow>,
    pub totals: StatementTotals,
    pub journal: Vec<JournalLine>,
}

impl AggregateStatement {
    /// Looks up a row by vehicle number
    pub fn row(&self, vehicle_no: &VehicleNo) -> Option<&VehicleRow> {
        self.rows.iter().find(|r| &r.vehicle_no == vehicle_no)
    }
}

/// Builds statements for a given fiscal calendar and reporting currency
#[derive(Debug, Clone)]
pub struct StatementBuilder {
    fiscal_year_end: FiscalYearEnd,
    currency: Currency,
}

impl StatementBuilder {
    /// Creates a builder closing books on Dec 31
    pub fn new(currency: Currency) -> Self {
        Self {
            fiscal_year_end: FiscalYearEnd::default(),
            currency,
        }
    }

    pub fn with_fiscal_year_end(mut self, fiscal_year_end: FiscalYearEnd) -> Self {
        self.fiscal_year_end = fiscal_year_end;
        self
    }

    pub fn fiscal_year_end(&self) -> FiscalYearEnd {
        self.fiscal_year_end
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Builds the consolidated statement from the registry
    ///
    /// Prorates each dated charge, sums the columns, and writes one
    /// debit/credit pair per posting category with a prepaid balance.
    /// Fails on an empty registry and on reversed charge periods.
    pub fn build(&self, registry: &VehicleRegistry) -> Result<AggregateStatement, StatementError> {
        if registry.is_empty() {
            return Err(StatementError::NoEntries);
        }

        let mut totals = StatementTotals::zero(self.currency);
        let mut rows = Vec::with_capacity(registry.len());

        for entry in registry {
            let mut row = VehicleRow {
                vehicle_no: entry.vehicle_no.clone(),
                description: entry.description.clone(),
                fuel_prepaid: entry.fuel_prepaid,
                insurance: None,
                blue_book: None,
                fitness: None,
                emission: None,
            };

            for kind in DocumentKind::ALL {
                if let Some(charge) = entry.charge(kind) {
                    let result = prorate(
                        charge.amount,
                        charge.period.start,
                        charge.period.end,
                        self.fiscal_year_end,
                    )?;

                    let column = totals.for_kind_mut(kind);
                    column.current = column.current.checked_add(&result.current_amount)?;
                    column.prepaid = column.prepaid.checked_add(&result.prepaid_amount)?;

                    row.set_proration(kind, result);
                }
            }

            totals.fuel_prepaid = totals.fuel_prepaid.checked_add(&entry.fuel_prepaid)?;
            rows.push(row);
        }

        for kind in DocumentKind::ALL {
            let column = totals.for_kind(kind).clone();
            totals.grand_current = totals.grand_current.checked_add(&column.current)?;
            totals.grand_prepaid = totals.grand_prepaid.checked_add(&column.prepaid)?;
        }
        totals.grand_prepaid = totals.grand_prepaid.checked_add(&totals.fuel_prepaid)?;

        let journal = self.journal_lines(&totals)?;
        let (debits, credits) = journal_totals(&journal, self.currency)?;

        info!(
            vehicles = rows.len(),
            journal_lines = journal.len(),
            debit_total = %debits,
            credit_total = %credits,
            "statement built"
        );

        Ok(AggregateStatement {
            fiscal_year_end: self.fiscal_year_end,
            currency: self.currency,
            rows,
            totals,
            journal,
        })
    }

    /// One debit/credit pair per category, zero balances skipped
    ///
    /// Category sums come straight off the statement columns: the three
    /// registration documents share an account pair, insurance and fuel
    /// have their own.
    fn journal_lines(&self, totals: &StatementTotals) -> Result<Vec<JournalLine>, StatementError> {
        let registration = totals
            .blue_book
            .prepaid
            .checked_add(&totals.fitness.prepaid)?
            .checked_add(&totals.emission.prepaid)?;
        let balances = [
            (PostingCategory::VehicleRegistration, registration),
            (PostingCategory::Insurance, totals.insurance.prepaid),
            (PostingCategory::Fuel, totals.fuel_prepaid),
        ];

        let mut lines = Vec::new();
        for (category, amount) in balances {
            if amount.is_zero() {
                continue;
            }
            let description = format!("Year-end prepaid adjustment - {}", category.label());
            lines.push(JournalLine::debit(
                category.asset_account(),
                amount,
                description.clone(),
            ));
            lines.push(JournalLine::credit(
                category.expense_account(),
                amount,
                description,
            ));
        }
        Ok(lines)
    }
}
