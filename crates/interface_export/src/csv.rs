//! Tabular report serialization
//!
//! Four tables cover the whole statement:
//! - statement: one row per vehicle with current/prepaid split columns
//!   per document plus fuel, closed by a `TOTAL` row
//! - splits: one row per (vehicle, document) with the day counts, the
//!   daily rate, and the scheduled total next to the prepaid lump sum
//! - schedules: one row per (vehicle, document, month) amortization slice
//! - journal: the year-end adjustment lines with debit/credit columns
//!
//! Absent documents serialize as empty cells, which keeps a submitted
//! zero distinguishable from "not submitted". Amounts are written with
//! the currency's minor-unit digits, so files round-trip exactly.

use csv::WriterBuilder;
use serde::Serialize;
use std::io::Write;

use core_kernel::Money;
use domain_statement::{AggregateStatement, DocumentKind, PostingType, VehicleRow};

use crate::error::ExportError;

fn amount_cell(money: Money) -> String {
    format!(
        "{:.prec$}",
        money.amount(),
        prec = money.currency().decimal_places() as usize
    )
}

fn split_cells(row: &VehicleRow, kind: DocumentKind) -> (Option<String>, Option<String>) {
    match row.proration(kind) {
        Some(result) => (
            Some(amount_cell(result.current_amount)),
            Some(amount_cell(result.prepaid_amount)),
        ),
        None => (None, None),
    }
}

#[derive(Serialize)]
struct StatementCsvRow<'a> {
    vehicle_no: &'a str,
    description: &'a str,
    insurance_current: Option<String>,
    insurance_prepaid: Option<String>,
    blue_book_current: Option<String>,
    blue_book_prepaid: Option<String>,
    fitness_current: Option<String>,
    fitness_prepaid: Option<String>,
    emission_current: Option<String>,
    emission_prepaid: Option<String>,
    fuel_prepaid: String,
}

#[derive(Serialize)]
struct SplitCsvRow<'a> {
    vehicle_no: &'a str,
    document: &'a str,
    total_days: i64,
    current_days: i64,
    prepaid_days: i64,
    rate_per_day: String,
    current_amount: String,
    prepaid_amount: String,
    schedule_total: String,
}

#[derive(Serialize)]
struct ScheduleCsvRow<'a> {
    vehicle_no: &'a str,
    document: &'a str,
    month: &'a str,
    days: i64,
    amount: String,
}

#[derive(Serialize)]
struct JournalCsvRow<'a> {
    direction: &'a str,
    account_code: &'a str,
    account: &'a str,
    description: &'a str,
    debit: Option<String>,
    credit: Option<String>,
}

/// Writes the consolidated statement table
pub fn write_statement<W: Write>(
    writer: W,
    statement: &AggregateStatement,
) -> Result<(), ExportError> {
    let mut wtr = WriterBuilder::new().from_writer(writer);

    for row in &statement.rows {
        let (insurance_current, insurance_prepaid) = split_cells(row, DocumentKind::Insurance);
        let (blue_book_current, blue_book_prepaid) = split_cells(row, DocumentKind::BlueBook);
        let (fitness_current, fitness_prepaid) = split_cells(row, DocumentKind::Fitness);
        let (emission_current, emission_prepaid) = split_cells(row, DocumentKind::Emission);

        wtr.serialize(StatementCsvRow {
            vehicle_no: row.vehicle_no.as_str(),
            description: &row.description,
            insurance_current,
            insurance_prepaid,
            blue_book_current,
            blue_book_prepaid,
            fitness_current,
            fitness_prepaid,
            emission_current,
            emission_prepaid,
            fuel_prepaid: amount_cell(row.fuel_prepaid),
        })?;
    }

    let totals = &statement.totals;
    wtr.serialize(StatementCsvRow {
        vehicle_no: "TOTAL",
        description: "",
        insurance_current: Some(amount_cell(totals.insurance.current)),
        insurance_prepaid: Some(amount_cell(totals.insurance.prepaid)),
        blue_book_current: Some(amount_cell(totals.blue_book.current)),
        blue_book_prepaid: Some(amount_cell(totals.blue_book.prepaid)),
        fitness_current: Some(amount_cell(totals.fitness.current)),
        fitness_prepaid: Some(amount_cell(totals.fitness.prepaid)),
        emission_current: Some(amount_cell(totals.emission.current)),
        emission_prepaid: Some(amount_cell(totals.emission.prepaid)),
        fuel_prepaid: amount_cell(totals.fuel_prepaid),
    })?;

    wtr.flush()?;
    Ok(())
}

/// Writes the per-document split table
///
/// Carries everything the statement table summarizes away: the inclusive
/// day counts, the once-rounded daily rate, and the schedule total so
/// rounding drift against the prepaid lump sum stays visible.
pub fn write_splits<W: Write>(
    writer: W,
    statement: &AggregateStatement,
) -> Result<(), ExportError> {
    let mut wtr = WriterBuilder::new().from_writer(writer);

    for row in &statement.rows {
        for kind in DocumentKind::ALL {
            if let Some(result) = row.proration(kind) {
                let check = result.check_breakdown();
                wtr.serialize(SplitCsvRow {
                    vehicle_no: row.vehicle_no.as_str(),
                    document: kind.label(),
                    total_days: result.total_days,
                    current_days: result.current_days,
                    prepaid_days: result.prepaid_days,
                    rate_per_day: amount_cell(result.rate_per_day),
                    current_amount: amount_cell(result.current_amount),
                    prepaid_amount: amount_cell(result.prepaid_amount),
                    schedule_total: amount_cell(check.scheduled_total),
                })?;
            }
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Writes the amortization schedule table
pub fn write_schedules<W: Write>(
    writer: W,
    statement: &AggregateStatement,
) -> Result<(), ExportError> {
    let mut wtr = WriterBuilder::new().from_writer(writer);

    for row in &statement.rows {
        for kind in DocumentKind::ALL {
            if let Some(result) = row.proration(kind) {
                for slice in &result.monthly_breakdown {
                    wtr.serialize(ScheduleCsvRow {
                        vehicle_no: row.vehicle_no.as_str(),
                        document: kind.label(),
                        month: &slice.label,
                        days: slice.days,
                        amount: amount_cell(slice.amount),
                    })?;
                }
            }
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Writes the year-end adjustment journal table
pub fn write_journal<W: Write>(
    writer: W,
    statement: &AggregateStatement,
) -> Result<(), ExportError> {
    let mut wtr = WriterBuilder::new().from_writer(writer);

    for line in &statement.journal {
        let (direction, debit, credit) = match line.posting_type {
            PostingType::Debit => ("Debit", Some(amount_cell(line.amount)), None),
            PostingType::Credit => ("Credit", None, Some(amount_cell(line.amount))),
        };
        wtr.serialize(JournalCsvRow {
            direction,
            account_code: line.account.code,
            account: line.account.name,
            description: &line.description,
            debit,
            credit,
        })?;
    }

    wtr.flush()?;
    Ok(())
}
