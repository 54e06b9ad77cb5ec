//! End-to-end pipeline tests
//!
//! Feeds a JSON entry file through parsing, registry merging, statement
//! building, and the four table writers, checking the figures at each
//! stage the way the report binary strings them together.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;

use core_kernel::{Currency, Money, VehicleNo};
use domain_statement::{DocumentKind, StatementBuilder, UpsertOutcome, VehicleRegistry};
use interface_export::{
    write_journal, write_schedules, write_splits, write_statement, VehicleEntryInput,
};
use test_utils::assert_ok;
use test_utils::assertions::{assert_journal_balanced, assert_split_reconciles};

/// Entry file with a resubmitted vehicle: the second record adds a
/// fitness test to the hilux without repeating the earlier figures.
const ENTRY_FILE: &str = r#"[
    {
        "vehicle_no": "BG-3-A0394",
        "description": "Toyota Hilux",
        "fuel_prepaid": "500.00",
        "insurance": { "amount": "3660.00", "from": "2025-12-25", "to": "2026-12-24" }
    },
    {
        "vehicle_no": "bg-3-a0394",
        "fitness": { "amount": "250.00", "from": "2025-09-01", "to": "2026-08-31" }
    },
    {
        "vehicle_no": "BP-1-B1122",
        "description": "Bolero pickup",
        "fuel_prepaid": "750.50"
    }
]"#;

fn parse_entries() -> Vec<VehicleEntryInput> {
    serde_json::from_str(ENTRY_FILE).expect("entry file parses")
}

fn build_registry() -> VehicleRegistry {
    let mut registry = VehicleRegistry::new();
    for input in parse_entries() {
        let entry = assert_ok!(input.into_entry(Currency::BTN));
        registry.upsert(entry);
    }
    registry
}

fn records(bytes: &[u8]) -> Vec<Vec<String>> {
    let mut reader = csv::Reader::from_reader(bytes);
    reader
        .records()
        .map(|r| {
            r.expect("row parses")
                .iter()
                .map(|c| c.to_string())
                .collect()
        })
        .collect()
}

// ============================================================================
// Entry file ingestion
// ============================================================================

mod ingestion_tests {
    use super::*;

    #[test]
    fn test_resubmission_merges_into_existing_vehicle() {
        let mut registry = VehicleRegistry::new();
        let mut outcomes = Vec::new();
        for input in parse_entries() {
            let entry = assert_ok!(input.into_entry(Currency::BTN));
            outcomes.push(registry.upsert(entry));
        }

        assert_eq!(
            outcomes,
            vec![
                UpsertOutcome::Inserted,
                UpsertOutcome::Merged,
                UpsertOutcome::Inserted,
            ]
        );
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_merged_entry_keeps_earlier_figures() {
        let registry = build_registry();
        let hilux_no = VehicleNo::new("BG-3-A0394").unwrap();
        let hilux = registry.get(&hilux_no).expect("hilux registered");

        // The resubmission left these blank, so the originals survive.
        assert_eq!(hilux.description, "Toyota Hilux");
        assert_eq!(hilux.fuel_prepaid.amount(), dec!(500.00));

        assert!(hilux.charge(DocumentKind::Insurance).is_some());
        let fitness = hilux.charge(DocumentKind::Fitness).expect("merged in");
        assert_eq!(fitness.amount.amount(), dec!(250.00));
    }
}

// ============================================================================
// Statement figures
// ============================================================================

mod statement_pipeline_tests {
    use super::*;

    #[test]
    fn test_statement_totals_across_merged_fleet() {
        let statement = assert_ok!(StatementBuilder::new(Currency::BTN).build(&build_registry()));

        assert_eq!(statement.totals.insurance.current.amount(), dec!(69.26));
        assert_eq!(statement.totals.insurance.prepaid.amount(), dec!(3590.74));
        assert_eq!(statement.totals.fitness.current.amount(), dec!(84.76));
        assert_eq!(statement.totals.fitness.prepaid.amount(), dec!(165.24));
        assert_eq!(statement.totals.fuel_prepaid.amount(), dec!(1250.50));
        assert_eq!(statement.totals.grand_current.amount(), dec!(154.02));
        assert_eq!(statement.totals.grand_prepaid.amount(), dec!(5006.48));
    }

    #[test]
    fn test_every_split_reconciles_with_its_document() {
        let statement = assert_ok!(StatementBuilder::new(Currency::BTN).build(&build_registry()));
        let hilux_no = VehicleNo::new("BG-3-A0394").unwrap();
        let row = statement.row(&hilux_no).expect("hilux row present");

        let insurance = row.proration(DocumentKind::Insurance).unwrap();
        assert_split_reconciles(insurance, &Money::new(dec!(3660.00), Currency::BTN));

        let fitness = row.proration(DocumentKind::Fitness).unwrap();
        assert_split_reconciles(fitness, &Money::new(dec!(250.00), Currency::BTN));
        assert_eq!(fitness.monthly_breakdown.len(), 8);
        assert_eq!(fitness.monthly_breakdown[0].label, "Jan 2026");
        assert_eq!(fitness.monthly_breakdown[7].label, "Aug 2026");
    }

    #[test]
    fn test_journal_balances_at_grand_prepaid() {
        let statement = assert_ok!(StatementBuilder::new(Currency::BTN).build(&build_registry()));

        assert_journal_balanced(&statement.journal, Currency::BTN);
        assert_eq!(statement.journal.len(), 6);

        let fuel_debit = statement
            .journal
            .iter()
            .find(|line| line.account.code == "1430")
            .expect("fuel asset line present");
        assert_eq!(fuel_debit.amount.amount(), dec!(1250.50));
    }
}

// ============================================================================
// Report files
// ============================================================================

mod report_file_tests {
    use super::*;

    #[test]
    fn test_statement_file_distinguishes_blank_from_zero() {
        let statement = assert_ok!(StatementBuilder::new(Currency::BTN).build(&build_registry()));
        let mut buf = Vec::new();
        assert_ok!(write_statement(&mut buf, &statement));
        let rows = records(&buf);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2][0], "TOTAL");

        // The bolero submitted nothing but fuel, so every document cell
        // stays blank rather than printing 0.00.
        let bolero = &rows[1];
        assert_eq!(bolero[0], "BP-1-B1122");
        for column in 2..=9 {
            assert_eq!(bolero[column], "");
        }
        assert_eq!(bolero[10], "750.50");
    }

    #[test]
    fn test_split_file_lists_only_submitted_documents() {
        let statement = assert_ok!(StatementBuilder::new(Currency::BTN).build(&build_registry()));
        let mut buf = Vec::new();
        assert_ok!(write_splits(&mut buf, &statement));
        let rows = records(&buf);

        // The bolero has no dated documents, so only the hilux shows up.
        assert_eq!(rows.len(), 2);

        let insurance = &rows[0];
        assert_eq!(insurance[1], "Insurance");
        assert_eq!(insurance[2], "365");
        assert_eq!(insurance[3], "7");
        assert_eq!(insurance[4], "358");
        assert_eq!(insurance[5], "10.03");

        let fitness = &rows[1];
        assert_eq!(fitness[1], "Fitness");
        assert_eq!(fitness[2], "365");
        assert_eq!(fitness[3], "122");
        assert_eq!(fitness[4], "243");
        assert_eq!(fitness[5], "0.68");
        assert_eq!(fitness[8], "165.24");
    }

    #[test]
    fn test_schedule_file_carries_every_slice() {
        let statement = assert_ok!(StatementBuilder::new(Currency::BTN).build(&build_registry()));
        let mut buf = Vec::new();
        assert_ok!(write_schedules(&mut buf, &statement));
        let rows = records(&buf);

        // Insurance amortizes over twelve months, fitness over eight.
        assert_eq!(rows.len(), 20);
        assert!(rows.iter().all(|row| row[0] == "BG-3-A0394"));

        let fitness_sum: Decimal = rows
            .iter()
            .filter(|row| row[1] == "Fitness")
            .map(|row| Decimal::from_str(&row[4]).expect("amount cell parses"))
            .sum();
        assert_eq!(fitness_sum, dec!(165.24));
    }

    #[test]
    fn test_journal_file_balances_after_round_trip() {
        let statement = assert_ok!(StatementBuilder::new(Currency::BTN).build(&build_registry()));
        let mut buf = Vec::new();
        assert_ok!(write_journal(&mut buf, &statement));
        let rows = records(&buf);

        let debit_sum: Decimal = rows
            .iter()
            .filter(|row| !row[4].is_empty())
            .map(|row| Decimal::from_str(&row[4]).expect("debit cell parses"))
            .sum();
        let credit_sum: Decimal = rows
            .iter()
            .filter(|row| !row[5].is_empty())
            .map(|row| Decimal::from_str(&row[5]).expect("credit cell parses"))
            .sum();

        assert_eq!(debit_sum, dec!(5006.48));
        assert_eq!(credit_sum, dec!(5006.48));
    }
}
