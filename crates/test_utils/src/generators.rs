//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::{Currency, Money, VehicleNo};
use domain_proration::FiscalYearEnd;
use domain_statement::{DocumentCharge, VehicleEntry};

/// Strategy for generating valid Currency values
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::BTN),
        Just(Currency::INR),
        Just(Currency::USD),
    ]
}

/// Strategy for generating valid positive amounts in minor units
pub fn positive_amount_minor_strategy() -> impl Strategy<Value = i64> {
    1i64..100_000_000i64
}

/// Strategy for generating positive Money values
pub fn positive_money_strategy() -> impl Strategy<Value = Money> {
    (positive_amount_minor_strategy(), currency_strategy())
        .prop_map(|(amount, currency)| Money::from_minor(amount, currency))
}

/// Strategy for generating positive BTN Money values
pub fn btn_money_strategy() -> impl Strategy<Value = Money> {
    positive_amount_minor_strategy().prop_map(|amount| Money::from_minor(amount, Currency::BTN))
}

/// Strategy for generating dates between 2020 and 2030
///
/// Days cap at 28 so every (month, day) pair exists.
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2020i32..2030, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).expect("generated date exists"))
}

/// Strategy for generating ordered date ranges up to four years long
pub fn date_range_strategy() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (date_strategy(), 0i64..1500).prop_map(|(start, span)| (start, start + Duration::days(span)))
}

/// Strategy for generating valid fiscal year ends
///
/// Feb caps at 28 so the pair exists in every calendar year.
pub fn fiscal_year_end_strategy() -> impl Strategy<Value = FiscalYearEnd> {
    (1u32..=12, 1u32..=28)
        .prop_map(|(month, day)| FiscalYearEnd::new(month, day).expect("pair exists every year"))
}

/// Strategy for generating vehicle numbers in the road-authority format
pub fn vehicle_no_strategy() -> impl Strategy<Value = VehicleNo> {
    ("B[GPT]", 1u32..=9, "[A-Z]", 1u32..=9999).prop_map(|(region, zone, series, number)| {
        VehicleNo::new(&format!("{region}-{zone}-{series}{number:04}"))
            .expect("generated plate is non-empty")
    })
}

/// Strategy for generating dated charges with ordered periods
pub fn document_charge_strategy() -> impl Strategy<Value = DocumentCharge> {
    (positive_amount_minor_strategy(), date_range_strategy()).prop_map(|(minor, (from, to))| {
        DocumentCharge::new(Money::from_minor(minor, Currency::BTN), from, to)
            .expect("generated period is ordered")
    })
}

/// Strategy for generating whole vehicle entries
pub fn vehicle_entry_strategy() -> impl Strategy<Value = VehicleEntry> {
    (
        vehicle_no_strategy(),
        proptest::option::of(document_charge_strategy()),
        proptest::option::of(document_charge_strategy()),
        0i64..10_000_000,
    )
        .prop_map(|(vehicle_no, insurance, blue_book, fuel)| {
            let mut entry = VehicleEntry::new(vehicle_no, "generated vehicle", Currency::BTN);
            entry.insurance = insurance;
            entry.blue_book = blue_book;
            entry.fuel_prepaid = Money::from_minor(fuel, Currency::BTN);
            entry
        })
}
