//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the fleet
//! prepaid system. These fixtures are designed to be consistent and
//! predictable for unit tests.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money, VehicleNo};
use domain_proration::FiscalYearEnd;
use domain_statement::{DocumentCharge, DocumentKind, VehicleEntry, VehicleRegistry};

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Annual insurance fee that divides into a clean daily rate
    pub fn btn_insurance_round() -> Money {
        Money::new(dec!(3650.00), Currency::BTN)
    }

    /// Annual insurance fee whose daily rate needs rounding
    pub fn btn_insurance() -> Money {
        Money::new(dec!(3660.00), Currency::BTN)
    }

    /// Typical blue book renewal fee
    pub fn btn_blue_book() -> Money {
        Money::new(dec!(500.00), Currency::BTN)
    }

    /// Typical fuel deposit balance
    pub fn btn_fuel() -> Money {
        Money::new(dec!(500.00), Currency::BTN)
    }

    /// Creates a zero amount
    pub fn btn_zero() -> Money {
        Money::zero(Currency::BTN)
    }

    /// Creates an INR amount for currency mismatch tests
    pub fn inr_100() -> Money {
        Money::new(dec!(100.00), Currency::INR)
    }

    /// Smallest representable charge, for rounding edge cases
    pub fn btn_one_chhertum() -> Money {
        Money::new(dec!(0.01), Currency::BTN)
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Calendar year fully inside the fiscal year (no prepaid portion)
    pub fn calendar_year_2025() -> (NaiveDate, NaiveDate) {
        (date(2025, 1, 1), date(2025, 12, 31))
    }

    /// One-year cover crossing a single fiscal year end
    pub fn crossing_year_end() -> (NaiveDate, NaiveDate) {
        (date(2025, 12, 25), date(2026, 12, 24))
    }

    /// Two-year cover crossing two fiscal year ends
    pub fn multi_year() -> (NaiveDate, NaiveDate) {
        (date(2024, 6, 1), date(2026, 5, 31))
    }

    /// Books closing on Dec 31
    pub fn december_close() -> FiscalYearEnd {
        FiscalYearEnd::default()
    }

    /// Books closing mid-year on Jun 30
    pub fn june_close() -> FiscalYearEnd {
        FiscalYearEnd::new(6, 30).expect("Jun 30 exists in every year")
    }
}

/// Fixture for vehicle identifier test data
pub struct VehicleFixtures;

impl VehicleFixtures {
    /// Standard pickup registration
    pub fn hilux_no() -> VehicleNo {
        VehicleNo::new("BG-3-A0394").expect("fixture plate is non-empty")
    }

    /// Second vehicle for multi-row statements
    pub fn bolero_no() -> VehicleNo {
        VehicleNo::new("BP-1-B1122").expect("fixture plate is non-empty")
    }

    /// Third vehicle for ordering tests
    pub fn coaster_no() -> VehicleNo {
        VehicleNo::new("BG-2-C0007").expect("fixture plate is non-empty")
    }

    /// Standard description
    pub fn hilux_description() -> &'static str {
        "Toyota Hilux"
    }
}

/// Fixture for decimal test data
pub struct DecimalFixtures;

impl DecimalFixtures {
    /// Daily rate of the 3660.00 annual fee over 365 days
    pub fn crossing_rate() -> Decimal {
        dec!(10.03)
    }

    /// One chhertum, the tightest assertion tolerance
    pub fn chhertum() -> Decimal {
        dec!(0.01)
    }

    /// Zero for comparison tests
    pub fn zero() -> Decimal {
        Decimal::ZERO
    }
}

/// Builds a three-vehicle registry with a spread of document situations
///
/// The hilux has a crossing insurance cover and a fuel balance, the
/// bolero adds registration documents, and the coaster holds a fully
/// contained cover with nothing prepaid.
pub fn sample_fleet() -> VehicleRegistry {
    let mut registry = VehicleRegistry::new();

    let mut hilux = VehicleEntry::new(
        VehicleFixtures::hilux_no(),
        VehicleFixtures::hilux_description(),
        Currency::BTN,
    );
    let (from, to) = TemporalFixtures::crossing_year_end();
    hilux.set_charge(
        DocumentKind::Insurance,
        charge(MoneyFixtures::btn_insurance(), from, to),
    );
    hilux.fuel_prepaid = MoneyFixtures::btn_fuel();
    registry.upsert(hilux);

    let mut bolero = VehicleEntry::new(VehicleFixtures::bolero_no(), "Bolero pickup", Currency::BTN);
    bolero.set_charge(
        DocumentKind::BlueBook,
        charge(
            MoneyFixtures::btn_blue_book(),
            date(2025, 7, 1),
            date(2026, 6, 30),
        ),
    );
    bolero.set_charge(
        DocumentKind::Fitness,
        charge(
            Money::new(dec!(300.00), Currency::BTN),
            date(2025, 10, 1),
            date(2026, 9, 30),
        ),
    );
    registry.upsert(bolero);

    let mut coaster = VehicleEntry::new(VehicleFixtures::coaster_no(), "Coaster bus", Currency::BTN);
    let (from, to) = TemporalFixtures::calendar_year_2025();
    coaster.set_charge(
        DocumentKind::Insurance,
        charge(MoneyFixtures::btn_insurance_round(), from, to),
    );
    registry.upsert(coaster);

    registry
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture dates exist")
}

fn charge(amount: Money, from: NaiveDate, to: NaiveDate) -> DocumentCharge {
    DocumentCharge::new(amount, from, to).expect("fixture periods are ordered")
}
