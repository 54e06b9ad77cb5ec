//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money};
use domain_proration::ProrationResult;
use domain_statement::{journal_totals, JournalLine};

/// Asserts that two Money values are approximately equal within a tolerance
///
/// # Arguments
///
/// * `actual` - The actual Money value
/// * `expected` - The expected Money value
/// * `tolerance` - The allowed difference in the amount
///
/// # Panics
///
/// Panics if the currencies don't match or the amounts differ by more than tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );

    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: &Money) {
    assert!(
        money.is_zero(),
        "Expected zero money, got {} {}",
        money.currency().symbol(),
        money.amount()
    );
}

/// Asserts that money values sum to a total
///
/// # Arguments
///
/// * `parts` - The money values that should sum to total
/// * `total` - The expected total
///
/// # Panics
///
/// Panics if the sum doesn't equal the total
pub fn assert_money_sum_equals(parts: &[Money], total: &Money) {
    let sum = parts.iter().fold(Money::zero(total.currency()), |acc, m| {
        acc.checked_add(m).expect("Currency mismatch in sum")
    });

    assert_eq!(
        sum.amount(),
        total.amount(),
        "Sum of parts ({}) doesn't equal total ({})",
        sum.amount(),
        total.amount()
    );
}

/// Asserts that a proration reconciles against its input amount
///
/// Checks all three split invariants at once: the amounts recompose the
/// original to the minor unit, the day counts recompose the inclusive
/// total, and the breakdown day counts cover the prepaid days.
///
/// # Panics
///
/// Panics if any reconciliation fails
pub fn assert_split_reconciles(result: &ProrationResult, amount: &Money) {
    let recomposed = result
        .current_amount
        .checked_add(&result.prepaid_amount)
        .expect("split halves share a currency");
    assert_eq!(
        recomposed.amount(),
        amount.amount(),
        "current ({}) + prepaid ({}) != amount ({})",
        result.current_amount.amount(),
        result.prepaid_amount.amount(),
        amount.amount()
    );

    assert_eq!(
        result.current_days + result.prepaid_days,
        result.total_days,
        "current_days ({}) + prepaid_days ({}) != total_days ({})",
        result.current_days,
        result.prepaid_days,
        result.total_days
    );

    let breakdown_days: i64 = result.monthly_breakdown.iter().map(|s| s.days).sum();
    assert_eq!(
        breakdown_days, result.prepaid_days,
        "breakdown days ({}) != prepaid_days ({})",
        breakdown_days, result.prepaid_days
    );
}

/// Asserts that a journal's debits equal its credits
///
/// # Panics
///
/// Panics if the sides differ or the lines mix currencies
pub fn assert_journal_balanced(lines: &[JournalLine], currency: Currency) {
    let (debits, credits) =
        journal_totals(lines, currency).expect("journal lines share the statement currency");
    assert_eq!(
        debits.amount(),
        credits.amount(),
        "Journal out of balance: debits={}, credits={}",
        debits.amount(),
        credits.amount()
    );
}

/// Asserts that a result is Ok and returns the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Asserts that a result is Err and returns the error
#[macro_export]
macro_rules! assert_err {
    ($result:expr) => {
        match $result {
            Ok(value) => panic!("Expected Err, got Ok: {:?}", value),
            Err(e) => e,
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => panic!("{}: got Ok({:?})", $msg, value),
            Err(e) => e,
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_proration::prorate;

    use crate::fixtures::{MoneyFixtures, TemporalFixtures};

    #[test]
    fn test_assert_money_approx_eq_passes() {
        let m1 = Money::new(dec!(100.001), Currency::BTN);
        let m2 = Money::new(dec!(100.002), Currency::BTN);
        assert_money_approx_eq(&m1, &m2, dec!(0.01));
    }

    #[test]
    #[should_panic(expected = "Currency mismatch")]
    fn test_assert_money_approx_eq_currency_mismatch() {
        let m1 = Money::new(dec!(100.00), Currency::BTN);
        let m2 = Money::new(dec!(100.00), Currency::INR);
        assert_money_approx_eq(&m1, &m2, dec!(0.01));
    }

    #[test]
    fn test_assert_money_sum_equals() {
        let parts = vec![
            Money::new(dec!(33.34), Currency::BTN),
            Money::new(dec!(33.33), Currency::BTN),
            Money::new(dec!(33.33), Currency::BTN),
        ];
        let total = Money::new(dec!(100.00), Currency::BTN);
        assert_money_sum_equals(&parts, &total);
    }

    #[test]
    fn test_assert_split_reconciles_on_crossing_cover() {
        let amount = MoneyFixtures::btn_insurance();
        let (start, end) = TemporalFixtures::crossing_year_end();
        let result = prorate(amount, start, end, TemporalFixtures::december_close()).unwrap();
        assert_split_reconciles(&result, &amount);
    }

    #[test]
    #[should_panic(expected = "Journal out of balance")]
    fn test_assert_journal_balanced_detects_lone_debit() {
        use domain_statement::PostingCategory;

        let lines = vec![JournalLine::debit(
            PostingCategory::Fuel.asset_account(),
            Money::new(dec!(10.00), Currency::BTN),
            "test",
        )];
        assert_journal_balanced(&lines, Currency::BTN);
    }

    #[test]
    fn test_assert_ok_macro_unwraps() {
        let value: Result<i32, String> = Ok(7);
        assert_eq!(assert_ok!(value), 7);
    }

    #[test]
    fn test_assert_err_macro_returns_error() {
        let value: Result<i32, String> = Err("boom".to_string());
        assert_eq!(assert_err!(value), "boom");
    }
}
