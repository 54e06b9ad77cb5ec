//! The proration engine
//!
//! Splits a charge covering a fixed date range into the portion expensed
//! in the current fiscal year and the portion deferred as prepaid, and
//! amortizes the deferred portion month by month.
//!
//! Every day count is inclusive of both endpoints, the per-day rate is
//! rounded exactly once, and the current portion is always derived as the
//! complement of the prepaid portion so the two reconstruct the original
//! amount to the chhertum.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{last_day_of_month, month_label, Money};

use crate::error::ProrationError;
use crate::fiscal::FiscalYearEnd;

/// One month of the amortization schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySlice {
    /// Schedule label, e.g. "Jan 2026"
    pub label: String,
    /// Days of coverage falling in this month
    pub days: i64,
    /// Amount amortized into this month
    pub amount: Money,
}

/// The outcome of prorating one charge
///
/// All figures are derived from the inputs alone; two calls with the same
/// inputs produce identical results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProrationResult {
    /// Inclusive day count of the whole coverage period
    pub total_days: i64,
    /// Charge per covered day, rounded once to currency precision
    pub rate_per_day: Money,
    /// Days falling in the fiscal year the coverage starts in
    pub current_days: i64,
    /// Days falling after the fiscal year boundary
    pub prepaid_days: i64,
    /// Portion expensed in the current fiscal year
    pub current_amount: Money,
    /// Portion deferred to later months
    pub prepaid_amount: Money,
    /// Month-by-month amortization of the prepaid portion, in
    /// chronological order; empty when nothing is deferred
    pub monthly_breakdown: Vec<MonthlySlice>,
}

impl ProrationResult {
    /// Compares the summed schedule against the lump-sum prepaid amount
    ///
    /// Per-month rounding can leave the schedule a few chhertum off the
    /// lump sum. The drift is reported, never reconciled away.
    pub fn check_breakdown(&self) -> BreakdownCheck {
        let currency = self.prepaid_amount.currency();
        let scheduled_total = self
            .monthly_breakdown
            .iter()
            .fold(Money::zero(currency), |acc, slice| acc + slice.amount);
        let drift = (scheduled_total - self.prepaid_amount).abs();

        BreakdownCheck {
            scheduled_total,
            prepaid_amount: self.prepaid_amount,
            drift,
            slice_count: self.monthly_breakdown.len(),
        }
    }
}

/// Reported comparison between the monthly schedule and the prepaid lump sum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownCheck {
    /// Sum of the monthly slice amounts
    pub scheduled_total: Money,
    /// The lump-sum prepaid amount the schedule amortizes
    pub prepaid_amount: Money,
    /// Absolute difference between the two
    pub drift: Money,
    /// Number of slices in the schedule
    pub slice_count: usize,
}

impl BreakdownCheck {
    /// True when the drift stays within half a minor unit per slice
    pub fn within_rounding_bound(&self) -> bool {
        let bound = dec!(0.005) * Decimal::from(self.slice_count as u64);
        self.drift.amount() <= bound
    }
}

/// Prorates a charge across the fiscal year boundary
///
/// # Arguments
///
/// * `amount` - The full charge for the coverage period
/// * `start_date` - First covered day (inclusive)
/// * `end_date` - Last covered day (inclusive)
/// * `fiscal_year_end` - The boundary the books close on
///
/// # Returns
///
/// The split between current-year and prepaid portions together with the
/// monthly amortization schedule, or `InvalidRange` when `end_date`
/// precedes `start_date`. A zero amount is legal and yields zero amounts
/// with the day split still computed.
pub fn prorate(
    amount: Money,
    start_date: NaiveDate,
    end_date: NaiveDate,
    fiscal_year_end: FiscalYearEnd,
) -> Result<ProrationResult, ProrationError> {
    if end_date < start_date {
        return Err(ProrationError::InvalidRange {
            start: start_date,
            end: end_date,
        });
    }

    let currency = amount.currency();
    let total_days = inclusive_days(start_date, end_date);

    // Rounded once; every figure below reuses this rate. The guard above
    // makes the divisor at least one day.
    let per_day = (amount.amount() / Decimal::from(total_days)).round_dp(currency.decimal_places());
    let rate_per_day = Money::new(per_day, currency);

    let boundary = fiscal_year_end.boundary_on_or_after(start_date);

    if end_date <= boundary {
        // Coverage closes within the current fiscal year; nothing is deferred.
        return Ok(ProrationResult {
            total_days,
            rate_per_day,
            current_days: total_days,
            prepaid_days: 0,
            current_amount: amount.round_to_currency(),
            prepaid_amount: Money::zero(currency),
            monthly_breakdown: Vec::new(),
        });
    }

    let current_days = inclusive_days(start_date, boundary);
    // Derived by subtraction so the day invariant holds however many
    // year boundaries the coverage crosses.
    let prepaid_days = total_days - current_days;

    let prepaid_amount = rate_per_day
        .multiply(Decimal::from(prepaid_days))
        .round_to_currency();
    let current_amount = (amount - prepaid_amount).round_to_currency();

    let monthly_breakdown = amortize(rate_per_day, boundary, end_date);

    Ok(ProrationResult {
        total_days,
        rate_per_day,
        current_days,
        prepaid_days,
        current_amount,
        prepaid_amount,
        monthly_breakdown,
    })
}

/// Walks the prepaid period month by month, from the day after the fiscal
/// year boundary through the end of coverage
fn amortize(rate_per_day: Money, boundary: NaiveDate, end_date: NaiveDate) -> Vec<MonthlySlice> {
    let mut schedule = Vec::new();
    let mut cursor = boundary.succ_opt();

    while let Some(day) = cursor {
        if day > end_date {
            break;
        }
        let slice_end = last_day_of_month(day).min(end_date);
        let days = inclusive_days(day, slice_end);

        schedule.push(MonthlySlice {
            label: month_label(day),
            days,
            amount: rate_per_day.multiply(Decimal::from(days)).round_to_currency(),
        });

        cursor = slice_end.succ_opt();
    }

    schedule
}

fn inclusive_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn btn(amount: Decimal) -> Money {
        Money::new(amount, Currency::BTN)
    }

    #[test]
    fn test_full_year_has_no_prepaid() {
        let result = prorate(
            btn(dec!(3650.00)),
            date(2025, 1, 1),
            date(2025, 12, 31),
            FiscalYearEnd::default(),
        )
        .unwrap();

        assert_eq!(result.total_days, 365);
        assert_eq!(result.rate_per_day.amount(), dec!(10.00));
        assert_eq!(result.current_days, 365);
        assert_eq!(result.prepaid_days, 0);
        assert_eq!(result.current_amount.amount(), dec!(3650.00));
        assert!(result.prepaid_amount.is_zero());
        assert!(result.monthly_breakdown.is_empty());
    }

    #[test]
    fn test_cross_year_policy_splits_at_dec_31() {
        let result = prorate(
            btn(dec!(3660.00)),
            date(2025, 12, 25),
            date(2026, 12, 24),
            FiscalYearEnd::default(),
        )
        .unwrap();

        assert_eq!(result.total_days, 365);
        assert_eq!(result.rate_per_day.amount(), dec!(10.03));
        assert_eq!(result.current_days, 7);
        assert_eq!(result.prepaid_days, 358);
        assert_eq!(result.prepaid_amount.amount(), dec!(3590.74));
        assert_eq!(result.current_amount.amount(), dec!(69.26));
    }

    #[test]
    fn test_schedule_labels_and_partial_final_month() {
        let result = prorate(
            btn(dec!(3660.00)),
            date(2025, 12, 25),
            date(2026, 12, 24),
            FiscalYearEnd::default(),
        )
        .unwrap();

        let schedule = &result.monthly_breakdown;
        assert_eq!(schedule.len(), 12);

        assert_eq!(schedule[0].label, "Jan 2026");
        assert_eq!(schedule[0].days, 31);
        assert_eq!(schedule[0].amount.amount(), dec!(310.93));

        let last = &schedule[11];
        assert_eq!(last.label, "Dec 2026");
        assert_eq!(last.days, 24);
        assert_eq!(last.amount.amount(), dec!(240.72));

        let day_sum: i64 = schedule.iter().map(|s| s.days).sum();
        assert_eq!(day_sum, result.prepaid_days);
    }

    #[test]
    fn test_multi_year_span_amortizes_through_every_month() {
        let result = prorate(
            btn(dec!(1000.00)),
            date(2024, 6, 1),
            date(2026, 5, 31),
            FiscalYearEnd::default(),
        )
        .unwrap();

        assert_eq!(result.total_days, 730);
        assert_eq!(result.current_days, 214);
        assert_eq!(result.prepaid_days, 516);

        // Jan 2025 through May 2026, one slice per month.
        assert_eq!(result.monthly_breakdown.len(), 17);
        assert_eq!(result.monthly_breakdown[0].label, "Jan 2025");
        assert_eq!(result.monthly_breakdown[16].label, "May 2026");

        let day_sum: i64 = result.monthly_breakdown.iter().map(|s| s.days).sum();
        assert_eq!(day_sum, 516);
    }

    #[test]
    fn test_zero_amount_still_computes_day_split() {
        let result = prorate(
            btn(dec!(0)),
            date(2025, 12, 25),
            date(2026, 12, 24),
            FiscalYearEnd::default(),
        )
        .unwrap();

        assert_eq!(result.total_days, 365);
        assert_eq!(result.current_days, 7);
        assert_eq!(result.prepaid_days, 358);
        assert!(result.current_amount.is_zero());
        assert!(result.prepaid_amount.is_zero());
        assert_eq!(result.monthly_breakdown.len(), 12);
        assert!(result.monthly_breakdown.iter().all(|s| s.amount.is_zero()));
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        let result = prorate(
            btn(dec!(100.00)),
            date(2026, 1, 1),
            date(2025, 12, 31),
            FiscalYearEnd::default(),
        );

        assert_eq!(
            result,
            Err(ProrationError::InvalidRange {
                start: date(2026, 1, 1),
                end: date(2025, 12, 31),
            })
        );
    }

    #[test]
    fn test_single_day_period() {
        let result = prorate(
            btn(dec!(50.00)),
            date(2025, 6, 15),
            date(2025, 6, 15),
            FiscalYearEnd::default(),
        )
        .unwrap();

        assert_eq!(result.total_days, 1);
        assert_eq!(result.rate_per_day.amount(), dec!(50.00));
        assert_eq!(result.current_amount.amount(), dec!(50.00));
        assert_eq!(result.prepaid_days, 0);
    }

    #[test]
    fn test_tiny_amount_keeps_sum_invariant() {
        // 0.01 over 3 days rounds the rate to zero, yet the two parts
        // still reconstruct the charge.
        let result = prorate(
            btn(dec!(0.01)),
            date(2025, 12, 30),
            date(2026, 1, 1),
            FiscalYearEnd::default(),
        )
        .unwrap();

        assert_eq!(result.total_days, 3);
        assert_eq!(result.rate_per_day.amount(), dec!(0.00));
        let sum = result.current_amount + result.prepaid_amount;
        assert_eq!(sum.amount(), dec!(0.01));
    }

    #[test]
    fn test_end_on_boundary_defers_nothing() {
        let result = prorate(
            btn(dec!(1200.00)),
            date(2025, 7, 1),
            date(2025, 12, 31),
            FiscalYearEnd::default(),
        )
        .unwrap();

        assert_eq!(result.prepaid_days, 0);
        assert!(result.prepaid_amount.is_zero());
        assert!(result.monthly_breakdown.is_empty());
    }

    #[test]
    fn test_mid_month_fiscal_year_end_starts_with_partial_slice() {
        let fye = FiscalYearEnd::new(6, 15).unwrap();
        let result = prorate(
            btn(dec!(365.00)),
            date(2025, 6, 1),
            date(2026, 5, 31),
            fye,
        )
        .unwrap();

        assert_eq!(result.current_days, 15);
        let first = &result.monthly_breakdown[0];
        assert_eq!(first.label, "Jun 2025");
        assert_eq!(first.days, 15);
    }

    #[test]
    fn test_breakdown_check_reports_drift() {
        let result = prorate(
            btn(dec!(3660.00)),
            date(2025, 12, 25),
            date(2026, 12, 24),
            FiscalYearEnd::default(),
        )
        .unwrap();

        let check = result.check_breakdown();
        assert_eq!(check.slice_count, 12);
        assert_eq!(check.prepaid_amount, result.prepaid_amount);
        // A currency-precision rate times whole day counts is exact, so
        // the schedule lands on the lump sum.
        assert!(check.drift.is_zero());
        assert!(check.within_rounding_bound());
    }

    #[test]
    fn test_idempotence() {
        let a = prorate(
            btn(dec!(777.77)),
            date(2025, 3, 14),
            date(2026, 3, 13),
            FiscalYearEnd::default(),
        )
        .unwrap();
        let b = prorate(
            btn(dec!(777.77)),
            date(2025, 3, 14),
            date(2026, 3, 13),
            FiscalYearEnd::default(),
        )
        .unwrap();

        assert_eq!(a, b);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use core_kernel::Currency;
    use proptest::prelude::*;

    fn arb_date() -> impl Strategy<Value = NaiveDate> {
        (2020i32..2030, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| {
            NaiveDate::from_ymd_opt(y, m, d).unwrap()
        })
    }

    proptest! {
        #[test]
        fn split_always_reconstructs_amount(
            minor in 0i64..100_000_000i64,
            start in arb_date(),
            span in 0i64..1500i64
        ) {
            let amount = Money::from_minor(minor, Currency::BTN);
            let end = start + chrono::Duration::days(span);

            let result = prorate(amount, start, end, FiscalYearEnd::default()).unwrap();

            let sum = result.current_amount + result.prepaid_amount;
            prop_assert_eq!(sum.amount(), amount.amount());
        }

        #[test]
        fn day_counts_always_reconcile(
            start in arb_date(),
            span in 0i64..1500i64
        ) {
            let amount = Money::from_minor(36_500, Currency::BTN);
            let end = start + chrono::Duration::days(span);

            let result = prorate(amount, start, end, FiscalYearEnd::default()).unwrap();

            prop_assert_eq!(result.current_days + result.prepaid_days, result.total_days);
            let slice_days: i64 = result.monthly_breakdown.iter().map(|s| s.days).sum();
            prop_assert_eq!(slice_days, result.prepaid_days);
        }

        #[test]
        fn schedule_drift_stays_within_rounding_bound(
            minor in 0i64..100_000_000i64,
            start in arb_date(),
            span in 0i64..1500i64
        ) {
            let amount = Money::from_minor(minor, Currency::BTN);
            let end = start + chrono::Duration::days(span);

            let result = prorate(amount, start, end, FiscalYearEnd::default()).unwrap();

            prop_assert!(result.check_breakdown().within_rounding_bound());
        }
    }
}
