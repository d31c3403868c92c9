//! Balance computation.
//!
//! This module ties tenure, regime selection, entitlement and usage
//! together into the derived balance. The computation is pure: no clock
//! reads, no I/O, fully determined by its arguments.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::AccrualPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{BalanceOutcome, LeaveBalance, LeaveKind, Regime};

use super::entitlement::{annual_entitlement, monthly_entitlement};
use super::tenure::tenure_between;
use super::usage::tally_used_leave;

/// Computes the leave balance for an employee.
///
/// # Arguments
///
/// * `joined_at` - The employee's join date; `None` yields the undefined
///   sentinel because no entitlement is computable without it
/// * `evaluation_date` - The date the balance is evaluated for. Always
///   explicit; "today" is the caller's decision, not this function's
/// * `used_entries` - Categories of the employee's approved leave
/// * `manual_adjustment` - Signed administrative correction, applied after
///   the clamped subtraction and never clamped itself
/// * `policy` - The accrual policy in force
///
/// # Returns
///
/// [`BalanceOutcome::Undefined`] when `joined_at` is absent, otherwise
/// [`BalanceOutcome::Available`] with the derived balance. Fails with
/// [`EngineError::JoinDateInFuture`] when the join date lies after the
/// evaluation date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use leave_engine::calculation::compute_balance;
/// use leave_engine::config::AccrualPolicy;
/// use leave_engine::models::Regime;
/// use rust_decimal::Decimal;
///
/// let policy = AccrualPolicy::default();
/// let joined = NaiveDate::from_ymd_opt(2024, 1, 1);
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
///
/// let outcome = compute_balance(joined, today, &[], Decimal::ZERO, &policy).unwrap();
/// let balance = outcome.balance().unwrap();
/// assert_eq!(balance.regime, Regime::Monthly);
/// assert_eq!(balance.total_entitlement, 5);
/// ```
pub fn compute_balance(
    joined_at: Option<NaiveDate>,
    evaluation_date: NaiveDate,
    used_entries: &[LeaveKind],
    manual_adjustment: Decimal,
    policy: &AccrualPolicy,
) -> EngineResult<BalanceOutcome> {
    let Some(joined_at) = joined_at else {
        return Ok(BalanceOutcome::Undefined);
    };

    if joined_at > evaluation_date {
        return Err(EngineError::JoinDateInFuture {
            joined_at,
            evaluation_date,
        });
    }

    let tenure = tenure_between(joined_at, evaluation_date);
    let regime = Regime::from_months_worked(tenure.months_worked);

    let total_entitlement = match regime {
        Regime::Monthly => monthly_entitlement(tenure.months_worked, policy),
        Regime::Annual => annual_entitlement(tenure.years_worked, policy),
    };

    let used_amount = tally_used_leave(used_entries, regime);

    // Clamp the subtraction at zero first, then apply the adjustment
    // unclamped. The order is load-bearing: an administrative claw-back
    // must be able to surface a negative remainder.
    let remaining =
        (Decimal::from(total_entitlement) - used_amount).max(Decimal::ZERO) + manual_adjustment;

    Ok(BalanceOutcome::Available(LeaveBalance {
        regime,
        months_worked: tenure.months_worked,
        years_worked: tenure.years_worked,
        total_entitlement,
        used_amount,
        remaining,
        manual_adjustment,
    }))
}

/// Returns true if the employee has leave left to request.
///
/// Employees without a join date cannot request leave; an undefined balance
/// reports false rather than an error.
pub fn can_request_leave(
    joined_at: Option<NaiveDate>,
    evaluation_date: NaiveDate,
    used_entries: &[LeaveKind],
    manual_adjustment: Decimal,
    policy: &AccrualPolicy,
) -> EngineResult<bool> {
    let outcome = compute_balance(
        joined_at,
        evaluation_date,
        used_entries,
        manual_adjustment,
        policy,
    )?;

    Ok(match outcome.balance() {
        Some(balance) => balance.remaining > Decimal::ZERO,
        None => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn policy() -> AccrualPolicy {
        AccrualPolicy::default()
    }

    fn balance(outcome: BalanceOutcome) -> LeaveBalance {
        match outcome {
            BalanceOutcome::Available(balance) => balance,
            BalanceOutcome::Undefined => panic!("Expected an available balance"),
        }
    }

    // ==========================================================================
    // BAL-001: five months of tenure, nothing used
    // ==========================================================================
    #[test]
    fn test_bal_001_monthly_regime_five_months() {
        let outcome = compute_balance(
            Some(date(2024, 1, 1)),
            date(2024, 6, 1),
            &[],
            Decimal::ZERO,
            &policy(),
        )
        .unwrap();

        let balance = balance(outcome);
        assert_eq!(balance.regime, Regime::Monthly);
        assert_eq!(balance.total_entitlement, 5);
        assert_eq!(balance.used_amount, Decimal::ZERO);
        assert_eq!(balance.remaining, dec("5"));
    }

    // ==========================================================================
    // BAL-002: four years of tenure, nothing used
    // ==========================================================================
    #[test]
    fn test_bal_002_annual_regime_four_years() {
        let outcome = compute_balance(
            Some(date(2020, 1, 1)),
            date(2024, 1, 1),
            &[],
            Decimal::ZERO,
            &policy(),
        )
        .unwrap();

        let balance = balance(outcome);
        assert_eq!(balance.regime, Regime::Annual);
        assert_eq!(balance.years_worked, 4);
        assert_eq!(balance.total_entitlement, 16);
        assert_eq!(balance.remaining, dec("16"));
    }

    // ==========================================================================
    // BAL-003: usage and a positive adjustment combine
    // ==========================================================================
    #[test]
    fn test_bal_003_usage_and_positive_adjustment() {
        let entries = [LeaveKind::Annual, LeaveKind::Annual, LeaveKind::HalfDay];
        let outcome = compute_balance(
            Some(date(2020, 1, 1)),
            date(2024, 1, 1),
            &entries,
            dec("1"),
            &policy(),
        )
        .unwrap();

        let balance = balance(outcome);
        assert_eq!(balance.used_amount, dec("2.5"));
        // 16 - 2.5 + 1
        assert_eq!(balance.remaining, dec("14.5"));
        assert_eq!(balance.manual_adjustment, dec("1"));
    }

    // ==========================================================================
    // BAL-004: missing join date yields the undefined sentinel
    // ==========================================================================
    #[test]
    fn test_bal_004_missing_join_date_is_undefined() {
        let entries = [LeaveKind::Annual];
        let outcome = compute_balance(
            None,
            date(2024, 6, 1),
            &entries,
            dec("3"),
            &policy(),
        )
        .unwrap();

        assert!(outcome.is_undefined());
        assert!(outcome.balance().is_none());
    }

    // ==========================================================================
    // BAL-005: join date after the evaluation date fails fast
    // ==========================================================================
    #[test]
    fn test_bal_005_future_join_date_is_rejected() {
        let result = compute_balance(
            Some(date(2025, 1, 1)),
            date(2024, 6, 1),
            &[],
            Decimal::ZERO,
            &policy(),
        );

        match result.unwrap_err() {
            EngineError::JoinDateInFuture {
                joined_at,
                evaluation_date,
            } => {
                assert_eq!(joined_at, date(2025, 1, 1));
                assert_eq!(evaluation_date, date(2024, 6, 1));
            }
            other => panic!("Expected JoinDateInFuture, got {:?}", other),
        }
    }

    // ==========================================================================
    // BAL-006: clamp applies before the adjustment, never after
    // ==========================================================================
    #[test]
    fn test_bal_006_clamp_then_adjust() {
        // 5 months accrued, 8 units consumed: the subtraction clamps to 0.
        let entries = [
            LeaveKind::Monthly,
            LeaveKind::Monthly,
            LeaveKind::Monthly,
            LeaveKind::Monthly,
            LeaveKind::Monthly,
            LeaveKind::Monthly,
            LeaveKind::Monthly,
            LeaveKind::Monthly,
        ];

        let outcome = compute_balance(
            Some(date(2024, 1, 1)),
            date(2024, 6, 1),
            &entries,
            Decimal::ZERO,
            &policy(),
        )
        .unwrap();
        assert_eq!(balance(outcome).remaining, Decimal::ZERO);

        // The same with a claw-back: the adjustment lands after the clamp
        // and drives the remainder negative.
        let outcome = compute_balance(
            Some(date(2024, 1, 1)),
            date(2024, 6, 1),
            &entries,
            dec("-2"),
            &policy(),
        )
        .unwrap();
        assert_eq!(balance(outcome).remaining, dec("-2"));
    }

    // ==========================================================================
    // BAL-007: regime boundary at exactly twelve months
    // ==========================================================================
    #[test]
    fn test_bal_007_regime_boundary() {
        let joined = date(2023, 3, 15);

        let before = compute_balance(
            Some(joined),
            date(2024, 3, 14),
            &[],
            Decimal::ZERO,
            &policy(),
        )
        .unwrap();
        assert_eq!(balance(before).regime, Regime::Monthly);

        let after = compute_balance(
            Some(joined),
            date(2024, 3, 15),
            &[],
            Decimal::ZERO,
            &policy(),
        )
        .unwrap();
        let after = balance(after);
        assert_eq!(after.regime, Regime::Annual);
        assert_eq!(after.total_entitlement, 15);
    }

    // ==========================================================================
    // BAL-008: regime determines which entries count
    // ==========================================================================
    #[test]
    fn test_bal_008_regime_filters_entries() {
        let entries = [LeaveKind::Monthly, LeaveKind::Annual, LeaveKind::HalfDay];

        let monthly = balance(
            compute_balance(
                Some(date(2024, 1, 1)),
                date(2024, 7, 1),
                &entries,
                Decimal::ZERO,
                &policy(),
            )
            .unwrap(),
        );
        assert_eq!(monthly.used_amount, dec("1.5"));

        let annual = balance(
            compute_balance(
                Some(date(2020, 1, 1)),
                date(2024, 7, 1),
                &entries,
                Decimal::ZERO,
                &policy(),
            )
            .unwrap(),
        );
        assert_eq!(annual.used_amount, dec("1.5"));
    }

    #[test]
    fn test_zero_tenure_has_zero_entitlement() {
        let joined = date(2024, 6, 1);
        let outcome =
            compute_balance(Some(joined), joined, &[], Decimal::ZERO, &policy()).unwrap();

        let balance = balance(outcome);
        assert_eq!(balance.regime, Regime::Monthly);
        assert_eq!(balance.total_entitlement, 0);
        assert_eq!(balance.remaining, Decimal::ZERO);
    }

    #[test]
    fn test_can_request_leave_with_remaining() {
        let ok = can_request_leave(
            Some(date(2024, 1, 1)),
            date(2024, 6, 1),
            &[],
            Decimal::ZERO,
            &policy(),
        )
        .unwrap();
        assert!(ok);
    }

    #[test]
    fn test_can_request_leave_when_exhausted() {
        let entries = [
            LeaveKind::Monthly,
            LeaveKind::Monthly,
            LeaveKind::Monthly,
            LeaveKind::Monthly,
            LeaveKind::Monthly,
        ];
        let ok = can_request_leave(
            Some(date(2024, 1, 1)),
            date(2024, 6, 1),
            &entries,
            Decimal::ZERO,
            &policy(),
        )
        .unwrap();
        assert!(!ok);
    }

    #[test]
    fn test_can_request_leave_without_join_date() {
        let ok = can_request_leave(None, date(2024, 6, 1), &[], Decimal::ZERO, &policy()).unwrap();
        assert!(!ok);
    }
}
