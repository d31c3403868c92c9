//! Leave balance models and related types.
//!
//! This module defines the accrual regime, the derived balance value object
//! and the result envelope returned by the balance endpoint.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of whole months of tenure at which the accrual regime switches
/// from monthly to annual.
pub const REGIME_SWITCH_MONTHS: u32 = 12;

/// The active accrual rule set for an employee.
///
/// The regime is recomputed on every query from the join date and the
/// evaluation date; it is never stored, so an employee transitions from
/// monthly to annual accrual the moment their tenure crosses twelve months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    /// First year of service: one unit accrues per completed month.
    Monthly,
    /// Twelve months of tenure or more: a yearly pool with tenure bonuses.
    Annual,
}

impl Regime {
    /// Selects the regime for a given number of whole months worked.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_engine::models::Regime;
    ///
    /// assert_eq!(Regime::from_months_worked(11), Regime::Monthly);
    /// assert_eq!(Regime::from_months_worked(12), Regime::Annual);
    /// ```
    pub fn from_months_worked(months_worked: u32) -> Self {
        if months_worked < REGIME_SWITCH_MONTHS {
            Regime::Monthly
        } else {
            Regime::Annual
        }
    }
}

/// A freshly computed leave balance.
///
/// Immutable value object assembled at query time; nothing here is cached
/// or persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveBalance {
    /// The regime the balance was computed under.
    pub regime: Regime,
    /// Whole calendar months elapsed since the join date.
    pub months_worked: u32,
    /// Whole years elapsed since the join date (`months_worked / 12`).
    pub years_worked: u32,
    /// The regime's pool size. Always a non-negative integer.
    pub total_entitlement: u32,
    /// Sum of consumed weights valid in the regime. Non-negative multiple of 0.5.
    pub used_amount: Decimal,
    /// `max(0, total_entitlement - used_amount) + manual_adjustment`.
    ///
    /// The clamp applies before the adjustment, so an administrative
    /// claw-back can push this negative. Negative remainders are surfaced,
    /// not hidden.
    pub remaining: Decimal,
    /// The administrative adjustment that was applied, for display.
    pub manual_adjustment: Decimal,
}

/// The outcome of a balance query.
///
/// An employee without a recorded join date has no computable entitlement;
/// callers must branch on [`BalanceOutcome::Undefined`] before reading any
/// numeric field, typically by prompting for the missing join date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "balance", rename_all = "snake_case")]
pub enum BalanceOutcome {
    /// No join date on record; no numeric balance exists.
    Undefined,
    /// A computed balance.
    Available(LeaveBalance),
}

impl BalanceOutcome {
    /// Returns true if no balance could be computed.
    pub fn is_undefined(&self) -> bool {
        matches!(self, BalanceOutcome::Undefined)
    }

    /// Returns the balance if one was computed.
    pub fn balance(&self) -> Option<&LeaveBalance> {
        match self {
            BalanceOutcome::Undefined => None,
            BalanceOutcome::Available(balance) => Some(balance),
        }
    }
}

/// Response envelope for a balance query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceResult {
    /// Unique identifier for this computation.
    pub calculation_id: Uuid,
    /// When the computation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// The employee the balance belongs to.
    pub employee_id: String,
    /// The date the balance was evaluated for.
    pub evaluation_date: NaiveDate,
    /// The computed outcome.
    pub outcome: BalanceOutcome,
}
