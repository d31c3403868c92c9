//! Leave request model and related types.
//!
//! This module defines the leave categories, request statuses and the
//! request record supplied by the leave-request store. Consumption weights
//! are derived from the category, so a malformed weight (negative, or not a
//! half-day step) cannot be represented at all.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::balance::Regime;

/// Weight a half-day entry consumes from the entitlement pool.
pub const HALF_DAY_WEIGHT: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Category of a leave request, determining its consumption weight and the
/// regime it draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveKind {
    /// Full-day leave against the annual pool. Consumes 1.0 unit.
    Annual,
    /// Half-day leave. Consumes 0.5 unit.
    HalfDay,
    /// Monthly accrued leave, only meaningful during the first year of
    /// service. Consumes 1.0 unit from the monthly pool.
    Monthly,
}

impl LeaveKind {
    /// The weight this category consumes from the active pool.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_engine::models::{HALF_DAY_WEIGHT, LeaveKind};
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(LeaveKind::Annual.weight(), Decimal::ONE);
    /// assert_eq!(LeaveKind::HalfDay.weight(), HALF_DAY_WEIGHT);
    /// ```
    pub fn weight(self) -> Decimal {
        match self {
            LeaveKind::Annual | LeaveKind::Monthly => Decimal::ONE,
            LeaveKind::HalfDay => HALF_DAY_WEIGHT,
        }
    }

    /// Whether this category draws from the given regime's pool.
    ///
    /// Annual entries never count against the monthly pool, and monthly
    /// entries never count against the annual pool.
    pub fn applies_to(self, regime: Regime) -> bool {
        match regime {
            // Whether a half-day draws from the monthly pool is disputed
            // between two revisions of the listing logic. We take the
            // permissive reading (0.5 against the pool) pending
            // confirmation from HR; drop HalfDay from this arm for the
            // exclusive reading.
            Regime::Monthly => matches!(self, LeaveKind::Monthly | LeaveKind::HalfDay),
            Regime::Annual => matches!(self, LeaveKind::Annual | LeaveKind::HalfDay),
        }
    }
}

/// Workflow status of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Awaiting an approval decision.
    Pending,
    /// Approved; counts toward usage.
    Approved,
    /// Rejected; does not count toward usage.
    Rejected,
}

/// A leave request as supplied by the leave-request store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Unique identifier for the request.
    pub id: String,
    /// The leave category requested.
    pub kind: LeaveKind,
    /// First day of the leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the leave (inclusive).
    pub end_date: NaiveDate,
    /// Free-text reason, if the employee gave one.
    #[serde(default)]
    pub reason: Option<String>,
    /// Current workflow status.
    pub status: LeaveStatus,
}

impl LeaveRequest {
    /// Returns true if the request has been approved.
    pub fn is_approved(&self) -> bool {
        self.status == LeaveStatus::Approved
    }
}

/// Projects the approved subset of requests into the consumed categories.
///
/// Only approved requests count toward usage; pending and rejected requests
/// are ignored.
pub fn approved_kinds(requests: &[LeaveRequest]) -> Vec<LeaveKind> {
    requests
        .iter()
        .filter(|request| request.is_approved())
        .map(|request| request.kind)
        .collect()
}
