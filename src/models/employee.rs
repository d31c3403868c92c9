//! Employee profile model and related types.
//!
//! This module defines the EmployeeProfile struct and Role enum for the
//! fields the balance calculator reads from the profile store.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Access role assigned to an employee in the intranet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Administrator with access to adjustments and approvals.
    Admin,
    /// Team leader.
    Leader,
    /// Regular employee.
    User,
}

/// Profile-store fields the engine reads for an employee.
///
/// `joined_at` is nullable by design: a profile without a join date has no
/// computable entitlement and must be surfaced as an undefined balance, not
/// as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name, if set.
    #[serde(default)]
    pub display_name: Option<String>,
    /// The employee's access role.
    pub role: Role,
    /// Team assignment, if any.
    #[serde(default)]
    pub team: Option<String>,
    /// The date the employee joined. Accrual epoch; absent means no
    /// entitlement is computable.
    #[serde(default)]
    pub joined_at: Option<NaiveDate>,
    /// The employee's birthday, if recorded.
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
    /// Signed administrative correction applied after the accrual formula.
    /// Half-day granularity; defaults to zero.
    #[serde(default)]
    pub leave_adjustment: Decimal,
}

impl EmployeeProfile {
    /// Returns true if the employee is an administrator.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Validates that the stored adjustment is a half-day increment.
    ///
    /// The calculator assumes sanitized input; this check runs at the
    /// boundary that reads the profile row.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_engine::models::{EmployeeProfile, Role};
    /// use rust_decimal::Decimal;
    ///
    /// let profile = EmployeeProfile {
    ///     id: "emp_001".to_string(),
    ///     display_name: None,
    ///     role: Role::User,
    ///     team: None,
    ///     joined_at: None,
    ///     birthday: None,
    ///     leave_adjustment: Decimal::new(-15, 1), // -1.5
    /// };
    /// assert!(profile.validate_adjustment().is_ok());
    /// ```
    pub fn validate_adjustment(&self) -> EngineResult<()> {
        if is_half_step(self.leave_adjustment) {
            Ok(())
        } else {
            Err(EngineError::InvalidAdjustment {
                value: self.leave_adjustment,
            })
        }
    }
}

/// Returns true if the value is a (possibly negative) multiple of 0.5.
fn is_half_step(value: Decimal) -> bool {
    (value * Decimal::TWO).fract().is_zero()
}
