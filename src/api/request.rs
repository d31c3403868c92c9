//! Request types for the Leave Balance Engine API.
//!
//! This module defines the JSON request structures for the `/balance`
//! endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{EmployeeProfile, LeaveKind, LeaveRequest, LeaveStatus, Role};

/// Request body for the `/balance` endpoint.
///
/// Carries the profile-store fields and the leave-request rows needed to
/// derive a balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceRequest {
    /// The employee information.
    pub employee: EmployeeRequest,
    /// The date to evaluate the balance for. Defaults to today when absent.
    #[serde(default)]
    pub evaluation_date: Option<NaiveDate>,
    /// The employee's leave requests, in any status. Only approved requests
    /// count toward usage.
    #[serde(default)]
    pub leave_requests: Vec<LeaveRequestEntry>,
}

/// Employee information in a balance request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
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
    /// The date the employee joined. May be absent; the balance is then
    /// undefined.
    #[serde(default)]
    pub joined_at: Option<NaiveDate>,
    /// The employee's birthday, if recorded.
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
    /// Signed administrative correction, half-day granularity.
    #[serde(default)]
    pub leave_adjustment: Decimal,
}

/// A leave-request row in a balance request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequestEntry {
    /// Unique identifier for the request.
    pub id: String,
    /// The leave category requested.
    pub kind: LeaveKind,
    /// First day of the leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the leave (inclusive).
    pub end_date: NaiveDate,
    /// Free-text reason, if given.
    #[serde(default)]
    pub reason: Option<String>,
    /// Current workflow status.
    pub status: LeaveStatus,
}

impl From<EmployeeRequest> for EmployeeProfile {
    fn from(req: EmployeeRequest) -> Self {
        EmployeeProfile {
            id: req.id,
            display_name: req.display_name,
            role: req.role,
            team: req.team,
            joined_at: req.joined_at,
            birthday: req.birthday,
            leave_adjustment: req.leave_adjustment,
        }
    }
}

impl From<LeaveRequestEntry> for LeaveRequest {
    fn from(req: LeaveRequestEntry) -> Self {
        LeaveRequest {
            id: req.id,
            kind: req.kind,
            start_date: req.start_date,
            end_date: req.end_date,
            reason: req.reason,
            status: req.status,
        }
    }
}
