//! Core data models for the Leave Balance Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod balance;
mod employee;
mod leave_request;

pub use balance::{BalanceOutcome, BalanceResult, LeaveBalance, REGIME_SWITCH_MONTHS, Regime};
pub use employee::{EmployeeProfile, Role};
pub use leave_request::{HALF_DAY_WEIGHT, LeaveKind, LeaveRequest, LeaveStatus, approved_kinds};
