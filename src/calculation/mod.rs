//! Calculation logic for the Leave Balance Engine.
//!
//! This module contains all the calculation functions for deriving a leave
//! balance, including whole-month tenure measurement, entitlement formulas
//! for the monthly and annual regimes, regime-filtered usage tallying, and
//! the balance computation that ties them together.

mod balance;
mod entitlement;
mod tenure;
mod usage;

pub use balance::{can_request_leave, compute_balance};
pub use entitlement::{annual_entitlement, monthly_entitlement};
pub use tenure::{TenureBreakdown, tenure_between, whole_months_between};
pub use usage::tally_used_leave;
