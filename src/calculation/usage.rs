//! Usage tallying functionality.
//!
//! This module sums the consumption weights of approved leave entries,
//! filtered to the categories valid in the active regime.

use rust_decimal::Decimal;

use crate::models::{LeaveKind, Regime};

/// Sums the weights of entries whose category applies to the given regime.
///
/// Entries from the other regime's pool are skipped entirely rather than
/// counted at zero, matching the category membership rules on
/// [`LeaveKind::applies_to`]. The result is a non-negative multiple of 0.5
/// by construction.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::tally_used_leave;
/// use leave_engine::models::{LeaveKind, Regime};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let entries = [LeaveKind::Annual, LeaveKind::HalfDay, LeaveKind::Monthly];
/// let used = tally_used_leave(&entries, Regime::Annual);
/// assert_eq!(used, Decimal::from_str("1.5").unwrap());
/// ```
pub fn tally_used_leave(used_entries: &[LeaveKind], regime: Regime) -> Decimal {
    used_entries
        .iter()
        .filter(|kind| kind.applies_to(regime))
        .map(|kind| kind.weight())
        .sum()
}
