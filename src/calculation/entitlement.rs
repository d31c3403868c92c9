//! Entitlement formulas for the monthly and annual regimes.
//!
//! During the first year of service one unit accrues per completed month,
//! capped below the regime switch. From the first anniversary onward the
//! pool is a fixed base plus a biennial tenure bonus, capped at the policy
//! ceiling.

use crate::config::AccrualPolicy;

/// Entitlement under the monthly regime: one unit per completed month,
/// capped at the policy's monthly cap.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::monthly_entitlement;
/// use leave_engine::config::AccrualPolicy;
///
/// let policy = AccrualPolicy::default();
/// assert_eq!(monthly_entitlement(5, &policy), 5);
/// assert_eq!(monthly_entitlement(11, &policy), 11);
/// ```
pub fn monthly_entitlement(months_worked: u32, policy: &AccrualPolicy) -> u32 {
    months_worked.min(policy.monthly_cap)
}

/// Entitlement under the annual regime.
///
/// The base pool applies from the first anniversary. Starting at the
/// policy's bonus start year, `(years_worked - 1) / 2` bonus units are
/// added: the first bonus unit lands at year three, the next at year five,
/// and so on. The total never exceeds the policy cap.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::annual_entitlement;
/// use leave_engine::config::AccrualPolicy;
///
/// let policy = AccrualPolicy::default();
/// assert_eq!(annual_entitlement(1, &policy), 15);
/// assert_eq!(annual_entitlement(3, &policy), 16);
/// assert_eq!(annual_entitlement(5, &policy), 17);
/// assert_eq!(annual_entitlement(40, &policy), 25);
/// ```
pub fn annual_entitlement(years_worked: u32, policy: &AccrualPolicy) -> u32 {
    let mut total = policy.annual_base;

    if years_worked >= policy.annual_bonus_start_year {
        total += (years_worked - 1) / 2;
    }

    total.min(policy.annual_cap)
}
