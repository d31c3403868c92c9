//! Accrual policy type definitions.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::REGIME_SWITCH_MONTHS;

/// Identifying metadata for a policy document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyMetadata {
    /// Human-readable policy name.
    pub name: String,
    /// Policy revision, typically an effective date.
    pub version: String,
}

/// The accrual policy in force.
///
/// Defaults carry the statutory values: one unit per completed month capped
/// at 11 during the first year, then a 15-unit annual pool with a biennial
/// bonus from year three, capped at 25.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualPolicy {
    /// Identifying metadata for this policy document.
    pub metadata: PolicyMetadata,
    /// Ceiling on first-year monthly accrual.
    pub monthly_cap: u32,
    /// Annual pool size from the first anniversary.
    pub annual_base: u32,
    /// Tenure year at which the biennial bonus starts.
    pub annual_bonus_start_year: u32,
    /// Hard ceiling on the annual pool.
    pub annual_cap: u32,
}

impl Default for AccrualPolicy {
    fn default() -> Self {
        Self {
            metadata: PolicyMetadata {
                name: "Standard accrual policy".to_string(),
                version: "2025-01-01".to_string(),
            },
            monthly_cap: 11,
            annual_base: 15,
            annual_bonus_start_year: 3,
            annual_cap: 25,
        }
    }
}

impl AccrualPolicy {
    /// Checks the policy values for internal consistency.
    ///
    /// # Returns
    ///
    /// `Ok(())` for a usable policy, or `InvalidPolicy` when:
    /// - the monthly cap reaches the twelve-month regime switch
    /// - the annual base exceeds the annual cap
    /// - the bonus start year is zero
    pub fn validate(&self) -> EngineResult<()> {
        if self.monthly_cap >= REGIME_SWITCH_MONTHS {
            return Err(EngineError::InvalidPolicy {
                message: format!(
                    "monthly_cap {} must stay below the {}-month regime switch",
                    self.monthly_cap, REGIME_SWITCH_MONTHS
                ),
            });
        }

        if self.annual_base > self.annual_cap {
            return Err(EngineError::InvalidPolicy {
                message: format!(
                    "annual_base {} exceeds annual_cap {}",
                    self.annual_base, self.annual_cap
                ),
            });
        }

        if self.annual_bonus_start_year == 0 {
            return Err(EngineError::InvalidPolicy {
                message: "annual_bonus_start_year must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}
