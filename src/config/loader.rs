//! Policy loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading the accrual
//! policy from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::AccrualPolicy;

/// Loads and provides access to the accrual policy.
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/leave_policy.yaml").unwrap();
/// assert_eq!(loader.policy().monthly_cap, 11);
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    policy: AccrualPolicy,
}

impl PolicyLoader {
    /// Loads the policy from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the policy file (e.g., "./config/leave_policy.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `PolicyLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    /// - The loaded values are inconsistent (`InvalidPolicy`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let policy: AccrualPolicy =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        policy.validate()?;

        Ok(Self { policy })
    }

    /// Builds a loader carrying the statutory default policy, for callers
    /// that run without a policy file.
    pub fn with_defaults() -> Self {
        Self {
            policy: AccrualPolicy::default(),
        }
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &AccrualPolicy {
        &self.policy
    }
}
