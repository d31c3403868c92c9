//! Application state for the Leave Balance Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{AccrualPolicy, PolicyLoader};

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded accrual policy.
#[derive(Clone)]
pub struct AppState {
    /// The loaded accrual policy.
    loader: Arc<PolicyLoader>,
}

impl AppState {
    /// Creates a new application state with the given policy loader.
    pub fn new(loader: PolicyLoader) -> Self {
        Self {
            loader: Arc::new(loader),
        }
    }

    /// Returns the accrual policy in force.
    pub fn policy(&self) -> &AccrualPolicy {
        self.loader.policy()
    }
}
