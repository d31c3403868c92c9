//! Accrual policy configuration for the Leave Balance Engine.
//!
//! This module provides the accrual policy values (caps, base pool, bonus
//! cadence) and a loader for reading them from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::PolicyLoader;
//!
//! let loader = PolicyLoader::load("./config/leave_policy.yaml").unwrap();
//! println!("Loaded policy: {}", loader.policy().metadata.name);
//! ```

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{AccrualPolicy, PolicyMetadata};
