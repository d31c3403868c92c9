//! Leave Balance Engine for the intranet HR backend
//!
//! This crate computes leave entitlement, usage and remaining balance for an
//! employee from their join date, their approved leave requests, and any
//! administrative adjustment. Accrual follows two regimes: one unit per
//! completed month during the first year of service, then an annual pool
//! with tenure bonuses thereafter.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
