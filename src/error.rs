//! Error types for the Leave Balance Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing leave balances.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Leave Balance Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use leave_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Policy file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Accrual policy file was not found at the specified path.
    #[error("Policy file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Accrual policy file could not be parsed.
    #[error("Failed to parse policy file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Accrual policy values are inconsistent.
    #[error("Invalid accrual policy: {message}")]
    InvalidPolicy {
        /// A description of what made the policy invalid.
        message: String,
    },

    /// The join date lies after the evaluation date.
    #[error("Join date {joined_at} is after evaluation date {evaluation_date}")]
    JoinDateInFuture {
        /// The offending join date.
        joined_at: NaiveDate,
        /// The evaluation date the balance was requested for.
        evaluation_date: NaiveDate,
    },

    /// A manual adjustment that is not a half-day increment.
    #[error("Manual adjustment {value} is not a half-day increment")]
    InvalidAdjustment {
        /// The rejected adjustment value.
        value: Decimal,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
