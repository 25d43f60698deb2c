//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition the calculators and the pay-run orchestrator
//! can raise.

use chrono::NaiveDate;
use thiserror::Error;

/// The phase of a pay run in which a remote call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemotePhase {
    /// Creating the unpaid salary record.
    Create,
    /// Marking the created record as paid.
    Commit,
}

impl std::fmt::Display for RemotePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemotePhase::Create => write!(f, "create"),
            RemotePhase::Commit => write!(f, "commit"),
        }
    }
}

/// The main error type for the payroll engine.
///
/// Input and range errors propagate to the caller immediately. Remote and
/// missing-record errors are raised per employee inside a pay run and are
/// folded into that employee's outcome rather than returned.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::InvalidInput {
///     field: "basic_salary".to_string(),
///     message: "must not be negative".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid input 'basic_salary': must not be negative");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// A required input was missing or malformed.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The offending input field.
        field: String,
        /// A description of what made the input invalid.
        message: String,
    },

    /// The termination date precedes the hire date.
    #[error("Invalid range: termination date {termination_date} precedes hire date {hire_date}")]
    InvalidRange {
        /// The hire date supplied.
        hire_date: NaiveDate,
        /// The termination date supplied.
        termination_date: NaiveDate,
    },

    /// The salary-record collaborator reported a failure.
    #[error("Remote {phase} operation failed: {message}")]
    RemoteOperation {
        /// The phase in which the failure occurred.
        phase: RemotePhase,
        /// The collaborator's (possibly translated) message.
        message: String,
    },

    /// The create phase succeeded but returned no usable record identifier.
    #[error("Salary record for employee '{employee_id}' was created without a record id")]
    MissingRecordId {
        /// The employee whose record is missing an identifier.
        employee_id: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl PayrollError {
    /// Shorthand for an [`PayrollError::InvalidInput`] error.
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        PayrollError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
