//! The remote salary-record collaborator.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::PayPeriod;

/// A failure reported by the salary-record collaborator.
///
/// Network errors, timeouts, validation errors and authentication failures
/// all arrive as a `RemoteError`; the orchestrator treats them alike.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RemoteError {
    /// The collaborator's message, verbatim.
    pub message: String,
}

impl RemoteError {
    /// Creates a remote error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The response to a successful create call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreatedRecord {
    /// Identifier of the new unpaid record. Some backends omit it.
    pub record_id: Option<String>,
}

impl CreatedRecord {
    /// Returns the record id if present and non-blank.
    pub fn usable_id(&self) -> Option<&str> {
        self.record_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

/// Persists salary records on behalf of a pay run.
///
/// The collaborator computes gross and net figures server-side from the
/// employee's configured salary; callers only send identifiers and dates.
/// Implementations attach whatever credential they hold to each call.
///
/// ## Thread Safety
///
/// Implementations must be `Send + Sync` so a single client can serve
/// runs started from async request handlers.
#[async_trait]
pub trait SalaryRecordClient: Send + Sync {
    /// Checks that a credential is available before a run starts.
    ///
    /// An error here aborts the whole run before any employee is processed.
    async fn ensure_authorized(&self) -> Result<(), RemoteError> {
        Ok(())
    }

    /// Creates an unpaid salary record for one employee and period.
    async fn create_salary_record(
        &self,
        employee_id: &str,
        pay_period: &PayPeriod,
    ) -> Result<CreatedRecord, RemoteError>;

    /// Marks a previously created record as paid on `paid_date`.
    async fn mark_salary_record_paid(
        &self,
        record_id: &str,
        paid_date: NaiveDate,
    ) -> Result<(), RemoteError>;
}
