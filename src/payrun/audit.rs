//! Pay-run audit events.
//!
//! The orchestrator does not persist run history. It hands every finished
//! [`PayRunSummary`] to a [`PayRunAuditSink`], which is expected to append
//! it to an external store.

use tracing::{info, warn};

use crate::models::{FailureReason, PayRunSummary};

/// Append-only destination for finished pay runs.
pub trait PayRunAuditSink: Send + Sync {
    /// Records one finished run. Must not fail the run.
    fn record(&self, summary: &PayRunSummary);
}

/// Emits each finished run as structured log records.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAuditSink;

impl PayRunAuditSink for TracingAuditSink {
    fn record(&self, summary: &PayRunSummary) {
        info!(
            target: "payroll::audit",
            run_id = %summary.run_id,
            period_start = %summary.pay_period.start_date,
            period_end = %summary.pay_period.end_date,
            paid_date = %summary.paid_date,
            targets = summary.targets.len(),
            succeeded = summary.succeeded_count(),
            failed = summary.failed_count(),
            verdict = ?summary.verdict(),
            "Pay run recorded"
        );

        for outcome in summary.failures() {
            if let Some(FailureReason::CommitFailed { record_id, .. }) = &outcome.failure {
                warn!(
                    target: "payroll::audit",
                    run_id = %summary.run_id,
                    employee_id = %outcome.employee_id,
                    record_id = %record_id,
                    "Salary record left unpaid; manual reconciliation required"
                );
            }
        }
    }
}
