//! Pay-run orchestration.
//!
//! A pay run walks the selected employees one at a time. For each one it
//! asks the collaborator to create an unpaid salary record, then to mark
//! that record paid. The two writes are not atomic and nothing is rolled
//! back: every employee ends with exactly one recorded outcome, and records
//! that were created but not paid are reported as such.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{PayrollError, PayrollResult, RemotePhase};
use crate::models::{FailureReason, PayPeriod, PayRunOutcome, PayRunSummary, PayRunTarget};

use super::audit::{PayRunAuditSink, TracingAuditSink};
use super::client::SalaryRecordClient;
use super::messages::ErrorMessageMap;

/// Drives pay runs against a [`SalaryRecordClient`].
pub struct PayRunOrchestrator<C> {
    client: C,
    messages: ErrorMessageMap,
    audit: Arc<dyn PayRunAuditSink>,
}

impl<C: SalaryRecordClient> PayRunOrchestrator<C> {
    /// Creates an orchestrator with the default message map and a
    /// [`TracingAuditSink`].
    pub fn new(client: C) -> Self {
        Self {
            client,
            messages: ErrorMessageMap::default(),
            audit: Arc::new(TracingAuditSink),
        }
    }

    /// Replaces the known-error message map.
    pub fn with_messages(mut self, messages: ErrorMessageMap) -> Self {
        self.messages = messages;
        self
    }

    /// Replaces the audit sink.
    pub fn with_audit_sink(mut self, audit: Arc<dyn PayRunAuditSink>) -> Self {
        self.audit = audit;
        self
    }

    /// Returns the underlying client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Creates and pays salary records for every target, in order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` without contacting the collaborator for any
    /// employee if `targets` is empty, `paid_date` is missing, the period is
    /// inverted, a target is malformed, or no credential is available.
    /// Per-employee failures never surface here; they are recorded in the
    /// returned summary.
    pub async fn run_pay_batch(
        &self,
        targets: Vec<PayRunTarget>,
        pay_period: PayPeriod,
        paid_date: Option<NaiveDate>,
    ) -> PayrollResult<PayRunSummary> {
        let paid_date = validate_request(&targets, &pay_period, paid_date)?;

        if let Err(err) = self.client.ensure_authorized().await {
            warn!(error = %err, "Pay run aborted: no usable credential");
            return Err(PayrollError::invalid_input(
                "credential",
                self.messages.translate(&err.message),
            ));
        }

        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        info!(
            run_id = %run_id,
            targets = targets.len(),
            period_start = %pay_period.start_date,
            period_end = %pay_period.end_date,
            paid_date = %paid_date,
            "Starting pay run"
        );

        let mut outcomes = Vec::with_capacity(targets.len());
        for target in &targets {
            let outcome = self
                .process_target(run_id, target, &pay_period, paid_date)
                .await;
            outcomes.push(outcome);
        }

        let summary = PayRunSummary {
            run_id,
            pay_period,
            paid_date,
            started_at,
            completed_at: Utc::now(),
            targets,
            outcomes,
        };

        info!(
            run_id = %run_id,
            succeeded = summary.succeeded_count(),
            failed = summary.failed_count(),
            unpaid_records = summary.unpaid_records().len(),
            "Pay run completed"
        );
        self.audit.record(&summary);

        Ok(summary)
    }

    /// Runs both phases for one employee and folds any failure into the
    /// outcome.
    async fn process_target(
        &self,
        run_id: Uuid,
        target: &PayRunTarget,
        pay_period: &PayPeriod,
        paid_date: NaiveDate,
    ) -> PayRunOutcome {
        let created = match self
            .client
            .create_salary_record(&target.employee_id, pay_period)
            .await
        {
            Ok(created) => created,
            Err(err) => {
                let message = self.messages.translate(&err.message);
                let error = PayrollError::RemoteOperation {
                    phase: RemotePhase::Create,
                    message: message.clone(),
                };
                warn!(
                    run_id = %run_id,
                    employee_id = %target.employee_id,
                    error = %error,
                    "Create phase failed"
                );
                return PayRunOutcome::failed(
                    target,
                    message.clone(),
                    FailureReason::CreateFailed { message },
                );
            }
        };

        let Some(record_id) = created.usable_id() else {
            let error = PayrollError::MissingRecordId {
                employee_id: target.employee_id.clone(),
            };
            warn!(
                run_id = %run_id,
                employee_id = %target.employee_id,
                error = %error,
                "Create phase returned no record id"
            );
            return PayRunOutcome::failed(
                target,
                error.to_string(),
                FailureReason::MissingRecordId,
            );
        };
        debug!(
            run_id = %run_id,
            employee_id = %target.employee_id,
            record_id = %record_id,
            "Salary record created"
        );

        match self
            .client
            .mark_salary_record_paid(record_id, paid_date)
            .await
        {
            Ok(()) => {
                debug!(
                    run_id = %run_id,
                    employee_id = %target.employee_id,
                    record_id = %record_id,
                    "Salary record marked paid"
                );
                PayRunOutcome::succeeded(target)
            }
            Err(err) => {
                let message = self.messages.translate(&err.message);
                let error = PayrollError::RemoteOperation {
                    phase: RemotePhase::Commit,
                    message: message.clone(),
                };
                warn!(
                    run_id = %run_id,
                    employee_id = %target.employee_id,
                    record_id = %record_id,
                    error = %error,
                    "Commit phase failed; record left unpaid"
                );
                PayRunOutcome::failed(
                    target,
                    message.clone(),
                    FailureReason::CommitFailed {
                        record_id: record_id.to_string(),
                        message,
                    },
                )
            }
        }
    }
}

fn validate_request(
    targets: &[PayRunTarget],
    pay_period: &PayPeriod,
    paid_date: Option<NaiveDate>,
) -> PayrollResult<NaiveDate> {
    if targets.is_empty() {
        return Err(PayrollError::invalid_input(
            "targets",
            "at least one employee must be selected",
        ));
    }
    let paid_date =
        paid_date.ok_or_else(|| PayrollError::invalid_input("paid_date", "is required"))?;
    pay_period.validate()?;

    for target in targets {
        if target.employee_id.trim().is_empty() {
            return Err(PayrollError::invalid_input(
                "employee_id",
                format!("target '{}' has no employee id", target.display_name),
            ));
        }
        if target.monthly_salary < Decimal::ZERO {
            return Err(PayrollError::invalid_input(
                "monthly_salary",
                format!(
                    "employee '{}' has negative salary {}",
                    target.employee_id, target.monthly_salary
                ),
            ));
        }
    }

    Ok(paid_date)
}
