//! Pay-run models.
//!
//! This module contains the types the pay-run orchestrator consumes and
//! produces: the [`PayRunTarget`] selected by the caller, one
//! [`PayRunOutcome`] per target, and the aggregated [`PayRunSummary`].

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PayPeriod;

/// One employee selected for a pay run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayRunTarget {
    /// Externally owned employee identifier.
    pub employee_id: String,
    /// Name shown in run reports.
    pub display_name: String,
    /// The employee's monthly salary at the time the run was initiated.
    pub monthly_salary: Decimal,
}

/// Whether a target was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    /// The record was created and marked paid.
    Succeeded,
    /// One of the two phases failed.
    Failed,
}

/// Why a target failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureReason {
    /// The salary record could not be created. Nothing exists remotely.
    CreateFailed {
        /// The collaborator's message, translated where known.
        message: String,
    },
    /// The create call succeeded but returned no record identifier.
    MissingRecordId,
    /// The record was created but could not be marked paid.
    ///
    /// The record stays unpaid in the remote system and must be reconciled
    /// by an operator.
    CommitFailed {
        /// Identifier of the unpaid record.
        record_id: String,
        /// The collaborator's message, translated where known.
        message: String,
    },
}

impl FailureReason {
    /// Returns true if an unpaid record was left behind remotely.
    pub fn leaves_unpaid_record(&self) -> bool {
        matches!(self, FailureReason::CommitFailed { .. })
    }
}

/// The result of processing one [`PayRunTarget`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayRunOutcome {
    /// The target's employee identifier.
    pub employee_id: String,
    /// The target's display name.
    pub display_name: String,
    /// Whether the target was paid.
    pub status: OutcomeStatus,
    /// Present iff `status` is `Failed`.
    pub error_detail: Option<String>,
    /// Present iff `status` is `Failed`.
    pub failure: Option<FailureReason>,
}

impl PayRunOutcome {
    /// Builds a successful outcome for a target.
    pub fn succeeded(target: &PayRunTarget) -> Self {
        Self {
            employee_id: target.employee_id.clone(),
            display_name: target.display_name.clone(),
            status: OutcomeStatus::Succeeded,
            error_detail: None,
            failure: None,
        }
    }

    /// Builds a failed outcome for a target.
    pub fn failed(target: &PayRunTarget, detail: impl Into<String>, reason: FailureReason) -> Self {
        Self {
            employee_id: target.employee_id.clone(),
            display_name: target.display_name.clone(),
            status: OutcomeStatus::Failed,
            error_detail: Some(detail.into()),
            failure: Some(reason),
        }
    }

    /// Returns true if the target was paid.
    pub fn is_success(&self) -> bool {
        self.status == OutcomeStatus::Succeeded
    }
}

/// How the caller should present a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayRunVerdict {
    /// Every target was paid.
    AllSucceeded,
    /// No target was paid.
    AllFailed,
    /// Some targets were paid and some failed.
    Partial,
}

/// The aggregated result of one pay run.
///
/// `outcomes[i]` always belongs to `targets[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayRunSummary {
    /// Unique identifier for this run.
    pub run_id: Uuid,
    /// The period that was settled.
    pub pay_period: PayPeriod,
    /// The paid date recorded on every committed record.
    pub paid_date: NaiveDate,
    /// When processing of the first target began.
    pub started_at: DateTime<Utc>,
    /// When processing of the last target finished.
    pub completed_at: DateTime<Utc>,
    /// Targets in the order they were processed.
    pub targets: Vec<PayRunTarget>,
    /// One outcome per target, same order as `targets`.
    pub outcomes: Vec<PayRunOutcome>,
}

impl PayRunSummary {
    /// Number of targets that were paid.
    pub fn succeeded_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// Number of targets that failed.
    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.succeeded_count()
    }

    /// Classifies the run for user-facing messaging.
    pub fn verdict(&self) -> PayRunVerdict {
        match (self.succeeded_count(), self.failed_count()) {
            (_, 0) => PayRunVerdict::AllSucceeded,
            (0, _) => PayRunVerdict::AllFailed,
            _ => PayRunVerdict::Partial,
        }
    }

    /// Returns true if at least one payment took effect.
    ///
    /// Confirmed runs warrant refreshing any salary listings.
    pub fn is_confirmed(&self) -> bool {
        self.succeeded_count() > 0
    }

    /// Iterates over the failed outcomes, in target order.
    pub fn failures(&self) -> impl Iterator<Item = &PayRunOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    /// Lists `(employee_id, record_id)` for records created but left unpaid.
    pub fn unpaid_records(&self) -> Vec<(&str, &str)> {
        self.outcomes
            .iter()
            .filter_map(|o| match &o.failure {
                Some(FailureReason::CommitFailed { record_id, .. }) => {
                    Some((o.employee_id.as_str(), record_id.as_str()))
                }
                _ => None,
            })
            .collect()
    }

    /// Sum of the monthly salaries of the targets that were paid.
    pub fn succeeded_salary_total(&self) -> Decimal {
        self.targets
            .iter()
            .zip(&self.outcomes)
            .filter(|(_, outcome)| outcome.is_success())
            .map(|(target, _)| target.monthly_salary)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(id: &str, salary: i64) -> PayRunTarget {
        PayRunTarget {
            employee_id: id.to_string(),
            display_name: format!("Employee {}", id),
            monthly_salary: Decimal::new(salary, 0),
        }
    }

    fn summary(targets: Vec<PayRunTarget>, outcomes: Vec<PayRunOutcome>) -> PayRunSummary {
        PayRunSummary {
            run_id: Uuid::new_v4(),
            pay_period: PayPeriod {
                start_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
            },
            paid_date: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
            started_at: Utc::now(),
            completed_at: Utc::now(),
            targets,
            outcomes,
        }
    }

    #[test]
    fn test_failed_outcome_carries_detail() {
        let t = target("emp_001", 5000);
        let outcome = PayRunOutcome::failed(
            &t,
            "boom",
            FailureReason::CreateFailed {
                message: "boom".to_string(),
            },
        );
        assert_eq!(outcome.status, OutcomeStatus::Failed);
        assert_eq!(outcome.error_detail.as_deref(), Some("boom"));
        assert!(!outcome.is_success());
    }

    #[test]
    fn test_succeeded_outcome_has_no_detail() {
        let outcome = PayRunOutcome::succeeded(&target("emp_001", 5000));
        assert!(outcome.error_detail.is_none());
        assert!(outcome.failure.is_none());
    }

    #[test]
    fn test_verdict_all_succeeded() {
        let targets = vec![target("a", 100), target("b", 200)];
        let outcomes = targets.iter().map(PayRunOutcome::succeeded).collect();
        let s = summary(targets, outcomes);
        assert_eq!(s.verdict(), PayRunVerdict::AllSucceeded);
        assert!(s.is_confirmed());
        assert_eq!(s.succeeded_salary_total(), Decimal::new(300, 0));
    }

    #[test]
    fn test_verdict_partial_lists_unpaid_records() {
        let targets = vec![target("a", 100), target("b", 200)];
        let outcomes = vec![
            PayRunOutcome::succeeded(&targets[0]),
            PayRunOutcome::failed(
                &targets[1],
                "timeout",
                FailureReason::CommitFailed {
                    record_id: "rec_9".to_string(),
                    message: "timeout".to_string(),
                },
            ),
        ];
        let s = summary(targets, outcomes);
        assert_eq!(s.verdict(), PayRunVerdict::Partial);
        assert!(s.is_confirmed());
        assert_eq!(s.succeeded_count(), 1);
        assert_eq!(s.failed_count(), 1);
        assert_eq!(s.unpaid_records(), vec![("b", "rec_9")]);
        assert_eq!(s.succeeded_salary_total(), Decimal::new(100, 0));
    }

    #[test]
    fn test_verdict_all_failed_is_not_confirmed() {
        let targets = vec![target("a", 100)];
        let outcomes = vec![PayRunOutcome::failed(
            &targets[0],
            "missing id",
            FailureReason::MissingRecordId,
        )];
        let s = summary(targets, outcomes);
        assert_eq!(s.verdict(), PayRunVerdict::AllFailed);
        assert!(!s.is_confirmed());
        assert!(s.unpaid_records().is_empty());
        assert_eq!(s.failures().count(), 1);
    }

    #[test]
    fn test_failure_reason_serialization() {
        let reason = FailureReason::CommitFailed {
            record_id: "rec_1".to_string(),
            message: "denied".to_string(),
        };
        let json = serde_json::to_value(&reason).unwrap();
        assert_eq!(json["kind"], "commit_failed");
        assert_eq!(json["record_id"], "rec_1");
        assert!(reason.leaves_unpaid_record());
    }
}
