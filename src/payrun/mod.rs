//! Pay-run orchestration for the payroll engine.
//!
//! This module contains the [`SalaryRecordClient`] seam to the remote
//! salary-record API, the known-error [`ErrorMessageMap`], the
//! [`PayRunAuditSink`] that receives finished runs, and the
//! [`PayRunOrchestrator`] that ties them together.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::payrun::{PayRunOrchestrator, SalaryRecordClient};
//! use payroll_engine::models::{PayPeriod, PayRunTarget};
//! use chrono::NaiveDate;
//!
//! async fn settle<C: SalaryRecordClient>(client: C, targets: Vec<PayRunTarget>) {
//!     let period = PayPeriod {
//!         start_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
//!         end_date: NaiveDate::from_ymd_opt(2026, 9, 30).unwrap(),
//!     };
//!     let paid = NaiveDate::from_ymd_opt(2026, 10, 1);
//!     let summary = PayRunOrchestrator::new(client)
//!         .run_pay_batch(targets, period, paid)
//!         .await
//!         .unwrap();
//!     println!("{} paid, {} failed", summary.succeeded_count(), summary.failed_count());
//! }
//! ```

mod audit;
mod client;
mod messages;
mod orchestrator;

pub use audit::{PayRunAuditSink, TracingAuditSink};
pub use client::{CreatedRecord, RemoteError, SalaryRecordClient};
pub use messages::{ErrorMessageMap, KnownErrorMessage};
pub use orchestrator::PayRunOrchestrator;
