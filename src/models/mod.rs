//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod compensation;
mod eosb;
mod pay_period;
mod pay_run;

pub use attendance::{AttendanceObservation, AttendanceStatus};
pub use compensation::{
    CalculationWarning, CompensationBreakdown, CompensationLine, LineContribution, LineKind,
};
pub use eosb::{EosbInput, EosbResult, TenureBreakdown};
pub use pay_period::PayPeriod;
pub use pay_run::{
    FailureReason, OutcomeStatus, PayRunOutcome, PayRunSummary, PayRunTarget, PayRunVerdict,
};
