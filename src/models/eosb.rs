//! End-of-service benefit input and result models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Input to the EOSB calculator.
///
/// `termination_date` must not precede `hire_date`; the calculator rejects
/// such input instead of correcting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EosbInput {
    /// First day of employment.
    pub hire_date: NaiveDate,
    /// Last day of employment.
    pub termination_date: NaiveDate,
    /// The monthly salary the daily rate is derived from.
    pub monthly_salary: Decimal,
}

/// Human-readable tenure, for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenureBreakdown {
    /// Whole years of service.
    pub years: u32,
    /// Whole months remaining after `years`.
    pub months: u32,
    /// Whole days remaining after `months`.
    pub days: u32,
}

/// The computed end-of-service benefit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EosbResult {
    /// Calendar days between hire and termination.
    pub tenure_days: i64,
    /// Fractional years of service, unrounded.
    pub tenure_years: Decimal,
    /// Display breakdown of the tenure. Not used in the amount.
    pub tenure_breakdown: TenureBreakdown,
    /// Benefit days accrued under the tier schedule.
    pub eosb_days: Decimal,
    /// `monthly_salary / 30`.
    pub daily_rate: Decimal,
    /// `daily_rate * eosb_days`.
    pub eosb_amount: Decimal,
}
