//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type that bounds a pay run.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// The date range a pay run settles salaries for.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
/// };
///
/// assert!(period.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Rejects a period whose end precedes its start.
    pub fn validate(&self) -> PayrollResult<()> {
        if self.end_date < self.start_date {
            return Err(PayrollError::invalid_input(
                "pay_period",
                format!(
                    "end date {} precedes start date {}",
                    self.end_date, self.start_date
                ),
            ));
        }
        Ok(())
    }
}
