//! Request types for the payroll calculator API.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceObservation, CompensationLine, EosbInput};

/// Request body for `POST /compensation/breakdown`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakdownRequest {
    /// The employee's basic salary.
    pub basic_salary: Decimal,
    /// Allowance lines.
    #[serde(default)]
    pub allowances: Vec<CompensationLine>,
    /// Deduction lines.
    #[serde(default)]
    pub deductions: Vec<CompensationLine>,
}

/// Request body for `POST /eosb`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EosbRequest {
    /// First day of employment.
    pub hire_date: NaiveDate,
    /// Last day of employment.
    pub termination_date: NaiveDate,
    /// Monthly salary the benefit is based on.
    pub monthly_salary: Decimal,
}

/// Request body for `POST /attendance/classify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    /// Whether a check-in was recorded.
    pub has_check_in: bool,
    /// Whether a check-out was recorded.
    pub has_check_out: bool,
    /// The stored status string, if any.
    #[serde(default)]
    pub status_hint: Option<String>,
    /// Whether the record is for the current day.
    #[serde(default)]
    pub is_today: bool,
}

impl From<EosbRequest> for EosbInput {
    fn from(req: EosbRequest) -> Self {
        EosbInput {
            hire_date: req.hire_date,
            termination_date: req.termination_date,
            monthly_salary: req.monthly_salary,
        }
    }
}

impl From<ClassifyRequest> for AttendanceObservation {
    fn from(req: ClassifyRequest) -> Self {
        AttendanceObservation {
            has_check_in: req.has_check_in,
            has_check_out: req.has_check_out,
            recorded_status_hint: req.status_hint,
            is_today: req.is_today,
        }
    }
}
