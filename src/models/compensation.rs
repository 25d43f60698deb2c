//! Compensation line and breakdown models.
//!
//! This module contains the [`CompensationLine`] input type and the derived
//! [`CompensationBreakdown`] produced by the compensation calculator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a compensation line's value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// The value is a percentage of the basic salary.
    Percentage,
    /// The value is an absolute currency amount.
    Fixed,
}

/// One allowance or deduction entry.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{CompensationLine, LineKind};
/// use rust_decimal::Decimal;
///
/// let housing = CompensationLine {
///     name: "Housing".to_string(),
///     value: Decimal::new(25, 0),
///     kind: LineKind::Percentage,
/// };
/// assert_eq!(housing.kind, LineKind::Percentage);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationLine {
    /// Display name of the line (e.g., "Housing", "Social insurance").
    pub name: String,
    /// Percent of basic salary or absolute amount, depending on `kind`.
    pub value: Decimal,
    /// How `value` is interpreted.
    pub kind: LineKind,
}

impl CompensationLine {
    /// Creates a percentage-of-basic line.
    pub fn percentage(name: impl Into<String>, value: Decimal) -> Self {
        Self {
            name: name.into(),
            value,
            kind: LineKind::Percentage,
        }
    }

    /// Creates a fixed-amount line.
    pub fn fixed(name: impl Into<String>, value: Decimal) -> Self {
        Self {
            name: name.into(),
            value,
            kind: LineKind::Fixed,
        }
    }
}

/// The amount a single line contributed to a breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineContribution {
    /// The line's display name.
    pub name: String,
    /// The line's kind.
    pub kind: LineKind,
    /// The line's configured value.
    pub value: Decimal,
    /// The resulting currency amount.
    pub amount: Decimal,
}

/// A warning raised during a calculation.
///
/// Warnings flag suspicious input that was nevertheless accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
}

/// The result of applying allowances and deductions to a basic salary.
///
/// Instances are only produced by the compensation calculator, so the
/// derived totals always agree with the line items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationBreakdown {
    /// The basic salary the lines were applied to.
    pub basic_salary: Decimal,
    /// Sum of all allowance contributions.
    pub total_allowances: Decimal,
    /// `basic_salary + total_allowances`.
    pub gross_salary: Decimal,
    /// Sum of all deduction contributions.
    pub total_deductions: Decimal,
    /// `gross_salary - total_deductions`. May be negative.
    pub net_salary: Decimal,
    /// Per-line allowance amounts, in input order.
    pub allowance_lines: Vec<LineContribution>,
    /// Per-line deduction amounts, in input order.
    pub deduction_lines: Vec<LineContribution>,
    /// Flags for accepted-but-suspicious input.
    #[serde(default)]
    pub warnings: Vec<CalculationWarning>,
}

impl CompensationBreakdown {
    /// Returns true if deductions exceed the gross salary.
    pub fn is_net_negative(&self) -> bool {
        self.net_salary < Decimal::ZERO
    }
}
