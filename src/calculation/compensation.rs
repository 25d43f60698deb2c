//! Compensation breakdown calculation.
//!
//! This module turns a basic salary plus allowance and deduction lines into
//! gross and net salary figures.

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{
    CalculationWarning, CompensationBreakdown, CompensationLine, LineContribution, LineKind,
};

/// Warning code raised when a percentage line falls outside `[0, 100]`.
pub const PERCENTAGE_OUT_OF_RANGE: &str = "PERCENTAGE_OUT_OF_RANGE";

/// Warning code raised when deductions exceed the gross salary.
pub const NEGATIVE_NET_SALARY: &str = "NEGATIVE_NET_SALARY";

const ONE_HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Returns the currency amount a single line contributes.
///
/// A `Percentage` line contributes `basic_salary * value / 100`; a `Fixed`
/// line contributes `value` as-is.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::line_contribution;
/// use payroll_engine::models::CompensationLine;
/// use rust_decimal::Decimal;
///
/// let housing = CompensationLine::percentage("Housing", Decimal::new(20, 0));
/// let amount = line_contribution(Decimal::new(10000, 0), &housing).unwrap();
/// assert_eq!(amount, Decimal::new(2000, 0));
/// ```
///
/// # Errors
///
/// `InvalidInput` on `basic_salary` if the product leaves the decimal range.
pub fn line_contribution(
    basic_salary: Decimal,
    line: &CompensationLine,
) -> PayrollResult<Decimal> {
    match line.kind {
        LineKind::Percentage => basic_salary
            .checked_mul(line.value)
            .and_then(|v| v.checked_div(ONE_HUNDRED))
            .ok_or_else(|| out_of_range("basic_salary")),
        LineKind::Fixed => Ok(line.value),
    }
}

fn out_of_range(field: &str) -> PayrollError {
    PayrollError::invalid_input(field, "amount out of range")
}

/// Applies allowance and deduction lines to a basic salary.
///
/// Returns an `InvalidInput` error if `basic_salary` or any line value is
/// negative, or if a total leaves the decimal range. Percentages above 100 and a negative net salary are accepted
/// and reported through `warnings`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_breakdown;
/// use payroll_engine::models::CompensationLine;
/// use rust_decimal::Decimal;
///
/// let breakdown = compute_breakdown(
///     Decimal::new(10000, 0),
///     &[CompensationLine::percentage("Housing", Decimal::new(20, 0))],
///     &[CompensationLine::fixed("Insurance", Decimal::new(500, 0))],
/// )
/// .unwrap();
///
/// assert_eq!(breakdown.gross_salary, Decimal::new(12000, 0));
/// assert_eq!(breakdown.net_salary, Decimal::new(11500, 0));
/// ```
pub fn compute_breakdown(
    basic_salary: Decimal,
    allowances: &[CompensationLine],
    deductions: &[CompensationLine],
) -> PayrollResult<CompensationBreakdown> {
    if basic_salary < Decimal::ZERO {
        return Err(PayrollError::invalid_input(
            "basic_salary",
            format!("must not be negative, got {}", basic_salary),
        ));
    }
    validate_lines("allowances", allowances)?;
    validate_lines("deductions", deductions)?;

    let mut warnings = Vec::new();
    let allowance_lines = contributions(basic_salary, allowances, &mut warnings)?;
    let deduction_lines = contributions(basic_salary, deductions, &mut warnings)?;

    let total_allowances = total("allowances", &allowance_lines)?;
    let total_deductions = total("deductions", &deduction_lines)?;
    let gross_salary = basic_salary
        .checked_add(total_allowances)
        .ok_or_else(|| out_of_range("basic_salary"))?;
    let net_salary = gross_salary
        .checked_sub(total_deductions)
        .ok_or_else(|| out_of_range("deductions"))?;

    if net_salary < Decimal::ZERO {
        warnings.push(CalculationWarning {
            code: NEGATIVE_NET_SALARY.to_string(),
            message: format!(
                "Deductions of {} exceed gross salary of {}",
                total_deductions, gross_salary
            ),
        });
    }

    Ok(CompensationBreakdown {
        basic_salary,
        total_allowances,
        gross_salary,
        total_deductions,
        net_salary,
        allowance_lines,
        deduction_lines,
        warnings,
    })
}

fn validate_lines(field: &str, lines: &[CompensationLine]) -> PayrollResult<()> {
    match lines.iter().find(|l| l.value < Decimal::ZERO) {
        Some(line) => Err(PayrollError::invalid_input(
            field,
            format!("line '{}' has negative value {}", line.name, line.value),
        )),
        None => Ok(()),
    }
}

fn total(field: &str, lines: &[LineContribution]) -> PayrollResult<Decimal> {
    lines.iter().try_fold(Decimal::ZERO, |acc, line| {
        acc.checked_add(line.amount).ok_or_else(|| out_of_range(field))
    })
}

fn contributions(
    basic_salary: Decimal,
    lines: &[CompensationLine],
    warnings: &mut Vec<CalculationWarning>,
) -> PayrollResult<Vec<LineContribution>> {
    lines
        .iter()
        .map(|line| {
            if line.kind == LineKind::Percentage && line.value > ONE_HUNDRED {
                warnings.push(CalculationWarning {
                    code: PERCENTAGE_OUT_OF_RANGE.to_string(),
                    message: format!("Line '{}' is {}% of basic salary", line.name, line.value),
                });
            }
            line_contribution(basic_salary, line).map(|amount| LineContribution {
                name: line.name.clone(),
                kind: line.kind,
                value: line.value,
                amount,
            })
        })
        .collect()
}
