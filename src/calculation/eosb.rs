//! End-of-service benefit (EOSB) calculation.
//!
//! The benefit accrues 21 days of pay per year of service for the first five
//! years and 30 days per year beyond that. Nothing accrues below one year.
//! The daily rate is the monthly salary over a 30-day month.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{EosbInput, EosbResult, TenureBreakdown};

/// Average days per year used to convert calendar days into tenure years.
pub const DAYS_PER_YEAR: Decimal = Decimal::from_parts(36525, 0, 0, false, 2);

/// Average days per month used only for the display breakdown.
pub const DAYS_PER_MONTH: Decimal = Decimal::from_parts(3044, 0, 0, false, 2);

/// Benefit days per year of service for years one through five.
pub const EARLY_TIER_DAYS_PER_YEAR: Decimal = Decimal::from_parts(21, 0, 0, false, 0);

/// Benefit days per year of service beyond five years.
pub const LATE_TIER_DAYS_PER_YEAR: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Tenure (in years) at which the late tier starts.
pub const EARLY_TIER_YEARS: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Days in the month used to derive the daily rate.
pub const DAYS_PER_SALARY_MONTH: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Returns the benefit days accrued for a fractional tenure.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::eosb_days_for_tenure;
/// use rust_decimal::Decimal;
///
/// assert_eq!(eosb_days_for_tenure(Decimal::new(5, 0)), Decimal::new(105, 0));
/// assert_eq!(eosb_days_for_tenure(Decimal::new(6, 0)), Decimal::new(135, 0));
/// ```
pub fn eosb_days_for_tenure(tenure_years: Decimal) -> Decimal {
    if tenure_years < Decimal::ONE {
        Decimal::ZERO
    } else if tenure_years <= EARLY_TIER_YEARS {
        tenure_years * EARLY_TIER_DAYS_PER_YEAR
    } else {
        EARLY_TIER_YEARS * EARLY_TIER_DAYS_PER_YEAR
            + (tenure_years - EARLY_TIER_YEARS) * LATE_TIER_DAYS_PER_YEAR
    }
}

/// Splits a day count into whole years, months and days for display.
///
/// Uses 365.25-day years and 30.44-day months, flooring each component.
pub fn tenure_breakdown(tenure_days: i64) -> TenureBreakdown {
    let days = Decimal::from(tenure_days.max(0));
    let remaining = days % DAYS_PER_YEAR;
    TenureBreakdown {
        years: whole((days / DAYS_PER_YEAR).floor()),
        months: whole((remaining / DAYS_PER_MONTH).floor()),
        days: whole((remaining % DAYS_PER_MONTH).floor()),
    }
}

fn whole(value: Decimal) -> u32 {
    value.to_u32().unwrap_or(u32::MAX)
}

/// Computes the end-of-service benefit for a departing employee.
///
/// The amount is driven by the unrounded fractional tenure; the
/// [`TenureBreakdown`] is informational and never feeds back into it.
///
/// # Errors
///
/// - `InvalidRange` if the termination date precedes the hire date.
/// - `InvalidInput` if the monthly salary is negative, or so large that the
///   benefit amount leaves the decimal range.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_eosb;
/// use payroll_engine::models::EosbInput;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let result = compute_eosb(&EosbInput {
///     hire_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///     termination_date: NaiveDate::from_ymd_opt(2020, 6, 1).unwrap(),
///     monthly_salary: Decimal::new(3000, 0),
/// })
/// .unwrap();
/// assert_eq!(result.eosb_amount, Decimal::ZERO);
/// ```
pub fn compute_eosb(input: &EosbInput) -> PayrollResult<EosbResult> {
    let tenure_days = (input.termination_date - input.hire_date).num_days();
    if tenure_days < 0 {
        return Err(PayrollError::InvalidRange {
            hire_date: input.hire_date,
            termination_date: input.termination_date,
        });
    }
    if input.monthly_salary < Decimal::ZERO {
        return Err(PayrollError::invalid_input(
            "monthly_salary",
            format!("must not be negative, got {}", input.monthly_salary),
        ));
    }

    let tenure_years = Decimal::from(tenure_days) / DAYS_PER_YEAR;
    let eosb_days = eosb_days_for_tenure(tenure_years);
    let out_of_range = || PayrollError::invalid_input("monthly_salary", "amount out of range");
    let daily_rate = input
        .monthly_salary
        .checked_div(DAYS_PER_SALARY_MONTH)
        .ok_or_else(out_of_range)?;
    let eosb_amount = daily_rate.checked_mul(eosb_days).ok_or_else(out_of_range)?;

    Ok(EosbResult {
        tenure_days,
        tenure_years,
        tenure_breakdown: tenure_breakdown(tenure_days),
        eosb_days,
        daily_rate,
        eosb_amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn input(hire: NaiveDate, termination: NaiveDate, salary: &str) -> EosbInput {
        EosbInput {
            hire_date: hire,
            termination_date: termination,
            monthly_salary: dec(salary),
        }
    }

    #[test]
    fn test_constants() {
        assert_eq!(DAYS_PER_YEAR, dec("365.25"));
        assert_eq!(DAYS_PER_MONTH, dec("30.44"));
        assert_eq!(EARLY_TIER_YEARS * EARLY_TIER_DAYS_PER_YEAR, dec("105"));
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(eosb_days_for_tenure(dec("0.99")), Decimal::ZERO);
        assert_eq!(eosb_days_for_tenure(Decimal::ONE), dec("21"));
        assert_eq!(eosb_days_for_tenure(dec("5")), dec("105"));
        assert_eq!(eosb_days_for_tenure(dec("6")), dec("135"));
        assert_eq!(eosb_days_for_tenure(dec("10")), dec("255"));
    }

    #[test]
    fn test_under_one_year_pays_nothing() {
        let result = compute_eosb(&input(date(2020, 1, 1), date(2020, 6, 1), "3000")).unwrap();
        assert_eq!(result.eosb_days, Decimal::ZERO);
        assert_eq!(result.eosb_amount, Decimal::ZERO);
        assert_eq!(result.daily_rate, dec("100"));
    }

    #[test]
    fn test_three_years_uses_early_tier() {
        let result = compute_eosb(&input(date(2020, 1, 1), date(2023, 1, 1), "3000")).unwrap();
        assert_eq!(result.tenure_days, 1096);
        assert_eq!(result.eosb_amount.round_dp(2), dec("6301.44"));
        assert_eq!(
            result.tenure_breakdown,
            TenureBreakdown {
                years: 3,
                months: 0,
                days: 0
            }
        );
    }

    #[test]
    fn test_ten_years_uses_late_tier() {
        let result = compute_eosb(&input(date(2014, 1, 1), date(2024, 1, 1), "3000")).unwrap();
        assert_eq!(result.tenure_days, 3652);
        assert_eq!(result.eosb_days.round_dp(4), dec("254.9589"));
        assert_eq!(result.eosb_amount.round_dp(2), dec("25495.89"));
    }

    #[test]
    fn test_amount_uses_fractional_tenure_not_breakdown() {
        // 401 days: breakdown says 1 year, but the amount uses ~1.0979 years.
        let result = compute_eosb(&input(date(2020, 1, 1), date(2021, 2, 5), "3000")).unwrap();
        assert_eq!(result.tenure_breakdown.years, 1);
        assert_eq!(result.tenure_breakdown.months, 1);
        assert_eq!(result.tenure_breakdown.days, 5);
        assert!(result.eosb_days > dec("21"));
        assert_eq!(result.eosb_amount.round_dp(2), dec("2305.54"));
    }

    #[test]
    fn test_tenure_breakdown_near_year_end() {
        assert_eq!(
            tenure_breakdown(3652),
            TenureBreakdown {
                years: 9,
                months: 11,
                days: 29
            }
        );
    }

    #[test]
    fn test_same_day_is_zero_tenure() {
        let d = date(2024, 2, 29);
        let result = compute_eosb(&input(d, d, "5000")).unwrap();
        assert_eq!(result.tenure_days, 0);
        assert_eq!(result.tenure_years, Decimal::ZERO);
        assert_eq!(result.eosb_amount, Decimal::ZERO);
    }

    #[test]
    fn test_termination_before_hire_is_invalid_range() {
        let result = compute_eosb(&input(date(2024, 5, 1), date(2024, 4, 30), "3000"));
        match result.unwrap_err() {
            PayrollError::InvalidRange {
                hire_date,
                termination_date,
            } => {
                assert_eq!(hire_date, date(2024, 5, 1));
                assert_eq!(termination_date, date(2024, 4, 30));
            }
            other => panic!("Expected InvalidRange, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_salary_is_invalid_input() {
        let result = compute_eosb(&input(date(2020, 1, 1), date(2024, 1, 1), "-1"));
        assert!(matches!(
            result.unwrap_err(),
            PayrollError::InvalidInput { .. }
        ));
    }

    #[test]
    fn test_max_salary_over_twenty_years_is_out_of_range() {
        let result = compute_eosb(&EosbInput {
            hire_date: date(2004, 1, 1),
            termination_date: date(2024, 1, 1),
            monthly_salary: Decimal::MAX,
        });
        match result.unwrap_err() {
            PayrollError::InvalidInput { field, message } => {
                assert_eq!(field, "monthly_salary");
                assert_eq!(message, "amount out of range");
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_max_salary_under_one_year_is_zero() {
        let result = compute_eosb(&EosbInput {
            hire_date: date(2024, 1, 1),
            termination_date: date(2024, 6, 1),
            monthly_salary: Decimal::MAX,
        })
        .unwrap();
        assert_eq!(result.eosb_amount, Decimal::ZERO);
    }

    proptest! {
        #[test]
        fn prop_under_one_year_amount_is_zero(days in 0i64..365, salary in 0i64..100_000) {
            let hire = date(2020, 1, 1);
            let result = compute_eosb(&EosbInput {
                hire_date: hire,
                termination_date: hire + chrono::Duration::days(days),
                monthly_salary: Decimal::from(salary),
            })
            .unwrap();
            prop_assert_eq!(result.eosb_amount, Decimal::ZERO);
        }

        #[test]
        fn prop_eosb_days_never_decrease_with_tenure(a in 0i64..20_000, b in 0i64..20_000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let lo_days = eosb_days_for_tenure(Decimal::from(lo) / DAYS_PER_YEAR);
            let hi_days = eosb_days_for_tenure(Decimal::from(hi) / DAYS_PER_YEAR);
            prop_assert!(lo_days <= hi_days);
        }
    }
}
