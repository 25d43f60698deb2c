//! Calculation logic for the payroll engine.
//!
//! This module contains the pure calculators: compensation breakdown from
//! allowance and deduction lines, the tiered end-of-service benefit, and
//! attendance status classification. None of them perform I/O or hold
//! state, so they are safe to call concurrently.

mod attendance;
mod compensation;
mod eosb;

pub use attendance::{classify_status, classify_status_on};
pub use compensation::{
    NEGATIVE_NET_SALARY, PERCENTAGE_OUT_OF_RANGE, compute_breakdown, line_contribution,
};
pub use eosb::{
    DAYS_PER_MONTH, DAYS_PER_SALARY_MONTH, DAYS_PER_YEAR, EARLY_TIER_DAYS_PER_YEAR,
    EARLY_TIER_YEARS, LATE_TIER_DAYS_PER_YEAR, compute_eosb, eosb_days_for_tenure,
    tenure_breakdown,
};
