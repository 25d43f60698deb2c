//! Payroll Engine
//!
//! This crate computes gross and net salary from allowance and deduction
//! lines, the tiered end-of-service benefit, and normalized attendance
//! statuses, and drives pay runs that create and settle salary records for
//! many employees through a remote collaborator.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod payrun;
