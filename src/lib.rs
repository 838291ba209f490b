//! Payroll liquidation engine for Colombian labor law
//!
//! This crate computes the full monthly cost of employing a worker: direct
//! payroll expenses plus the employer's social-security contributions and
//! social-benefit accruals, using the legal parameters in force on the
//! liquidation date.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
