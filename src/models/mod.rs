//! Core data models for the payroll liquidation engine.
//!
//! This module contains the plain data types shared by the calculation
//! layer and the HTTP API.

mod liquidation;
mod overtime;
mod salary;

pub use liquidation::{
    BenefitKind, BenefitLine, ContributionKind, ContributionLine, EmployerProvisions,
    LiquidationSnapshot, PayrollExpenses,
};
pub use overtime::OvertimeCategory;
pub use salary::{RiskClass, SalaryKind};
