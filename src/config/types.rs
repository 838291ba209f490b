//! Configuration types for the legal parameter table.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, plus the per-year
//! summary returned by parameter lookups.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Legislated monetary values for a single calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRates {
    /// The legal monthly minimum wage (SMLV).
    pub minimum_wage: Decimal,
    /// The monthly transport subsidy.
    pub transport_subsidy: Decimal,
}

/// Structure of `parameters.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ParametersFile {
    /// ISO country code the table applies to.
    pub country: String,
    /// ISO currency code of every monetary value in the table.
    pub currency: String,
    /// Map of calendar year to its legislated values.
    pub years: BTreeMap<i32, YearRates>,
}

/// A reduction of the monthly working-hour count taking effect on a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHoursStep {
    /// First day on which `hours` applies.
    pub effective_date: NaiveDate,
    /// Monthly working hours from `effective_date` onwards.
    pub hours: u32,
}

/// Structure of `working_hours.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkingHoursFile {
    /// Monthly working hours before the first step.
    pub initial_hours: u32,
    /// Scheduled reductions of the working week.
    pub steps: Vec<WorkingHoursStep>,
}

/// Summary of the labor parameters in force for a year.
///
/// Working hours and the ordinary hourly value are taken at the last day of
/// the year, after every step scheduled for that year has applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearParameters {
    /// The calendar year.
    pub year: i32,
    /// The legal monthly minimum wage.
    pub minimum_wage: Decimal,
    /// The monthly transport subsidy.
    pub transport_subsidy: Decimal,
    /// Monthly working hours at year end.
    pub monthly_working_hours: u32,
    /// Lowest wage accepted for an integral salary (13 minimum wages).
    pub integral_salary_floor: Decimal,
    /// Value of one ordinary hour paid at the minimum wage.
    pub ordinary_hourly_rate: Decimal,
}
