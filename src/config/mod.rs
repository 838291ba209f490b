//! Legal parameter configuration for the payroll liquidation engine.
//!
//! This module provides the date-keyed table of minimum wage, transport
//! subsidy and monthly working hours, either built from the statutory values
//! compiled into the crate or loaded from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use nomina_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/colombia").unwrap();
//! println!("Years available: {:?}", loader.table().available_years());
//! ```

mod loader;
mod parameters;
mod types;

pub use loader::ConfigLoader;
pub use parameters::{INTEGRAL_SALARY_MINIMUM_WAGES, ParameterTable};
pub use types::{ParametersFile, WorkingHoursFile, WorkingHoursStep, YearParameters, YearRates};
