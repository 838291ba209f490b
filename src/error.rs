//! Error types for the payroll liquidation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine can report. All of them are deterministic
//! input or configuration failures; none are retried.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the payroll liquidation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use nomina_engine::error::EngineError;
///
/// let error = EngineError::ParameterNotFound {
///     parameter: "minimum_wage".to_string(),
///     year: 2019,
/// };
/// assert_eq!(error.to_string(), "Parameter 'minimum_wage' not found for year 2019");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or is inconsistent.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The year has no legislated value for the requested parameter.
    #[error("Parameter '{parameter}' not found for year {year}")]
    ParameterNotFound {
        /// The parameter that was requested (e.g. "minimum_wage").
        parameter: String,
        /// The calendar year of the lookup.
        year: i32,
    },

    /// A wage is below the legal floor for its salary kind.
    #[error("Wage {wage} is below the legal floor {floor} for {salary_kind} salary")]
    FloorViolation {
        /// The salary kind the wage was declared as.
        salary_kind: String,
        /// The rejected wage.
        wage: Decimal,
        /// The minimum accepted wage for that kind and date.
        floor: Decimal,
    },

    /// An input value is outside its domain.
    #[error("Invalid value for '{field}': {message}")]
    InputDomain {
        /// The field that was invalid.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
