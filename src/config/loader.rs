//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the legal
//! parameter table from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::parameters::ParameterTable;
use super::types::{ParametersFile, WorkingHoursFile};

/// The only currency the engine computes in.
const SUPPORTED_CURRENCY: &str = "COP";

/// Loads and provides access to the legal parameter table.
///
/// # Directory Structure
///
/// ```text
/// config/colombia/
/// ├── parameters.yaml     # Minimum wage and transport subsidy per year
/// └── working_hours.yaml  # Monthly working-hour reduction schedule
/// ```
///
/// # Example
///
/// ```no_run
/// use nomina_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/colombia").unwrap();
/// let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
/// let wage = loader.table().minimum_wage(date).unwrap();
/// println!("Minimum wage: ${}", wage);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    country: String,
    table: ParameterTable,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or an unsupported currency (`ConfigParseError`)
    /// - The working-hour schedule increases the hour count (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let parameters_path = path.join("parameters.yaml");
        let parameters = Self::load_yaml::<ParametersFile>(&parameters_path)?;

        if parameters.currency != SUPPORTED_CURRENCY {
            return Err(EngineError::ConfigParseError {
                path: parameters_path.display().to_string(),
                message: format!(
                    "unsupported currency '{}', expected {}",
                    parameters.currency, SUPPORTED_CURRENCY
                ),
            });
        }

        let hours_path = path.join("working_hours.yaml");
        let hours = Self::load_yaml::<WorkingHoursFile>(&hours_path)?;

        let table = ParameterTable::new(parameters.years, hours.initial_hours, hours.steps)
            .map_err(|e| EngineError::ConfigParseError {
                path: hours_path.display().to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            country: parameters.country,
            table,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the country code declared by the configuration.
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Returns the loaded parameter table.
    pub fn table(&self) -> &ParameterTable {
        &self.table
    }

    /// Consumes the loader, returning the parameter table.
    pub fn into_table(self) -> ParameterTable {
        self.table
    }
}
