//! Application state for the payroll liquidation API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ParameterTable;

/// Shared application state.
///
/// Holds the legal parameter table loaded at startup. Every handler reads
/// it; none mutates it.
#[derive(Debug, Clone)]
pub struct AppState {
    params: Arc<ParameterTable>,
}

impl AppState {
    /// Creates a new application state owning `params`.
    pub fn new(params: ParameterTable) -> Self {
        Self::from_shared(Arc::new(params))
    }

    /// Creates a new application state from an already shared table.
    pub fn from_shared(params: Arc<ParameterTable>) -> Self {
        Self { params }
    }

    /// Returns the legal parameter table.
    pub fn params(&self) -> &ParameterTable {
        &self.params
    }
}
