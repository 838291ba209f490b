//! Response types for the payroll liquidation API.
//!
//! This module defines the success bodies, the error response structures
//! and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::OvertimeCharge;
use crate::error::EngineError;
use crate::models::{LiquidationSnapshot, OvertimeCategory};

/// Version reported in every liquidation response.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Response body for the `/liquidations` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiquidationResponse {
    /// Unique identifier of this liquidation.
    pub liquidation_id: Uuid,
    /// When the liquidation was computed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that computed it.
    pub engine_version: String,
    /// The date that selected the legal parameters.
    pub date: NaiveDate,
    /// Monthly working hours in force on `date`.
    pub monthly_working_hours: u32,
    /// Priced overtime, one entry per registered category.
    pub overtime_charges: Vec<OvertimeCharge>,
    /// The liquidation result.
    pub snapshot: LiquidationSnapshot,
}

/// Response body for the `/overtime` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OvertimeResponse {
    /// The ordinary hourly rate the hours were priced at.
    pub hourly_rate: Decimal,
    /// One entry per requested category.
    pub charges: Vec<OvertimeCharge>,
    /// Sum of every charge.
    pub total: Decimal,
}

/// One row of the `/overtime-categories` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeCategoryInfo {
    /// Payroll code.
    pub code: String,
    /// Human-readable description.
    pub description: String,
    /// Multiplier applied to the ordinary hourly rate.
    pub multiplier: Decimal,
}

impl From<OvertimeCategory> for OvertimeCategoryInfo {
    fn from(category: OvertimeCategory) -> Self {
        Self {
            code: category.code().to_string(),
            description: category.description().to_string(),
            multiplier: category.multiplier(),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            EngineError::ParameterNotFound { year, .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "PARAMETER_NOT_FOUND",
                    message,
                    format!("No legal parameters are configured for {}", year),
                ),
            },
            EngineError::FloorViolation { salary_kind, .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "FLOOR_VIOLATION",
                    message,
                    format!("A {} salary must be at least its legal floor", salary_kind),
                ),
            },
            EngineError::InputDomain { .. } => ApiErrorResponse::bad_request(ApiError::new(
                "INVALID_INPUT",
                message,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_parameter_not_found_is_404() {
        let response: ApiErrorResponse = EngineError::ParameterNotFound {
            parameter: "minimum_wage".to_string(),
            year: 2030,
        }
        .into();

        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.error.code, "PARAMETER_NOT_FOUND");
        assert!(response.error.message.contains("2030"));
    }

    #[test]
    fn test_floor_violation_is_422() {
        let response: ApiErrorResponse = EngineError::FloorViolation {
            salary_kind: "integral".to_string(),
            wage: Decimal::from(5_000_000),
            floor: Decimal::from(16_900_000),
        }
        .into();

        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.error.code, "FLOOR_VIOLATION");
    }

    #[test]
    fn test_input_domain_is_400() {
        let response: ApiErrorResponse = EngineError::InputDomain {
            field: "taxable_pay".to_string(),
            message: "cannot be negative, got -1".to_string(),
        }
        .into();

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "INVALID_INPUT");
        assert!(response.error.message.contains("taxable_pay"));
    }

    #[test]
    fn test_config_errors_are_500() {
        let response: ApiErrorResponse = EngineError::ConfigNotFound {
            path: "config/colombia/parameters.yaml".to_string(),
        }
        .into();

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_category_info_from_category() {
        let info = OvertimeCategoryInfo::from(OvertimeCategory::HolidayNightSurcharge);

        assert_eq!(info.code, "RDN");
        assert_eq!(info.multiplier, Decimal::new(115, 2));
    }
}
