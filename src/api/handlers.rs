//! HTTP request handlers for the payroll liquidation API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::YearParameters;
use crate::models::OvertimeCategory;

use super::request::{LiquidationRequest, OvertimeRequest};
use super::response::{
    ApiError, ApiErrorResponse, ENGINE_VERSION, LiquidationResponse, OvertimeCategoryInfo,
    OvertimeResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/liquidations", post(liquidation_handler))
        .route("/overtime", post(overtime_handler))
        .route("/overtime-categories", get(overtime_categories_handler))
        .route("/parameters/:year", get(parameters_handler))
        .with_state(state)
}

/// Handler for POST /liquidations.
///
/// Configures a liquidation session from the request, liquidates it and
/// returns the snapshot.
async fn liquidation_handler(
    State(state): State<AppState>,
    payload: Result<Json<LiquidationRequest>, JsonRejection>,
) -> Result<Json<LiquidationResponse>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing liquidation request");

    let Json(request) = payload.map_err(|rejection| rejection_error(rejection, correlation_id))?;
    let date = request.date;

    let start_time = Instant::now();
    let mut liquidation = request
        .into_liquidation(state.params())
        .map_err(|err| {
            warn!(correlation_id = %correlation_id, error = %err, "Liquidation rejected");
            ApiErrorResponse::from(err)
        })?;
    let snapshot = liquidation.liquidate();

    info!(
        correlation_id = %correlation_id,
        date = %date,
        salary_kind = %liquidation.wage().salary_kind(),
        total_cost = %snapshot.total_cost,
        duration_us = start_time.elapsed().as_micros(),
        "Liquidation completed successfully"
    );

    Ok(Json(LiquidationResponse {
        liquidation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        date,
        monthly_working_hours: liquidation.monthly_working_hours(),
        overtime_charges: liquidation.overtime().charges(),
        snapshot,
    }))
}

/// Handler for POST /overtime.
///
/// Prices overtime hours without running a full liquidation.
async fn overtime_handler(
    State(state): State<AppState>,
    payload: Result<Json<OvertimeRequest>, JsonRejection>,
) -> Result<Json<OvertimeResponse>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing overtime request");

    let Json(request) = payload.map_err(|rejection| rejection_error(rejection, correlation_id))?;

    let ledger = request
        .into_ledger(state.params(), Utc::now().date_naive())
        .map_err(|err| {
            warn!(correlation_id = %correlation_id, error = %err, "Overtime request rejected");
            ApiErrorResponse::from(err)
        })?;

    let response = OvertimeResponse {
        hourly_rate: ledger.hourly_rate(),
        charges: ledger.charges(),
        total: ledger.total(),
    };
    info!(
        correlation_id = %correlation_id,
        categories = response.charges.len(),
        total = %response.total,
        "Overtime priced"
    );

    Ok(Json(response))
}

/// Handler for GET /overtime-categories.
async fn overtime_categories_handler() -> Json<Vec<OvertimeCategoryInfo>> {
    Json(
        OvertimeCategory::ALL
            .into_iter()
            .map(OvertimeCategoryInfo::from)
            .collect(),
    )
}

/// Handler for GET /parameters/:year.
async fn parameters_handler(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> Result<Json<YearParameters>, ApiErrorResponse> {
    state.params().parameters_for_year(year).map(Json).map_err(|err| {
        warn!(year, error = %err, "Parameter lookup failed");
        ApiErrorResponse::from(err)
    })
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}
