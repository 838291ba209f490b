//! HTTP API module for the payroll liquidation engine.
//!
//! This module provides the REST endpoints that liquidate a monthly payroll,
//! price overtime and expose the legal parameter table.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{LiquidationRequest, OvertimeRequest};
pub use response::{
    ApiError, ApiErrorResponse, ENGINE_VERSION, LiquidationResponse, OvertimeCategoryInfo,
    OvertimeResponse,
};
pub use state::AppState;
