//! HTTP server for the payroll liquidation engine.
//!
//! Environment:
//! - `NOMINA_CONFIG_DIR`: directory holding `parameters.yaml` and
//!   `working_hours.yaml` (default `./config/colombia`)
//! - `NOMINA_BIND_ADDR`: listen address (default `0.0.0.0:3000`)
//! - `RUST_LOG`: tracing filter (default `info`)

use nomina_engine::api::{AppState, create_router};
use nomina_engine::config::{ConfigLoader, ParameterTable};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CONFIG_DIR: &str = "./config/colombia";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_dir =
        std::env::var("NOMINA_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let params = match ConfigLoader::load(&config_dir) {
        Ok(loader) => {
            info!(
                config_dir = %config_dir,
                country = loader.country(),
                years = ?loader.table().available_years(),
                "Loaded legal parameters"
            );
            loader.into_table()
        }
        Err(err) => {
            warn!(
                config_dir = %config_dir,
                error = %err,
                "Falling back to the built-in statutory parameters"
            );
            ParameterTable::statutory()
        }
    };

    let addr = std::env::var("NOMINA_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Payroll liquidation engine listening");

    axum::serve(listener, create_router(AppState::new(params))).await?;
    Ok(())
}
