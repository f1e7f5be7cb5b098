//! Shipdesk CLI entrypoint.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use shipdesk::{ApiError, OperationMode, ShipdeskConfig};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ApiError> {
    let config = load_config()?;
    config.validate()?;

    match config.operation_mode() {
        OperationMode::MigrateDatabase => cli::migrations::run(&config),
        OperationMode::Login => run_blocking(move || cli::auth::login(&config)).await,
        OperationMode::Logout => cli::auth::logout(&config),
        OperationMode::Export => cli::export::run(&config),
        OperationMode::ShipmentTui => cli::shipment_tui::run(&config).await,
        OperationMode::ListShipments => cli::listing::run(&config),
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ApiError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<ShipdeskConfig, ApiError> {
    ShipdeskConfig::load().map_err(|error| ApiError::Configuration {
        message: error.to_string(),
    })
}

/// Runs blocking HTTP work off the async runtime.
async fn run_blocking<F>(operation: F) -> Result<(), ApiError>
where
    F: FnOnce() -> Result<(), ApiError> + Send + 'static,
{
    tokio::task::spawn_blocking(operation)
        .await
        .map_err(|error| ApiError::Io {
            message: format!("background task failed: {error}"),
        })?
}
