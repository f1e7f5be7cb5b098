//! Database migration operations.

use shipdesk::persistence::migrate_database;
use shipdesk::telemetry::StderrJsonlTelemetrySink;
use shipdesk::{ApiError, ShipdeskConfig};

use super::map_persistence_error;

/// Runs database migrations.
///
/// # Errors
///
/// Returns [`ApiError::Configuration`] if the database URL is missing or
/// blank, and [`ApiError::Io`] for connection or migration failures.
pub fn run(config: &ShipdeskConfig) -> Result<(), ApiError> {
    let database_url = config
        .require_database_url()
        .map_err(|error| map_persistence_error(&error))?;

    let telemetry = StderrJsonlTelemetrySink;
    let version = migrate_database(database_url, &telemetry)
        .map_err(|error| map_persistence_error(&error))?;
    tracing::debug!(schema_version = version.as_str(), "database migrated");
    Ok(())
}
