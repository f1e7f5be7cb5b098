//! CLI operation mode handlers.
//!
//! - [`auth`]: sign in and sign out against the shipping API
//! - [`export`]: write the filtered shipments as Markdown or JSONL
//! - [`listing`]: print the filtered shipment table
//! - [`migrations`]: database schema migrations
//! - [`shipment_tui`]: interactive shipment history TUI

use std::io;

use shipdesk::persistence::PersistenceError;
use shipdesk::shipments::{Shipment, load_shipments_file, sample_shipments};
use shipdesk::store::{PersistedFilters, ShipmentFilterStore};
use shipdesk::{ApiError, ShipdeskConfig};

pub mod auth;
pub mod export;
pub mod listing;
pub mod migrations;
pub mod shipment_tui;

/// Loads the configured shipments file, or the bundled sample set.
///
/// # Errors
///
/// Returns [`ApiError`] when the shipments file cannot be read or decoded.
pub fn load_shipments(config: &ShipdeskConfig) -> Result<Vec<Shipment>, ApiError> {
    config
        .shipments_path()
        .map_or_else(|| Ok(sample_shipments()), |path| load_shipments_file(&path))
}

/// Builds a store with the `--query`/`--date-range` criteria committed.
///
/// # Errors
///
/// Returns [`ApiError`] when the shipments cannot be loaded or the date
/// range is invalid.
pub fn filtered_store(config: &ShipdeskConfig) -> Result<ShipmentFilterStore, ApiError> {
    let criteria = config.filter_criteria()?;
    let shipments = load_shipments(config)?;
    Ok(ShipmentFilterStore::with_filters(
        shipments,
        PersistedFilters {
            committed: criteria.clone(),
            staged: criteria,
        },
    ))
}

/// Maps a persistence error to an API-layer error.
///
/// Configuration problems (missing or blank URL) become
/// [`ApiError::Configuration`]; runtime failures become [`ApiError::Io`].
pub fn map_persistence_error(error: &PersistenceError) -> ApiError {
    if is_configuration_error(error) {
        ApiError::Configuration {
            message: error.to_string(),
        }
    } else {
        ApiError::Io {
            message: error.to_string(),
        }
    }
}

const fn is_configuration_error(error: &PersistenceError) -> bool {
    matches!(
        error,
        PersistenceError::MissingDatabaseUrl | PersistenceError::BlankDatabaseUrl
    )
}

pub(crate) fn io_error(error: &io::Error) -> ApiError {
    ApiError::Io {
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::missing(PersistenceError::MissingDatabaseUrl, true)]
    #[case::blank(PersistenceError::BlankDatabaseUrl, true)]
    #[case::schema(PersistenceError::SchemaNotInitialised, false)]
    #[case::connect(PersistenceError::ConnectionFailed { message: "locked".to_owned() }, false)]
    fn persistence_errors_split_into_configuration_and_io(
        #[case] error: PersistenceError,
        #[case] configuration: bool,
    ) {
        let mapped = map_persistence_error(&error);

        assert_eq!(
            matches!(mapped, ApiError::Configuration { .. }),
            configuration
        );
        assert!(mapped.to_string().contains(&error.to_string()));
    }

    #[rstest]
    fn store_commits_cli_criteria() {
        let config = ShipdeskConfig {
            query: Some("garc".to_owned()),
            ..Default::default()
        };

        let store = filtered_store(&config).expect("sample shipments");

        assert_eq!(store.visible_count(), 1);
        assert_eq!(store.committed(), store.staged());
    }

    #[rstest]
    fn invalid_date_range_is_a_configuration_error() {
        let config = ShipdeskConfig {
            date_range: Some("2024-01-17..2024-01-16".to_owned()),
            ..Default::default()
        };

        assert!(matches!(
            filtered_store(&config),
            Err(ApiError::Configuration { .. })
        ));
    }
}
