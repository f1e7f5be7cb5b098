//! Application configuration loaded from CLI, environment, and files.
//!
//! [`ShipdeskConfig`] merges command-line arguments, environment variables
//! and configuration files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.shipdesk.toml` in the current directory,
//!    home directory, or XDG config directory
//! 3. **Environment variables** – `SHIPDESK_API_URL`,
//!    `SHIPDESK_DATABASE_URL`, and so on
//! 4. **Command-line arguments** – `--api-url`, `--database-url`, ...
//!
//! # Configuration File
//!
//! ```toml
//! api_url = "https://api.example.com"
//! database_url = "shipdesk.sqlite"
//! shipments_file = "shipments.json"
//! query = "bogotá"
//! date_range = "2024-01-01..2024-01-31"
//! ```

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::api::{ApiConfig, ApiError, DEFAULT_API_BASE_URL};
use crate::auth::Credentials;
use crate::export::ExportFormat;
use crate::forms::LoginForm;
use crate::persistence::PersistenceError;
use crate::store::{DateRange, FilterCriteria};

/// Operation mode determined by configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OperationMode {
    /// Apply pending database migrations and exit.
    MigrateDatabase,
    /// Sign in and persist the session.
    Login,
    /// Forget the persisted session.
    Logout,
    /// Write the filtered shipments in an export format.
    Export,
    /// Interactive shipment history screen.
    ShipmentTui,
    /// Print the filtered shipment table.
    #[default]
    ListShipments,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `SHIPDESK_API_URL` or `--api-url`: Base URL of the shipping API
/// - `SHIPDESK_DATABASE_URL` or `--database-url`: Local `SQLite` database
/// - `SHIPDESK_SHIPMENTS_FILE` or `--shipments-file`: JSON shipment list
/// - `SHIPDESK_EMAIL` / `SHIPDESK_PASSWORD`: Login credentials
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use shipdesk::ShipdeskConfig;
///
/// let config = ShipdeskConfig::load().expect("failed to load configuration");
/// let criteria = config.filter_criteria().expect("invalid filters");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "SHIPDESK",
    discovery(
        dotfile_name = ".shipdesk.toml",
        config_file_name = "shipdesk.toml",
        app_name = "shipdesk"
    )
)]
pub struct ShipdeskConfig {
    /// Base URL of the shipping API.
    ///
    /// Defaults to `http://localhost:3000` when unset.
    #[ortho_config(cli_short = 'a')]
    pub api_url: Option<String>,

    /// Local `SQLite` database URL/path used for persistence.
    ///
    /// Filters, dashboard preferences and the auth session are only
    /// remembered between runs when this is set.
    #[ortho_config(cli_short = 'd')]
    pub database_url: Option<String>,

    /// Runs database migrations and exits.
    #[ortho_config()]
    pub migrate_db: bool,

    /// JSON array of shipments to load instead of the sample data set.
    #[ortho_config(cli_short = 'f')]
    pub shipments_file: Option<String>,

    /// Free-text query applied to listings and exports.
    #[ortho_config(cli_short = 'q')]
    pub query: Option<String>,

    /// Inclusive date range (`YYYY-MM-DD..YYYY-MM-DD`) applied to listings
    /// and exports.
    #[ortho_config(cli_short = 'r')]
    pub date_range: Option<String>,

    /// Account email used by `--login`.
    #[ortho_config(cli_short = 'e')]
    pub email: Option<String>,

    /// Account password used by `--login`.
    #[ortho_config(cli_short = 'p')]
    pub password: Option<String>,

    /// Signs in with `email` and `password` and stores the session.
    ///
    /// Note: `ortho_config` does not load boolean values from the
    /// environment, so this flag is CLI or file only.
    #[ortho_config()]
    pub login: bool,

    /// Removes the stored session.
    #[ortho_config()]
    pub logout: bool,

    /// Exports the filtered shipments in the given format (`markdown` or
    /// `jsonl`).
    #[ortho_config(cli_short = 'x')]
    pub export: Option<String>,

    /// Output path for exports; stdout when unset.
    #[ortho_config(cli_short = 'o')]
    pub output: Option<String>,

    /// Launches the interactive shipment history screen.
    #[ortho_config(cli_short = 'T')]
    pub tui: bool,
}

impl ShipdeskConfig {
    /// Determines the operation mode.
    ///
    /// Migrations win over everything, then logout, login, export and the
    /// TUI. Without any of these the filtered shipment table is printed.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.migrate_db {
            OperationMode::MigrateDatabase
        } else if self.logout {
            OperationMode::Logout
        } else if self.login {
            OperationMode::Login
        } else if self.export.is_some() {
            OperationMode::Export
        } else if self.tui {
            OperationMode::ShipmentTui
        } else {
            OperationMode::ListShipments
        }
    }

    /// Checks the configuration for conflicting or malformed values.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] when `login` and `logout` are both
    /// set, the API URL is not an HTTP(S) URL, the export format is unknown,
    /// or the date range does not parse.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.login && self.logout {
            return Err(ApiError::Configuration {
                message: "--login and --logout cannot be used together".to_owned(),
            });
        }
        self.api_config()?;
        self.export_format()?;
        self.filter_criteria()?;
        Ok(())
    }

    /// Builds the API connection settings.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] when `api_url` is not an absolute
    /// `http` or `https` URL.
    pub fn api_config(&self) -> Result<ApiConfig, ApiError> {
        let raw = self.api_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL);
        let parsed = Url::parse(raw).map_err(|error| ApiError::Configuration {
            message: format!("invalid API URL '{raw}': {error}"),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::Configuration {
                message: format!("API URL '{raw}' must use http or https"),
            });
        }
        Ok(ApiConfig::new(raw.trim_end_matches('/')))
    }

    /// Returns the database URL or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::MissingDatabaseUrl`] when none is
    /// configured.
    pub fn require_database_url(&self) -> Result<&str, PersistenceError> {
        self.database_url
            .as_deref()
            .ok_or(PersistenceError::MissingDatabaseUrl)
    }

    /// Validates `email` and `password` into login credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] listing every field that failed.
    pub fn credentials(&self) -> Result<Credentials, ApiError> {
        let form = LoginForm {
            email: self.email.clone().unwrap_or_default(),
            password: self.password.clone().unwrap_or_default(),
        };
        form.validate().map_err(|errors| ApiError::Validation {
            message: errors.to_string(),
        })
    }

    /// Parses the configured export format, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] for unknown formats.
    pub fn export_format(&self) -> Result<Option<ExportFormat>, ApiError> {
        self.export.as_deref().map(str::parse).transpose()
    }

    /// Returns the export output path, if one is configured.
    #[must_use]
    pub fn output_path(&self) -> Option<Utf8PathBuf> {
        self.output.as_deref().map(Utf8PathBuf::from)
    }

    /// Returns the shipments file path, if one is configured.
    #[must_use]
    pub fn shipments_path(&self) -> Option<Utf8PathBuf> {
        self.shipments_file.as_deref().map(Utf8PathBuf::from)
    }

    /// Builds the filter criteria from `query` and `date_range`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] when the date range is malformed
    /// or inverted.
    pub fn filter_criteria(&self) -> Result<FilterCriteria, ApiError> {
        let date_range = self
            .date_range
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .map(str::parse::<DateRange>)
            .transpose()
            .map_err(|error| ApiError::Configuration {
                message: error.to_string(),
            })?;

        Ok(FilterCriteria {
            query: self.query.clone().unwrap_or_default(),
            date_range,
        })
    }
}

#[cfg(test)]
mod tests;
