//! Key-value preference storage backed by `SQLite`.
//!
//! Values are stored as JSON text in the `preferences` table under one of
//! the fixed [`PreferenceKey`]s. Shipment filters, UI preferences and the
//! auth session each live under their own key so they can be restored
//! independently.

use std::fmt;

use diesel::OptionalExtension;
use diesel::QueryableByName;
use diesel::RunQueryDsl;
use diesel::sql_query;
use diesel::sql_types::{BigInt, Text};
use diesel::sqlite::SqliteConnection;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::PersistenceError;
use super::migrator::open_connection;

const PREFERENCES_TABLE: &str = "preferences";

/// Fixed keys under which state is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceKey {
    /// Committed and staged shipment filters.
    ShipmentFilters,
    /// Sidebar and tab preferences.
    UserPreferences,
    /// Signed-in user and token.
    AuthSession,
}

impl PreferenceKey {
    /// Returns the key stored in the database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ShipmentFilters => "shipment-filters",
            Self::UserPreferences => "user-preferences",
            Self::AuthSession => "auth-session",
        }
    }
}

impl fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// SQLite-backed preference store.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    database_url: String,
}

impl PreferenceStore {
    /// Create a store targeting the configured `database_url`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::BlankDatabaseUrl`] when the URL is blank.
    pub fn new(database_url: impl Into<String>) -> Result<Self, PersistenceError> {
        let database_url_string = database_url.into();
        if database_url_string.trim().is_empty() {
            return Err(PersistenceError::BlankDatabaseUrl);
        }
        Ok(Self {
            database_url: database_url_string,
        })
    }

    /// Returns the database URL this store writes to.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Loads and decodes the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when the database cannot be opened, the
    /// schema is missing, the query fails, or the stored JSON does not decode.
    pub fn load<T: DeserializeOwned>(
        &self,
        key: PreferenceKey,
    ) -> Result<Option<T>, PersistenceError> {
        #[derive(Debug, QueryableByName)]
        struct Row {
            #[diesel(sql_type = Text)]
            value: String,
        }

        let mut connection = open_connection(&self.database_url)?;

        let row: Option<Row> = sql_query("SELECT value FROM preferences WHERE key = ? LIMIT 1;")
            .bind::<Text, _>(key.as_str())
            .get_result(&mut connection)
            .optional()
            .map_err(|error| Self::map_query_error(&mut connection, &error))?;

        row.map(|found| {
            serde_json::from_str(&found.value).map_err(|error| PersistenceError::DecodeFailed {
                key: key.as_str().to_owned(),
                message: error.to_string(),
            })
        })
        .transpose()
    }

    /// Loads `key`, logging and discarding any failure.
    ///
    /// Used on startup paths where falling back to defaults beats refusing
    /// to start.
    #[must_use]
    pub fn load_or_warn<T: DeserializeOwned>(&self, key: PreferenceKey) -> Option<T> {
        self.load(key).unwrap_or_else(|error| {
            tracing::warn!(%key, "ignoring stored preference: {error}");
            None
        })
    }

    /// Encodes `value` and stores it under `key`, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when encoding fails, the schema is
    /// missing, or the write fails.
    pub fn save<T: Serialize>(&self, key: PreferenceKey, value: &T) -> Result<(), PersistenceError> {
        let encoded =
            serde_json::to_string(value).map_err(|error| PersistenceError::EncodeFailed {
                key: key.as_str().to_owned(),
                message: error.to_string(),
            })?;

        let mut connection = open_connection(&self.database_url)?;

        sql_query(
            "INSERT INTO preferences (key, value) VALUES (?, ?) \
             ON CONFLICT(key) DO UPDATE SET \
               value = excluded.value, \
               updated_at = CURRENT_TIMESTAMP;",
        )
        .bind::<Text, _>(key.as_str())
        .bind::<Text, _>(encoded)
        .execute(&mut connection)
        .map(drop)
        .map_err(|error| Self::map_write_error(&mut connection, &error))
    }

    /// Deletes the value under `key`, returning whether one existed.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when the schema is missing or the write
    /// fails.
    pub fn remove(&self, key: PreferenceKey) -> Result<bool, PersistenceError> {
        let mut connection = open_connection(&self.database_url)?;

        let affected = sql_query("DELETE FROM preferences WHERE key = ?;")
            .bind::<Text, _>(key.as_str())
            .execute(&mut connection)
            .map_err(|error| Self::map_write_error(&mut connection, &error))?;

        Ok(affected > 0)
    }

    fn preferences_table_exists(
        connection: &mut SqliteConnection,
    ) -> Result<bool, diesel::result::Error> {
        #[derive(Debug, QueryableByName)]
        struct Row {
            #[diesel(sql_type = BigInt)]
            count: i64,
        }

        let row: Row = sql_query(
            "SELECT COUNT(*) AS count FROM sqlite_master WHERE type = 'table' AND name = ?;",
        )
        .bind::<Text, _>(PREFERENCES_TABLE)
        .get_result(connection)?;

        Ok(row.count > 0)
    }

    fn map_error_with_schema_check<F>(
        connection: &mut SqliteConnection,
        error: &diesel::result::Error,
        create_error: F,
    ) -> PersistenceError
    where
        F: Fn(String) -> PersistenceError,
    {
        match Self::preferences_table_exists(connection) {
            Ok(false) => PersistenceError::SchemaNotInitialised,
            Ok(true) => create_error(error.to_string()),
            Err(check_error) => create_error(format!(
                "schema presence check failed: {check_error}; original error: {error}"
            )),
        }
    }

    fn map_query_error(
        connection: &mut SqliteConnection,
        error: &diesel::result::Error,
    ) -> PersistenceError {
        Self::map_error_with_schema_check(connection, error, |message| {
            PersistenceError::QueryFailed { message }
        })
    }

    fn map_write_error(
        connection: &mut SqliteConnection,
        error: &diesel::result::Error,
    ) -> PersistenceError {
        Self::map_error_with_schema_check(connection, error, |message| {
            PersistenceError::WriteFailed { message }
        })
    }
}
