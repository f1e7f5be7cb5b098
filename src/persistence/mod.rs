//! Local persistence and database migrations.
//!
//! Shipdesk keeps filter criteria, dashboard preferences and the auth
//! session in a local sqlite database. The schema is managed with Diesel
//! migrations so the database can be created and upgraded consistently
//! across machines.

mod error;
mod migrator;
mod preference_store;
mod user_preferences;

pub use error::PersistenceError;
pub use migrator::{
    CURRENT_SCHEMA_VERSION, INITIAL_SCHEMA_VERSION, SchemaVersion, migrate_database,
};
pub use preference_store::{PreferenceKey, PreferenceStore};
pub use user_preferences::{DashboardTab, UserPreferences};
