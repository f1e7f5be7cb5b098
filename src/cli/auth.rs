//! Sign-in and sign-out operations.
//!
//! A successful login stores the session in the preference database so
//! later runs can reuse the token; logout removes it.

use std::io::{self, Write};

use shipdesk::auth::{AuthGateway, AuthSession, Credentials, HttpAuthGateway};
use shipdesk::persistence::{PreferenceKey, PreferenceStore};
use shipdesk::{ApiError, ShipdeskConfig};

use super::{io_error, map_persistence_error};

/// Signs in with the configured credentials and stores the session.
///
/// Uses a blocking HTTP client; call from `spawn_blocking` when running
/// inside a Tokio runtime.
///
/// # Errors
///
/// Returns [`ApiError`] when the credentials are invalid, the API rejects
/// them, or the session cannot be stored.
pub fn login(config: &ShipdeskConfig) -> Result<(), ApiError> {
    let credentials = config.credentials()?;
    let store = preference_store(config)?;
    let gateway = HttpAuthGateway::new(config.api_config()?);

    let session = login_with(&gateway, &credentials, &store)?;
    let name = session
        .user()
        .map_or_else(|| credentials.email.clone(), |user| user.display_name());
    writeln!(io::stdout().lock(), "Signed in as {name}").map_err(|e| io_error(&e))
}

/// Signs in through `gateway` and persists the resulting session.
///
/// # Errors
///
/// Returns the gateway's [`ApiError`], or [`ApiError::Io`] when the
/// session cannot be written.
pub fn login_with(
    gateway: &dyn AuthGateway,
    credentials: &Credentials,
    store: &PreferenceStore,
) -> Result<AuthSession, ApiError> {
    let mut session = AuthSession::new();
    session.login(gateway, credentials)?;
    store
        .save(PreferenceKey::AuthSession, &session.persisted())
        .map_err(|error| map_persistence_error(&error))?;
    Ok(session)
}

/// Removes the stored session.
///
/// # Errors
///
/// Returns [`ApiError`] when the database URL is missing or the session
/// cannot be removed.
pub fn logout(config: &ShipdeskConfig) -> Result<(), ApiError> {
    let store = preference_store(config)?;
    let removed = logout_from(&store)?;
    let message = if removed {
        "Signed out"
    } else {
        "No stored session"
    };
    writeln!(io::stdout().lock(), "{message}").map_err(|e| io_error(&e))
}

/// Deletes the stored session, returning whether one existed.
///
/// # Errors
///
/// Returns [`ApiError`] when the session cannot be removed.
pub fn logout_from(store: &PreferenceStore) -> Result<bool, ApiError> {
    store
        .remove(PreferenceKey::AuthSession)
        .map_err(|error| map_persistence_error(&error))
}

fn preference_store(config: &ShipdeskConfig) -> Result<PreferenceStore, ApiError> {
    config
        .require_database_url()
        .and_then(PreferenceStore::new)
        .map_err(|error| map_persistence_error(&error))
}
