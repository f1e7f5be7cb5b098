//! Shared configuration and error handling for the remote shipping API.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use serde::Deserialize;

mod error;

pub use error::ApiError;

/// Base URL used when none is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Connection settings for the shipping API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base API URL without a trailing slash (e.g. `http://localhost:3000`).
    pub base_url: String,
    /// HTTP timeout applied to every request.
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    /// Creates a configuration for `base_url` with the default timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Overrides the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Joins `path` onto the base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub(crate) fn http_client(&self) -> Result<Client, ApiError> {
        Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|error| ApiError::Configuration {
                message: format!("failed to configure API HTTP client: {error}"),
            })
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<serde_json::Value>,
}

/// Passes successful responses through and maps failures to [`ApiError`].
///
/// The server's `message` field is preferred; without one the error reads
/// `HTTP error! status: N`.
pub(crate) fn check_response(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<ErrorBody>()
        .ok()
        .and_then(|body| body.message)
        .and_then(|value| message_text(&value))
        .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));

    tracing::warn!(status = status.as_u16(), "shipping API request failed: {message}");

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(ApiError::Authentication { message });
    }
    Err(ApiError::Api { message })
}

/// Servers built on validation pipes send `message` as a list of strings.
fn message_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        serde_json::Value::Array(items) => {
            let parts: Vec<&str> = items.iter().filter_map(serde_json::Value::as_str).collect();
            (!parts.is_empty()).then(|| parts.join("; "))
        }
        _ => None,
    }
}

#[must_use]
pub(crate) fn transport_error(context: &str, error: &reqwest::Error) -> ApiError {
    ApiError::Network {
        message: format!("{context}: {error}"),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::plain("http://localhost:3000", "/auth/login")]
    #[case::trailing_slash("http://localhost:3000/", "auth/login")]
    fn endpoint_joins_with_single_slash(#[case] base: &str, #[case] path: &str) {
        assert_eq!(
            ApiConfig::new(base).endpoint(path),
            "http://localhost:3000/auth/login"
        );
    }

    #[rstest]
    #[case::text(serde_json::json!("Invalid credentials"), Some("Invalid credentials"))]
    #[case::list(serde_json::json!(["email must be an email", "password too short"]),
        Some("email must be an email; password too short"))]
    #[case::blank(serde_json::json!("  "), None)]
    #[case::number(serde_json::json!(42), None)]
    fn message_text_accepts_strings_and_lists(
        #[case] value: serde_json::Value,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(message_text(&value).as_deref(), expected);
    }

    #[test]
    fn default_config_targets_local_server() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }
}
