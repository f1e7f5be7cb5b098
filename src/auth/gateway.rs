//! HTTP gateway for the authentication endpoints.

use crate::api::{ApiConfig, ApiError, check_response, transport_error};

use super::model::{AuthToken, Credentials, LoginResponse, RegistrationRequest, UserProfile};

/// Authentication operations offered by the shipping API.
pub trait AuthGateway: Send + Sync + std::fmt::Debug {
    /// Exchanges credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Authentication`] when the credentials are
    /// rejected, or another [`ApiError`] when the request fails.
    fn login(&self, credentials: &Credentials) -> Result<AuthToken, ApiError>;

    /// Creates a new account.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the server refuses the registration or the
    /// request fails.
    fn register(&self, request: &RegistrationRequest) -> Result<UserProfile, ApiError>;

    /// Fetches the profile of the token's owner.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Authentication`] when the token is rejected, or
    /// another [`ApiError`] when the request fails.
    fn profile(&self, token: &AuthToken) -> Result<UserProfile, ApiError>;
}

/// Blocking `reqwest` implementation of [`AuthGateway`].
#[derive(Debug, Clone, Default)]
pub struct HttpAuthGateway {
    config: ApiConfig,
}

impl HttpAuthGateway {
    /// Creates a gateway targeting the configured API.
    #[must_use]
    pub const fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Returns the API configuration in use.
    #[must_use]
    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }
}

impl AuthGateway for HttpAuthGateway {
    fn login(&self, credentials: &Credentials) -> Result<AuthToken, ApiError> {
        let endpoint = self.config.endpoint("/auth/login");
        tracing::debug!(%endpoint, "requesting access token");

        let response = self
            .config
            .http_client()?
            .post(endpoint)
            .json(credentials)
            .send()
            .map_err(|error| transport_error("login request failed", &error))?;

        let payload: LoginResponse =
            check_response(response)?
                .json()
                .map_err(|error| ApiError::Api {
                    message: format!("login response JSON decoding failed: {error}"),
                })?;

        AuthToken::new(payload.access_token).map_err(|_| ApiError::Api {
            message: "login response did not contain an access token".to_owned(),
        })
    }

    fn register(&self, request: &RegistrationRequest) -> Result<UserProfile, ApiError> {
        let endpoint = self.config.endpoint("/auth/register");
        tracing::debug!(%endpoint, email = %request.email, "registering account");

        let response = self
            .config
            .http_client()?
            .post(endpoint)
            .json(request)
            .send()
            .map_err(|error| transport_error("registration request failed", &error))?;

        check_response(response)?
            .json()
            .map_err(|error| ApiError::Api {
                message: format!("registration response JSON decoding failed: {error}"),
            })
    }

    fn profile(&self, token: &AuthToken) -> Result<UserProfile, ApiError> {
        let endpoint = self.config.endpoint("/auth/profile");
        tracing::debug!(%endpoint, "fetching profile");

        let response = self
            .config
            .http_client()?
            .get(endpoint)
            .bearer_auth(token.value())
            .send()
            .map_err(|error| transport_error("profile request failed", &error))?;

        check_response(response)?
            .json()
            .map_err(|error| ApiError::Api {
                message: format!("profile response JSON decoding failed: {error}"),
            })
    }
}

#[cfg(test)]
#[path = "gateway_tests.rs"]
mod tests;
