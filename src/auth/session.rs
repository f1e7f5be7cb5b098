//! Signed-in user state.

use serde::{Deserialize, Serialize};

use crate::api::ApiError;

use super::gateway::AuthGateway;
use super::model::{AuthToken, Credentials, RegistrationRequest, UserProfile, UserUpdate};

/// The persisted part of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedSession {
    /// Profile of the signed-in user.
    pub user: Option<UserProfile>,
    /// Bearer token for API calls.
    pub token: Option<AuthToken>,
}

/// Current authentication state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthSession {
    user: Option<UserProfile>,
    token: Option<AuthToken>,
    loading: bool,
}

impl AuthSession {
    /// Creates a signed-out session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a session from persisted state.
    #[must_use]
    pub fn from_persisted(persisted: PersistedSession) -> Self {
        Self {
            user: persisted.user,
            token: persisted.token,
            loading: false,
        }
    }

    /// Returns the state worth persisting.
    #[must_use]
    pub fn persisted(&self) -> PersistedSession {
        PersistedSession {
            user: self.user.clone(),
            token: self.token.clone(),
        }
    }

    /// True while a login or registration call is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// True once a token is held.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Profile of the signed-in user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// Bearer token, if signed in.
    #[must_use]
    pub const fn token(&self) -> Option<&AuthToken> {
        self.token.as_ref()
    }

    /// Logs in and loads the user's profile.
    ///
    /// The token and profile are stored only when both calls succeed.
    ///
    /// # Errors
    ///
    /// Returns the first [`ApiError`] raised by the gateway; the session is
    /// left unchanged apart from the loading flag being cleared.
    pub fn login(
        &mut self,
        gateway: &dyn AuthGateway,
        credentials: &Credentials,
    ) -> Result<(), ApiError> {
        self.loading = true;
        let outcome = gateway
            .login(credentials)
            .and_then(|token| gateway.profile(&token).map(|user| (token, user)));
        self.loading = false;

        let (token, user) = outcome?;
        tracing::debug!(user_id = %user.id, "signed in");
        self.token = Some(token);
        self.user = Some(user);
        Ok(())
    }

    /// Registers a new account without signing in.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] raised by the gateway.
    pub fn register(
        &mut self,
        gateway: &dyn AuthGateway,
        request: &RegistrationRequest,
    ) -> Result<UserProfile, ApiError> {
        self.loading = true;
        let outcome = gateway.register(request);
        self.loading = false;
        outcome
    }

    /// Reloads the profile using the held token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingToken`] when signed out, or the gateway's
    /// error when the request fails.
    pub fn refresh_profile(&mut self, gateway: &dyn AuthGateway) -> Result<(), ApiError> {
        let token = self.token.as_ref().ok_or(ApiError::MissingToken)?;
        self.user = Some(gateway.profile(token)?);
        Ok(())
    }

    /// Clears user, token and loading state.
    pub fn logout(&mut self) {
        *self = Self::default();
    }

    /// Merges `update` into the current user; does nothing when signed out.
    pub fn update_user(&mut self, update: UserUpdate) {
        if let Some(user) = self.user.as_mut() {
            update.apply_to(user);
        }
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use rstest::{fixture, rstest};

    use super::*;

    mock! {
        pub Gateway {}

        impl std::fmt::Debug for Gateway {
            fn fmt<'a>(&self, f: &mut std::fmt::Formatter<'a>) -> std::fmt::Result;
        }

        impl AuthGateway for Gateway {
            fn login<'a>(&self, credentials: &'a Credentials) -> Result<AuthToken, ApiError>;
            fn register<'a>(
                &self,
                request: &'a RegistrationRequest,
            ) -> Result<UserProfile, ApiError>;
            fn profile<'a>(&self, token: &'a AuthToken) -> Result<UserProfile, ApiError>;
        }
    }

    #[fixture]
    fn profile() -> UserProfile {
        UserProfile {
            id: "u-1".to_owned(),
            email: "ana@example.com".to_owned(),
            name: "Ana".to_owned(),
            last_name: "Pérez".to_owned(),
            gender: "Femenino".to_owned(),
            date_of_birth: "1990-05-04".to_owned(),
            phone: "+50377777777".to_owned(),
        }
    }

    fn token() -> AuthToken {
        AuthToken::new("tok-123").expect("token should be valid")
    }

    fn credentials() -> Credentials {
        Credentials::new("ana@example.com", "secret1")
    }

    #[rstest]
    fn login_stores_token_and_profile(profile: UserProfile) {
        let mut gateway = MockGateway::new();
        gateway.expect_login().times(1).returning(|_| Ok(token()));
        let returned = profile.clone();
        gateway
            .expect_profile()
            .withf(|token| token.value() == "tok-123")
            .times(1)
            .returning(move |_| Ok(returned.clone()));

        let mut session = AuthSession::new();
        session
            .login(&gateway, &credentials())
            .expect("login should succeed");

        assert!(session.is_authenticated());
        assert!(!session.is_loading());
        assert_eq!(session.user(), Some(&profile));
    }

    #[rstest]
    fn failed_profile_fetch_leaves_session_signed_out() {
        let mut gateway = MockGateway::new();
        gateway.expect_login().returning(|_| Ok(token()));
        gateway.expect_profile().returning(|_| {
            Err(ApiError::Authentication {
                message: "Unauthorized".to_owned(),
            })
        });

        let mut session = AuthSession::new();
        let error = session
            .login(&gateway, &credentials())
            .expect_err("login should fail");

        assert!(matches!(error, ApiError::Authentication { .. }));
        assert!(!session.is_authenticated());
        assert!(!session.is_loading());
        assert!(session.user().is_none());
    }

    #[rstest]
    fn rejected_credentials_skip_profile_fetch() {
        let mut gateway = MockGateway::new();
        gateway.expect_login().returning(|_| {
            Err(ApiError::Authentication {
                message: "Invalid credentials".to_owned(),
            })
        });
        gateway.expect_profile().never();

        let mut session = AuthSession::new();
        assert!(session.login(&gateway, &credentials()).is_err());
        assert!(!session.is_authenticated());
    }

    #[rstest]
    fn logout_clears_everything(profile: UserProfile) {
        let mut session = AuthSession::from_persisted(PersistedSession {
            user: Some(profile),
            token: Some(token()),
        });
        assert!(session.is_authenticated());

        session.logout();

        assert_eq!(session, AuthSession::default());
    }

    #[rstest]
    fn update_user_merges_into_signed_in_user(profile: UserProfile) {
        let mut session = AuthSession::from_persisted(PersistedSession {
            user: Some(profile),
            token: Some(token()),
        });

        session.update_user(UserUpdate {
            name: Some("Anabel".to_owned()),
            ..UserUpdate::default()
        });

        let user = session.user().expect("user should be present");
        assert_eq!(user.name, "Anabel");
        assert_eq!(user.last_name, "Pérez");
    }

    #[rstest]
    fn update_user_without_user_is_noop() {
        let mut session = AuthSession::new();
        session.update_user(UserUpdate {
            name: Some("Anabel".to_owned()),
            ..UserUpdate::default()
        });
        assert!(session.user().is_none());
    }

    #[rstest]
    fn refresh_profile_requires_token() {
        let gateway = MockGateway::new();
        let mut session = AuthSession::new();

        assert_eq!(
            session.refresh_profile(&gateway),
            Err(ApiError::MissingToken)
        );
    }

    #[rstest]
    fn persisted_session_round_trips_through_json(profile: UserProfile) {
        let session = AuthSession::from_persisted(PersistedSession {
            user: Some(profile),
            token: Some(token()),
        });

        let encoded = serde_json::to_string(&session.persisted()).expect("session should encode");
        let decoded: PersistedSession =
            serde_json::from_str(&encoded).expect("session should decode");

        assert_eq!(AuthSession::from_persisted(decoded), session);
    }
}
