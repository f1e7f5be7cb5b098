//! Request and response payloads for the authentication endpoints.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::api::ApiError;

/// Bearer token returned by `POST /auth/login`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingToken`] when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, ApiError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ApiError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(<redacted>)")
    }
}

/// Email and password sent to `POST /auth/login`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

impl Credentials {
    /// Bundles an email and password.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Gender values accepted by the registration endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male.
    #[serde(rename = "Masculino")]
    Male,
    /// Female.
    #[serde(rename = "Femenino")]
    Female,
    /// Other.
    #[serde(rename = "Otro")]
    Other,
    /// Prefers not to say.
    #[serde(rename = "Prefiero no decir")]
    Undisclosed,
}

impl Gender {
    /// Every accepted value, in display order.
    pub const ALL: [Self; 4] = [Self::Male, Self::Female, Self::Other, Self::Undisclosed];

    /// Returns the wire value sent to the API.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Male => "Masculino",
            Self::Female => "Femenino",
            Self::Other => "Otro",
            Self::Undisclosed => "Prefiero no decir",
        }
    }

    /// Parses a wire value, ignoring surrounding whitespace.
    #[must_use]
    pub fn from_wire_name(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|gender| gender.wire_name() == trimmed)
    }
}

/// Body of `POST /auth/register`.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    /// Account email.
    pub email: String,
    /// First name.
    pub name: String,
    /// Last name.
    #[serde(rename = "lastname")]
    pub last_name: String,
    /// Declared gender.
    pub gender: Gender,
    /// Birth date as `YYYY-MM-DD`.
    pub date_of_birth: String,
    /// Phone number with the country code prefixed (e.g. `+50377777777`).
    pub phone: String,
    /// Account password.
    pub password: String,
}

impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("last_name", &self.last_name)
            .field("gender", &self.gender)
            .field("date_of_birth", &self.date_of_birth)
            .field("phone", &self.phone)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Account profile returned by `GET /auth/profile` and `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Server-side identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Account email.
    pub email: String,
    /// First name.
    pub name: String,
    /// Last name.
    #[serde(rename = "lastname")]
    pub last_name: String,
    /// Declared gender, as sent by the server.
    #[serde(default)]
    pub gender: String,
    /// Birth date, as sent by the server.
    #[serde(default)]
    pub date_of_birth: String,
    /// Phone number including country code.
    #[serde(default)]
    pub phone: String,
}

impl UserProfile {
    /// Returns the user's full name.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name, self.last_name)
    }
}

/// Partial profile update applied locally to the signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    /// Replacement email.
    pub email: Option<String>,
    /// Replacement first name.
    pub name: Option<String>,
    /// Replacement last name.
    pub last_name: Option<String>,
    /// Replacement gender.
    pub gender: Option<String>,
    /// Replacement birth date.
    pub date_of_birth: Option<String>,
    /// Replacement phone number.
    pub phone: Option<String>,
}

impl UserUpdate {
    /// Overwrites the fields of `profile` that this update sets.
    pub fn apply_to(self, profile: &mut UserProfile) {
        let Self {
            email,
            name,
            last_name,
            gender,
            date_of_birth,
            phone,
        } = self;
        replace_if_set(&mut profile.email, email);
        replace_if_set(&mut profile.name, name);
        replace_if_set(&mut profile.last_name, last_name);
        replace_if_set(&mut profile.gender, gender);
        replace_if_set(&mut profile.date_of_birth, date_of_birth);
        replace_if_set(&mut profile.phone, phone);
    }
}

fn replace_if_set(target: &mut String, value: Option<String>) {
    if let Some(new_value) = value {
        *target = new_value;
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct LoginResponse {
    pub(super) access_token: String,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::blank("")]
    #[case::whitespace("   ")]
    fn blank_token_is_rejected(#[case] raw: &str) {
        assert_eq!(AuthToken::new(raw), Err(ApiError::MissingToken));
    }

    #[test]
    fn token_debug_output_is_redacted() {
        let token = AuthToken::new(" secret-token ").expect("token should be valid");
        assert_eq!(token.value(), "secret-token");
        assert!(!format!("{token:?}").contains("secret"));
    }

    #[test]
    fn credentials_debug_output_hides_password() {
        let credentials = Credentials::new("ana@example.com", "hunter22");
        let rendered = format!("{credentials:?}");
        assert!(rendered.contains("ana@example.com"));
        assert!(!rendered.contains("hunter22"));
    }

    #[rstest]
    #[case::male(Gender::Male)]
    #[case::female(Gender::Female)]
    #[case::other(Gender::Other)]
    #[case::undisclosed(Gender::Undisclosed)]
    fn gender_wire_names_round_trip(#[case] gender: Gender) {
        let encoded = serde_json::to_value(gender).expect("gender should encode");
        assert_eq!(encoded, serde_json::json!(gender.wire_name()));
        assert_eq!(Gender::from_wire_name(gender.wire_name()), Some(gender));
    }

    #[test]
    fn registration_request_uses_api_field_names() {
        let request = RegistrationRequest {
            email: "ana@example.com".to_owned(),
            name: "Ana".to_owned(),
            last_name: "Pérez".to_owned(),
            gender: Gender::Female,
            date_of_birth: "1990-05-04".to_owned(),
            phone: "+50377777777".to_owned(),
            password: "secret1".to_owned(),
        };

        let encoded = serde_json::to_value(&request).expect("request should encode");

        assert_eq!(
            encoded,
            serde_json::json!({
                "email": "ana@example.com",
                "name": "Ana",
                "lastname": "Pérez",
                "gender": "Femenino",
                "dateOfBirth": "1990-05-04",
                "phone": "+50377777777",
                "password": "secret1"
            })
        );
    }

    #[test]
    fn profile_decodes_with_optional_fields_missing() {
        let profile: UserProfile = serde_json::from_value(serde_json::json!({
            "_id": "abc",
            "email": "ana@example.com",
            "name": "Ana",
            "lastname": "Pérez"
        }))
        .expect("profile should decode");

        assert_eq!(profile.id, "abc");
        assert_eq!(profile.display_name(), "Ana Pérez");
        assert!(profile.phone.is_empty());
    }

    #[test]
    fn user_update_only_touches_set_fields() {
        let mut profile: UserProfile = serde_json::from_value(serde_json::json!({
            "_id": "abc", "email": "ana@example.com", "name": "Ana", "lastname": "Pérez",
            "phone": "+50370000000"
        }))
        .expect("profile should decode");

        UserUpdate {
            phone: Some("+50371111111".to_owned()),
            ..UserUpdate::default()
        }
        .apply_to(&mut profile);

        assert_eq!(profile.phone, "+50371111111");
        assert_eq!(profile.name, "Ana");
    }
}
