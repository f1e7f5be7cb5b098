//! Login and registration forms.

use chrono::NaiveDate;

use crate::auth::{Credentials, Gender, RegistrationRequest};

use super::validation::{self, FormErrors};

/// Country code prefilled on the registration form.
pub const DEFAULT_COUNTRY_CODE: &str = "+503";

/// Raw login form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

impl LoginForm {
    /// Validates the form and produces login credentials.
    ///
    /// # Errors
    ///
    /// Returns [`FormErrors`] keyed by `email` and `password`.
    pub fn validate(&self) -> Result<Credentials, FormErrors> {
        let mut errors = FormErrors::new();
        errors.check("email", validation::email(&self.email));
        errors.check("password", validation::password(&self.password));
        errors.into_result()?;

        Ok(Credentials::new(self.email.trim(), self.password.as_str()))
    }
}

/// Raw registration form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    /// First name.
    pub name: String,
    /// Last name.
    pub last_name: String,
    /// Gender, as one of the accepted wire values.
    pub gender: String,
    /// Birth date as `YYYY-MM-DD`.
    pub birth_date: String,
    /// Account email.
    pub email: String,
    /// Dialling prefix such as `+503`.
    pub country_code: String,
    /// Local phone number, digits only.
    pub phone_number: String,
    /// Chosen password.
    pub password: String,
    /// Password repeated for confirmation.
    pub confirm_password: String,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            last_name: String::new(),
            gender: String::new(),
            birth_date: String::new(),
            email: String::new(),
            country_code: DEFAULT_COUNTRY_CODE.to_owned(),
            phone_number: String::new(),
            password: String::new(),
            confirm_password: String::new(),
        }
    }
}

impl RegistrationForm {
    /// Validates the form against `today` and builds the API request.
    ///
    /// # Errors
    ///
    /// Returns [`FormErrors`] with one message per failing field.
    pub fn validate(&self, today: NaiveDate) -> Result<RegistrationRequest, FormErrors> {
        let mut errors = FormErrors::new();
        errors.check(
            "name",
            validation::required(&self.name, "First name is required"),
        );
        errors.check(
            "last_name",
            validation::required(&self.last_name, "Last name is required"),
        );

        errors.check("email", validation::email(&self.email));
        errors.check(
            "country_code",
            validation::required(&self.country_code, "Country code is required"),
        );
        errors.check("phone_number", validation::phone_number(&self.phone_number));
        errors.check("password", validation::password(&self.password));
        if self.confirm_password.is_empty() {
            errors.insert("confirm_password", "Confirm your password");
        } else if self.confirm_password != self.password {
            errors.insert("confirm_password", "Passwords do not match");
        }

        let gender = parse_gender(&self.gender);
        let born = validation::birth_date(&self.birth_date, today);
        match (gender, born) {
            (Ok(gender_value), Ok(born_on)) if errors.is_empty() => Ok(RegistrationRequest {
                email: self.email.trim().to_owned(),
                name: self.name.trim().to_owned(),
                last_name: self.last_name.trim().to_owned(),
                gender: gender_value,
                date_of_birth: born_on.to_string(),
                phone: format!("{}{}", self.country_code.trim(), self.phone_number.trim()),
                password: self.password.clone(),
            }),
            (gender_outcome, born_outcome) => {
                errors.check("gender", gender_outcome.map(drop));
                errors.check("birth_date", born_outcome.map(drop));
                Err(errors)
            }
        }
    }
}

fn parse_gender(value: &str) -> Result<Gender, String> {
    validation::required(value, "Gender is required")?;
    Gender::from_wire_name(value).ok_or_else(|| "Select one of the listed options".to_owned())
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 17).expect("valid date")
    }

    #[fixture]
    fn filled_registration() -> RegistrationForm {
        RegistrationForm {
            name: "Ana".to_owned(),
            last_name: "Pérez".to_owned(),
            gender: "Femenino".to_owned(),
            birth_date: "1990-05-04".to_owned(),
            email: "ana@example.com".to_owned(),
            phone_number: "77777777".to_owned(),
            password: "secret1".to_owned(),
            confirm_password: "secret1".to_owned(),
            ..RegistrationForm::default()
        }
    }

    #[test]
    fn login_form_produces_trimmed_credentials() {
        let form = LoginForm {
            email: " ana@example.com ".to_owned(),
            password: "secret1".to_owned(),
        };

        let credentials = form.validate().expect("form should validate");

        assert_eq!(credentials.email, "ana@example.com");
        assert_eq!(credentials.password, "secret1");
    }

    #[test]
    fn empty_login_form_reports_both_fields() {
        let errors = LoginForm::default()
            .validate()
            .expect_err("empty form should fail");

        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));
    }

    #[rstest]
    fn registration_defaults_to_el_salvador_prefix() {
        assert_eq!(RegistrationForm::default().country_code, "+503");
    }

    #[rstest]
    fn registration_builds_request_with_prefixed_phone(filled_registration: RegistrationForm) {
        let request = filled_registration
            .validate(today())
            .expect("form should validate");

        assert_eq!(request.phone, "+50377777777");
        assert_eq!(request.gender, Gender::Female);
        assert_eq!(request.date_of_birth, "1990-05-04");
    }

    #[rstest]
    fn registration_rejects_mismatched_confirmation(mut filled_registration: RegistrationForm) {
        filled_registration.confirm_password = "secret2".to_owned();

        let errors = filled_registration
            .validate(today())
            .expect_err("mismatch should fail");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("confirm_password"), Some("Passwords do not match"));
    }

    #[rstest]
    #[case::unknown_gender("gender", "Robot")]
    #[case::too_young("birth_date", "2010-01-01")]
    #[case::bad_phone("phone_number", "7777")]
    fn registration_flags_single_bad_field(
        mut filled_registration: RegistrationForm,
        #[case] field: &str,
        #[case] value: &str,
    ) {
        match field {
            "gender" => filled_registration.gender = value.to_owned(),
            "birth_date" => filled_registration.birth_date = value.to_owned(),
            _ => filled_registration.phone_number = value.to_owned(),
        }

        let errors = filled_registration
            .validate(today())
            .expect_err("bad field should fail");

        assert_eq!(errors.len(), 1, "unexpected errors: {errors}");
        assert!(errors.get(field).is_some());
    }

    #[rstest]
    fn empty_registration_reports_every_required_field() {
        let errors = RegistrationForm::default()
            .validate(today())
            .expect_err("empty form should fail");

        let fields: Vec<&str> = errors.fields().map(|(field, _)| field).collect();
        assert_eq!(
            fields,
            vec![
                "birth_date",
                "confirm_password",
                "email",
                "gender",
                "last_name",
                "name",
                "password",
                "phone_number",
            ]
        );
    }
}
