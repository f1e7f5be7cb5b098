//! Field rules shared by every form.
//!
//! Each rule returns the message of the first violated constraint, and
//! [`FormErrors`] collects one message per field.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

/// Minimum password length, in characters.
pub const MIN_PASSWORD_CHARS: usize = 6;

/// Youngest age accepted at registration.
pub const MIN_AGE_YEARS: u32 = 18;

/// Oldest plausible age accepted at registration.
pub const MAX_AGE_YEARS: u32 = 120;

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").ok());

static PHONE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[0-9]{7,15}$").ok());

fn pattern_matches(pattern: &LazyLock<Option<Regex>>, value: &str) -> bool {
    pattern
        .as_ref()
        .is_some_and(|regex| regex.is_match(value))
}

/// Per-field validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", self.render())]
pub struct FormErrors {
    fields: BTreeMap<&'static str, String>,
}

impl FormErrors {
    /// Creates an empty error set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` for `field` unless the field already has one.
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.entry(field).or_insert_with(|| message.into());
    }

    /// Records the outcome of a rule, keeping the first failure per field.
    pub fn check(&mut self, field: &'static str, outcome: Result<(), String>) {
        if let Err(message) = outcome {
            self.insert(field, message);
        }
    }

    /// Returns the message for `field`, if it failed.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// True when no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Failing fields and their messages, sorted by field name.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }

    /// Converts into `Err(self)` when any field failed.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one message was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Joins `field: message` pairs with `; `.
    fn render(&self) -> String {
        self.fields()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}


/// Fails with `message` when `value` is blank.
///
/// # Errors
///
/// Returns `message` when the trimmed value is empty.
pub fn required(value: &str, message: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(message.to_owned());
    }
    Ok(())
}

/// Validates an email address.
///
/// # Errors
///
/// Returns a message when the address is blank or malformed.
pub fn email(value: &str) -> Result<(), String> {
    required(value, "Email is required")?;
    if !pattern_matches(&EMAIL_PATTERN, value.trim()) {
        return Err("Enter a valid email address".to_owned());
    }
    Ok(())
}

/// Validates a password.
///
/// # Errors
///
/// Returns a message when the password is empty or too short.
pub fn password(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("Password is required".to_owned());
    }
    if value.chars().count() < MIN_PASSWORD_CHARS {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_CHARS} characters"
        ));
    }
    Ok(())
}

/// Validates a local phone number (digits only, no country code).
///
/// # Errors
///
/// Returns a message when the number is blank or not 7 to 15 digits.
pub fn phone_number(value: &str) -> Result<(), String> {
    required(value, "Phone number is required")?;
    if !pattern_matches(&PHONE_PATTERN, value.trim()) {
        return Err("Enter a valid phone number (7-15 digits)".to_owned());
    }
    Ok(())
}

/// Parses a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns `missing` when blank, or a generic message when malformed.
pub fn date(value: &str, missing: &str) -> Result<NaiveDate, String> {
    required(value, missing)?;
    value
        .trim()
        .parse::<NaiveDate>()
        .map_err(|_| "Enter a valid date (YYYY-MM-DD)".to_owned())
}

/// Validates a birth date against `today`.
///
/// # Errors
///
/// Returns a message when the date is missing, malformed, in the future,
/// or gives an age outside the accepted range.
pub fn birth_date(value: &str, today: NaiveDate) -> Result<NaiveDate, String> {
    let born = date(value, "Birth date is required")?;
    let Some(age) = today.years_since(born) else {
        return Err("Enter a valid date".to_owned());
    };
    if age < MIN_AGE_YEARS {
        return Err(format!("You must be at least {MIN_AGE_YEARS} years old"));
    }
    if age > MAX_AGE_YEARS {
        return Err("Enter a valid date".to_owned());
    }
    Ok(born)
}
