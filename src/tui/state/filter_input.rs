//! Text entry for the staged filter fields.

use crate::store::{DateRange, FilterCriteria, FilterError, StagedField};

/// Staged field being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    /// Free-text search.
    Query,
    /// Date range typed as `YYYY-MM-DD..YYYY-MM-DD`.
    DateRange,
}

impl InputField {
    /// Prompt shown before the edit buffer.
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::Query => "Search",
            Self::DateRange => "Period (YYYY-MM-DD..YYYY-MM-DD)",
        }
    }
}

/// An in-progress edit of one staged field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterInput {
    field: InputField,
    buffer: String,
}

impl FilterInput {
    /// Starts editing `field`, seeded from the current staged criteria.
    #[must_use]
    pub fn start(field: InputField, staged: &FilterCriteria) -> Self {
        let buffer = match field {
            InputField::Query => staged.query.clone(),
            InputField::DateRange => staged
                .date_range
                .map(|range| range.to_string())
                .unwrap_or_default(),
        };
        Self { field, buffer }
    }

    /// Field being edited.
    #[must_use]
    pub const fn field(&self) -> InputField {
        self.field
    }

    /// Text typed so far.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Appends a character.
    pub fn push(&mut self, character: char) {
        self.buffer.push(character);
    }

    /// Removes the last character, if any.
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Converts the buffer into a staged field update.
    ///
    /// A blank date range clears the staged range.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError`] when the date range is malformed or inverted.
    pub fn to_staged_field(&self) -> Result<StagedField, FilterError> {
        match self.field {
            InputField::Query => Ok(StagedField::Query(self.buffer.clone())),
            InputField::DateRange if self.buffer.trim().is_empty() => {
                Ok(StagedField::DateRange(None))
            }
            InputField::DateRange => self
                .buffer
                .parse::<DateRange>()
                .map(|range| StagedField::DateRange(Some(range))),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn query_edit_starts_from_staged_text() {
        let staged = FilterCriteria {
            query: "ana".to_owned(),
            date_range: None,
        };

        let mut input = FilterInput::start(InputField::Query, &staged);
        input.push('l');

        assert_eq!(input.buffer(), "anal");
        assert_eq!(
            input.to_staged_field(),
            Ok(StagedField::Query("anal".to_owned()))
        );
    }

    #[test]
    fn date_range_edit_starts_from_staged_range() {
        let staged = FilterCriteria {
            query: String::new(),
            date_range: "2024-01-16..2024-01-17".parse().ok(),
        };

        let input = FilterInput::start(InputField::DateRange, &staged);

        assert_eq!(input.buffer(), "2024-01-16..2024-01-17");
    }

    #[rstest]
    #[case::blank("", true)]
    #[case::valid("2024-01-15..2024-01-16", true)]
    #[case::inverted("2024-01-16..2024-01-15", false)]
    #[case::partial("2024-01-", false)]
    fn date_range_submission(#[case] typed: &str, #[case] accepted: bool) {
        let mut input = FilterInput::start(InputField::DateRange, &FilterCriteria::default());
        typed.chars().for_each(|c| input.push(c));

        assert_eq!(input.to_staged_field().is_ok(), accepted);
    }

    #[test]
    fn backspace_on_empty_buffer_is_harmless() {
        let mut input = FilterInput::start(InputField::Query, &FilterCriteria::default());

        input.backspace();

        assert_eq!(input.buffer(), "");
    }
}
