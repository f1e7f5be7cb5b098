//! Filter criteria for the shipment history table.
//!
//! A [`FilterCriteria`] combines a free-text query with an optional inclusive
//! date range. The store keeps two instances: the committed criteria that
//! drive the visible list and the staged criteria being edited.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shipments::Shipment;

/// Errors raised while building filter criteria.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    /// The range starts after it ends.
    #[error("date range start {start} is after end {end}")]
    InvertedDateRange {
        /// Requested start date.
        start: NaiveDate,
        /// Requested end date.
        end: NaiveDate,
    },

    /// A textual range could not be parsed.
    #[error("date range must look like YYYY-MM-DD..YYYY-MM-DD: {input}")]
    MalformedDateRange {
        /// The rejected input.
        input: String,
    },
}

/// An inclusive calendar date range with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange", into = "RawDateRange")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting a start that falls after the end.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvertedDateRange`] when `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, FilterError> {
        if start > end {
            return Err(FilterError::InvertedDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// First day included in the range.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day included in the range.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns true if `date` lies within the range, bounds included.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl FromStr for DateRange {
    type Err = FilterError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let malformed = || FilterError::MalformedDateRange {
            input: input.to_owned(),
        };
        let (start_text, end_text) = input.trim().split_once("..").ok_or_else(malformed)?;
        let start = NaiveDate::from_str(start_text.trim()).map_err(|_| malformed())?;
        let end = NaiveDate::from_str(end_text.trim()).map_err(|_| malformed())?;
        Self::new(start, end)
    }
}

/// Serialised form of [`DateRange`]: a `[start, end]` pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawDateRange(NaiveDate, NaiveDate);

impl TryFrom<RawDateRange> for DateRange {
    type Error = FilterError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        Self::new(raw.0, raw.1)
    }
}

impl From<DateRange> for RawDateRange {
    fn from(range: DateRange) -> Self {
        Self(range.start, range.end)
    }
}

/// Free-text query plus optional date range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against order number and names.
    pub query: String,
    /// Inclusive date range; `None` lets every date through.
    pub date_range: Option<DateRange>,
}

impl FilterCriteria {
    /// Returns true when neither predicate restricts the list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.date_range.is_none()
    }

    /// Returns true if the shipment passes both predicates.
    #[must_use]
    pub fn matches(&self, shipment: &Shipment) -> bool {
        self.matches_query(shipment) && self.matches_date(shipment)
    }

    fn matches_query(&self, shipment: &Shipment) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        [
            &shipment.order_number,
            &shipment.first_name,
            &shipment.last_name,
        ]
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_date(&self, shipment: &Shipment) -> bool {
        self.date_range
            .is_none_or(|range| range.contains(shipment.date))
    }

    /// Returns a short label describing the criteria for status lines.
    #[must_use]
    pub fn label(&self) -> String {
        match (self.query.is_empty(), self.date_range) {
            (true, None) => "All".to_owned(),
            (false, None) => format!("Search: \"{}\"", self.query),
            (true, Some(range)) => format!("Period: {range}"),
            (false, Some(range)) => format!("Search: \"{}\", Period: {range}", self.query),
        }
    }
}

/// A single staged field update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StagedField {
    /// Replace the staged free-text query.
    Query(String),
    /// Replace (or clear) the staged date range.
    DateRange(Option<DateRange>),
}
