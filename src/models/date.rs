//! Day-month-year dates and inclusive date ranges
//!
//! Record dates are exchanged as `dd-MM-yyyy` strings. The `serde` helpers
//! here are used with `#[serde(with = "...")]` on record fields.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::validation::ValidationErrors;

/// strftime pattern for record dates
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Human-readable form of [`DATE_FORMAT`]
pub const DATE_FORMAT_HINT: &str = "dd-MM-yyyy";

/// Parse a `dd-MM-yyyy` date
pub fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
}

/// Format a date as `dd-MM-yyyy`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// serde adapter for `NaiveDate` fields stored as `dd-MM-yyyy`
pub mod dmy {
    use super::*;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        format_date(*date).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw).map_err(serde::de::Error::custom)
    }
}

/// An inclusive range of dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(with = "dmy")]
    pub start: NaiveDate,
    #[serde(with = "dmy")]
    pub end: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting `start` after `end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ValidationErrors> {
        if start > end {
            return Err(ValidationErrors::single(
                "end",
                format!(
                    "end ({}) must not be before start ({})",
                    format_date(end),
                    format_date(start)
                ),
            ));
        }
        Ok(Self { start, end })
    }

    /// Build a range from two optional `dd-MM-yyyy` strings
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let start = errors.require_date("start", start);
        let end = errors.require_date("end", end);
        match (start, end) {
            (Some(start), Some(end)) if errors.is_empty() => Self::new(start, end),
            _ => Err(errors),
        }
    }

    /// Whether `date` falls within the range, bounds included
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
