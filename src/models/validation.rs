//! Field-level validation shared by the record validators
//!
//! Validators take an input whose fields are all optional (an absent field
//! is a null) and collect every failing field into [`ValidationErrors`]
//! before anything reaches the store.

use std::fmt;

use chrono::NaiveDate;

use super::date::{parse_date, DATE_FORMAT_HINT};
use super::money::Money;

/// Maximum length, in characters, of free-text fields
pub const MAX_TEXT_LEN: usize = 255;

/// Inclusive range accepted for the account tag on expenses and revenues
pub const ACCOUNT_TAG_RANGE: std::ops::RangeInclusive<i64> = 1..=999;

/// A single failing field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All field failures found while validating one input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// A collection holding exactly one failure
    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Check whether a given field failed
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    /// Message recorded for a field, if it failed
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Ok if nothing failed
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Require a present value
    pub(crate) fn require<T>(&mut self, field: &'static str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.push(field, format!("{} must not be null", field));
        }
        value
    }

    /// Require a non-blank string of at most [`MAX_TEXT_LEN`] characters
    pub(crate) fn require_text(
        &mut self,
        field: &'static str,
        value: Option<String>,
    ) -> Option<String> {
        match value {
            Some(text) if text.trim().is_empty() => {
                self.push(field, format!("{} must not be blank", field));
                None
            }
            Some(text) if text.chars().count() > MAX_TEXT_LEN => {
                self.push(
                    field,
                    format!("{} must be at most {} characters", field, MAX_TEXT_LEN),
                );
                None
            }
            Some(text) => Some(text),
            None => {
                self.push(field, format!("{} must not be blank", field));
                None
            }
        }
    }

    /// Require a decimal amount with at most two fractional digits
    pub(crate) fn require_money(
        &mut self,
        field: &'static str,
        value: Option<&str>,
    ) -> Option<Money> {
        let raw = self.require(field, value)?;
        match Money::parse(raw) {
            Ok(amount) => Some(amount),
            Err(e) => {
                self.push(field, format!("{} is not a valid amount ({})", field, e));
                None
            }
        }
    }

    /// Require a date in `dd-MM-yyyy` format
    pub(crate) fn require_date(
        &mut self,
        field: &'static str,
        value: Option<&str>,
    ) -> Option<NaiveDate> {
        let raw = self.require(field, value)?;
        match parse_date(raw) {
            Ok(date) => Some(date),
            Err(_) => {
                self.push(
                    field,
                    format!("{} must be a date in {} format", field, DATE_FORMAT_HINT),
                );
                None
            }
        }
    }

    /// Require the account tag to fall within [`ACCOUNT_TAG_RANGE`]
    pub(crate) fn require_account_tag(
        &mut self,
        field: &'static str,
        value: Option<i64>,
    ) -> Option<u16> {
        let tag = self.require(field, value)?;
        if !ACCOUNT_TAG_RANGE.contains(&tag) {
            self.push(
                field,
                format!(
                    "{} must be between {} and {}",
                    field,
                    ACCOUNT_TAG_RANGE.start(),
                    ACCOUNT_TAG_RANGE.end()
                ),
            );
            return None;
        }
        u16::try_from(tag).ok()
    }

    /// Require an exact, case-sensitive match against a closed set of symbols
    pub(crate) fn require_symbol<T: Copy>(
        &mut self,
        field: &'static str,
        value: Option<&str>,
        choices: &[(&'static str, T)],
    ) -> Option<T> {
        let raw = self.require(field, value)?;
        match choices.iter().find(|(symbol, _)| *symbol == raw) {
            Some((_, variant)) => Some(*variant),
            None => {
                let allowed: Vec<&str> = choices.iter().map(|(s, _)| *s).collect();
                self.push(
                    field,
                    format!("{} must be one of {}", field, allowed.join(", ")),
                );
                None
            }
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
