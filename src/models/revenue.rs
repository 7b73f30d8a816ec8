//! Revenue model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::date::dmy;
use super::ids::RevenueId;
use super::money::Money;
use super::validation::ValidationErrors;

/// Closed set of revenue categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RevenueCategory {
    Salary,
    Gift,
    Prize,
    Other,
}

impl RevenueCategory {
    pub const SYMBOLS: &'static [(&'static str, RevenueCategory)] = &[
        ("SALARY", Self::Salary),
        ("GIFT", Self::Gift),
        ("PRIZE", Self::Prize),
        ("OTHER", Self::Other),
    ];

    pub fn parse(s: &str) -> Option<Self> {
        Self::SYMBOLS
            .iter()
            .find(|(symbol, _)| *symbol == s)
            .map(|(_, c)| *c)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Salary => "SALARY",
            Self::Gift => "GIFT",
            Self::Prize => "PRIZE",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for RevenueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Money received, tagged with the account number it was paid into
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Revenue {
    pub id: RevenueId,
    pub value: Money,

    /// When the money was actually received
    #[serde(with = "dmy")]
    pub receipt_date: NaiveDate,

    #[serde(with = "dmy")]
    pub expected_receipt_date: NaiveDate,

    pub description: String,

    /// Loose account tag in 1..=999
    pub account: u16,

    pub category: RevenueCategory,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Revenue {
    pub fn from_draft(id: RevenueId, draft: RevenueDraft) -> Self {
        let now = Utc::now();
        Self {
            id,
            value: draft.value,
            receipt_date: draft.receipt_date,
            expected_receipt_date: draft.expected_receipt_date,
            description: draft.description,
            account: draft.account,
            category: draft.category,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whole-object replacement of the caller-editable fields
    pub fn replace_with(&mut self, draft: RevenueDraft) {
        self.value = draft.value;
        self.receipt_date = draft.receipt_date;
        self.expected_receipt_date = draft.expected_receipt_date;
        self.description = draft.description;
        self.account = draft.account;
        self.category = draft.category;
        self.updated_at = Utc::now();
    }
}

/// Unvalidated revenue fields as supplied by a caller
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RevenueInput {
    pub value: Option<String>,
    pub receipt_date: Option<String>,
    pub expected_receipt_date: Option<String>,
    pub description: Option<String>,
    pub account: Option<i64>,
    pub category: Option<String>,
}

/// Validated revenue fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevenueDraft {
    pub value: Money,
    pub receipt_date: NaiveDate,
    pub expected_receipt_date: NaiveDate,
    pub description: String,
    pub account: u16,
    pub category: RevenueCategory,
}

impl RevenueInput {
    /// Validate every field, collecting all failures
    pub fn validate(self) -> Result<RevenueDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let value = errors.require_money("value", self.value.as_deref());
        let receipt_date = errors.require_date("receipt_date", self.receipt_date.as_deref());
        let expected_receipt_date = errors.require_date(
            "expected_receipt_date",
            self.expected_receipt_date.as_deref(),
        );
        let description = errors.require_text("description", self.description);
        let account = errors.require_account_tag("account", self.account);
        let category = errors.require_symbol(
            "category",
            self.category.as_deref(),
            RevenueCategory::SYMBOLS,
        );

        match (
            value,
            receipt_date,
            expected_receipt_date,
            description,
            account,
            category,
        ) {
            (
                Some(value),
                Some(receipt_date),
                Some(expected_receipt_date),
                Some(description),
                Some(account),
                Some(category),
            ) if errors.is_empty() => Ok(RevenueDraft {
                value,
                receipt_date,
                expected_receipt_date,
                description,
                account,
                category,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> RevenueInput {
        RevenueInput {
            value: Some("3500".into()),
            receipt_date: Some("05-03-2022".into()),
            expected_receipt_date: Some("05-03-2022".into()),
            description: Some("March salary".into()),
            account: Some(2),
            category: Some("SALARY".into()),
        }
    }

    #[test]
    fn test_validate_ok() {
        let draft = valid_input().validate().unwrap();
        assert_eq!(draft.value, Money::from_units(3500));
        assert_eq!(draft.description, "March salary");
        assert_eq!(draft.category, RevenueCategory::Salary);
    }

    #[test]
    fn test_blank_description_rejected() {
        let mut input = valid_input();
        input.description = Some("  ".into());
        let errors = input.validate().unwrap_err();
        assert_eq!(
            errors.message_for("description"),
            Some("description must not be blank")
        );
    }

    #[test]
    fn test_bad_date_format_rejected() {
        let mut input = valid_input();
        input.receipt_date = Some("2022-03-05".into());
        let errors = input.validate().unwrap_err();
        assert_eq!(
            errors.message_for("receipt_date"),
            Some("receipt_date must be a date in dd-MM-yyyy format")
        );
    }

    #[test]
    fn test_account_tag_lower_bound() {
        let mut input = valid_input();
        input.account = Some(0);
        assert!(input.validate().unwrap_err().has_field("account"));
    }

    #[test]
    fn test_category_is_exact() {
        let mut input = valid_input();
        input.category = Some("salary".into());
        assert!(input.validate().unwrap_err().has_field("category"));
        assert_eq!(RevenueCategory::parse("PRIZE"), Some(RevenueCategory::Prize));
    }

    #[test]
    fn test_serialization() {
        let revenue = Revenue::from_draft(RevenueId::new(4), valid_input().validate().unwrap());
        let json = serde_json::to_string(&revenue).unwrap();
        let back: Revenue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, revenue);
    }
}
