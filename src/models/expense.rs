//! Expense model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::date::dmy;
use super::ids::ExpenseId;
use super::money::Money;
use super::validation::ValidationErrors;

/// Closed set of expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseCategory {
    Food,
    Education,
    Leisure,
    Housing,
    Clothing,
    Health,
    Transport,
    Other,
}

impl ExpenseCategory {
    /// Symbols accepted on input, matched exactly
    pub const SYMBOLS: &'static [(&'static str, ExpenseCategory)] = &[
        ("FOOD", Self::Food),
        ("EDUCATION", Self::Education),
        ("LEISURE", Self::Leisure),
        ("HOUSING", Self::Housing),
        ("CLOTHING", Self::Clothing),
        ("HEALTH", Self::Health),
        ("TRANSPORT", Self::Transport),
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
            Self::Food => "FOOD",
            Self::Education => "EDUCATION",
            Self::Leisure => "LEISURE",
            Self::Housing => "HOUSING",
            Self::Clothing => "CLOTHING",
            Self::Health => "HEALTH",
            Self::Transport => "TRANSPORT",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Money spent, tagged with the account number it was paid from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub value: Money,

    /// When the expense was actually paid
    #[serde(with = "dmy")]
    pub payment_date: NaiveDate,

    #[serde(with = "dmy")]
    pub expected_payment_date: NaiveDate,

    pub category: ExpenseCategory,

    /// Loose account tag in 1..=999; not checked against stored accounts
    pub account: u16,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    pub fn from_draft(id: ExpenseId, draft: ExpenseDraft) -> Self {
        let now = Utc::now();
        Self {
            id,
            value: draft.value,
            payment_date: draft.payment_date,
            expected_payment_date: draft.expected_payment_date,
            category: draft.category,
            account: draft.account,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whole-object replacement of the caller-editable fields
    pub fn replace_with(&mut self, draft: ExpenseDraft) {
        self.value = draft.value;
        self.payment_date = draft.payment_date;
        self.expected_payment_date = draft.expected_payment_date;
        self.category = draft.category;
        self.account = draft.account;
        self.updated_at = Utc::now();
    }
}

/// Unvalidated expense fields as supplied by a caller
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpenseInput {
    pub value: Option<String>,
    pub payment_date: Option<String>,
    pub expected_payment_date: Option<String>,
    pub category: Option<String>,
    pub account: Option<i64>,
}

/// Validated expense fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub value: Money,
    pub payment_date: NaiveDate,
    pub expected_payment_date: NaiveDate,
    pub category: ExpenseCategory,
    pub account: u16,
}

impl ExpenseInput {
    /// Validate every field, collecting all failures
    pub fn validate(self) -> Result<ExpenseDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let value = errors.require_money("value", self.value.as_deref());
        let payment_date = errors.require_date("payment_date", self.payment_date.as_deref());
        let expected_payment_date = errors.require_date(
            "expected_payment_date",
            self.expected_payment_date.as_deref(),
        );
        let category = errors.require_symbol(
            "category",
            self.category.as_deref(),
            ExpenseCategory::SYMBOLS,
        );
        let account = errors.require_account_tag("account", self.account);

        match (value, payment_date, expected_payment_date, category, account) {
            (
                Some(value),
                Some(payment_date),
                Some(expected_payment_date),
                Some(category),
                Some(account),
            ) if errors.is_empty() => Ok(ExpenseDraft {
                value,
                payment_date,
                expected_payment_date,
                category,
                account,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> ExpenseInput {
        ExpenseInput {
            value: Some("42.90".into()),
            payment_date: Some("10-02-2022".into()),
            expected_payment_date: Some("08-02-2022".into()),
            category: Some("FOOD".into()),
            account: Some(1),
        }
    }

    #[test]
    fn test_validate_ok() {
        let draft = valid_input().validate().unwrap();
        assert_eq!(draft.value, Money::from_cents(4290));
        assert_eq!(draft.payment_date, NaiveDate::from_ymd_opt(2022, 2, 10).unwrap());
        assert_eq!(draft.category, ExpenseCategory::Food);
        assert_eq!(draft.account, 1);
    }

    #[test]
    fn test_account_tag_upper_bound() {
        let mut input = valid_input();
        input.account = Some(999);
        assert!(input.clone().validate().is_ok());

        input.account = Some(1000);
        let errors = input.validate().unwrap_err();
        assert_eq!(
            errors.message_for("account"),
            Some("account must be between 1 and 999")
        );
    }

    #[test]
    fn test_missing_fields_are_named() {
        let errors = ExpenseInput::default().validate().unwrap_err();
        for field in [
            "value",
            "payment_date",
            "expected_payment_date",
            "category",
            "account",
        ] {
            assert_eq!(
                errors.message_for(field),
                Some(format!("{} must not be null", field).as_str())
            );
        }
    }

    #[test]
    fn test_unknown_category_rejected() {
        let mut input = valid_input();
        input.category = Some("Food".into());
        let errors = input.validate().unwrap_err();
        assert!(errors.has_field("category"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_category_symbols_round_trip() {
        for (symbol, category) in ExpenseCategory::SYMBOLS {
            assert_eq!(ExpenseCategory::parse(symbol), Some(*category));
            assert_eq!(category.symbol(), *symbol);
        }
    }

    #[test]
    fn test_dates_serialize_day_month_year() {
        let expense = Expense::from_draft(ExpenseId::new(1), valid_input().validate().unwrap());
        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["payment_date"], "10-02-2022");
        assert_eq!(json["expected_payment_date"], "08-02-2022");
        assert_eq!(json["category"], "FOOD");
    }
}
