//! Account model
//!
//! Represents a financial account (wallet, checking, savings) holding a
//! balance at a financial institution.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::Money;
use super::validation::ValidationErrors;

/// Type of financial account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    /// Cash/wallet
    Wallet,
    /// Checking account
    Checking,
    /// Savings account
    Savings,
}

impl AccountType {
    /// Symbols accepted on input, matched exactly
    pub const SYMBOLS: &'static [(&'static str, AccountType)] = &[
        ("WALLET", Self::Wallet),
        ("CHECKING", Self::Checking),
        ("SAVINGS", Self::Savings),
    ];

    /// Parse an exact symbol, e.g. "CHECKING"
    pub fn parse(s: &str) -> Option<Self> {
        Self::SYMBOLS
            .iter()
            .find(|(symbol, _)| *symbol == s)
            .map(|(_, t)| *t)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Wallet => "WALLET",
            Self::Checking => "CHECKING",
            Self::Savings => "SAVINGS",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A financial account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Store-assigned identifier
    pub id: AccountId,

    /// Current balance; may be negative
    pub balance: Money,

    #[serde(rename = "type")]
    pub account_type: AccountType,

    /// Bank or institution holding the account
    pub financial_institution: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Build an account from a validated draft and a store-assigned id
    pub fn from_draft(id: AccountId, draft: AccountDraft) -> Self {
        let now = Utc::now();
        Self {
            id,
            balance: draft.balance,
            account_type: draft.account_type,
            financial_institution: draft.financial_institution,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every caller-editable field with the draft's values
    ///
    /// This is whole-object replacement: nothing from the previous state
    /// survives except the id and creation time.
    pub fn replace_with(&mut self, draft: AccountDraft) {
        self.balance = draft.balance;
        self.account_type = draft.account_type;
        self.financial_institution = draft.financial_institution;
        self.updated_at = Utc::now();
    }

    /// Set a new balance and bump the modification time
    pub fn set_balance(&mut self, balance: Money) {
        self.balance = balance;
        self.updated_at = Utc::now();
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} ({})",
            self.id, self.financial_institution, self.account_type
        )
    }
}

/// Unvalidated account fields as supplied by a caller
///
/// Every field is optional so that a missing value can be reported by name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountInput {
    pub balance: Option<String>,
    #[serde(rename = "type")]
    pub account_type: Option<String>,
    pub financial_institution: Option<String>,
}

/// Validated account fields, ready to be stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountDraft {
    pub balance: Money,
    pub account_type: AccountType,
    pub financial_institution: String,
}

impl AccountInput {
    /// Validate every field, collecting all failures
    pub fn validate(self) -> Result<AccountDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let balance = errors.require_money("balance", self.balance.as_deref());
        let account_type = errors.require_symbol(
            "type",
            self.account_type.as_deref(),
            AccountType::SYMBOLS,
        );
        let financial_institution =
            errors.require_text("financial_institution", self.financial_institution);

        match (balance, account_type, financial_institution) {
            (Some(balance), Some(account_type), Some(financial_institution))
                if errors.is_empty() =>
            {
                Ok(AccountDraft {
                    balance,
                    account_type,
                    financial_institution,
                })
            }
            _ => Err(errors),
        }
    }
}
