//! Core data models for the ledger
//!
//! This module contains the record kinds stored in the ledger (accounts,
//! expenses, revenues), their validated inputs, and the value types they
//! share: ids, money, and day-month-year dates.

pub mod account;
pub mod date;
pub mod expense;
pub mod ids;
pub mod money;
pub mod revenue;
pub mod validation;

pub use account::{Account, AccountDraft, AccountInput, AccountType};
pub use date::DateRange;
pub use expense::{Expense, ExpenseCategory, ExpenseDraft, ExpenseInput};
pub use ids::{AccountId, ExpenseId, RevenueId};
pub use money::Money;
pub use revenue::{Revenue, RevenueCategory, RevenueDraft, RevenueInput};
pub use validation::{FieldError, ValidationErrors};
