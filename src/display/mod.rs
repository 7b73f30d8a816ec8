//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledger records for terminal display:
//! tables for lists, labelled blocks for single records.

pub mod account;
pub mod expense;
pub mod revenue;
pub mod summary;

use std::fmt::Write;

use chrono::NaiveDate;

use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::models::date::format_date;
use crate::models::Money;

pub use account::{format_account_details, format_account_list, format_transfer};
pub use expense::{format_expense_details, format_expense_list};
pub use revenue::{format_revenue_details, format_revenue_list};
pub use summary::format_summary;

/// How amounts and dates are rendered
#[derive(Debug, Clone)]
pub struct DisplayStyle {
    currency_symbol: String,
    date_format: String,
}

impl DisplayStyle {
    pub fn new(currency_symbol: impl Into<String>, date_format: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
            date_format: date_format.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&settings.currency_symbol, &settings.date_format)
    }

    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Format a date, falling back to dd-MM-yyyy if the format is invalid
    pub fn date(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        match write!(out, "{}", date.format(&self.date_format)) {
            Ok(()) => out,
            Err(_) => format_date(date),
        }
    }
}

impl Default for DisplayStyle {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// Render rows with the table style shared by every list view
pub(crate) fn render_table<T: tabled::Tabled>(rows: Vec<T>) -> String {
    use tabled::settings::Style;

    tabled::Table::new(rows).with(Style::psql()).to_string()
}

/// Total for the TOTAL line under a list
pub(crate) fn list_total(
    entity: &str,
    amounts: impl IntoIterator<Item = Money>,
) -> LedgerResult<Money> {
    Money::checked_sum(amounts)
        .ok_or_else(|| LedgerError::Storage(format!("{} total overflows", entity)))
}
