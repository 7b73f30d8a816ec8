//! CSV Export functionality
//!
//! One record kind per file, amounts as decimals and dates as dd-MM-yyyy so
//! the output opens cleanly in a spreadsheet.

use serde::Serialize;
use std::io::Write;

use crate::error::LedgerResult;
use crate::models::date::format_date;
use crate::storage::Storage;

#[derive(Serialize)]
struct AccountRow<'a> {
    id: u64,
    #[serde(rename = "type")]
    account_type: &'static str,
    financial_institution: &'a str,
    balance: String,
}

#[derive(Serialize)]
struct ExpenseRow {
    id: u64,
    value: String,
    payment_date: String,
    expected_payment_date: String,
    category: &'static str,
    account: u16,
}

#[derive(Serialize)]
struct RevenueRow<'a> {
    id: u64,
    value: String,
    receipt_date: String,
    expected_receipt_date: String,
    description: &'a str,
    account: u16,
    category: &'static str,
}

/// Export all accounts to CSV
pub fn export_accounts_csv<W: Write>(storage: &Storage, writer: W) -> LedgerResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for account in storage.accounts.get_all()? {
        csv.serialize(AccountRow {
            id: account.id.get(),
            account_type: account.account_type.symbol(),
            financial_institution: &account.financial_institution,
            balance: account.balance.to_string(),
        })?;
    }
    csv.flush()?;
    Ok(())
}

/// Export all expenses to CSV
pub fn export_expenses_csv<W: Write>(storage: &Storage, writer: W) -> LedgerResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for expense in storage.expenses.get_all()? {
        csv.serialize(ExpenseRow {
            id: expense.id.get(),
            value: expense.value.to_string(),
            payment_date: format_date(expense.payment_date),
            expected_payment_date: format_date(expense.expected_payment_date),
            category: expense.category.symbol(),
            account: expense.account,
        })?;
    }
    csv.flush()?;
    Ok(())
}

/// Export all revenues to CSV
pub fn export_revenues_csv<W: Write>(storage: &Storage, writer: W) -> LedgerResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for revenue in storage.revenues.get_all()? {
        csv.serialize(RevenueRow {
            id: revenue.id.get(),
            value: revenue.value.to_string(),
            receipt_date: format_date(revenue.receipt_date),
            expected_receipt_date: format_date(revenue.expected_receipt_date),
            description: &revenue.description,
            account: revenue.account,
            category: revenue.category.symbol(),
        })?;
    }
    csv.flush()?;
    Ok(())
}
