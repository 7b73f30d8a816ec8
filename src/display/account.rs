//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use tabled::Tabled;

use super::{list_total, render_table, DisplayStyle};
use crate::error::LedgerResult;
use crate::models::Account;
use crate::services::TransferResult;

#[derive(Tabled)]
struct AccountRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Type")]
    account_type: &'static str,
    #[tabled(rename = "Institution")]
    institution: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

/// Format a list of accounts as a table with a total line
pub fn format_account_list(accounts: &[Account], style: &DisplayStyle) -> LedgerResult<String> {
    if accounts.is_empty() {
        return Ok("No accounts found.".to_string());
    }

    let rows: Vec<AccountRow> = accounts
        .iter()
        .map(|a| AccountRow {
            id: a.id.get(),
            account_type: a.account_type.symbol(),
            institution: a.financial_institution.clone(),
            balance: style.money(a.balance),
        })
        .collect();

    let total = list_total("Account", accounts.iter().map(|a| a.balance))?;

    Ok(format!("{}\nTOTAL: {}", render_table(rows), style.money(total)))
}

/// Format a single account's details
pub fn format_account_details(account: &Account, style: &DisplayStyle) -> String {
    let mut output = String::new();

    output.push_str(&format!("Account #{}\n", account.id));
    output.push_str(&format!("  Type:        {}\n", account.account_type));
    output.push_str(&format!("  Institution: {}\n", account.financial_institution));
    output.push_str(&format!("  Balance:     {}\n", style.money(account.balance)));
    output.push('\n');
    output.push_str(&format!(
        "  Created:  {}\n",
        account.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "  Modified: {}\n",
        account.updated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}

/// Format the outcome of a transfer
pub fn format_transfer(result: &TransferResult, style: &DisplayStyle) -> String {
    format!(
        "Transfer complete\n  From #{}: {}\n  To   #{}: {}\n",
        result.from,
        style.money(result.from_balance),
        result.to,
        style.money(result.to_balance)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountDraft, AccountId, AccountType, Money};

    fn account(id: u64, cents: i64, institution: &str) -> Account {
        Account::from_draft(
            AccountId::new(id),
            AccountDraft {
                balance: Money::from_cents(cents),
                account_type: AccountType::Checking,
                financial_institution: institution.into(),
            },
        )
    }

    #[test]
    fn test_format_account_list() {
        let accounts = vec![account(1, 7000, "BANK A"), account(2, 8000, "BANK B")];
        let output = format_account_list(&accounts, &DisplayStyle::default()).unwrap();

        assert!(output.contains("Institution"));
        assert!(output.contains("BANK B"));
        assert!(output.contains("$70.00"));
        assert!(output.ends_with("TOTAL: $150.00"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(
            format_account_list(&[], &DisplayStyle::default()).unwrap(),
            "No accounts found."
        );
    }

    #[test]
    fn test_list_total_overflow_is_an_error() {
        let large = 6_000_000_000_000_000_000;
        let accounts = vec![account(1, large, "BANK A"), account(2, large, "BANK B")];

        let err = format_account_list(&accounts, &DisplayStyle::default()).unwrap_err();
        assert!(err.to_string().contains("Account total overflows"));
    }

    #[test]
    fn test_details_at_minimum_balance() {
        let output = format_account_details(&account(1, i64::MIN, "Cash"), &DisplayStyle::default());
        assert!(output.contains("Balance:     -$92233720368547758.08"));
    }

    #[test]
    fn test_format_account_details() {
        let output = format_account_details(&account(3, -500, "Cash"), &DisplayStyle::default());
        assert!(output.starts_with("Account #3\n"));
        assert!(output.contains("Balance:     -$5.00"));
    }

    #[test]
    fn test_format_transfer() {
        let result = TransferResult {
            from: AccountId::new(1),
            from_balance: Money::from_units(70),
            to: AccountId::new(2),
            to_balance: Money::from_units(80),
        };
        let output = format_transfer(&result, &DisplayStyle::default());
        assert!(output.contains("From #1: $70.00"));
        assert!(output.contains("To   #2: $80.00"));
    }
}
