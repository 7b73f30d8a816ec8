//! Expense display formatting

use tabled::Tabled;

use super::{list_total, render_table, DisplayStyle};
use crate::error::LedgerResult;
use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Paid")]
    paid: String,
    #[tabled(rename = "Expected")]
    expected: String,
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Account")]
    account: u16,
    #[tabled(rename = "Value")]
    value: String,
}

pub fn format_expense_list(expenses: &[Expense], style: &DisplayStyle) -> LedgerResult<String> {
    if expenses.is_empty() {
        return Ok("No expenses found.".to_string());
    }

    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|e| ExpenseRow {
            id: e.id.get(),
            paid: style.date(e.payment_date),
            expected: style.date(e.expected_payment_date),
            category: e.category.symbol(),
            account: e.account,
            value: style.money(e.value),
        })
        .collect();

    let total = list_total("Expense", expenses.iter().map(|e| e.value))?;
    Ok(format!("{}\nTOTAL: {}", render_table(rows), style.money(total)))
}

pub fn format_expense_details(expense: &Expense, style: &DisplayStyle) -> String {
    let mut output = String::new();
    output.push_str(&format!("Expense #{}\n", expense.id));
    output.push_str(&format!("  Value:    {}\n", style.money(expense.value)));
    output.push_str(&format!("  Paid:     {}\n", style.date(expense.payment_date)));
    output.push_str(&format!(
        "  Expected: {}\n",
        style.date(expense.expected_payment_date)
    ));
    output.push_str(&format!("  Category: {}\n", expense.category));
    output.push_str(&format!("  Account:  {}\n", expense.account));
    output
}
