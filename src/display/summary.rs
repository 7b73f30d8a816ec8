//! Ledger summary display

use super::DisplayStyle;
use crate::services::LedgerSummary;

pub fn format_summary(summary: &LedgerSummary, style: &DisplayStyle) -> String {
    let mut output = String::new();
    output.push_str("Ledger Summary\n");
    output.push_str(&format!(
        "  Total balance:  {:>14}  ({} accounts)\n",
        style.money(summary.total_balance),
        summary.accounts
    ));
    output.push_str(&format!(
        "  Total revenue:  {:>14}  ({} revenues)\n",
        style.money(summary.total_revenue),
        summary.revenues
    ));
    output.push_str(&format!(
        "  Total expenses: {:>14}  ({} expenses)\n",
        style.money(summary.total_expenses),
        summary.expenses
    ));
    output.push_str(&format!("  Net:            {:>14}\n", style.money(summary.net)));
    output
}
