//! Revenue display formatting

use tabled::Tabled;

use super::{list_total, render_table, DisplayStyle};
use crate::error::LedgerResult;
use crate::models::Revenue;

#[derive(Tabled)]
struct RevenueRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Received")]
    received: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Account")]
    account: u16,
    #[tabled(rename = "Value")]
    value: String,
}

pub fn format_revenue_list(revenues: &[Revenue], style: &DisplayStyle) -> LedgerResult<String> {
    if revenues.is_empty() {
        return Ok("No revenues found.".to_string());
    }

    let rows: Vec<RevenueRow> = revenues
        .iter()
        .map(|r| RevenueRow {
            id: r.id.get(),
            received: style.date(r.receipt_date),
            description: r.description.clone(),
            category: r.category.symbol(),
            account: r.account,
            value: style.money(r.value),
        })
        .collect();

    let total = list_total("Revenue", revenues.iter().map(|r| r.value))?;
    Ok(format!("{}\nTOTAL: {}", render_table(rows), style.money(total)))
}

pub fn format_revenue_details(revenue: &Revenue, style: &DisplayStyle) -> String {
    let mut output = String::new();
    output.push_str(&format!("Revenue #{}: {}\n", revenue.id, revenue.description));
    output.push_str(&format!("  Value:    {}\n", style.money(revenue.value)));
    output.push_str(&format!("  Received: {}\n", style.date(revenue.receipt_date)));
    output.push_str(&format!(
        "  Expected: {}\n",
        style.date(revenue.expected_receipt_date)
    ));
    output.push_str(&format!("  Category: {}\n", revenue.category));
    output.push_str(&format!("  Account:  {}\n", revenue.account));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::date::parse_date;
    use crate::models::{Money, RevenueCategory, RevenueDraft, RevenueId};

    #[test]
    fn test_list_and_details() {
        let revenue = Revenue::from_draft(
            RevenueId::new(1),
            RevenueDraft {
                value: Money::from_units(3000),
                receipt_date: parse_date("05-02-2024").unwrap(),
                expected_receipt_date: parse_date("05-02-2024").unwrap(),
                description: "February salary".into(),
                account: 1,
                category: RevenueCategory::Salary,
            },
        );
        let style = DisplayStyle::default();

        let list = format_revenue_list(std::slice::from_ref(&revenue), &style).unwrap();
        assert!(list.contains("February salary"));
        assert!(list.ends_with("TOTAL: $3000.00"));

        let details = format_revenue_details(&revenue, &style);
        assert!(details.starts_with("Revenue #1: February salary\n"));
        assert_eq!(format_revenue_list(&[], &style).unwrap(), "No revenues found.");
    }
}
