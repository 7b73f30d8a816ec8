//! Expense CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_list, DisplayStyle};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{DateRange, Expense, ExpenseCategory, ExpenseId, ExpenseInput};
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Expense fields shared by create and update
#[derive(clap::Args, Debug)]
pub struct ExpenseFields {
    /// Amount spent
    #[arg(short, long, allow_hyphen_values = true)]
    pub value: Option<String>,
    /// Payment date (dd-MM-yyyy)
    #[arg(short, long)]
    pub paid: Option<String>,
    /// Expected payment date (dd-MM-yyyy)
    #[arg(short, long)]
    pub expected: Option<String>,
    /// Category (FOOD, EDUCATION, LEISURE, HOUSING, CLOTHING, HEALTH, TRANSPORT, OTHER)
    #[arg(short, long)]
    pub category: Option<String>,
    /// Account number, 1 to 999
    #[arg(short, long, allow_negative_numbers = true)]
    pub account: Option<i64>,
}

impl From<ExpenseFields> for ExpenseInput {
    fn from(fields: ExpenseFields) -> Self {
        Self {
            value: fields.value,
            payment_date: fields.paid,
            expected_payment_date: fields.expected,
            category: fields.category,
            account: fields.account,
        }
    }
}

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Create(ExpenseFields),
    /// Replace every field of an expense
    Update {
        id: ExpenseId,
        #[command(flatten)]
        fields: ExpenseFields,
    },
    /// Show expense details
    Show { id: ExpenseId },
    /// List expenses, optionally filtered
    List {
        /// Earliest payment date, inclusive (dd-MM-yyyy)
        #[arg(long, requires = "to")]
        from: Option<String>,
        /// Latest payment date, inclusive (dd-MM-yyyy)
        #[arg(long, requires = "from")]
        to: Option<String>,
        /// Only this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Delete an expense
    Delete { id: ExpenseId },
    /// Show the total of all expenses
    Total,
}

pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> LedgerResult<()> {
    let service = ExpenseService::new(storage);
    let style = DisplayStyle::from_settings(settings);

    match cmd {
        ExpenseCommands::Create(fields) => {
            let expense = service.create(fields.into())?;
            println!("Recorded expense #{}", expense.id);
            print!("{}", format_expense_details(&expense, &style));
        }

        ExpenseCommands::Update { id, fields } => {
            let expense = service.update(id, fields.into())?;
            println!("Updated expense #{}", expense.id);
            print!("{}", format_expense_details(&expense, &style));
        }

        ExpenseCommands::Show { id } => {
            print!("{}", format_expense_details(&service.require(id)?, &style));
        }

        ExpenseCommands::List { from, to, category } => {
            let category = category.map(|c| parse_category(&c)).transpose()?;
            let mut expenses: Vec<Expense> = match (from, to) {
                (None, None) => service.list()?,
                (from, to) => {
                    let range = DateRange::parse(from.as_deref(), to.as_deref())?;
                    service.find_by_date_range(&range)?
                }
            };
            if let Some(category) = category {
                expenses.retain(|e| e.category == category);
            }
            println!("{}", format_expense_list(&expenses, &style)?);
        }

        ExpenseCommands::Delete { id } => {
            service.delete(id)?;
            println!("Deleted expense #{}", id);
        }

        ExpenseCommands::Total => {
            println!("{}", style.money(service.total_expenses()?));
        }
    }

    Ok(())
}

fn parse_category(symbol: &str) -> LedgerResult<ExpenseCategory> {
    ExpenseCategory::parse(symbol).ok_or_else(|| {
        let names: Vec<_> = ExpenseCategory::SYMBOLS.iter().map(|(s, _)| *s).collect();
        LedgerError::invalid_field(
            "category",
            format!("category must be one of {}", names.join(", ")),
        )
    })
}
