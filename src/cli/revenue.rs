//! Revenue CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_revenue_details, format_revenue_list, DisplayStyle};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{DateRange, Revenue, RevenueCategory, RevenueId, RevenueInput};
use crate::services::RevenueService;
use crate::storage::Storage;

/// Revenue fields shared by create and update
#[derive(clap::Args, Debug)]
pub struct RevenueFields {
    /// Amount received
    #[arg(short, long, allow_hyphen_values = true)]
    pub value: Option<String>,
    /// Receipt date (dd-MM-yyyy)
    #[arg(short, long)]
    pub received: Option<String>,
    /// Expected receipt date (dd-MM-yyyy)
    #[arg(short, long)]
    pub expected: Option<String>,
    /// Free-text description
    #[arg(short, long)]
    pub description: Option<String>,
    /// Account number, 1 to 999
    #[arg(short, long, allow_negative_numbers = true)]
    pub account: Option<i64>,
    /// Category (SALARY, GIFT, PRIZE, OTHER)
    #[arg(short, long)]
    pub category: Option<String>,
}

impl From<RevenueFields> for RevenueInput {
    fn from(fields: RevenueFields) -> Self {
        Self {
            value: fields.value,
            receipt_date: fields.received,
            expected_receipt_date: fields.expected,
            description: fields.description,
            account: fields.account,
            category: fields.category,
        }
    }
}

/// Revenue subcommands
#[derive(Subcommand, Debug)]
pub enum RevenueCommands {
    /// Record a new revenue
    Create(RevenueFields),
    /// Replace every field of a revenue
    Update {
        id: RevenueId,
        #[command(flatten)]
        fields: RevenueFields,
    },
    /// Show revenue details
    Show { id: RevenueId },
    /// List revenues, optionally filtered
    List {
        /// Earliest receipt date, inclusive (dd-MM-yyyy)
        #[arg(long, requires = "to")]
        from: Option<String>,
        /// Latest receipt date, inclusive (dd-MM-yyyy)
        #[arg(long, requires = "from")]
        to: Option<String>,
        /// Only this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Delete a revenue
    Delete { id: RevenueId },
    /// Show the total of all revenues
    Total,
}

pub fn handle_revenue_command(
    storage: &Storage,
    settings: &Settings,
    cmd: RevenueCommands,
) -> LedgerResult<()> {
    let service = RevenueService::new(storage);
    let style = DisplayStyle::from_settings(settings);

    match cmd {
        RevenueCommands::Create(fields) => {
            let revenue = service.create(fields.into())?;
            println!("Recorded revenue #{}", revenue.id);
            print!("{}", format_revenue_details(&revenue, &style));
        }

        RevenueCommands::Update { id, fields } => {
            let revenue = service.update(id, fields.into())?;
            println!("Updated revenue #{}", revenue.id);
            print!("{}", format_revenue_details(&revenue, &style));
        }

        RevenueCommands::Show { id } => {
            print!("{}", format_revenue_details(&service.require(id)?, &style));
        }

        RevenueCommands::List { from, to, category } => {
            let category = category
                .map(|c| {
                    RevenueCategory::parse(&c).ok_or_else(|| {
                        LedgerError::invalid_field(
                            "category",
                            "category must be one of SALARY, GIFT, PRIZE, OTHER",
                        )
                    })
                })
                .transpose()?;
            let mut revenues: Vec<Revenue> = match (from, to) {
                (None, None) => service.list()?,
                (from, to) => {
                    let range = DateRange::parse(from.as_deref(), to.as_deref())?;
                    service.find_by_date_range(&range)?
                }
            };
            if let Some(category) = category {
                revenues.retain(|r| r.category == category);
            }
            println!("{}", format_revenue_list(&revenues, &style)?);
        }

        RevenueCommands::Delete { id } => {
            service.delete(id)?;
            println!("Deleted revenue #{}", id);
        }

        RevenueCommands::Total => {
            println!("{}", style.money(service.total_revenue()?));
        }
    }

    Ok(())
}
