//! Account CLI commands
//!
//! Implements CLI commands for account management and transfers.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_account_details, format_account_list, format_transfer, DisplayStyle};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{AccountId, AccountInput, Money};
use crate::services::{AccountService, TransferService};
use crate::storage::Storage;

/// Account fields shared by create and update
#[derive(clap::Args, Debug)]
pub struct AccountFields {
    /// Balance (e.g., "1000.00" or "-20")
    #[arg(short, long, allow_hyphen_values = true)]
    pub balance: Option<String>,
    /// Account type (WALLET, CHECKING, SAVINGS)
    #[arg(short = 't', long = "type")]
    pub account_type: Option<String>,
    /// Financial institution holding the account
    #[arg(short, long)]
    pub institution: Option<String>,
}

impl From<AccountFields> for AccountInput {
    fn from(fields: AccountFields) -> Self {
        Self {
            balance: fields.balance,
            account_type: fields.account_type,
            financial_institution: fields.institution,
        }
    }
}

/// Account subcommands
#[derive(Subcommand, Debug)]
pub enum AccountCommands {
    /// Create a new account
    Create(AccountFields),
    /// Replace every field of an account
    Update {
        /// Account ID
        id: AccountId,
        #[command(flatten)]
        fields: AccountFields,
    },
    /// Show account details
    Show {
        /// Account ID
        id: AccountId,
    },
    /// List all accounts
    List,
    /// Delete an account
    Delete {
        /// Account ID
        id: AccountId,
    },
    /// Show the total balance across all accounts
    Total,
    /// Move an amount from one account's balance to another's
    Transfer {
        /// Source account ID
        from: AccountId,
        /// Destination account ID
        to: AccountId,
        /// Amount to move (e.g., "30" or "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
}

/// Handle an account command
pub fn handle_account_command(
    storage: &Storage,
    settings: &Settings,
    cmd: AccountCommands,
) -> LedgerResult<()> {
    let service = AccountService::new(storage);
    let style = DisplayStyle::from_settings(settings);

    match cmd {
        AccountCommands::Create(fields) => {
            let account = service.create(fields.into())?;
            println!("Created account #{}", account.id);
            print!("{}", format_account_details(&account, &style));
        }

        AccountCommands::Update { id, fields } => {
            let account = service.update(id, fields.into())?;
            println!("Updated account #{}", account.id);
            print!("{}", format_account_details(&account, &style));
        }

        AccountCommands::Show { id } => {
            let account = service.require(id)?;
            print!("{}", format_account_details(&account, &style));
        }

        AccountCommands::List => {
            let accounts = service.list()?;
            println!("{}", format_account_list(&accounts, &style)?);
        }

        AccountCommands::Delete { id } => {
            service.delete(id)?;
            println!("Deleted account #{}", id);
        }

        AccountCommands::Total => {
            println!("{}", style.money(service.total_balance()?));
        }

        AccountCommands::Transfer { from, to, amount } => {
            let amount = Money::parse(&amount).map_err(|e| {
                LedgerError::invalid_field("amount", format!("amount is not a valid amount ({})", e))
            })?;
            let result =
                TransferService::with_policy(storage, settings.transfer).transfer(from, to, amount)?;
            print!("{}", format_transfer(&result, &style));
        }
    }

    Ok(())
}
