use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use ledger_cli::cli::{
    handle_account_command, handle_expense_command, handle_export_command,
    handle_revenue_command, AccountCommands, ExpenseCommands, ExportArgs, RevenueCommands,
};
use ledger_cli::config::{LedgerPaths, Settings};
use ledger_cli::display::{format_summary, DisplayStyle};
use ledger_cli::error::LedgerError;
use ledger_cli::services::SummaryService;
use ledger_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Terminal personal-finance ledger",
    long_about = "Track account balances, expenses and revenues from the command line, \
                  and move money between accounts with all-or-nothing transfers."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Account management and transfers
    #[command(subcommand)]
    Account(AccountCommands),

    /// Expense records
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Revenue records
    #[command(subcommand)]
    Revenue(RevenueCommands),

    /// Totals across the whole ledger
    Summary,

    /// Export the ledger as JSON or CSV
    Export(ExportArgs),

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the config file
        #[arg(long)]
        save: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    ledger_cli::logging::init(&settings.log_filter);

    let storage = Storage::open(paths.clone()).context("Failed to open ledger data")?;

    match cli.command {
        Some(Commands::Account(cmd)) => handle_account_command(&storage, &settings, cmd)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, &settings, cmd)?,
        Some(Commands::Revenue(cmd)) => handle_revenue_command(&storage, &settings, cmd)?,
        Some(Commands::Summary) => {
            let summary = SummaryService::new(&storage).summary()?;
            print!(
                "{}",
                format_summary(&summary, &DisplayStyle::from_settings(&settings))
            );
        }
        Some(Commands::Export(args)) => handle_export_command(&storage, args)?,
        Some(Commands::Config { save }) => {
            if save {
                settings.save(&paths)?;
                println!("Settings written to {}", paths.settings_file().display());
            }
            println!("Ledger Configuration");
            println!("====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!();
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        None => {
            println!("ledger - personal-finance ledger");
            println!();
            println!("Run 'ledger --help' for usage information.");
        }
    }

    Ok(())
}

/// Print an error to stderr, one line per failing field for validation errors
fn report(err: &anyhow::Error) {
    match err.downcast_ref::<LedgerError>() {
        Some(LedgerError::Validation(errors)) => {
            for field in errors.iter() {
                eprintln!("Error: {}", field);
            }
        }
        _ => eprintln!("Error: {:#}", err),
    }
}
