//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod expense;
pub mod export;
pub mod revenue;

pub use account::{handle_account_command, AccountCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs};
pub use revenue::{handle_revenue_command, RevenueCommands};
