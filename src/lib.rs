//! ledger-cli - Terminal personal-finance ledger
//!
//! This library provides the core functionality for a small personal-finance
//! ledger: accounts with balances, expense and revenue records, aggregate
//! totals, and transfers that move balance between accounts atomically.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Records, validated inputs, money and dates
//! - `storage`: JSON file storage layer with rollback and row locks
//! - `services`: Business logic layer, including the transfer engine
//! - `display`: Terminal formatting
//! - `export`: JSON and CSV export
//! - `cli`: clap command handlers
//! - `logging`: tracing setup
//!
//! # Example
//!
//! ```rust,ignore
//! use ledger_cli::config::LedgerPaths;
//! use ledger_cli::models::{AccountId, Money};
//! use ledger_cli::services::TransferService;
//! use ledger_cli::storage::Storage;
//!
//! let storage = Storage::open(LedgerPaths::new()?)?;
//! let result = TransferService::new(&storage)
//!     .transfer(AccountId::new(1), AccountId::new(2), Money::from_units(30))?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
