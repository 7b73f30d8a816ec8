//! Configuration module for the ledger
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence
//! - Transfer policy

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::{Settings, TransferPolicy};
