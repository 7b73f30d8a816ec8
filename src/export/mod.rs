//! Export module for the ledger
//!
//! Provides complete data export functionality in multiple formats:
//! - CSV: one record kind per file (spreadsheet-compatible)
//! - JSON: machine-readable full ledger export

pub mod csv;
pub mod json;

pub use csv::{export_accounts_csv, export_expenses_csv, export_revenues_csv};
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
