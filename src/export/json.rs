//! JSON Export functionality
//!
//! Exports the complete ledger to JSON format with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Account, Expense, Money, Revenue};
use crate::services::SummaryService;
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub accounts: Vec<Account>,
    pub expenses: Vec<Expense>,
    pub revenues: Vec<Revenue>,

    pub metadata: ExportMetadata,
}

/// Totals recorded alongside the data, in cents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub account_count: usize,
    pub expense_count: usize,
    pub revenue_count: usize,
    pub total_balance: Money,
    pub total_expenses: Money,
    pub total_revenue: Money,
}

impl FullExport {
    /// Snapshot everything currently in storage
    pub fn from_storage(storage: &Storage) -> LedgerResult<Self> {
        let accounts = storage.accounts.get_all()?;
        let expenses = storage.expenses.get_all()?;
        let revenues = storage.revenues.get_all()?;
        let summary = SummaryService::new(storage).summary()?;

        let metadata = ExportMetadata {
            account_count: accounts.len(),
            expense_count: expenses.len(),
            revenue_count: revenues.len(),
            total_balance: summary.total_balance,
            total_expenses: summary.total_expenses,
            total_revenue: summary.total_revenue,
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            accounts,
            expenses,
            revenues,
            metadata,
        })
    }
}

/// Export the full ledger to JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> LedgerResult<()> {
    let export = FullExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LedgerPaths;
    use crate::models::AccountInput;
    use crate::services::AccountService;
    use tempfile::TempDir;

    #[test]
    fn test_export_contains_records_and_totals() {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::open(LedgerPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        AccountService::new(&storage)
            .create(AccountInput {
                balance: Some("12.34".into()),
                account_type: Some("SAVINGS".into()),
                financial_institution: Some("BANK C".into()),
            })
            .unwrap();

        let mut out = Vec::new();
        export_full_json(&storage, &mut out, false).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["accounts"][0]["type"], "SAVINGS");
        assert_eq!(value["accounts"][0]["balance"], 1234);
        assert_eq!(value["metadata"]["total_balance"], 1234);
        assert_eq!(value["metadata"]["expense_count"], 0);
    }

    #[test]
    fn test_export_round_trips_through_serde() {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::open(LedgerPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();

        let mut out = Vec::new();
        export_full_json(&storage, &mut out, true).unwrap();
        let parsed: FullExport = serde_json::from_slice(&out).unwrap();
        assert!(parsed.accounts.is_empty());
        assert!(parsed.metadata.total_revenue.is_zero());
    }
}
