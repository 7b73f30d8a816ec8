//! Storage layer for the ledger
//!
//! Provides JSON file storage with atomic writes, in-memory tables that roll
//! back on a failed write, row locks for balance changes, and a data-directory
//! lock that keeps separate processes from overwriting each other.

pub mod accounts;
pub mod expenses;
pub mod file_io;
pub mod locks;
pub mod revenues;
pub mod store_lock;
pub mod table;

pub use accounts::AccountRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use locks::{RowLockGuard, RowLocks};
pub use revenues::RevenueRepository;
pub use store_lock::{StoreLock, StoreLockGuard};
pub use table::{Record, Table};

use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: LedgerPaths,
    lock: StoreLock,
    pub accounts: AccountRepository,
    pub expenses: ExpenseRepository,
    pub revenues: RevenueRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: LedgerPaths) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;

        Ok(Self {
            accounts: AccountRepository::new(paths.accounts_file()),
            expenses: ExpenseRepository::new(paths.expenses_file()),
            revenues: RevenueRepository::new(paths.revenues_file()),
            lock: StoreLock::new(paths.lock_file()),
            paths,
        })
    }

    /// Create storage and load everything already on disk
    pub fn open(paths: LedgerPaths) -> Result<Self, LedgerError> {
        let storage = Self::new(paths)?;
        storage.load_all()?;
        Ok(storage)
    }

    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    /// Take the data lock and re-read every table from disk
    ///
    /// Every change to stored records runs under the returned guard, from its
    /// reads through its commit. Writes made by other processes since this
    /// one loaded are therefore seen, never overwritten.
    pub fn begin_write(&self) -> Result<StoreLockGuard<'_>, LedgerError> {
        let guard = self.lock.acquire()?;
        self.load_all()?;
        Ok(guard)
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), LedgerError> {
        self.accounts.load()?;
        self.expenses.load()?;
        self.revenues.load()?;
        tracing::debug!(base = %self.paths.base_dir().display(), "storage loaded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, AccountDraft, AccountId, AccountType, Money};
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(storage.accounts.count().unwrap(), 0);
        assert_eq!(storage.expenses.count().unwrap(), 0);
        assert_eq!(storage.revenues.count().unwrap(), 0);
    }

    #[test]
    fn test_begin_write_sees_changes_from_another_handle() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let first = Storage::open(paths.clone()).unwrap();
        let second = Storage::open(paths).unwrap();

        {
            let _lock = first.begin_write().unwrap();
            first
                .accounts
                .insert_with(|id| Account::from_draft(id, draft(100)))
                .unwrap();
        }
        assert_eq!(second.accounts.count().unwrap(), 0);

        // The stale handle refreshes before writing, so no id is reused
        let _lock = second.begin_write().unwrap();
        assert_eq!(second.accounts.count().unwrap(), 1);
        let created = second
            .accounts
            .insert_with(|id| Account::from_draft(id, draft(5)))
            .unwrap();
        assert_eq!(created.id, AccountId::new(2));
    }

    fn draft(units: i64) -> AccountDraft {
        AccountDraft {
            balance: Money::from_units(units),
            account_type: AccountType::Checking,
            financial_institution: "BANK A".into(),
        }
    }
}
