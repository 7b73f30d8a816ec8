//! Account repository for JSON storage
//!
//! Manages loading and saving accounts to accounts.json, plus the row locks
//! that serialize balance changes on the same account.

use std::path::PathBuf;

use crate::error::LedgerResult;
use crate::models::{Account, AccountId, Money};

use super::locks::{RowLockGuard, RowLocks};
use super::table::{Record, Table};

impl Record for Account {
    type Id = AccountId;
    const ENTITY: &'static str = "Account";

    fn id(&self) -> AccountId {
        self.id
    }
}

/// Repository for account persistence
pub struct AccountRepository {
    table: Table<Account>,
    rows: RowLocks<AccountId>,
}

impl AccountRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            table: Table::new(path),
            rows: RowLocks::new(),
        }
    }

    /// Load accounts from disk
    pub fn load(&self) -> LedgerResult<()> {
        self.table.load()
    }

    /// Claim exclusive use of the given accounts until the guard is dropped
    ///
    /// Every read-modify-write of a balance must happen under this guard.
    pub fn lock_rows(&self, ids: &[AccountId]) -> LedgerResult<RowLockGuard<'_, AccountId>> {
        self.rows.lock(ids)
    }

    /// Store a new account under the next id
    pub fn insert_with(&self, build: impl FnOnce(AccountId) -> Account) -> LedgerResult<Account> {
        self.table.insert_with(build)
    }

    pub fn replace(&self, account: Account) -> LedgerResult<Account> {
        self.table.replace(account)
    }

    /// Write several accounts as one unit; see [`Table::commit`]
    pub fn commit(&self, accounts: Vec<Account>) -> LedgerResult<()> {
        self.table.commit(accounts)
    }

    pub fn get(&self, id: AccountId) -> LedgerResult<Option<Account>> {
        self.table.find_by_id(id)
    }

    /// All accounts, ordered by id
    pub fn get_all(&self) -> LedgerResult<Vec<Account>> {
        self.table.find_all()
    }

    pub fn delete(&self, id: AccountId) -> LedgerResult<bool> {
        self.table.delete_by_id(id)
    }

    pub fn exists(&self, id: AccountId) -> LedgerResult<bool> {
        self.table.exists(id)
    }

    pub fn count(&self) -> LedgerResult<usize> {
        self.table.count()
    }

    /// Sum of all balances, `None` when there are no accounts
    pub fn sum_balances(&self) -> LedgerResult<Option<Money>> {
        self.table.sum(|a| a.balance)
    }
}
