//! Account service
//!
//! Provides business logic for account management: validated creation,
//! whole-record updates, deletion, and the total balance across accounts.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Account, AccountId, AccountInput, Money};
use crate::storage::Storage;

/// Service for account management
pub struct AccountService<'a> {
    storage: &'a Storage,
}

impl<'a> AccountService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate the input and store a new account
    pub fn create(&self, input: AccountInput) -> LedgerResult<Account> {
        let draft = input.validate()?;
        let _lock = self.storage.begin_write()?;
        let account = self
            .storage
            .accounts
            .insert_with(|id| Account::from_draft(id, draft))?;

        tracing::info!(id = %account.id, balance = %account.balance, "account created");
        Ok(account)
    }

    /// Get an account by ID
    pub fn get(&self, id: AccountId) -> LedgerResult<Option<Account>> {
        self.storage.accounts.get(id)
    }

    /// Get an account by ID, failing with `NotFound` if absent
    pub fn require(&self, id: AccountId) -> LedgerResult<Account> {
        self.get(id)?
            .ok_or_else(|| LedgerError::account_not_found(id))
    }

    /// All accounts, ordered by id
    pub fn list(&self) -> LedgerResult<Vec<Account>> {
        self.storage.accounts.get_all()
    }

    /// Replace every editable field of an existing account
    ///
    /// The input is validated as a complete record first; fields left out are
    /// reported as missing rather than kept from the stored account.
    pub fn update(&self, id: AccountId, input: AccountInput) -> LedgerResult<Account> {
        let draft = input.validate()?;

        let _row = self.storage.accounts.lock_rows(&[id])?;
        let _lock = self.storage.begin_write()?;
        let mut account = self.require(id)?;
        account.replace_with(draft);
        let account = self.storage.accounts.replace(account)?;

        tracing::info!(id = %id, "account updated");
        Ok(account)
    }

    /// Delete an account, failing with `NotFound` if absent
    pub fn delete(&self, id: AccountId) -> LedgerResult<()> {
        let _row = self.storage.accounts.lock_rows(&[id])?;
        let _lock = self.storage.begin_write()?;
        if !self.storage.accounts.delete(id)? {
            return Err(LedgerError::account_not_found(id));
        }

        tracing::info!(id = %id, "account deleted");
        Ok(())
    }

    /// Sum of all account balances; zero when there are no accounts
    pub fn total_balance(&self) -> LedgerResult<Money> {
        Ok(self
            .storage
            .accounts
            .sum_balances()?
            .unwrap_or_else(Money::zero))
    }
}
