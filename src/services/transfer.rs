//! Transfer service
//!
//! Moves a fixed amount from one account's balance to another's. Both
//! accounts are locked for the duration of the read-modify-write, within this
//! process by row locks and across processes by the data lock. Every
//! precondition is checked before anything changes, and the two new balances
//! are written as a single commit.

use serde::Serialize;

use crate::config::TransferPolicy;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Account, AccountId, Money};
use crate::storage::Storage;

/// Service for moving balance between accounts
pub struct TransferService<'a> {
    storage: &'a Storage,
    policy: TransferPolicy,
}

/// Balances of both accounts after a transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransferResult {
    pub from: AccountId,
    pub from_balance: Money,
    pub to: AccountId,
    pub to_balance: Money,
}

impl<'a> TransferService<'a> {
    /// Create a transfer service with the default (permissive) policy
    pub fn new(storage: &'a Storage) -> Self {
        Self::with_policy(storage, TransferPolicy::default())
    }

    pub fn with_policy(storage: &'a Storage, policy: TransferPolicy) -> Self {
        Self { storage, policy }
    }

    /// Transfer `amount` from one account to another
    ///
    /// Checks run in this order, and nothing is written unless all pass:
    /// 1. the transfer policy (`Validation`)
    /// 2. both accounts exist, source first (`NotFound`)
    /// 3. the source keeps a non-negative balance (`InsufficientFunds`)
    ///
    /// A transfer to the same account leaves its balance unchanged but is
    /// still subject to the funds check.
    pub fn transfer(
        &self,
        from: AccountId,
        to: AccountId,
        amount: Money,
    ) -> LedgerResult<TransferResult> {
        self.check_policy(from, to, amount)?;

        let _rows = self.storage.accounts.lock_rows(&[from, to])?;
        let _lock = self.storage.begin_write()?;

        let mut source = self.load(from)?;
        let destination = if from == to {
            None
        } else {
            Some(self.load(to)?)
        };

        let remaining = source
            .balance
            .checked_sub(amount)
            .ok_or_else(|| out_of_range(amount))?;

        if remaining.is_negative() {
            tracing::warn!(
                from = %from,
                to = %to,
                amount = %amount,
                available = %source.balance,
                "transfer rejected: insufficient funds"
            );
            return Err(LedgerError::InsufficientFunds {
                account: from.to_string(),
                needed: amount,
                available: source.balance,
            });
        }

        let result = match destination {
            None => {
                // Same account: the debit and credit cancel out
                let balance = source.balance;
                source.set_balance(balance);
                self.commit(vec![source], from, to, amount)?;
                TransferResult {
                    from,
                    from_balance: balance,
                    to,
                    to_balance: balance,
                }
            }
            Some(mut destination) => {
                let credited = destination
                    .balance
                    .checked_add(amount)
                    .ok_or_else(|| out_of_range(amount))?;

                source.set_balance(remaining);
                destination.set_balance(credited);
                self.commit(vec![source, destination], from, to, amount)?;

                TransferResult {
                    from,
                    from_balance: remaining,
                    to,
                    to_balance: credited,
                }
            }
        };

        tracing::info!(
            from = %from,
            to = %to,
            amount = %amount,
            from_balance = %result.from_balance,
            to_balance = %result.to_balance,
            "transfer completed"
        );

        Ok(result)
    }

    fn check_policy(&self, from: AccountId, to: AccountId, amount: Money) -> LedgerResult<()> {
        if !self.policy.allow_self_transfer && from == to {
            return Err(LedgerError::invalid_field(
                "to",
                "to must be a different account than from",
            ));
        }
        if self.policy.require_positive_amount && !amount.is_positive() {
            return Err(LedgerError::invalid_field(
                "amount",
                "amount must be greater than zero",
            ));
        }
        Ok(())
    }

    fn load(&self, id: AccountId) -> LedgerResult<Account> {
        self.storage
            .accounts
            .get(id)?
            .ok_or_else(|| LedgerError::account_not_found(id))
    }

    fn commit(
        &self,
        accounts: Vec<Account>,
        from: AccountId,
        to: AccountId,
        amount: Money,
    ) -> LedgerResult<()> {
        self.storage.accounts.commit(accounts).map_err(|e| {
            tracing::error!(from = %from, to = %to, amount = %amount, error = %e, "transfer not committed");
            e
        })
    }
}

fn out_of_range(amount: Money) -> LedgerError {
    LedgerError::invalid_field("amount", format!("amount {} is out of range", amount))
}
