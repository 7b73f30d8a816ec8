//! Ledger-wide totals

use serde::Serialize;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Money;
use crate::storage::Storage;

use super::{AccountService, ExpenseService, RevenueService};

/// Totals across every record kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LedgerSummary {
    pub total_balance: Money,
    pub total_expenses: Money,
    pub total_revenue: Money,
    /// Revenue minus expenses
    pub net: Money,
    pub accounts: usize,
    pub expenses: usize,
    pub revenues: usize,
}

pub struct SummaryService<'a> {
    storage: &'a Storage,
}

impl<'a> SummaryService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn summary(&self) -> LedgerResult<LedgerSummary> {
        let total_balance = AccountService::new(self.storage).total_balance()?;
        let total_expenses = ExpenseService::new(self.storage).total_expenses()?;
        let total_revenue = RevenueService::new(self.storage).total_revenue()?;

        let net = total_revenue
            .checked_sub(total_expenses)
            .ok_or_else(|| LedgerError::Storage("net total overflows".into()))?;

        Ok(LedgerSummary {
            total_balance,
            total_expenses,
            total_revenue,
            net,
            accounts: self.storage.accounts.count()?,
            expenses: self.storage.expenses.count()?,
            revenues: self.storage.revenues.count()?,
        })
    }
}
