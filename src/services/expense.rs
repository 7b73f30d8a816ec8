//! Expense service

use crate::error::{LedgerError, LedgerResult};
use crate::models::{DateRange, Expense, ExpenseCategory, ExpenseId, ExpenseInput, Money};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn create(&self, input: ExpenseInput) -> LedgerResult<Expense> {
        let draft = input.validate()?;
        let _lock = self.storage.begin_write()?;
        let expense = self
            .storage
            .expenses
            .insert_with(|id| Expense::from_draft(id, draft))?;

        tracing::info!(id = %expense.id, value = %expense.value, "expense recorded");
        Ok(expense)
    }

    pub fn get(&self, id: ExpenseId) -> LedgerResult<Option<Expense>> {
        self.storage.expenses.get(id)
    }

    pub fn require(&self, id: ExpenseId) -> LedgerResult<Expense> {
        self.get(id)?
            .ok_or_else(|| LedgerError::expense_not_found(id))
    }

    pub fn list(&self) -> LedgerResult<Vec<Expense>> {
        self.storage.expenses.get_all()
    }

    /// Expenses paid within the range, bounds included
    pub fn find_by_date_range(&self, range: &DateRange) -> LedgerResult<Vec<Expense>> {
        self.storage.expenses.get_by_payment_date(range)
    }

    pub fn find_by_category(&self, category: ExpenseCategory) -> LedgerResult<Vec<Expense>> {
        self.storage.expenses.get_by_category(category)
    }

    /// Full replacement of an existing expense
    pub fn update(&self, id: ExpenseId, input: ExpenseInput) -> LedgerResult<Expense> {
        let draft = input.validate()?;
        let _lock = self.storage.begin_write()?;
        let mut expense = self.require(id)?;
        expense.replace_with(draft);
        let expense = self.storage.expenses.replace(expense)?;

        tracing::info!(id = %id, "expense updated");
        Ok(expense)
    }

    pub fn delete(&self, id: ExpenseId) -> LedgerResult<()> {
        let _lock = self.storage.begin_write()?;
        if !self.storage.expenses.delete(id)? {
            return Err(LedgerError::expense_not_found(id));
        }
        tracing::info!(id = %id, "expense deleted");
        Ok(())
    }

    /// Sum of all expense values; zero when there are none
    pub fn total_expenses(&self) -> LedgerResult<Money> {
        Ok(self
            .storage
            .expenses
            .sum_values()?
            .unwrap_or_else(Money::zero))
    }
}
