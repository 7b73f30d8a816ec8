//! Expense repository for JSON storage

use std::path::PathBuf;

use crate::error::LedgerResult;
use crate::models::{DateRange, Expense, ExpenseCategory, ExpenseId, Money};

use super::table::{Record, Table};

impl Record for Expense {
    type Id = ExpenseId;
    const ENTITY: &'static str = "Expense";

    fn id(&self) -> ExpenseId {
        self.id
    }
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    table: Table<Expense>,
}

impl ExpenseRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            table: Table::new(path),
        }
    }

    pub fn load(&self) -> LedgerResult<()> {
        self.table.load()
    }

    pub fn insert_with(&self, build: impl FnOnce(ExpenseId) -> Expense) -> LedgerResult<Expense> {
        self.table.insert_with(build)
    }

    pub fn replace(&self, expense: Expense) -> LedgerResult<Expense> {
        self.table.replace(expense)
    }

    pub fn get(&self, id: ExpenseId) -> LedgerResult<Option<Expense>> {
        self.table.find_by_id(id)
    }

    pub fn get_all(&self) -> LedgerResult<Vec<Expense>> {
        self.table.find_all()
    }

    /// Expenses whose payment date falls inside the range, bounds included
    pub fn get_by_payment_date(&self, range: &DateRange) -> LedgerResult<Vec<Expense>> {
        self.table.find_where(|e| range.contains(e.payment_date))
    }

    pub fn get_by_category(&self, category: ExpenseCategory) -> LedgerResult<Vec<Expense>> {
        self.table.find_where(|e| e.category == category)
    }

    pub fn delete(&self, id: ExpenseId) -> LedgerResult<bool> {
        self.table.delete_by_id(id)
    }

    pub fn exists(&self, id: ExpenseId) -> LedgerResult<bool> {
        self.table.exists(id)
    }

    pub fn count(&self) -> LedgerResult<usize> {
        self.table.count()
    }

    pub fn sum_values(&self) -> LedgerResult<Option<Money>> {
        self.table.sum(|e| e.value)
    }
}
