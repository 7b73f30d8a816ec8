//! Revenue repository for JSON storage

use std::path::PathBuf;

use crate::error::LedgerResult;
use crate::models::{DateRange, Money, Revenue, RevenueCategory, RevenueId};

use super::table::{Record, Table};

impl Record for Revenue {
    type Id = RevenueId;
    const ENTITY: &'static str = "Revenue";

    fn id(&self) -> RevenueId {
        self.id
    }
}

/// Repository for revenue persistence
pub struct RevenueRepository {
    table: Table<Revenue>,
}

impl RevenueRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            table: Table::new(path),
        }
    }

    pub fn load(&self) -> LedgerResult<()> {
        self.table.load()
    }

    pub fn insert_with(&self, build: impl FnOnce(RevenueId) -> Revenue) -> LedgerResult<Revenue> {
        self.table.insert_with(build)
    }

    pub fn replace(&self, revenue: Revenue) -> LedgerResult<Revenue> {
        self.table.replace(revenue)
    }

    pub fn get(&self, id: RevenueId) -> LedgerResult<Option<Revenue>> {
        self.table.find_by_id(id)
    }

    pub fn get_all(&self) -> LedgerResult<Vec<Revenue>> {
        self.table.find_all()
    }

    /// Revenues whose receipt date falls inside the range, bounds included
    pub fn get_by_receipt_date(&self, range: &DateRange) -> LedgerResult<Vec<Revenue>> {
        self.table.find_where(|r| range.contains(r.receipt_date))
    }

    pub fn get_by_category(&self, category: RevenueCategory) -> LedgerResult<Vec<Revenue>> {
        self.table.find_where(|r| r.category == category)
    }

    pub fn delete(&self, id: RevenueId) -> LedgerResult<bool> {
        self.table.delete_by_id(id)
    }

    pub fn exists(&self, id: RevenueId) -> LedgerResult<bool> {
        self.table.exists(id)
    }

    pub fn count(&self) -> LedgerResult<usize> {
        self.table.count()
    }

    pub fn sum_values(&self) -> LedgerResult<Option<Money>> {
        self.table.sum(|r| r.value)
    }
}
