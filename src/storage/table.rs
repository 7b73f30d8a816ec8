//! Generic record table backed by one JSON file
//!
//! A `Table` keeps every record of one kind in memory, ordered by id, and
//! rewrites its file atomically after each change. Every mutating call is
//! all-or-nothing: if the file cannot be written, the in-memory rows are
//! restored to what they were before the call.

use std::collections::BTreeMap;
use std::fmt;
use std::hash::Hash;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::models::Money;

use super::file_io::{read_json, write_json_atomic};

/// A record kind that can live in a [`Table`]
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync {
    type Id: Copy + Ord + Hash + fmt::Display + fmt::Debug + From<u64> + Into<u64> + Send + Sync;

    /// Name used in "not found" errors and log lines
    const ENTITY: &'static str;

    fn id(&self) -> Self::Id;
}

/// On-disk layout
#[derive(Serialize, Deserialize)]
#[serde(bound = "R: Record")]
struct TableFile<R> {
    next_id: u64,
    records: Vec<R>,
}

impl<R> Default for TableFile<R> {
    fn default() -> Self {
        Self {
            next_id: 1,
            records: Vec::new(),
        }
    }
}

struct TableState<R: Record> {
    next_id: u64,
    rows: BTreeMap<R::Id, R>,
}

/// Persistent collection of one record kind
pub struct Table<R: Record> {
    path: PathBuf,
    state: RwLock<TableState<R>>,
}

impl<R: Record> Table<R> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            state: RwLock::new(TableState {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }

    /// Load records from disk, replacing whatever is in memory
    pub fn load(&self) -> LedgerResult<()> {
        let file: TableFile<R> = read_json(&self.path)?;
        let mut state = self.write()?;

        state.rows = file.records.into_iter().map(|r| (r.id(), r)).collect();
        let after_last = state
            .rows
            .keys()
            .next_back()
            .map(|id| Into::<u64>::into(*id) + 1)
            .unwrap_or(1);
        state.next_id = file.next_id.max(after_last);

        tracing::debug!(entity = R::ENTITY, count = state.rows.len(), "table loaded");
        Ok(())
    }

    /// Assign the next id, build the record from it, and store it
    pub fn insert_with(&self, build: impl FnOnce(R::Id) -> R) -> LedgerResult<R> {
        let mut state = self.write()?;

        let id: R::Id = state.next_id.into();
        let record = build(id);
        state.next_id += 1;
        state.rows.insert(id, record.clone());

        if let Err(e) = self.persist(&state) {
            state.rows.remove(&id);
            state.next_id -= 1;
            return Err(e);
        }

        tracing::debug!(entity = R::ENTITY, %id, "record created");
        Ok(record)
    }

    /// Overwrite one existing record
    pub fn replace(&self, record: R) -> LedgerResult<R> {
        self.commit(vec![record.clone()])?;
        Ok(record)
    }

    /// Overwrite several existing records as one unit
    ///
    /// Either every record is stored and the file rewritten once, or nothing
    /// changes. Fails with `NotFound` if any id is not already present.
    pub fn commit(&self, records: Vec<R>) -> LedgerResult<()> {
        let mut state = self.write()?;

        if let Some(missing) = records.iter().find(|r| !state.rows.contains_key(&r.id())) {
            return Err(LedgerError::NotFound {
                entity_type: R::ENTITY,
                identifier: missing.id().to_string(),
            });
        }

        let mut previous: Vec<R> = Vec::with_capacity(records.len());
        for record in records {
            if let Some(old) = state.rows.insert(record.id(), record) {
                previous.push(old);
            }
        }

        if let Err(e) = self.persist(&state) {
            // Restore in reverse so the oldest value of a repeated id wins
            for old in previous.into_iter().rev() {
                state.rows.insert(old.id(), old);
            }
            tracing::error!(entity = R::ENTITY, error = %e, "commit rolled back");
            return Err(e);
        }

        Ok(())
    }

    /// Remove a record, returning whether it existed
    pub fn delete_by_id(&self, id: R::Id) -> LedgerResult<bool> {
        let mut state = self.write()?;

        let Some(old) = state.rows.remove(&id) else {
            return Ok(false);
        };

        if let Err(e) = self.persist(&state) {
            state.rows.insert(id, old);
            return Err(e);
        }

        tracing::debug!(entity = R::ENTITY, %id, "record deleted");
        Ok(true)
    }

    pub fn find_by_id(&self, id: R::Id) -> LedgerResult<Option<R>> {
        Ok(self.read()?.rows.get(&id).cloned())
    }

    /// All records, ordered by id
    pub fn find_all(&self) -> LedgerResult<Vec<R>> {
        Ok(self.read()?.rows.values().cloned().collect())
    }

    /// Records matching a predicate, ordered by id
    pub fn find_where(&self, predicate: impl Fn(&R) -> bool) -> LedgerResult<Vec<R>> {
        Ok(self
            .read()?
            .rows
            .values()
            .filter(|r| predicate(r))
            .cloned()
            .collect())
    }

    pub fn exists(&self, id: R::Id) -> LedgerResult<bool> {
        Ok(self.read()?.rows.contains_key(&id))
    }

    pub fn count(&self) -> LedgerResult<usize> {
        Ok(self.read()?.rows.len())
    }

    /// Sum a monetary field over every record
    ///
    /// Like a SQL `SUM`, this yields `None` when the table is empty; callers
    /// decide how to present that.
    pub fn sum(&self, field: impl Fn(&R) -> Money) -> LedgerResult<Option<Money>> {
        let state = self.read()?;
        if state.rows.is_empty() {
            return Ok(None);
        }

        Money::checked_sum(state.rows.values().map(field))
            .map(Some)
            .ok_or_else(|| LedgerError::Storage(format!("{} total overflows", R::ENTITY)))
    }

    fn persist(&self, state: &TableState<R>) -> LedgerResult<()> {
        let file = TableFileRef {
            next_id: state.next_id,
            records: state.rows.values().collect(),
        };
        write_json_atomic(&self.path, &file)
    }

    fn read(&self) -> LedgerResult<RwLockReadGuard<'_, TableState<R>>> {
        self.state.read().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire read lock: {}", e))
        })
    }

    fn write(&self) -> LedgerResult<RwLockWriteGuard<'_, TableState<R>>> {
        self.state.write().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire write lock: {}", e))
        })
    }
}

/// Borrowing twin of [`TableFile`] used when writing
#[derive(Serialize)]
struct TableFileRef<'a, R: Serialize> {
    next_id: u64,
    records: Vec<&'a R>,
}
