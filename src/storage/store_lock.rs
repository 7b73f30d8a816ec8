//! Exclusive lock over the data directory
//!
//! Each `ledger` invocation is a separate process holding its own copy of the
//! tables, and [`RowLocks`](super::RowLocks) only reach threads of one
//! process. Writers therefore also take this lock, an advisory lock on a file
//! in the data directory, and hold it from re-reading the tables until their
//! change is on disk.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use fs4::fs_std::FileExt;

use crate::error::{LedgerError, LedgerResult};

pub struct StoreLock {
    path: PathBuf,
    // Threads of one process share an open file description, which the OS
    // lock does not separate, so they queue here first
    gate: Mutex<()>,
}

impl StoreLock {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            gate: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Block until no other thread or process holds the lock, then take it
    pub fn acquire(&self) -> LedgerResult<StoreLockGuard<'_>> {
        let gate = self.gate.lock().unwrap_or_else(PoisonError::into_inner);

        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .read(true)
            .write(true)
            .open(&self.path)
            .map_err(|e| {
                LedgerError::Storage(format!(
                    "Failed to open lock file {}: {}",
                    self.path.display(),
                    e
                ))
            })?;

        FileExt::lock_exclusive(&file).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to lock {}: {}",
                self.path.display(),
                e
            ))
        })?;

        tracing::trace!(path = %self.path.display(), "data lock acquired");
        Ok(StoreLockGuard {
            _file: file,
            _gate: gate,
        })
    }
}

/// Held data-directory lock; closing the file releases it
#[must_use = "the data lock is released as soon as the guard is dropped"]
pub struct StoreLockGuard<'a> {
    // Declared first so the OS lock is released before the gate
    _file: File,
    _gate: MutexGuard<'a, ()>,
}
