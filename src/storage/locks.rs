//! Row-level locks keyed by record id
//!
//! A [`RowLocks`] set hands out guards covering one or more keys. All keys of
//! a request are claimed together, so two callers asking for `{A, B}` and
//! `{B, A}` can never each hold half and wait on the other. Requests for
//! disjoint keys proceed in parallel.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::sync::{Condvar, Mutex, PoisonError};

use crate::error::{LedgerError, LedgerResult};

pub struct RowLocks<K> {
    held: Mutex<HashSet<K>>,
    released: Condvar,
}

impl<K> Default for RowLocks<K> {
    fn default() -> Self {
        Self {
            held: Mutex::new(HashSet::new()),
            released: Condvar::new(),
        }
    }
}

impl<K: Copy + Eq + Hash + fmt::Debug> RowLocks<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block until every key is free, then claim them all
    ///
    /// Repeated keys are claimed once. The returned guard releases the keys
    /// when dropped.
    pub fn lock(&self, keys: &[K]) -> LedgerResult<RowLockGuard<'_, K>> {
        let mut wanted: Vec<K> = Vec::with_capacity(keys.len());
        for key in keys {
            if !wanted.contains(key) {
                wanted.push(*key);
            }
        }

        let mut held = self.held.lock().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire row lock table: {}", e))
        })?;

        while wanted.iter().any(|k| held.contains(k)) {
            tracing::trace!(keys = ?wanted, "waiting for row locks");
            held = self.released.wait(held).map_err(|e| {
                LedgerError::Storage(format!("Failed to wait for row lock: {}", e))
            })?;
        }

        held.extend(wanted.iter().copied());

        Ok(RowLockGuard {
            locks: self,
            keys: wanted,
        })
    }
}

/// Keys claimed by one [`RowLocks::lock`] call
#[must_use = "row locks are released as soon as the guard is dropped"]
pub struct RowLockGuard<'a, K: Eq + Hash> {
    locks: &'a RowLocks<K>,
    keys: Vec<K>,
}

impl<K: Eq + Hash> RowLockGuard<'_, K> {
    pub fn keys(&self) -> &[K] {
        &self.keys
    }
}

impl<K: Eq + Hash> Drop for RowLockGuard<'_, K> {
    fn drop(&mut self) {
        // Release even if another holder panicked
        let mut held = self
            .locks
            .held
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        for key in &self.keys {
            held.remove(key);
        }
        drop(held);
        self.locks.released.notify_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_repeated_keys_are_claimed_once() {
        let locks = RowLocks::new();
        let guard = locks.lock(&[3u64, 1, 3]).unwrap();
        assert_eq!(guard.keys(), &[3, 1]);
    }

    #[test]
    fn test_keys_are_released_on_drop() {
        let locks = RowLocks::new();
        {
            let _guard = locks.lock(&[1u64, 2]).unwrap();
        }
        // Would block forever if the keys were still held
        let _again = locks.lock(&[2u64, 1]).unwrap();
    }

    #[test]
    fn test_overlapping_request_waits_for_release() {
        let locks = RowLocks::new();
        let released = AtomicBool::new(false);

        thread::scope(|scope| {
            let first = locks.lock(&[1u64]).unwrap();

            let waiter = scope.spawn(|| {
                let _guard = locks.lock(&[2u64, 1]).unwrap();
                released.load(Ordering::SeqCst)
            });

            thread::sleep(Duration::from_millis(50));
            released.store(true, Ordering::SeqCst);
            drop(first);

            assert!(waiter.join().unwrap());
        });
    }

    #[test]
    fn test_disjoint_requests_do_not_block() {
        let locks = RowLocks::new();
        let _a = locks.lock(&[1u64]).unwrap();

        thread::scope(|scope| {
            let other = scope.spawn(|| locks.lock(&[2u64]).map(|g| g.keys().to_vec()));
            assert_eq!(other.join().unwrap().unwrap(), vec![2]);
        });
    }

    #[test]
    fn test_opposite_orders_do_not_deadlock() {
        let locks = RowLocks::new();

        thread::scope(|scope| {
            for i in 0..8u64 {
                let locks = &locks;
                scope.spawn(move || {
                    for _ in 0..100 {
                        let keys = if i % 2 == 0 { [1, 2] } else { [2, 1] };
                        let _guard = locks.lock(&keys).unwrap();
                    }
                });
            }
        });
    }
}
