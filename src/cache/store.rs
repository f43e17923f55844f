//! Cache Store Module
//!
//! The expiring response cache: a single mutex over a HashMap of entries,
//! swept periodically by a background reaper task.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::time::Instant;
use tracing::trace;

use crate::cache::{CacheEntry, CacheStats};
use crate::error::CacheError;
use crate::tasks::{spawn_reaper, ReaperHandle};

/// Longest gap between two sweeps. Longer intervals still set the expiry
/// threshold but the reaper wakes at least this often.
const MAX_SWEEP_PERIOD: Duration = Duration::from_secs(60 * 60 * 24 * 365 * 30);

/// State guarded by the cache lock.
#[derive(Debug, Default)]
struct State {
    entries: HashMap<String, CacheEntry>,
    stats: CacheStats,
}

#[derive(Debug)]
struct Shared {
    /// Sweep period and expiry threshold, fixed for the cache's lifetime
    interval: Duration,
    state: Mutex<State>,
}

// == Expiring Cache ==
/// Thread-safe map from request URL to raw response body.
///
/// Every entry is stamped when added and removed by the reaper once its age
/// exceeds the cache interval. Sweeps run once per interval, so an entry
/// lives between one and two intervals before it disappears.
///
/// Cloning is cheap and every clone shares the same entries.
#[derive(Debug, Clone)]
pub struct ExpiringCache {
    shared: Arc<Shared>,
}

impl ExpiringCache {
    // == Constructor ==
    /// Creates a cache and starts its reaper on the current tokio runtime.
    ///
    /// The returned [`ReaperHandle`] stops the reaper. Dropping the handle
    /// detaches it instead: the reaper keeps sweeping until the last clone of
    /// the cache is dropped.
    ///
    /// # Errors
    /// - [`CacheError::InvalidInterval`] if `interval` is zero
    /// - [`CacheError::NoRuntime`] if called outside a tokio runtime
    pub fn start(interval: Duration) -> Result<(Self, ReaperHandle), CacheError> {
        let cache = Self::new(interval)?;
        let runtime = Handle::try_current().map_err(|_| CacheError::NoRuntime)?;
        let period = interval.min(MAX_SWEEP_PERIOD);
        let first_sweep = Instant::now() + period;
        let reaper = spawn_reaper(&runtime, cache.downgrade(), first_sweep, period);
        Ok((cache, reaper))
    }

    /// Creates a cache without a reaper. Entries only go away through
    /// explicit [`reap`](Self::reap) calls.
    pub(crate) fn new(interval: Duration) -> Result<Self, CacheError> {
        if interval.is_zero() {
            return Err(CacheError::InvalidInterval(interval));
        }

        Ok(Self {
            shared: Arc::new(Shared {
                interval,
                state: Mutex::new(State::default()),
            }),
        })
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // Every mutation is a single map operation, so a panicking holder
        // cannot leave a half-written entry behind.
        self.shared
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn downgrade(&self) -> WeakExpiringCache {
        WeakExpiringCache(Arc::downgrade(&self.shared))
    }

    // == Add ==
    /// Inserts or replaces the entry for `key`, stamped with the current time.
    pub fn add(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        let key = key.into();
        let entry = CacheEntry::new(value.into());

        let mut state = self.lock();
        trace!(key = %key, bytes = entry.value.len(), "cache add");
        state.entries.insert(key, entry);
        let len = state.entries.len();
        state.stats.set_total_entries(len);
    }

    // == Get ==
    /// Returns a copy of the value stored under `key`.
    ///
    /// Entries are returned until the reaper removes them, however close they
    /// are to expiry. Reading never refreshes the timestamp.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        let mut state = self.lock();
        let value = state.entries.get(key).map(|entry| entry.value.clone());

        match value {
            Some(_) => state.stats.record_hit(),
            None => state.stats.record_miss(),
        }
        value
    }

    // == Reap ==
    /// Runs one sweep, removing every entry older than the interval.
    ///
    /// Returns the number of entries removed.
    pub fn reap(&self) -> usize {
        let interval = self.shared.interval;
        let mut state = self.lock();
        let now = Instant::now();

        let before = state.entries.len();
        state
            .entries
            .retain(|_, entry| !entry.is_expired(now, interval));
        let after = state.entries.len();
        let removed = before - after;

        state.stats.record_sweep(removed);
        state.stats.set_total_entries(after);
        removed
    }

    pub fn interval(&self) -> Duration {
        self.shared.interval
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    // == Stats ==
    /// Returns a snapshot of the cache counters.
    pub fn stats(&self) -> CacheStats {
        let state = self.lock();
        let mut stats = state.stats.clone();
        stats.set_total_entries(state.entries.len());
        stats
    }
}

// == Weak Handle ==
/// Non-owning reference held by the reaper, so a dropped cache ends its task.
#[derive(Debug, Clone)]
pub(crate) struct WeakExpiringCache(Weak<Shared>);

impl WeakExpiringCache {
    pub(crate) fn upgrade(&self) -> Option<ExpiringCache> {
        self.0.upgrade().map(|shared| ExpiringCache { shared })
    }
}
