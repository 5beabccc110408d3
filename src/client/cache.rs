//! Query cache
//!
//! Injected cache abstraction keyed by normalized query, so the client is
//! testable without a process-wide singleton. The in-memory implementation
//! keeps entries fresh for the configured ttl and evicts anything unused
//! for longer than the eviction window.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use mockall::automock;
use rustc_hash::FxHashMap;

use crate::{search::QueryKey, skips::Skip};

/// Storage for fetched skip lists, keyed by normalized query.
#[automock]
pub trait SkipCache: Send + Sync {
    /// Returns the cached skips for `key` if still within their freshness
    /// window.
    fn get(&self, key: &QueryKey) -> Option<Vec<Skip>>;

    /// Stores `skips` under `key`, fresh for `ttl`.
    fn set(&self, key: QueryKey, skips: Vec<Skip>, ttl: Duration);
}

struct CacheEntry {
    skips: Vec<Skip>,
    ttl: Duration,
    stored_at: Instant,
    last_access: Instant,
}

/// In-memory [`SkipCache`] with per-entry freshness and disuse eviction.
#[derive(Debug)]
pub struct InMemoryCache {
    entries: Mutex<FxHashMap<QueryKey, CacheEntry>>,
    evict_after: Duration,
}

impl std::fmt::Debug for CacheEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheEntry")
            .field("skips", &self.skips.len())
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl InMemoryCache {
    /// Creates a cache that evicts entries untouched for `evict_after`.
    #[must_use]
    pub fn new(evict_after: Duration) -> Self {
        Self {
            entries: Mutex::new(FxHashMap::default()),
            evict_after,
        }
    }
}

impl SkipCache for InMemoryCache {
    fn get(&self, key: &QueryKey) -> Option<Vec<Skip>> {
        let Ok(mut entries) = self.entries.lock() else {
            return None;
        };

        let evict_after = self.evict_after;
        entries.retain(|_, entry| entry.last_access.elapsed() <= evict_after);

        let entry = entries.get_mut(key)?;
        if entry.stored_at.elapsed() > entry.ttl {
            return None;
        }

        entry.last_access = Instant::now();
        Some(entry.skips.clone())
    }

    fn set(&self, key: QueryKey, skips: Vec<Skip>, ttl: Duration) {
        let Ok(mut entries) = self.entries.lock() else {
            return;
        };

        let evict_after = self.evict_after;
        entries.retain(|_, entry| entry.last_access.elapsed() <= evict_after);

        let now = Instant::now();
        entries.insert(
            key,
            CacheEntry {
                skips,
                ttl,
                stored_at: now,
                last_access: now,
            },
        );
    }
}
