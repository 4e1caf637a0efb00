//! LRU cache of finished classification records.
//!
//! Keyed by the raw input string. Only used for calls without caller
//! excludes, since a cached record does not encode the exclude set that
//! produced it.

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use lru::LruCache;
use serde::Serialize;
use tracing::trace;

use crate::record::ClassificationRecord;

/// Snapshot of cache counters, as reported by `/cache-stats`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub result_entries: usize,
    pub result_capacity: usize,
    pub result_hits: u64,
    pub result_misses: u64,
    pub normaliser_entries: usize,
    pub normaliser_capacity: usize,
    pub compiled_patterns: usize,
    pub fast_path_entries: usize,
}

pub struct ResultCache {
    cache: Option<Arc<Mutex<LruCache<String, ClassificationRecord>>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ResultCache {
    /// A capacity of zero disables the cache.
    pub fn new(capacity: usize) -> Self {
        let cache = NonZeroUsize::new(capacity).map(|cap| Arc::new(Mutex::new(LruCache::new(cap))));
        Self {
            cache,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn get(&self, input: &str) -> Option<ClassificationRecord> {
        let cache = self.cache.as_ref()?;
        let hit = cache
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(input)
            .cloned();
        match hit {
            Some(_) => self.hits.fetch_add(1, Ordering::Relaxed),
            None => self.misses.fetch_add(1, Ordering::Relaxed),
        };
        hit
    }

    pub fn put(&self, input: &str, record: ClassificationRecord) {
        let Some(cache) = &self.cache else {
            return;
        };
        let mut guard = cache.lock().unwrap_or_else(|e| e.into_inner());
        if let Some((evicted, _)) = guard.push(input.to_string(), record) {
            if evicted != input {
                trace!(evicted = %evicted, "Result cache evicted entry");
            }
        }
    }

    pub fn len(&self) -> usize {
        self.cache
            .as_ref()
            .map(|c| c.lock().unwrap_or_else(|e| e.into_inner()).len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.cache
            .as_ref()
            .map(|c| c.lock().unwrap_or_else(|e| e.into_inner()).cap().get())
            .unwrap_or(0)
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn clear(&self) {
        if let Some(cache) = &self.cache {
            cache.lock().unwrap_or_else(|e| e.into_inner()).clear();
        }
    }
}
