//! In-memory TTL cache backed by `DashMap` for concurrent access.

use std::time::{Duration, Instant};

use dashmap::DashMap;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::StockCatError;

struct CacheEntry {
    value: String,
    expires_at: Instant,
}

/// Thread-safe in-memory cache with time-to-live expiration.
///
/// Values are stored as serialized JSON so one cache can hold every dataset.
/// Expired entries are lazily evicted on the next read of that key.
pub struct MemoryCache {
    store: DashMap<String, CacheEntry>,
    ttl: Duration,
}

impl MemoryCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            store: DashMap::new(),
            ttl,
        }
    }

    /// Returns the raw cached JSON for `key`, or `None` if missing or expired.
    pub fn get(&self, key: &str) -> Option<String> {
        let entry = self.store.get(key)?;
        if Instant::now() > entry.expires_at {
            drop(entry);
            self.store.remove(key);
            return None;
        }
        Some(entry.value.clone())
    }

    /// Inserts or overwrites raw JSON. The entry expires after the configured TTL.
    pub fn set(&self, key: String, value: String) {
        self.store.insert(
            key,
            CacheEntry {
                value,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }

    /// Typed read. A value that no longer deserializes is evicted and reported.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StockCatError> {
        let Some(raw) = self.get(key) else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                self.store.remove(key);
                Err(StockCatError::Cache(format!(
                    "stale entry for '{}': {}",
                    key, e
                )))
            }
        }
    }

    /// Typed write. Values that fail to serialize are not cached.
    pub fn set_json<T: Serialize>(&self, key: String, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => self.set(key, json),
            Err(e) => tracing::warn!("Not caching '{}': {}", key, e),
        }
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Removes all entries from the cache.
    pub fn clear(&self) {
        self.store.clear();
    }
}
