//! In-process cache store with lazy TTL expiry.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tracing::debug;

use super::store::{CacheResult, CacheStore};

/// In-memory cache store.
///
/// Used when Redis is not configured, and in tests. Entries carry their
/// expiry instant; expired entries are dropped lazily on the next `get`.
/// Not shared across processes and lost on restart, which is acceptable for
/// a read-through cache of upstream responses.
#[derive(Default)]
pub struct MemoryCacheStore {
    entries: Mutex<HashMap<String, (String, Instant)>>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let mut entries = match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        match entries.get(key) {
            Some((value, expires_at)) if *expires_at > Instant::now() => {
                debug!("Cache HIT: {}", key);
                Ok(Some(value.clone()))
            }
            Some(_) => {
                entries.remove(key);
                debug!("Cache MISS (expired): {}", key);
                Ok(None)
            }
            None => {
                debug!("Cache MISS: {}", key);
                Ok(None)
            }
        }
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        let mut entries = match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        entries.insert(key.to_string(), (value.to_string(), Instant::now() + ttl));
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
