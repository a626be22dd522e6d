//! Cache store trait and error types.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

/// Errors that can occur during cache operations.
#[derive(Debug)]
pub enum CacheError {
    ConnectionError(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ConnectionError(e) => write!(f, "Cache connection error: {}", e),
        }
    }
}

impl std::error::Error for CacheError {}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for the keyed store behind the provider caching decorator.
///
/// Values are opaque serialized strings; key layout and TTL policy belong to
/// the decorator, not the store. Implementations must be thread-safe and
/// fail-open: a store error degrades to a cache miss (or a dropped write)
/// rather than failing the request.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCacheStore`] - Redis-backed store with native TTL
/// - [`crate::infrastructure::cache::MemoryCacheStore`] - In-process store with lazy expiry
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Retrieves the value for a key.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` on a live (unexpired) hit
    /// - `Ok(None)` on miss, expiry, or store error (fail-open)
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores a value under a key with the given TTL.
    ///
    /// # Errors
    ///
    /// Implementations log failures and return `Ok(())` so a broken cache
    /// never disrupts the request flow.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    ///
    /// Used by the health endpoint to report cache status.
    async fn health_check(&self) -> bool;
}
