//! Redis-backed cache store implementation.

use std::time::Duration;

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, error, info, warn};

use super::store::{CacheError, CacheResult, CacheStore};

/// Redis cache store for provider responses.
///
/// Uses connection pooling via `ConnectionManager` for efficient connection
/// reuse. All operations are fail-open: errors are logged but don't propagate
/// to callers.
pub struct RedisCacheStore {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisCacheStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the
    /// connection cannot be established, or the PING health check fails.
    pub async fn connect(redis_url: &str) -> CacheResult<Self> {
        info!("Connecting to Redis at {}", redis_url);

        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self {
            client: manager,
            key_prefix: "tmdb:".to_string(),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let full_key = self.build_key(key);
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(&full_key).await {
            Ok(Some(value)) => {
                debug!("Cache HIT: {}", key);
                Ok(Some(value))
            }
            Ok(None) => {
                debug!("Cache MISS: {}", key);
                Ok(None)
            }
            Err(e) => {
                error!("Redis GET error for {}: {}", key, e);
                Ok(None)
            }
        }
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        let full_key = self.build_key(key);
        let mut conn = self.client.clone();
        let ttl_seconds = ttl.as_secs().max(1);

        match conn.set_ex::<_, _, ()>(&full_key, value, ttl_seconds).await {
            Ok(_) => {
                debug!("Cache SET: {} (TTL: {}s)", key, ttl_seconds);
                Ok(())
            }
            Err(e) => {
                warn!("Redis SET error for {}: {}", key, e);
                Ok(())
            }
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
