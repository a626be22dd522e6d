//! Caching layer backing the provider caching decorator.
//!
//! Provides a [`CacheStore`] trait with two implementations:
//! - [`RedisCacheStore`] - Production Redis-backed store
//! - [`MemoryCacheStore`] - In-process store with lazy TTL expiry, used when
//!   Redis is not configured and in tests

mod memory_cache;
mod redis_cache;
mod store;

pub use memory_cache::MemoryCacheStore;
pub use redis_cache::RedisCacheStore;
pub use store::{CacheError, CacheResult, CacheStore};
