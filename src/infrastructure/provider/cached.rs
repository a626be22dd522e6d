//! Read-through caching decorator for movie providers.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use sha2::{Digest, Sha256};
use tracing::warn;

use crate::domain::entities::{Genre, Movie, MovieDetail, Page};
use crate::domain::provider::{MovieProvider, ProviderResult, TrendingWindow};
use crate::infrastructure::cache::CacheStore;

/// Hex prefix of the SHA-256 of an arbitrary string, for keying on free-form
/// input like search queries.
fn short_hash(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    hex::encode(digest)[..16].to_string()
}

/// Caching decorator over any [`MovieProvider`].
///
/// Read-through with a single TTL for every operation. Only successful
/// results are stored; errors always pass through uncached so a transient
/// upstream failure is never pinned for the TTL. A value that fails to
/// deserialize is treated as a miss and overwritten by the fresh result.
pub struct CachedMovieProvider {
    inner: Arc<dyn MovieProvider>,
    store: Arc<dyn CacheStore>,
    ttl: Duration,
}

impl CachedMovieProvider {
    pub fn new(inner: Arc<dyn MovieProvider>, store: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        Self { inner, store, ttl }
    }

    /// Read-through core: serve `key` from the store or drive `fetch` and
    /// store its success.
    ///
    /// `fetch` is taken lazily: on a hit the future is dropped unpolled, so
    /// no upstream call is made.
    async fn remember<T, F>(&self, key: String, fetch: F) -> ProviderResult<T>
    where
        T: Serialize + DeserializeOwned,
        F: Future<Output = ProviderResult<T>>,
    {
        if let Ok(Some(raw)) = self.store.get(&key).await {
            match serde_json::from_str::<T>(&raw) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    // Stale shape from an older build; fall through to refetch.
                    warn!(%key, error = %e, "discarding undeserializable cache entry");
                }
            }
        }

        let value = fetch.await?;

        match serde_json::to_string(&value) {
            Ok(raw) => {
                let _ = self.store.set(&key, &raw, self.ttl).await;
            }
            Err(e) => warn!(%key, error = %e, "failed to serialize value for cache"),
        }

        Ok(value)
    }
}

#[async_trait]
impl MovieProvider for CachedMovieProvider {
    async fn search(&self, query: &str, page: u32, language: &str) -> ProviderResult<Page<Movie>> {
        let key = format!("movies.search.{}.{}.{}", short_hash(query), page, language);
        self.remember(key, self.inner.search(query, page, language))
            .await
    }

    async fn genres(&self, language: &str) -> ProviderResult<Vec<Genre>> {
        let key = format!("movies.genres.{language}");
        self.remember(key, self.inner.genres(language)).await
    }

    async fn trending(
        &self,
        window: TrendingWindow,
        page: u32,
        language: &str,
    ) -> ProviderResult<Page<Movie>> {
        let key = format!("movies.trending.{window}.{page}.{language}");
        self.remember(key, self.inner.trending(window, page, language))
            .await
    }

    async fn get_by_id(&self, movie_id: i64, language: &str) -> ProviderResult<MovieDetail> {
        let key = format!("movies.detail.{movie_id}.{language}");
        self.remember(key, self.inner.get_by_id(movie_id, language))
            .await
    }

    async fn get_by_genre(&self, genre_id: i64, language: &str) -> ProviderResult<Vec<Movie>> {
        let key = format!("movies.genre.{genre_id}.{language}");
        self.remember(key, self.inner.get_by_genre(genre_id, language))
            .await
    }
}
