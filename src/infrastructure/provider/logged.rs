//! Call-logging decorator for movie providers.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use tracing::info;

use crate::domain::entities::{Genre, Movie, MovieDetail, Page};
use crate::domain::provider::{MovieProvider, ProviderResult, TrendingWindow};

/// Logging decorator over any [`MovieProvider`].
///
/// Emits exactly one structured event per call, success or failure, with the
/// operation name, its arguments, wall-clock duration, and outcome. Placed
/// outermost in the chain so cache hits are logged like any other call.
/// Results and errors pass through unchanged.
pub struct LoggedMovieProvider {
    inner: Arc<dyn MovieProvider>,
}

impl LoggedMovieProvider {
    pub fn new(inner: Arc<dyn MovieProvider>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl MovieProvider for LoggedMovieProvider {
    async fn search(&self, query: &str, page: u32, language: &str) -> ProviderResult<Page<Movie>> {
        let started = Instant::now();
        let result = self.inner.search(query, page, language).await;

        info!(
            target: "movie_provider",
            operation = "search",
            query,
            page,
            language,
            duration_ms = started.elapsed().as_millis() as u64,
            success = result.is_ok(),
        );

        result
    }

    async fn genres(&self, language: &str) -> ProviderResult<Vec<Genre>> {
        let started = Instant::now();
        let result = self.inner.genres(language).await;

        info!(
            target: "movie_provider",
            operation = "genres",
            language,
            duration_ms = started.elapsed().as_millis() as u64,
            success = result.is_ok(),
        );

        result
    }

    async fn trending(
        &self,
        window: TrendingWindow,
        page: u32,
        language: &str,
    ) -> ProviderResult<Page<Movie>> {
        let started = Instant::now();
        let result = self.inner.trending(window, page, language).await;

        info!(
            target: "movie_provider",
            operation = "trending",
            window = %window,
            page,
            language,
            duration_ms = started.elapsed().as_millis() as u64,
            success = result.is_ok(),
        );

        result
    }

    async fn get_by_id(&self, movie_id: i64, language: &str) -> ProviderResult<MovieDetail> {
        let started = Instant::now();
        let result = self.inner.get_by_id(movie_id, language).await;

        info!(
            target: "movie_provider",
            operation = "get_by_id",
            movie_id,
            language,
            duration_ms = started.elapsed().as_millis() as u64,
            success = result.is_ok(),
        );

        result
    }

    async fn get_by_genre(&self, genre_id: i64, language: &str) -> ProviderResult<Vec<Movie>> {
        let started = Instant::now();
        let result = self.inner.get_by_genre(genre_id, language).await;

        info!(
            target: "movie_provider",
            operation = "get_by_genre",
            genre_id,
            language,
            duration_ms = started.elapsed().as_millis() as u64,
            success = result.is_ok(),
        );

        result
    }
}
