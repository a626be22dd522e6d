//! Movie browsing use cases.

use std::sync::Arc;

use crate::domain::entities::{Genre, Movie, MovieDetail, Page};
use crate::domain::provider::{MovieProvider, TrendingWindow};
use crate::error::AppError;

/// Service for read-only movie operations.
///
/// Resolves the configured default language exactly once, before the call
/// enters the provider chain, so every cache key downstream is built from a
/// materialized language tag.
pub struct MovieService {
    provider: Arc<dyn MovieProvider>,
    default_language: String,
}

impl MovieService {
    pub fn new(provider: Arc<dyn MovieProvider>, default_language: String) -> Self {
        Self {
            provider,
            default_language,
        }
    }

    /// Materializes the request language, falling back to the configured
    /// default when absent or empty.
    pub fn resolve_language(&self, language: Option<&str>) -> String {
        match language {
            Some(lang) if !lang.is_empty() => lang.to_string(),
            _ => self.default_language.clone(),
        }
    }

    pub async fn search(
        &self,
        query: &str,
        page: u32,
        language: Option<&str>,
    ) -> Result<Page<Movie>, AppError> {
        let language = self.resolve_language(language);
        Ok(self.provider.search(query, page, &language).await?)
    }

    pub async fn genres(&self, language: Option<&str>) -> Result<Vec<Genre>, AppError> {
        let language = self.resolve_language(language);
        Ok(self.provider.genres(&language).await?)
    }

    pub async fn trending(
        &self,
        window: TrendingWindow,
        page: u32,
        language: Option<&str>,
    ) -> Result<Page<Movie>, AppError> {
        let language = self.resolve_language(language);
        Ok(self.provider.trending(window, page, &language).await?)
    }

    pub async fn get_by_id(
        &self,
        movie_id: i64,
        language: Option<&str>,
    ) -> Result<MovieDetail, AppError> {
        let language = self.resolve_language(language);
        Ok(self.provider.get_by_id(movie_id, &language).await?)
    }

    pub async fn get_by_genre(
        &self,
        genre_id: i64,
        language: Option<&str>,
    ) -> Result<Vec<Movie>, AppError> {
        let language = self.resolve_language(language);
        Ok(self.provider.get_by_genre(genre_id, &language).await?)
    }
}
