//! The polymorphic movie provider contract and its error taxonomy.
//!
//! [`MovieProvider`] is implemented identically by the base TMDB adapter and
//! by the caching and logging decorators, which wrap any other implementation
//! of the same trait. The composition root (`server.rs`) builds the chain
//! `Logged(Cached(TmdbMovieAdapter))` once at startup.
//!
//! All implementations surface failures as [`ProviderError`] only — no
//! transport- or upstream-specific error type leaks past this boundary.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::entities::{Genre, Movie, MovieDetail, Page};

/// Failure taxonomy for provider operations.
///
/// - [`ProviderError::Network`] - transport failure (DNS, connect, timeout)
/// - [`ProviderError::Upstream`] - upstream returned a non-2xx status
/// - [`ProviderError::InvalidResponse`] - upstream body was malformed
///
/// No retries happen anywhere in this chain; a retry/backoff policy could be
/// added as a further decorator around the whole provider.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("network error: {0}")]
    Network(String),

    #[error("upstream error ({status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Trending time window accepted by the upstream trending endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendingWindow {
    #[default]
    Day,
    Week,
}

impl TrendingWindow {
    /// Upstream path segment for this window.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
        }
    }
}

impl fmt::Display for TrendingWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrendingWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            other => Err(format!("invalid trending window '{other}'")),
        }
    }
}

/// Contract for movie metadata providers.
///
/// The `language` argument is always a fully materialized language tag: the
/// caller-facing services resolve the configured default exactly once before
/// calling into the provider chain, so cache keys never mix an implicit
/// default with an explicitly equal value.
///
/// # Implementations
///
/// - [`crate::infrastructure::tmdb::TmdbMovieAdapter`] - base adapter against the TMDB API
/// - [`crate::infrastructure::provider::CachedMovieProvider`] - read-through caching decorator
/// - [`crate::infrastructure::provider::LoggedMovieProvider`] - call logging decorator
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieProvider: Send + Sync {
    /// Searches movies by title.
    ///
    /// `query` is assumed non-empty; the API layer validates it before the
    /// provider chain is reached.
    async fn search(&self, query: &str, page: u32, language: &str) -> ProviderResult<Page<Movie>>;

    /// Lists all movie genres.
    async fn genres(&self, language: &str) -> ProviderResult<Vec<Genre>>;

    /// Lists trending movies for the given window.
    async fn trending(
        &self,
        window: TrendingWindow,
        page: u32,
        language: &str,
    ) -> ProviderResult<Page<Movie>>;

    /// Fetches full detail for a single movie.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Upstream`] with `status: 404` when upstream
    /// reports the movie as not found.
    async fn get_by_id(&self, movie_id: i64, language: &str) -> ProviderResult<MovieDetail>;

    /// Lists movies belonging to a genre.
    async fn get_by_genre(&self, genre_id: i64, language: &str) -> ProviderResult<Vec<Movie>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_parse() {
        assert_eq!("day".parse::<TrendingWindow>().unwrap(), TrendingWindow::Day);
        assert_eq!(
            "week".parse::<TrendingWindow>().unwrap(),
            TrendingWindow::Week
        );
        assert!("month".parse::<TrendingWindow>().is_err());
    }

    #[test]
    fn test_window_default_is_day() {
        assert_eq!(TrendingWindow::default(), TrendingWindow::Day);
    }

    #[test]
    fn test_error_display_carries_status() {
        let err = ProviderError::Upstream {
            status: 404,
            message: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "upstream error (404): not found");
    }
}
