//! Base movie provider backed by the TMDB HTTP API.

use async_trait::async_trait;
use serde_json::Value;

use super::client::TmdbClient;
use super::mapper;
use crate::domain::entities::{Genre, Movie, MovieDetail, Page};
use crate::domain::provider::{MovieProvider, ProviderError, ProviderResult, TrendingWindow};

/// Extracts the upstream error message from a TMDB error body.
fn error_message(body: &Value) -> String {
    body.get("status_message")
        .and_then(Value::as_str)
        .unwrap_or("Unknown error")
        .to_string()
}

/// The base [`MovieProvider`] implementation against the TMDB API.
///
/// Translates each operation to one upstream endpoint and maps the payload
/// through the total mappers. Adult content is always filtered out on search
/// regardless of what the caller asked for.
pub struct TmdbMovieAdapter {
    client: TmdbClient,
}

impl TmdbMovieAdapter {
    pub fn new(client: TmdbClient) -> Self {
        Self { client }
    }

    /// Fetches `path` and returns the body, converting non-2xx responses
    /// into [`ProviderError::Upstream`].
    async fn fetch(&self, path: &str, query: &[(&str, String)]) -> ProviderResult<Value> {
        let response = self.client.get(path, query).await?;

        if !response.ok {
            return Err(ProviderError::Upstream {
                status: response.status,
                message: error_message(&response.body),
            });
        }

        Ok(response.body)
    }
}

#[async_trait]
impl MovieProvider for TmdbMovieAdapter {
    async fn search(&self, query: &str, page: u32, language: &str) -> ProviderResult<Page<Movie>> {
        let body = self
            .fetch(
                "/search/movie",
                &[
                    ("query", query.to_string()),
                    ("page", page.to_string()),
                    ("include_adult", "false".to_string()),
                    ("language", language.to_string()),
                ],
            )
            .await?;

        Ok(mapper::map_page(&body, mapper::map_movie))
    }

    async fn genres(&self, language: &str) -> ProviderResult<Vec<Genre>> {
        let body = self
            .fetch("/genre/movie/list", &[("language", language.to_string())])
            .await?;

        let genres = body
            .get("genres")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(mapper::map_genre).collect())
            .unwrap_or_default();

        Ok(genres)
    }

    async fn trending(
        &self,
        window: TrendingWindow,
        page: u32,
        language: &str,
    ) -> ProviderResult<Page<Movie>> {
        let body = self
            .fetch(
                &format!("/trending/movie/{}", window.as_str()),
                &[
                    ("page", page.to_string()),
                    ("language", language.to_string()),
                ],
            )
            .await?;

        Ok(mapper::map_page(&body, mapper::map_movie))
    }

    async fn get_by_id(&self, movie_id: i64, language: &str) -> ProviderResult<MovieDetail> {
        let body = self
            .fetch(
                &format!("/movie/{movie_id}"),
                &[("language", language.to_string())],
            )
            .await?;

        mapper::map_movie_detail(&body)
    }

    async fn get_by_genre(&self, genre_id: i64, language: &str) -> ProviderResult<Vec<Movie>> {
        let body = self
            .fetch(
                "/discover/movie",
                &[
                    ("with_genres", genre_id.to_string()),
                    ("language", language.to_string()),
                ],
            )
            .await?;

        Ok(mapper::map_page(&body, mapper::map_movie).results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_message_prefers_status_message() {
        let body = json!({"status_code": 34, "status_message": "The resource you requested could not be found."});
        assert_eq!(
            error_message(&body),
            "The resource you requested could not be found."
        );
    }

    #[test]
    fn test_error_message_falls_back_on_missing_field() {
        assert_eq!(error_message(&json!({})), "Unknown error");
        assert_eq!(error_message(&Value::Null), "Unknown error");
    }
}
