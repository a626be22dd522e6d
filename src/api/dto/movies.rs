//! DTOs for movie browsing endpoints.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::domain::entities::{Movie, MovieDetail, Page};
use crate::domain::provider::TrendingWindow;

/// Compiled regex for IETF-style language tags (`en`, `pt-BR`).
static LANGUAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2}(-[A-Z]{2})?$").unwrap());

/// Query parameters for movie search.
#[derive(Debug, Deserialize, Validate)]
pub struct SearchQuery {
    /// Title fragment to search for.
    #[validate(length(min = 1, max = 255, message = "query must be 1-255 characters"))]
    pub query: String,

    /// Result page, 1-based.
    #[validate(range(min = 1, max = 1000, message = "page must be between 1 and 1000"))]
    pub page: Option<u32>,

    /// Language tag override (otherwise the configured default is used).
    #[validate(regex(path = "*LANGUAGE_REGEX", message = "invalid language tag"))]
    pub language: Option<String>,

    /// Accepted for compatibility; adult content is always filtered upstream.
    pub include_adult: Option<bool>,
}

/// Query parameters for the trending endpoint.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct TrendingQuery {
    /// Trending window, `day` (default) or `week`.
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub window: Option<TrendingWindow>,

    #[validate(range(min = 1, max = 1000, message = "page must be between 1 and 1000"))]
    pub page: Option<u32>,

    #[validate(regex(path = "*LANGUAGE_REGEX", message = "invalid language tag"))]
    pub language: Option<String>,
}

/// Query parameters for endpoints that only take a language override.
#[derive(Debug, Deserialize, Validate)]
pub struct LanguageQuery {
    #[validate(regex(path = "*LANGUAGE_REGEX", message = "invalid language tag"))]
    pub language: Option<String>,
}

/// A movie summary, optionally decorated with the caller's favorite flag.
///
/// `is_favorite` is omitted entirely for anonymous requests.
#[derive(Debug, Serialize)]
pub struct MovieResponse {
    #[serde(flatten)]
    pub movie: Movie,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
}

impl MovieResponse {
    /// Decorates a movie with the favorite flag when the caller's favorite
    /// set is known.
    pub fn decorated(movie: Movie, favorite_ids: Option<&HashSet<i64>>) -> Self {
        let is_favorite = favorite_ids.map(|ids| ids.contains(&movie.id));
        Self { movie, is_favorite }
    }
}

/// A paginated list of decorated movies.
#[derive(Debug, Serialize)]
pub struct MoviePageResponse {
    pub page: i64,
    pub total_pages: i64,
    pub total_results: i64,
    pub results: Vec<MovieResponse>,
}

impl MoviePageResponse {
    pub fn decorated(page: Page<Movie>, favorite_ids: Option<&HashSet<i64>>) -> Self {
        Self {
            page: page.page,
            total_pages: page.total_pages,
            total_results: page.total_results,
            results: page
                .results
                .into_iter()
                .map(|movie| MovieResponse::decorated(movie, favorite_ids))
                .collect(),
        }
    }
}

/// Full movie detail with the caller's favorite flag.
#[derive(Debug, Serialize)]
pub struct MovieDetailResponse {
    #[serde(flatten)]
    pub detail: MovieDetail,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
}
