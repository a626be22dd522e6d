//! Total mappers from raw upstream JSON to domain entities.
//!
//! List-item mappers never fail: missing fields take their documented
//! defaults (`None`, zero, empty). Only [`map_movie_detail`] can reject a
//! payload, and only when the value is not a JSON object at all.

use serde_json::Value;

use crate::domain::entities::{
    Genre, Movie, MovieDetail, Page, ProductionCompany, ProductionCountry, SpokenLanguage,
};
use crate::domain::provider::{ProviderError, ProviderResult};

fn opt_str(value: &Value, field: &str) -> Option<String> {
    value.get(field).and_then(Value::as_str).map(str::to_string)
}

fn str_or_empty(value: &Value, field: &str) -> String {
    value
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn i64_or_zero(value: &Value, field: &str) -> i64 {
    value.get(field).and_then(Value::as_i64).unwrap_or(0)
}

fn f64_or_zero(value: &Value, field: &str) -> f64 {
    value.get(field).and_then(Value::as_f64).unwrap_or(0.0)
}

fn opt_bool(value: &Value, field: &str) -> Option<bool> {
    value.get(field).and_then(Value::as_bool)
}

fn opt_f64(value: &Value, field: &str) -> Option<f64> {
    value.get(field).and_then(Value::as_f64)
}

fn opt_i64(value: &Value, field: &str) -> Option<i64> {
    value.get(field).and_then(Value::as_i64)
}

fn i64_array(value: &Value, field: &str) -> Vec<i64> {
    value
        .get(field)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_i64).collect())
        .unwrap_or_default()
}

fn mapped_array<T>(value: &Value, field: &str, map: impl Fn(&Value) -> T) -> Vec<T> {
    value
        .get(field)
        .and_then(Value::as_array)
        .map(|items| items.iter().map(map).collect())
        .unwrap_or_default()
}

/// Maps one list-endpoint item to a [`Movie`]. Total over any JSON value.
pub fn map_movie(value: &Value) -> Movie {
    Movie {
        id: i64_or_zero(value, "id"),
        title: str_or_empty(value, "title"),
        overview: opt_str(value, "overview"),
        poster_path: opt_str(value, "poster_path"),
        backdrop_path: opt_str(value, "backdrop_path"),
        release_date: opt_str(value, "release_date"),
        vote_average: f64_or_zero(value, "vote_average"),
        vote_count: i64_or_zero(value, "vote_count"),
        genre_ids: i64_array(value, "genre_ids"),
        original_language: opt_str(value, "original_language"),
        original_title: opt_str(value, "original_title"),
        adult: opt_bool(value, "adult"),
        video: opt_bool(value, "video"),
        popularity: opt_f64(value, "popularity"),
    }
}

/// Maps one genre-list item to a [`Genre`]. Total over any JSON value.
pub fn map_genre(value: &Value) -> Genre {
    Genre::new(i64_or_zero(value, "id"), str_or_empty(value, "name"))
}

/// Maps an upstream paginated envelope, applying `map_item` to each result.
pub fn map_page<T>(value: &Value, map_item: impl Fn(&Value) -> T) -> Page<T> {
    Page {
        page: i64_or_zero(value, "page"),
        total_pages: i64_or_zero(value, "total_pages"),
        total_results: i64_or_zero(value, "total_results"),
        results: mapped_array(value, "results", map_item),
    }
}

fn map_production_company(value: &Value) -> ProductionCompany {
    ProductionCompany {
        id: i64_or_zero(value, "id"),
        name: str_or_empty(value, "name"),
        logo_path: opt_str(value, "logo_path"),
        origin_country: opt_str(value, "origin_country"),
    }
}

fn map_spoken_language(value: &Value) -> SpokenLanguage {
    SpokenLanguage {
        iso_639_1: str_or_empty(value, "iso_639_1"),
        name: str_or_empty(value, "name"),
        english_name: opt_str(value, "english_name"),
    }
}

fn map_production_country(value: &Value) -> ProductionCountry {
    ProductionCountry {
        iso_3166_1: str_or_empty(value, "iso_3166_1"),
        name: str_or_empty(value, "name"),
    }
}

/// Maps a movie-detail payload to a [`MovieDetail`].
///
/// # Errors
///
/// Returns [`ProviderError::InvalidResponse`] when the payload is not a JSON
/// object. Individual missing fields still take their defaults.
pub fn map_movie_detail(value: &Value) -> ProviderResult<MovieDetail> {
    if !value.is_object() {
        return Err(ProviderError::InvalidResponse(
            "movie detail payload is not a JSON object".to_string(),
        ));
    }

    Ok(MovieDetail {
        movie: map_movie(value),
        genres: mapped_array(value, "genres", map_genre),
        runtime: opt_i64(value, "runtime"),
        status: opt_str(value, "status"),
        tagline: opt_str(value, "tagline"),
        budget: i64_or_zero(value, "budget"),
        revenue: i64_or_zero(value, "revenue"),
        production_companies: mapped_array(value, "production_companies", map_production_company),
        spoken_languages: mapped_array(value, "spoken_languages", map_spoken_language),
        production_countries: mapped_array(value, "production_countries", map_production_country),
    })
}
