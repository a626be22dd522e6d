//! Handlers for movie browsing endpoints.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use validator::Validate;

use crate::api::dto::DataResponse;
use crate::api::dto::movies::{
    LanguageQuery, MovieDetailResponse, MoviePageResponse, MovieResponse, SearchQuery,
    TrendingQuery,
};
use crate::api::middleware::auth::{CurrentUser, favorite_ids_for};
use crate::domain::entities::Genre;
use crate::error::AppError;
use crate::state::AppState;

/// Searches movies by title.
///
/// # Endpoint
///
/// `GET /api/movies/search`
///
/// # Query Parameters
///
/// - `query` (required): Title fragment, 1-255 characters
/// - `page` (optional): Result page, 1-1000 (default: 1)
/// - `language` (optional): Language tag override
/// - `include_adult` (optional): Accepted but ignored; adult content is
///   always filtered
///
/// Authentication is optional; authenticated callers get `is_favorite`
/// flags on each result.
///
/// # Errors
///
/// Returns 400 Bad Request on invalid parameters.
pub async fn search_handler(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<DataResponse<MoviePageResponse>>, AppError> {
    params.validate()?;

    let page = state
        .movie_service
        .search(
            &params.query,
            params.page.unwrap_or(1),
            params.language.as_deref(),
        )
        .await?;

    let favorite_ids = favorite_ids_for(&state, user.as_ref()).await?;

    Ok(Json(DataResponse::new(MoviePageResponse::decorated(
        page,
        favorite_ids.as_ref(),
    ))))
}

/// Lists all movie genres.
///
/// # Endpoint
///
/// `GET /api/movies/genres`
pub async fn genres_handler(
    State(state): State<AppState>,
    Query(params): Query<LanguageQuery>,
) -> Result<Json<DataResponse<Vec<Genre>>>, AppError> {
    params.validate()?;

    let genres = state
        .movie_service
        .genres(params.language.as_deref())
        .await?;

    Ok(Json(DataResponse::new(genres)))
}

/// Lists trending movies.
///
/// # Endpoint
///
/// `GET /api/movies/trending`
///
/// # Query Parameters
///
/// - `window` (optional): `day` (default) or `week`
/// - `page` (optional): Result page, 1-1000
/// - `language` (optional): Language tag override
pub async fn trending_handler(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    Query(params): Query<TrendingQuery>,
) -> Result<Json<DataResponse<Vec<MovieResponse>>>, AppError> {
    params.validate()?;

    let page = state
        .movie_service
        .trending(
            params.window.unwrap_or_default(),
            params.page.unwrap_or(1),
            params.language.as_deref(),
        )
        .await?;

    let favorite_ids = favorite_ids_for(&state, user.as_ref()).await?;

    let movies = page
        .results
        .into_iter()
        .map(|movie| MovieResponse::decorated(movie, favorite_ids.as_ref()))
        .collect();

    Ok(Json(DataResponse::new(movies)))
}

/// Fetches full detail for a single movie.
///
/// # Endpoint
///
/// `GET /api/movies/{id}`
///
/// # Errors
///
/// Returns 404 Not Found when upstream does not know the movie.
pub async fn movie_detail_handler(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    Path(movie_id): Path<i64>,
    Query(params): Query<LanguageQuery>,
) -> Result<Json<DataResponse<MovieDetailResponse>>, AppError> {
    params.validate()?;

    let detail = state
        .movie_service
        .get_by_id(movie_id, params.language.as_deref())
        .await?;

    let is_favorite = match &user {
        Some(Extension(current)) => Some(
            state
                .favorite_service
                .favorite_ids(current.user_id)
                .await?
                .contains(&movie_id),
        ),
        None => None,
    };

    Ok(Json(DataResponse::new(MovieDetailResponse {
        detail,
        is_favorite,
    })))
}

/// Lists movies belonging to a genre.
///
/// # Endpoint
///
/// `GET /api/movies/genre/{genre_id}`
pub async fn movies_by_genre_handler(
    State(state): State<AppState>,
    Path(genre_id): Path<i64>,
    Query(params): Query<LanguageQuery>,
) -> Result<Json<DataResponse<Vec<MovieResponse>>>, AppError> {
    params.validate()?;

    let movies = state
        .movie_service
        .get_by_genre(genre_id, params.language.as_deref())
        .await?;

    let movies = movies
        .into_iter()
        .map(|movie| MovieResponse::decorated(movie, None))
        .collect();

    Ok(Json(DataResponse::new(movies)))
}
