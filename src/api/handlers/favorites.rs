//! Handlers for favorite management endpoints.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::DataResponse;
use crate::api::dto::favorites::{FavoriteMovie, FavoritesResponse, RemovedResponse};
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the caller's favorites with the union of their genres.
///
/// # Endpoint
///
/// `GET /api/movies/favorites`
///
/// Requires Bearer authentication.
pub async fn list_favorites_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<DataResponse<FavoritesResponse>>, AppError> {
    let (favorites, genres) = state.favorite_service.list(user.user_id).await?;

    Ok(Json(DataResponse::new(FavoritesResponse {
        movies: favorites.into_iter().map(FavoriteMovie::from).collect(),
        genres,
    })))
}

/// Favorites a movie, snapshotting its current detail.
///
/// # Endpoint
///
/// `POST /api/movies/favorites/{movie_id}`
///
/// # Errors
///
/// - 404 Not Found when upstream does not know the movie
/// - 409 Conflict when the movie is already favorited
pub async fn add_favorite_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(movie_id): Path<i64>,
) -> Result<(StatusCode, Json<DataResponse<FavoriteMovie>>), AppError> {
    let record = state.favorite_service.add(user.user_id, movie_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(FavoriteMovie::from(record))),
    ))
}

/// Removes a movie from the caller's favorites.
///
/// # Endpoint
///
/// `DELETE /api/movies/favorites/{movie_id}`
///
/// # Errors
///
/// Returns 404 Not Found when the movie was not favorited.
pub async fn remove_favorite_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(movie_id): Path<i64>,
) -> Result<Json<RemovedResponse>, AppError> {
    state.favorite_service.remove(user.user_id, movie_id).await?;

    Ok(Json(RemovedResponse::ok()))
}
