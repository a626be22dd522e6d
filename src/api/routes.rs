//! API route groups.
//!
//! Routes are grouped by their authentication requirement so the top-level
//! router can apply the matching middleware per group.

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{
    add_favorite_handler, genres_handler, list_favorites_handler, movie_detail_handler,
    movies_by_genre_handler, remove_favorite_handler, search_handler, trending_handler,
};
use crate::state::AppState;

/// Fully public movie routes.
///
/// # Endpoints
///
/// - `GET /movies/genres`            - List movie genres
/// - `GET /movies/genre/{genre_id}`  - List movies in a genre
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/movies/genres", get(genres_handler))
        .route("/movies/genre/{genre_id}", get(movies_by_genre_handler))
}

/// Routes where authentication is optional.
///
/// Anonymous requests work; authenticated ones additionally get
/// `is_favorite` flags on movie payloads.
///
/// # Endpoints
///
/// - `GET /movies/search`    - Search movies by title
/// - `GET /movies/trending`  - List trending movies
/// - `GET /movies/{id}`      - Movie detail
pub fn optional_auth_routes() -> Router<AppState> {
    Router::new()
        .route("/movies/search", get(search_handler))
        .route("/movies/trending", get(trending_handler))
        .route("/movies/{id}", get(movie_detail_handler))
}

/// Routes requiring Bearer token authentication.
///
/// # Endpoints
///
/// - `GET    /movies/favorites`             - List the caller's favorites
/// - `POST   /movies/favorites/{movie_id}`  - Favorite a movie
/// - `DELETE /movies/favorites/{movie_id}`  - Remove a favorite
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/movies/favorites", get(list_favorites_handler))
        .route(
            "/movies/favorites/{movie_id}",
            post(add_favorite_handler).delete(remove_favorite_handler),
        )
}
