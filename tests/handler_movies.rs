mod common;

use std::sync::Arc;
use std::sync::atomic::Ordering;

use axum::{Extension, Router, middleware, routing::get};
use axum_test::TestServer;
use cinescope::api::handlers::{
    genres_handler, movie_detail_handler, movies_by_genre_handler, search_handler,
    trending_handler,
};
use cinescope::api::middleware::auth::{self, CurrentUser};
use cinescope::state::AppState;

use common::{InMemoryFavoriteRepository, StubMovieProvider};

fn movie_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/movies/search", get(search_handler))
        .route("/api/movies/genres", get(genres_handler))
        .route("/api/movies/trending", get(trending_handler))
        .route("/api/movies/genre/{genre_id}", get(movies_by_genre_handler))
        .route("/api/movies/{id}", get(movie_detail_handler))
        .with_state(state)
}

fn make_server(provider: Arc<StubMovieProvider>) -> TestServer {
    let state = common::make_state(provider, Arc::new(InMemoryFavoriteRepository::default()));
    TestServer::new(movie_routes(state)).unwrap()
}

/// Same routes with every request pre-authenticated as the given user.
fn make_authed_server(
    provider: Arc<StubMovieProvider>,
    favorites: Arc<InMemoryFavoriteRepository>,
    user_id: i64,
) -> TestServer {
    let state = common::make_state(provider, favorites);
    let app = movie_routes(state).layer(Extension(CurrentUser { user_id }));
    TestServer::new(app).unwrap()
}

// ─── SEARCH ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_search_success() {
    let server = make_server(Arc::new(StubMovieProvider::default()));

    let response = server.get("/api/movies/search?query=matrix").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let results = json["data"]["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["title"], "The Matrix");
    assert_eq!(json["data"]["page"], 1);
    // Anonymous requests carry no favorite flags.
    assert!(results[0].get("is_favorite").is_none());
}

#[tokio::test]
async fn test_search_missing_query_is_rejected() {
    let server = make_server(Arc::new(StubMovieProvider::default()));

    let response = server.get("/api/movies/search").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_search_empty_query_is_rejected() {
    let provider = Arc::new(StubMovieProvider::default());
    let server = make_server(provider.clone());

    let response = server.get("/api/movies/search?query=").await;

    response.assert_status_bad_request();
    assert_eq!(provider.search_calls.load(Ordering::SeqCst), 0);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["status_code"], 400);
    assert!(json.get("error").is_some());
}

#[tokio::test]
async fn test_search_page_out_of_range_is_rejected() {
    let server = make_server(Arc::new(StubMovieProvider::default()));

    let response = server.get("/api/movies/search?query=matrix&page=1001").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_search_invalid_language_is_rejected() {
    let server = make_server(Arc::new(StubMovieProvider::default()));

    let response = server
        .get("/api/movies/search?query=matrix&language=portuguese")
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_search_with_favorites_flags() {
    let provider = Arc::new(StubMovieProvider::default());
    let favorites = Arc::new(InMemoryFavoriteRepository::default());
    let matrix = common::detail(603, "The Matrix", vec![]);

    use cinescope::domain::repositories::FavoriteRepository;
    favorites.create(7, 603, &matrix).await.unwrap();

    let server = make_authed_server(provider, favorites, 7);

    let response = server.get("/api/movies/search?query=matrix").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["data"]["results"][0]["is_favorite"], true);
}

// ─── GENRES ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_genres_success() {
    let server = make_server(Arc::new(StubMovieProvider::default()));

    let response = server.get("/api/movies/genres").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let genres = json["data"].as_array().unwrap();
    assert_eq!(genres.len(), 2);
    assert_eq!(genres[0]["name"], "Action");
}

// ─── TRENDING ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_trending_success() {
    let server = make_server(Arc::new(StubMovieProvider::default()));

    let response = server.get("/api/movies/trending").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let movies = json["data"].as_array().unwrap();
    assert_eq!(movies.len(), 2);
}

#[tokio::test]
async fn test_trending_accepts_week_window() {
    let server = make_server(Arc::new(StubMovieProvider::default()));

    let response = server.get("/api/movies/trending?window=week").await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_trending_rejects_unknown_window() {
    let server = make_server(Arc::new(StubMovieProvider::default()));

    let response = server.get("/api/movies/trending?window=month").await;

    response.assert_status_bad_request();
}

// ─── DETAIL ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_movie_detail_success() {
    let server = make_server(Arc::new(StubMovieProvider::default()));

    let response = server.get("/api/movies/603").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["data"]["id"], 603);
    assert_eq!(json["data"]["title"], "The Matrix");
    assert_eq!(json["data"]["runtime"], 120);
    assert!(json["data"]["genres"].is_array());
}

#[tokio::test]
async fn test_movie_detail_unknown_id_is_404() {
    let server = make_server(Arc::new(StubMovieProvider::default()));

    let response = server.get("/api/movies/999999").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["status_code"], 404);
}

#[tokio::test]
async fn test_movie_detail_authenticated_carries_favorite_flag() {
    let provider = Arc::new(StubMovieProvider::default());
    let favorites = Arc::new(InMemoryFavoriteRepository::default());
    let server = make_authed_server(provider, favorites, 7);

    let response = server.get("/api/movies/603").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["data"]["is_favorite"], false);
}

// ─── BY GENRE ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_movies_by_genre_success() {
    let server = make_server(Arc::new(StubMovieProvider::default()));

    let response = server.get("/api/movies/genre/28").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

// ─── AUTH MIDDLEWARE ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_optional_auth_rejects_invalid_token() {
    let state = common::make_state(
        Arc::new(StubMovieProvider::default()),
        Arc::new(InMemoryFavoriteRepository::default()),
    );

    let app = Router::new()
        .route("/api/movies/search", get(search_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::optional_layer,
        ))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .get("/api/movies/search?query=matrix")
        .add_header("Authorization", "Bearer bogus-token")
        .await;

    response.assert_status_unauthorized();
}

#[tokio::test]
async fn test_optional_auth_allows_anonymous() {
    let state = common::make_state(
        Arc::new(StubMovieProvider::default()),
        Arc::new(InMemoryFavoriteRepository::default()),
    );

    let app = Router::new()
        .route("/api/movies/search", get(search_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::optional_layer,
        ))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/movies/search?query=matrix").await;

    response.assert_status_ok();
}
