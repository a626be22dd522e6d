//! Shared fixtures for handler integration tests.
//!
//! Handlers are exercised against an in-process provider stub and in-memory
//! repositories, so the suite runs without a database, Redis, or network.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;

use cinescope::application::services::{AuthService, FavoriteService, MovieService};
use cinescope::domain::entities::{FavoriteRecord, Genre, Movie, MovieDetail, Page};
use cinescope::domain::provider::{MovieProvider, ProviderError, ProviderResult, TrendingWindow};
use cinescope::domain::repositories::{FavoriteRepository, TokenRepository};
use cinescope::error::AppError;
use cinescope::infrastructure::cache::MemoryCacheStore;
use cinescope::state::AppState;

pub const TEST_SIGNING_SECRET: &str = "test-signing-secret";

/// Builds a movie summary with the given id and title.
pub fn movie(id: i64, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        overview: Some(format!("Overview of {title}")),
        poster_path: Some(format!("/poster-{id}.jpg")),
        backdrop_path: None,
        release_date: Some("1999-03-31".to_string()),
        vote_average: 7.5,
        vote_count: 1000,
        genre_ids: vec![28],
        original_language: Some("en".to_string()),
        original_title: Some(title.to_string()),
        adult: Some(false),
        video: Some(false),
        popularity: Some(50.0),
    }
}

/// Builds a movie detail with the given id, title, and genres.
pub fn detail(id: i64, title: &str, genres: Vec<Genre>) -> MovieDetail {
    MovieDetail {
        movie: movie(id, title),
        genres,
        runtime: Some(120),
        status: Some("Released".to_string()),
        tagline: None,
        budget: 1_000_000,
        revenue: 5_000_000,
        production_companies: vec![],
        spoken_languages: vec![],
        production_countries: vec![],
    }
}

pub fn single_page(movies: Vec<Movie>) -> Page<Movie> {
    Page {
        page: 1,
        total_pages: 1,
        total_results: movies.len() as i64,
        results: movies,
    }
}

/// Canned provider with per-operation call counters.
///
/// Unknown movie ids return an upstream 404, matching the real adapter.
pub struct StubMovieProvider {
    pub search_results: Page<Movie>,
    pub genre_list: Vec<Genre>,
    pub trending_results: Page<Movie>,
    pub details: HashMap<i64, MovieDetail>,
    pub by_genre: Vec<Movie>,
    pub search_calls: AtomicUsize,
    pub detail_calls: AtomicUsize,
}

impl Default for StubMovieProvider {
    fn default() -> Self {
        let matrix = detail(
            603,
            "The Matrix",
            vec![
                Genre::new(28, "Action".to_string()),
                Genre::new(878, "Science Fiction".to_string()),
            ],
        );

        let mut details = HashMap::new();
        details.insert(603, matrix);

        Self {
            search_results: single_page(vec![movie(603, "The Matrix")]),
            genre_list: vec![
                Genre::new(28, "Action".to_string()),
                Genre::new(18, "Drama".to_string()),
            ],
            trending_results: single_page(vec![movie(603, "The Matrix"), movie(680, "Pulp Fiction")]),
            details,
            by_genre: vec![movie(603, "The Matrix")],
            search_calls: AtomicUsize::new(0),
            detail_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl MovieProvider for StubMovieProvider {
    async fn search(
        &self,
        _query: &str,
        _page: u32,
        _language: &str,
    ) -> ProviderResult<Page<Movie>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.search_results.clone())
    }

    async fn genres(&self, _language: &str) -> ProviderResult<Vec<Genre>> {
        Ok(self.genre_list.clone())
    }

    async fn trending(
        &self,
        _window: TrendingWindow,
        _page: u32,
        _language: &str,
    ) -> ProviderResult<Page<Movie>> {
        Ok(self.trending_results.clone())
    }

    async fn get_by_id(&self, movie_id: i64, _language: &str) -> ProviderResult<MovieDetail> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        self.details
            .get(&movie_id)
            .cloned()
            .ok_or(ProviderError::Upstream {
                status: 404,
                message: "The resource you requested could not be found.".to_string(),
            })
    }

    async fn get_by_genre(&self, _genre_id: i64, _language: &str) -> ProviderResult<Vec<Movie>> {
        Ok(self.by_genre.clone())
    }
}

/// In-memory favorite store keyed by `(user_id, movie_id)`.
#[derive(Default)]
pub struct InMemoryFavoriteRepository {
    records: Mutex<HashMap<(i64, i64), FavoriteRecord>>,
}

#[async_trait]
impl FavoriteRepository for InMemoryFavoriteRepository {
    async fn create(
        &self,
        user_id: i64,
        movie_id: i64,
        snapshot: &MovieDetail,
    ) -> Result<FavoriteRecord, AppError> {
        let mut records = self.records.lock().unwrap();

        if records.contains_key(&(user_id, movie_id)) {
            return Err(AppError::conflict(
                "Movie is already in favorites",
                json!({ "movie_id": movie_id }),
            ));
        }

        let record = FavoriteRecord {
            user_id,
            movie_id,
            movie: snapshot.clone(),
            created_at: Utc::now(),
        };
        records.insert((user_id, movie_id), record.clone());

        Ok(record)
    }

    async fn exists(&self, user_id: i64, movie_id: i64) -> Result<bool, AppError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .contains_key(&(user_id, movie_id)))
    }

    async fn delete(&self, user_id: i64, movie_id: i64) -> Result<bool, AppError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .remove(&(user_id, movie_id))
            .is_some())
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<FavoriteRecord>, AppError> {
        let records = self.records.lock().unwrap();
        let mut favorites: Vec<_> = records
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        favorites.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(favorites)
    }

    async fn ids_by_user(&self, user_id: i64) -> Result<Vec<i64>, AppError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.user_id == user_id)
            .map(|r| r.movie_id)
            .collect())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

/// Token store resolving every hash seeded via [`InMemoryTokenRepository::seed`].
#[derive(Default)]
pub struct InMemoryTokenRepository {
    users_by_hash: Mutex<HashMap<String, i64>>,
}

impl InMemoryTokenRepository {
    pub fn seed(&self, token_hash: &str, user_id: i64) {
        self.users_by_hash
            .lock()
            .unwrap()
            .insert(token_hash.to_string(), user_id);
    }
}

#[async_trait]
impl TokenRepository for InMemoryTokenRepository {
    async fn resolve_user(&self, token_hash: &str) -> Result<Option<i64>, AppError> {
        Ok(self.users_by_hash.lock().unwrap().get(token_hash).copied())
    }

    async fn update_last_used(&self, _token_hash: &str) -> Result<(), AppError> {
        Ok(())
    }

    async fn create_token(
        &self,
        _user_id: i64,
        _name: &str,
        _token_hash: &str,
    ) -> Result<cinescope::domain::repositories::ApiToken, AppError> {
        unimplemented!("not used in handler tests")
    }

    async fn list_tokens(&self) -> Result<Vec<cinescope::domain::repositories::ApiToken>, AppError> {
        Ok(vec![])
    }

    async fn find_by_id(
        &self,
        _id: i64,
    ) -> Result<Option<cinescope::domain::repositories::ApiToken>, AppError> {
        Ok(None)
    }

    async fn find_by_name(
        &self,
        _name: &str,
    ) -> Result<Option<cinescope::domain::repositories::ApiToken>, AppError> {
        Ok(None)
    }

    async fn revoke_token(&self, _id: i64) -> Result<(), AppError> {
        Ok(())
    }
}

/// Builds an [`AppState`] wired to the given provider and favorite store.
pub fn make_state(
    provider: Arc<dyn MovieProvider>,
    favorites: Arc<InMemoryFavoriteRepository>,
) -> AppState {
    let tokens = Arc::new(InMemoryTokenRepository::default());

    make_state_with_tokens(provider, favorites, tokens)
}

/// Like [`make_state`], keeping a handle on the token store for auth tests.
pub fn make_state_with_tokens(
    provider: Arc<dyn MovieProvider>,
    favorites: Arc<InMemoryFavoriteRepository>,
    tokens: Arc<InMemoryTokenRepository>,
) -> AppState {
    let movie_service = Arc::new(MovieService::new(provider.clone(), "pt-BR".to_string()));
    let favorite_service = Arc::new(FavoriteService::new(
        provider,
        favorites.clone(),
        "pt-BR".to_string(),
    ));
    let auth_service = Arc::new(AuthService::new(tokens, TEST_SIGNING_SECRET.to_string()));

    AppState {
        movie_service,
        favorite_service,
        auth_service,
        favorites,
        cache: Arc::new(MemoryCacheStore::new()),
    }
}
