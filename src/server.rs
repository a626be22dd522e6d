//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, cache setup, provider chain assembly, and
//! Axum server lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;

use crate::application::services::{AuthService, FavoriteService, MovieService};
use crate::config::Config;
use crate::domain::provider::MovieProvider;
use crate::infrastructure::cache::{CacheStore, MemoryCacheStore, RedisCacheStore};
use crate::infrastructure::persistence::{PgFavoriteRepository, PgTokenRepository};
use crate::infrastructure::provider::{CachedMovieProvider, LoggedMovieProvider};
use crate::infrastructure::tmdb::{TmdbClient, TmdbMovieAdapter};
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool and migrations
/// - Cache store (Redis, or in-memory fallback)
/// - The provider chain `Logged(Cached(TmdbMovieAdapter))`
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let cache: Arc<dyn CacheStore> = if let Some(redis_url) = &config.redis_url {
        match RedisCacheStore::connect(redis_url).await {
            Ok(redis) => {
                tracing::info!("Cache backend: Redis");
                Arc::new(redis)
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using in-memory cache.", e);
                Arc::new(MemoryCacheStore::new())
            }
        }
    } else {
        tracing::info!("Cache backend: in-memory");
        Arc::new(MemoryCacheStore::new())
    };

    let client = TmdbClient::new(
        &config.tmdb.base_url,
        &config.tmdb.token,
        Duration::from_secs(config.tmdb.timeout_seconds),
    )?;

    // Logging wraps caching so cache hits are observable too.
    let adapter: Arc<dyn MovieProvider> = Arc::new(TmdbMovieAdapter::new(client));
    let cached: Arc<dyn MovieProvider> = Arc::new(CachedMovieProvider::new(
        adapter,
        cache.clone(),
        Duration::from_secs(config.tmdb.cache_ttl_seconds),
    ));
    let provider: Arc<dyn MovieProvider> = Arc::new(LoggedMovieProvider::new(cached));

    let favorites = Arc::new(PgFavoriteRepository::new(pool.clone()));
    let tokens = Arc::new(PgTokenRepository::new(pool.clone()));

    let movie_service = Arc::new(MovieService::new(
        provider.clone(),
        config.tmdb.language.clone(),
    ));
    let favorite_service = Arc::new(FavoriteService::new(
        provider,
        favorites.clone(),
        config.tmdb.language.clone(),
    ));
    let auth_service = Arc::new(AuthService::new(
        tokens,
        config.token_signing_secret.clone(),
    ));

    let state = AppState {
        movie_service,
        favorite_service,
        auth_service,
        favorites,
        cache,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
