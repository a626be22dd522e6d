//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{AuthService, FavoriteService, MovieService};
use crate::domain::repositories::FavoriteRepository;
use crate::infrastructure::cache::CacheStore;

/// Application state shared across all request handlers.
///
/// Cheap to clone; every field is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub movie_service: Arc<MovieService>,
    pub favorite_service: Arc<FavoriteService>,
    pub auth_service: Arc<AuthService>,

    // Held directly for health checks.
    pub favorites: Arc<dyn FavoriteRepository>,
    pub cache: Arc<dyn CacheStore>,
}
