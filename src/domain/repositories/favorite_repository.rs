//! Repository trait for per-user favorite movies.

use async_trait::async_trait;

use crate::domain::entities::{FavoriteRecord, MovieDetail};
use crate::error::AppError;

/// Repository interface for favorite movie storage.
///
/// Favorites are an opaque store keyed by `(user_id, movie_id)`, each entry
/// carrying a frozen [`MovieDetail`] snapshot captured at favoriting time.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgFavoriteRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Stores a favorite with its movie snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the user already favorited this movie.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(
        &self,
        user_id: i64,
        movie_id: i64,
        snapshot: &MovieDetail,
    ) -> Result<FavoriteRecord, AppError>;

    /// Checks whether the user has favorited the movie.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists(&self, user_id: i64, movie_id: i64) -> Result<bool, AppError>;

    /// Deletes a favorite.
    ///
    /// Returns `Ok(true)` if the favorite existed and was removed, `Ok(false)`
    /// if there was nothing to delete.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, user_id: i64, movie_id: i64) -> Result<bool, AppError>;

    /// Lists the user's favorites, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_user(&self, user_id: i64) -> Result<Vec<FavoriteRecord>, AppError>;

    /// Returns the ids of all movies the user has favorited.
    ///
    /// Used to decorate list responses with `is_favorite` flags without
    /// loading full snapshots.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn ids_by_user(&self, user_id: i64) -> Result<Vec<i64>, AppError>;

    /// Checks the backing store is reachable.
    ///
    /// Used by the health endpoint.
    async fn health_check(&self) -> bool;
}
