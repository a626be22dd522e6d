//! Favorite management use cases.

use std::collections::HashSet;
use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{FavoriteRecord, Genre};
use crate::domain::provider::MovieProvider;
use crate::domain::repositories::FavoriteRepository;
use crate::error::AppError;

/// Service for per-user favorite movies.
///
/// Adding a favorite captures a full [`MovieDetail`] snapshot from the
/// provider chain at favoriting time; the stored snapshot is never refreshed
/// afterwards, so listing favorites works without touching upstream.
///
/// [`MovieDetail`]: crate::domain::entities::MovieDetail
pub struct FavoriteService {
    provider: Arc<dyn MovieProvider>,
    repository: Arc<dyn FavoriteRepository>,
    default_language: String,
}

impl FavoriteService {
    pub fn new(
        provider: Arc<dyn MovieProvider>,
        repository: Arc<dyn FavoriteRepository>,
        default_language: String,
    ) -> Self {
        Self {
            provider,
            repository,
            default_language,
        }
    }

    /// Favorites a movie for the user, snapshotting its current detail.
    ///
    /// # Errors
    ///
    /// - [`AppError::Conflict`] if the movie is already favorited
    /// - [`AppError::Upstream`] with 404 if the movie does not exist upstream
    pub async fn add(&self, user_id: i64, movie_id: i64) -> Result<FavoriteRecord, AppError> {
        if self.repository.exists(user_id, movie_id).await? {
            return Err(AppError::conflict(
                "Movie is already in favorites",
                json!({ "movie_id": movie_id }),
            ));
        }

        // A 404 here means the movie id is bogus; the error propagates with
        // the upstream status and nothing is stored.
        let snapshot = self
            .provider
            .get_by_id(movie_id, &self.default_language)
            .await?;

        self.repository.create(user_id, movie_id, &snapshot).await
    }

    /// Removes a favorite.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the movie was not favorited.
    pub async fn remove(&self, user_id: i64, movie_id: i64) -> Result<(), AppError> {
        let deleted = self.repository.delete(user_id, movie_id).await?;

        if !deleted {
            return Err(AppError::not_found(
                "Movie is not in favorites",
                json!({ "movie_id": movie_id }),
            ));
        }

        Ok(())
    }

    /// Lists the user's favorites plus the deduplicated union of their genres.
    ///
    /// Genres keep first-seen order across the favorites list, which is
    /// ordered most recent first.
    pub async fn list(&self, user_id: i64) -> Result<(Vec<FavoriteRecord>, Vec<Genre>), AppError> {
        let favorites = self.repository.list_by_user(user_id).await?;

        let mut seen = HashSet::new();
        let mut genres = Vec::new();
        for favorite in &favorites {
            for genre in &favorite.movie.genres {
                if seen.insert(genre.id) {
                    genres.push(genre.clone());
                }
            }
        }

        Ok((favorites, genres))
    }

    /// Returns the set of movie ids the user has favorited.
    pub async fn favorite_ids(&self, user_id: i64) -> Result<HashSet<i64>, AppError> {
        let ids = self.repository.ids_by_user(user_id).await?;
        Ok(ids.into_iter().collect())
    }
}
