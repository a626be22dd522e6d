//! DTOs for favorite management endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{FavoriteRecord, Genre, MovieDetail};

/// One favorited movie: the stored snapshot plus favoriting metadata.
#[derive(Debug, Serialize)]
pub struct FavoriteMovie {
    #[serde(flatten)]
    pub movie: MovieDetail,
    pub favorited_at: DateTime<Utc>,
}

impl From<FavoriteRecord> for FavoriteMovie {
    fn from(record: FavoriteRecord) -> Self {
        Self {
            movie: record.movie,
            favorited_at: record.created_at,
        }
    }
}

/// The caller's favorites: the movie snapshots plus the deduplicated union
/// of their genres.
#[derive(Debug, Serialize)]
pub struct FavoritesResponse {
    pub movies: Vec<FavoriteMovie>,
    pub genres: Vec<Genre>,
}

/// Body for a successful favorite removal.
#[derive(Debug, Serialize)]
pub struct RemovedResponse {
    pub success: bool,
}

impl RemovedResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
