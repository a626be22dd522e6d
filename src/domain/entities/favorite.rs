//! Favorite movie entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::movie::MovieDetail;

/// A user's favorited movie.
///
/// `movie` is a frozen snapshot of the detail as of favoriting time. It is
/// never refreshed from upstream, so the favorites list stays usable even
/// when the upstream API is unavailable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteRecord {
    pub user_id: i64,
    pub movie_id: i64,
    pub movie: MovieDetail,
    pub created_at: DateTime<Utc>,
}
