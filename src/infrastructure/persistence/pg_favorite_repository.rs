//! PostgreSQL-backed favorite repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use tracing::error;

use crate::domain::entities::{FavoriteRecord, MovieDetail};
use crate::domain::repositories::FavoriteRepository;
use crate::error::AppError;

pub struct PgFavoriteRepository {
    pool: PgPool,
}

impl PgFavoriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_record(row: &PgRow) -> Result<FavoriteRecord, sqlx::Error> {
    let Json(movie): Json<MovieDetail> = row.try_get("movie")?;

    Ok(FavoriteRecord {
        user_id: row.try_get("user_id")?,
        movie_id: row.try_get("movie_id")?,
        movie,
        created_at: row.try_get("created_at")?,
    })
}

#[async_trait]
impl FavoriteRepository for PgFavoriteRepository {
    async fn create(
        &self,
        user_id: i64,
        movie_id: i64,
        snapshot: &MovieDetail,
    ) -> Result<FavoriteRecord, AppError> {
        let row = sqlx::query(
            r#"
            INSERT INTO user_favorite_movies (user_id, movie_id, movie)
            VALUES ($1, $2, $3)
            RETURNING user_id, movie_id, movie, created_at
            "#,
        )
        .bind(user_id)
        .bind(movie_id)
        .bind(Json(snapshot))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db) = e.as_database_error()
                && db.is_unique_violation()
            {
                return AppError::conflict(
                    "Movie is already in favorites",
                    json!({ "movie_id": movie_id }),
                );
            }

            error!("Failed to create favorite: {}", e);
            AppError::internal("Failed to save favorite", json!({}))
        })?;

        row_to_record(&row).map_err(|e| {
            error!("Failed to decode favorite row: {}", e);
            AppError::internal("Failed to save favorite", json!({}))
        })
    }

    async fn exists(&self, user_id: i64, movie_id: i64) -> Result<bool, AppError> {
        let row = sqlx::query(
            "SELECT 1 AS present FROM user_favorite_movies WHERE user_id = $1 AND movie_id = $2",
        )
        .bind(user_id)
        .bind(movie_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to check favorite existence: {}", e);
            AppError::internal("Failed to check favorite", json!({}))
        })?;

        Ok(row.is_some())
    }

    async fn delete(&self, user_id: i64, movie_id: i64) -> Result<bool, AppError> {
        let result =
            sqlx::query("DELETE FROM user_favorite_movies WHERE user_id = $1 AND movie_id = $2")
                .bind(user_id)
                .bind(movie_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    error!("Failed to delete favorite: {}", e);
                    AppError::internal("Failed to delete favorite", json!({}))
                })?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<FavoriteRecord>, AppError> {
        let rows = sqlx::query(
            r#"
            SELECT user_id, movie_id, movie, created_at
            FROM user_favorite_movies
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to list favorites: {}", e);
            AppError::internal("Failed to list favorites", json!({}))
        })?;

        rows.iter()
            .map(row_to_record)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                error!("Failed to decode favorite row: {}", e);
                AppError::internal("Failed to list favorites", json!({}))
            })
    }

    async fn ids_by_user(&self, user_id: i64) -> Result<Vec<i64>, AppError> {
        let rows =
            sqlx::query("SELECT movie_id FROM user_favorite_movies WHERE user_id = $1")
                .bind(user_id)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    error!("Failed to list favorite ids: {}", e);
                    AppError::internal("Failed to list favorites", json!({}))
                })?;

        rows.iter()
            .map(|row| row.try_get("movie_id"))
            .collect::<Result<Vec<i64>, _>>()
            .map_err(|e| {
                error!("Failed to decode favorite id: {}", e);
                AppError::internal("Failed to list favorites", json!({}))
            })
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}
