//! PostgreSQL-backed API token repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::error;

use crate::domain::repositories::{ApiToken, TokenRepository};
use crate::error::AppError;

pub struct PgTokenRepository {
    pool: PgPool,
}

impl PgTokenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_token(row: &PgRow) -> Result<ApiToken, sqlx::Error> {
    Ok(ApiToken {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        name: row.try_get("name")?,
        token_hash: row.try_get("token_hash")?,
        created_at: row.try_get("created_at")?,
        revoked_at: row.try_get("revoked_at")?,
    })
}

fn db_error(context: &str, e: sqlx::Error) -> AppError {
    error!("{}: {}", context, e);
    AppError::internal("Database error", json!({}))
}

#[async_trait]
impl TokenRepository for PgTokenRepository {
    async fn resolve_user(&self, token_hash: &str) -> Result<Option<i64>, AppError> {
        let row = sqlx::query(
            "SELECT user_id FROM api_tokens WHERE token_hash = $1 AND revoked_at IS NULL",
        )
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to resolve token", e))?;

        row.map(|r| r.try_get("user_id"))
            .transpose()
            .map_err(|e| db_error("Failed to decode token row", e))
    }

    async fn update_last_used(&self, token_hash: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE api_tokens SET last_used_at = NOW() WHERE token_hash = $1")
            .bind(token_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to update token usage", e))?;

        Ok(())
    }

    async fn create_token(
        &self,
        user_id: i64,
        name: &str,
        token_hash: &str,
    ) -> Result<ApiToken, AppError> {
        let row = sqlx::query(
            r#"
            INSERT INTO api_tokens (user_id, name, token_hash)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, name, token_hash, created_at, revoked_at
            "#,
        )
        .bind(user_id)
        .bind(name)
        .bind(token_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db) = e.as_database_error()
                && db.is_unique_violation()
            {
                return AppError::conflict("Token already exists", json!({ "name": name }));
            }

            db_error("Failed to create token", e)
        })?;

        row_to_token(&row).map_err(|e| db_error("Failed to decode token row", e))
    }

    async fn list_tokens(&self) -> Result<Vec<ApiToken>, AppError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, name, token_hash, created_at, revoked_at
            FROM api_tokens
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list tokens", e))?;

        rows.iter()
            .map(row_to_token)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| db_error("Failed to decode token row", e))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ApiToken>, AppError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, name, token_hash, created_at, revoked_at
            FROM api_tokens
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to find token", e))?;

        row.as_ref()
            .map(row_to_token)
            .transpose()
            .map_err(|e| db_error("Failed to decode token row", e))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<ApiToken>, AppError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, name, token_hash, created_at, revoked_at
            FROM api_tokens
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to find token", e))?;

        row.as_ref()
            .map(row_to_token)
            .transpose()
            .map_err(|e| db_error("Failed to decode token row", e))
    }

    async fn revoke_token(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("UPDATE api_tokens SET revoked_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to revoke token", e))?;

        Ok(())
    }
}
