//! Repository trait for API token authentication.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::AppError;

/// API token entity with metadata.
///
/// Tokens are stored as HMAC-SHA256 hashes; the raw value is never persisted.
/// Each token belongs to a user, which is how bearer authentication resolves
/// the favoriting identity.
#[derive(Debug, Clone)]
pub struct ApiToken {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
}

/// Repository interface for API token management.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTokenRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Resolves a token hash to the owning user.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(user_id))` if the token is valid and not revoked
    /// - `Ok(None)` if the token is unknown or revoked
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn resolve_user(&self, token_hash: &str) -> Result<Option<i64>, AppError>;

    /// Updates the `last_used_at` timestamp for a token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_last_used(&self, token_hash: &str) -> Result<(), AppError>;

    /// Creates a new API token for a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a token with the same hash exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create_token(
        &self,
        user_id: i64,
        name: &str,
        token_hash: &str,
    ) -> Result<ApiToken, AppError>;

    /// Lists all tokens in the system.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_tokens(&self) -> Result<Vec<ApiToken>, AppError>;

    /// Finds a token by its database ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<ApiToken>, AppError>;

    /// Finds a token by its name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_name(&self, name: &str) -> Result<Option<ApiToken>, AppError>;

    /// Revokes a token, preventing further authentication.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn revoke_token(&self, id: i64) -> Result<(), AppError>;
}
