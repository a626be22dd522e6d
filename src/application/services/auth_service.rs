//! Bearer token authentication.

use std::sync::Arc;

use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;
use tracing::warn;

use crate::domain::repositories::TokenRepository;
use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Identity resolved from a valid bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i64,
}

/// Service that authenticates API bearer tokens.
///
/// Tokens are compared by HMAC-SHA256 hash keyed with the signing secret, so
/// the raw token never touches the database and a leaked table cannot be
/// replayed without the secret.
pub struct AuthService {
    tokens: Arc<dyn TokenRepository>,
    signing_secret: String,
}

impl AuthService {
    pub fn new(tokens: Arc<dyn TokenRepository>, signing_secret: String) -> Self {
        Self {
            tokens,
            signing_secret,
        }
    }

    /// Computes the storage hash for a raw token.
    pub fn hash_token(&self, token: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(token.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Resolves a raw bearer token to a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for unknown or revoked tokens.
    pub async fn authenticate(&self, token: &str) -> Result<AuthenticatedUser, AppError> {
        let hash = self.hash_token(token);

        let user_id = self
            .tokens
            .resolve_user(&hash)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid or revoked API token", json!({})))?;

        // Usage tracking is best effort; an update failure must not fail the
        // authenticated request.
        if let Err(e) = self.tokens.update_last_used(&hash).await {
            warn!("Failed to update token last_used_at: {}", e);
        }

        Ok(AuthenticatedUser { user_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockTokenRepository;

    fn service(tokens: MockTokenRepository) -> AuthService {
        AuthService::new(Arc::new(tokens), "test-signing-secret".to_string())
    }

    #[test]
    fn test_hash_is_deterministic_and_secret_dependent() {
        let svc_a = service(MockTokenRepository::new());
        let svc_b = AuthService::new(
            Arc::new(MockTokenRepository::new()),
            "other-secret".to_string(),
        );

        assert_eq!(svc_a.hash_token("tok"), svc_a.hash_token("tok"));
        assert_ne!(svc_a.hash_token("tok"), svc_b.hash_token("tok"));
        assert_ne!(svc_a.hash_token("tok"), svc_a.hash_token("kot"));
    }

    #[tokio::test]
    async fn test_valid_token_resolves_user() {
        let mut tokens = MockTokenRepository::new();
        tokens
            .expect_resolve_user()
            .times(1)
            .returning(|_| Ok(Some(42)));
        tokens
            .expect_update_last_used()
            .times(1)
            .returning(|_| Ok(()));

        let svc = service(tokens);
        let user = svc.authenticate("raw-token").await.unwrap();
        assert_eq!(user.user_id, 42);
    }

    #[tokio::test]
    async fn test_unknown_token_is_unauthorized() {
        let mut tokens = MockTokenRepository::new();
        tokens.expect_resolve_user().returning(|_| Ok(None));
        tokens.expect_update_last_used().times(0);

        let svc = service(tokens);
        let err = svc.authenticate("bogus").await.unwrap_err();
        assert_eq!(err.status_code(), 401);
    }

    #[tokio::test]
    async fn test_usage_update_failure_does_not_fail_auth() {
        let mut tokens = MockTokenRepository::new();
        tokens.expect_resolve_user().returning(|_| Ok(Some(42)));
        tokens.expect_update_last_used().returning(|_| {
            Err(AppError::internal("Database error", serde_json::json!({})))
        });

        let svc = service(tokens);
        assert!(svc.authenticate("raw-token").await.is_ok());
    }
}
