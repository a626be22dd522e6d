//! Bearer token authentication middleware.

use axum::{
    Extension,
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Identity of the authenticated caller, inserted as a request extension.
///
/// Handlers on required-auth routes extract `Extension<CurrentUser>`; handlers
/// on optional-auth routes extract `Option<Extension<CurrentUser>>` and treat
/// `None` as an anonymous request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: i64,
}

/// Required bearer authentication.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - Authorization header is missing
/// - Token format is invalid
/// - Token is not found or revoked
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let mut req = Request::from_parts(parts, body);

    let user = st.auth_service.authenticate(&token).await?;
    req.extensions_mut().insert(CurrentUser {
        user_id: user.user_id,
    });

    Ok(next.run(req).await)
}

/// Optional bearer authentication.
///
/// An absent Authorization header passes through as anonymous. A header that
/// is present but invalid is still rejected with 401, so callers get a clear
/// signal instead of silently anonymous responses.
pub async fn optional_layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let has_auth_header = parts.headers.contains_key(axum::http::header::AUTHORIZATION);

    let token = if has_auth_header {
        let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
            .await
            .map_err(|_| {
                AppError::unauthorized(
                    "Unauthorized",
                    serde_json::json!({"reason": "Authorization header is invalid"}),
                )
            })?;
        Some(token)
    } else {
        None
    };

    let mut req = Request::from_parts(parts, body);

    if let Some(token) = token {
        let user = st.auth_service.authenticate(&token).await?;
        req.extensions_mut().insert(CurrentUser {
            user_id: user.user_id,
        });
    }

    Ok(next.run(req).await)
}

/// Fetches the caller's favorite id set when authenticated.
///
/// Convenience shared by the list handlers that decorate movies with
/// `is_favorite` flags.
pub async fn favorite_ids_for(
    st: &AppState,
    user: Option<&Extension<CurrentUser>>,
) -> Result<Option<std::collections::HashSet<i64>>, AppError> {
    match user {
        Some(Extension(current)) => {
            let ids = st.favorite_service.favorite_ids(current.user_id).await?;
            Ok(Some(ids))
        }
        None => Ok(None),
    }
}
