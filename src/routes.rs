//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`             - Health check: DB, cache (public)
//! - `/api/movies/*`           - Movie browsing (public or optional auth)
//! - `/api/movies/favorites/*` - Favorite management (Bearer token required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket, stricter on favorite mutations
//! - **Authentication** - Bearer token, required or optional per group
//! - **Path normalization** - Trailing slash handling

use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let public = api::routes::public_routes().layer(rate_limit::layer());

    let optional = api::routes::optional_auth_routes()
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::optional_layer,
        ))
        .layer(rate_limit::layer());

    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .layer(rate_limit::secure_layer());

    let api_router = Router::new().merge(public).merge(optional).merge(protected);

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
