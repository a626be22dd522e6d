//! Application error type and HTTP response mapping.
//!
//! Every error leaving the API surface uses the uniform body
//! `{"success": false, "error": "...", "status_code": N}` with the HTTP status
//! mirroring `status_code`. Provider failures map per their taxonomy: upstream
//! errors keep the upstream status, transport and malformed-body failures
//! surface as 500 without leaking internal detail.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::provider::ProviderError;

/// Uniform JSON error body.
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
    status_code: u16,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    Unauthorized { message: String, details: Value },
    NotFound { message: String, details: Value },
    Conflict { message: String, details: Value },
    /// Upstream API returned a non-2xx status; surfaced with that status.
    Upstream { status: u16, message: String },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Numeric status code reported in the response body.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation { .. } => 400,
            Self::Unauthorized { .. } => 401,
            Self::NotFound { .. } => 404,
            Self::Conflict { .. } => 409,
            Self::Upstream { status, .. } => {
                if *status == 0 {
                    500
                } else {
                    *status
                }
            }
            Self::Internal { .. } => 500,
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::Validation { message, .. }
            | Self::Unauthorized { message, .. }
            | Self::NotFound { message, .. }
            | Self::Conflict { message, .. }
            | Self::Upstream { message, .. }
            | Self::Internal { message, .. } => message,
        }
    }

    fn details(&self) -> Value {
        match self {
            Self::Validation { details, .. }
            | Self::Unauthorized { details, .. }
            | Self::NotFound { details, .. }
            | Self::Conflict { details, .. }
            | Self::Internal { details, .. } => details.clone(),
            Self::Upstream { status, .. } => json!({ "upstream_status": status }),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message(), self.status_code())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.status_code();
        let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // The API boundary is the single place failures are logged with full
        // context; inner layers only observe and re-raise.
        if status.is_server_error() {
            tracing::error!(
                status_code = code,
                error = self.message(),
                details = %self.details(),
                "request failed"
            );
        } else {
            tracing::warn!(
                status_code = code,
                error = self.message(),
                details = %self.details(),
                "request rejected"
            );
        }

        let body = ErrorBody {
            success: false,
            error: self.message().to_string(),
            status_code: code,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Upstream { status, message } => Self::Upstream { status, message },
            ProviderError::Network(reason) => Self::internal(
                "Upstream service unavailable",
                json!({ "reason": reason }),
            ),
            ProviderError::InvalidResponse(reason) => Self::internal(
                "Upstream returned an invalid response",
                json!({ "reason": reason }),
            ),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return Self::conflict(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }

        Self::internal("Database error", json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::bad_request(
            "Validation failed",
            serde_json::to_value(&errors).unwrap_or_else(|_| json!({})),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_error_keeps_status() {
        let err: AppError = ProviderError::Upstream {
            status: 404,
            message: "not found".to_string(),
        }
        .into();

        assert_eq!(err.status_code(), 404);
        assert!(matches!(err, AppError::Upstream { .. }));
    }

    #[test]
    fn test_network_error_maps_to_500() {
        let err: AppError = ProviderError::Network("connection refused".to_string()).into();
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_invalid_response_maps_to_500() {
        let err: AppError = ProviderError::InvalidResponse("not json".to_string()).into();
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_upstream_zero_status_defaults_to_500() {
        let err = AppError::upstream(0, "unclassified");
        assert_eq!(err.status_code(), 500);
    }
}
