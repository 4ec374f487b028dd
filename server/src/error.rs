//! Error types for the todo service.
//!
//! # Design
//! `ApiError` is what handlers return. Each variant maps to exactly one
//! response shape: validation failures carry a plain-text reason, not-found
//! carries no body, and store failures collapse to a generic 500 so no
//! driver detail leaks to the caller. `ConfigError` only exists at startup.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Caller input failed a structural check. The message is returned as-is.
    #[error("{0}")]
    Validation(String),

    /// No todo exists with the requested id.
    #[error("todo not found")]
    NotFound,

    /// Connectivity or constraint failure in the store.
    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),
}

/// Unreadable bodies are caller input errors like any other: 400 with axum's reason.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(reason) => {
                tracing::debug!(%reason, "rejected request payload");
                (StatusCode::BAD_REQUEST, reason).into_response()
            }
            ApiError::NotFound => {
                tracing::debug!("todo not found");
                StatusCode::NOT_FOUND.into_response()
            }
            ApiError::Store(err) => {
                tracing::error!(error = %err, "store operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
        }
    }
}

/// Startup configuration problems. Any of these prevents the server from starting.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing connection string: set DATABASE_URL or pass --database-url")]
    MissingConnectionString,

    #[error("invalid listen address '{0}'")]
    InvalidListenAddr(String),

    #[error("max connections must be at least 1")]
    ZeroConnections,
}
