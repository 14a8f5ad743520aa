//! Error types: fatal bootstrap errors and per-request API errors with
//! Axum `IntoResponse` support.

use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Startup/registration-time errors. Any of these aborts the bootstrap
/// before the service begins accepting traffic.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("duplicate route: {method} {path}")]
    DuplicateRoute { method: Method, path: String },

    #[error("method {0} cannot be registered as a route")]
    UnsupportedMethod(Method),

    #[error("a CORS policy is already attached")]
    CorsAlreadyAttached,

    #[error("wildcard origin cannot be combined with allow_credentials")]
    CredentialedWildcardOrigin,

    #[error("invalid CORS origin: {0:?}")]
    InvalidOrigin(String),

    #[error("invalid CORS method: {0:?}")]
    InvalidMethod(String),

    #[error("invalid CORS header name: {0:?}")]
    InvalidHeaderName(String),
}

/// Request-time error type that converts to proper HTTP responses.
#[derive(Debug, thiserror::Error)]
#[allow(dead_code)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let body = json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Convenience alias.
#[allow(dead_code)]
pub type ApiResult<T> = Result<T, ApiError>;
