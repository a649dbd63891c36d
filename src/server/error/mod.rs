//! Error types and HTTP response handling.
//!
//! The `AppError` enum is the top-level error type for the backend. Services
//! return it directly; controllers rely on its `IntoResponse` implementation
//! to turn failures into status codes and a plain `{"error": "..."}` body.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::{error::config::ConfigError, provider::confluence::ConfluenceError},
};

#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged
    /// server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Transport-level failure talking to the documentation provider.
    ///
    /// Results in 502 Bad Gateway; only raised when the remote endpoint was
    /// unreachable, not for reachable-but-unauthorized responses.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// The documentation provider answered with a non-success status.
    ///
    /// Results in 502 Bad Gateway carrying the remote status for diagnostics.
    #[error("confluence {status}: {body}")]
    Upstream { status: u16, body: String },

    /// Resource not found. Results in 404 Not Found.
    #[error("{0}")]
    NotFound(String),

    /// Uniqueness conflict (slug or email already taken). Results in
    /// 400 Bad Request.
    #[error("{0}")]
    AlreadyExists(String),

    /// Malformed or out-of-range request fields. Results in 400 Bad Request.
    #[error("{0}")]
    Validation(String),

    /// Confluence integration is required for the operation but the
    /// organization has no usable credentials. Results in 400 Bad Request.
    #[error("{0}")]
    NotConfigured(String),
}

/// Splits provider failures into the transport and API variants so handlers
/// map them to 502 with the right diagnostics.
impl From<ConfluenceError> for AppError {
    fn from(err: ConfluenceError) -> Self {
        match err {
            ConfluenceError::Transport(e) => AppError::ReqwestErr(e),
            ConfluenceError::Api { status, body } => AppError::Upstream { status, body },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::AlreadyExists(msg) | Self::Validation(msg) | Self::NotConfigured(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Upstream { status, body } => {
                tracing::warn!("upstream confluence error {}: {}", status, body);
                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto {
                        error: format!("upstream error: HTTP {status}"),
                    }),
                )
                    .into_response()
            }
            Self::ReqwestErr(err) => {
                tracing::warn!("upstream request failed: {}", err);
                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto {
                        error: "upstream request failed".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response with a
/// generic body, keeping implementation details out of client responses.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
