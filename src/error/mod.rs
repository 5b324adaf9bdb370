//! Error types for the GreatRace gateway.
//!
//! Each domain has its own `thiserror` enum (authentication, configuration,
//! upstream data fetch) aggregated into a single [`Error`] via `#[from]`.
//! All errors implement `IntoResponse`: the underlying detail is logged
//! server-side and replaced with an opaque client-facing message, so no
//! upstream error text ever reaches the caller.

pub mod auth;
pub mod config;
pub mod upstream;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{auth::AuthError, config::ConfigError, upstream::UpstreamError},
    model::api::ErrorDto,
};

/// Main error type for the GreatRace gateway.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (malformed environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication or authorization error.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Upstream race-data fetch error.
    #[error(transparent)]
    UpstreamError(#[from] UpstreamError),
    /// Upstream client construction or transport error outside a handler.
    #[error(transparent)]
    RacingError(#[from] iracing::Error),
    /// Session error (retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::UpstreamError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into an opaque 500 response.
///
/// Logs the full error message for debugging but returns a generic message
/// to the client.
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
