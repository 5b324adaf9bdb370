use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Authentication and authorization failures.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The upstream login operation failed, whatever the reason: rejected
    /// credentials, transport error, malformed response.
    #[error("Upstream login failed: {0}")]
    AuthenticationFailed(#[source] iracing::Error),
    /// The session lacks the authenticated flag; upstream was not contacted.
    #[error("Session is not authenticated")]
    NotAuthenticated,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthenticationFailed(ref source) => {
                // The upstream detail stays in the logs; the client only
                // sees the generic message.
                tracing::warn!(error = %source, "upstream login failed");

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Authentication failed".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::NotAuthenticated => {
                tracing::debug!("{}", self);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Not authenticated".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
