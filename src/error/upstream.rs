use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures of the upstream race-data retrieval.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// The race-history call failed; no retry is attempted.
    #[error("Failed to fetch recent races from upstream: {0}")]
    RecentRacesFailed(#[source] iracing::Error),
}

impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        match self {
            Self::RecentRacesFailed(ref source) => {
                tracing::error!(error = %source, "recent races fetch failed");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Failed to fetch recent races".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
