use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, Error},
    model::{api::ErrorDto, app::AppState, session::auth::SessionAuthenticated},
    service::races::recent_races_service,
};

/// OpenAPI tag for race-data routes.
pub static RACES_TAG: &str = "races";

/// Get the authenticated member's recent race results
///
/// Proxies the upstream race-history retrieval with the payload passed
/// through unmodified. Unauthenticated sessions are rejected before any
/// upstream call is made.
///
/// # Responses
/// - 200 (OK): Upstream payload, shape owned by the upstream service
/// - 401 (Unauthorized): Session is not authenticated
/// - 500 (Internal Server Error): Upstream retrieval failed
#[utoipa::path(
    get,
    path = "/api/recent-races",
    tag = RACES_TAG,
    responses(
        (status = 200, description = "Upstream recent-races payload"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Failed to fetch recent races", body = ErrorDto),
    ),
)]
pub async fn recent_races(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    if !SessionAuthenticated::get(&session).await? {
        return Err(AuthError::NotAuthenticated.into());
    }

    let races = recent_races_service(state.racing_client.as_ref()).await?;

    Ok((StatusCode::OK, Json(races)))
}
