use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    error::Error,
    model::{
        api::{ErrorDto, LoginDto, SuccessDto},
        app::AppState,
        session::auth::SessionAuthenticated,
    },
    service::auth::login_service,
};

/// OpenAPI tag for authentication routes.
pub static AUTH_TAG: &str = "auth";

/// Login route authenticating against the upstream racing service
///
/// Forwards the submitted credentials verbatim to the upstream login
/// operation and marks the session authenticated when it succeeds. Failure
/// detail is logged server-side only; the client always receives the same
/// generic message.
///
/// # Responses
/// - 200 (OK): Credentials accepted, session marked authenticated
/// - 401 (Unauthorized): Upstream rejected the login or was unreachable
#[utoipa::path(
    post,
    path = "/api/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Credentials accepted", body = SuccessDto),
        (status = 401, description = "Authentication failed", body = ErrorDto),
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(credentials): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    login_service(
        state.racing_client.as_ref(),
        &credentials.username,
        &credentials.password,
    )
    .await?;

    // Only a completed upstream login may flip the flag; on any failure the
    // early return above leaves the session untouched.
    SessionAuthenticated::insert(&session).await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}

/// Logout route clearing the session's authentication
///
/// Invalidates the authenticated flag. A session that never authenticated
/// is a no-op success; this avoids materializing empty session records.
///
/// # Responses
/// - 200 (OK): Session invalidated (or was never authenticated)
/// - 500 (Internal Server Error): There was an issue updating the session
#[utoipa::path(
    post,
    path = "/api/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session invalidated", body = SuccessDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    if SessionAuthenticated::get(&session).await? {
        SessionAuthenticated::clear(&session).await?;
    }

    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}
