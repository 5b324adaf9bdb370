use iracing::RacingClient;

use crate::error::{auth::AuthError, Error};

/// Forward credentials verbatim to the upstream login operation.
///
/// Any upstream failure — rejected credentials, transport error, malformed
/// response — collapses into [`AuthError::AuthenticationFailed`]; the caller
/// answers with the opaque 401.
pub async fn login_service(
    racing_client: &dyn RacingClient,
    username: &str,
    password: &str,
) -> Result<(), Error> {
    racing_client
        .login(username, password)
        .await
        .map_err(AuthError::AuthenticationFailed)?;

    Ok(())
}
