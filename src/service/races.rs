use iracing::RacingClient;

use crate::error::{upstream::UpstreamError, Error};

/// Fetch the member's recent race history from upstream.
///
/// The payload is passed through unmodified; its shape is owned by the
/// upstream service. Failures map to [`UpstreamError::RecentRacesFailed`]
/// with no retry.
pub async fn recent_races_service(
    racing_client: &dyn RacingClient,
) -> Result<serde_json::Value, Error> {
    let races = racing_client
        .recent_races()
        .await
        .map_err(UpstreamError::RecentRacesFailed)?;

    Ok(races)
}
