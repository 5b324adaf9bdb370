use std::sync::Arc;

use iracing::RacingClient;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Upstream racing-data client; a stand-in under test.
    pub racing_client: Arc<dyn RacingClient>,
}

impl From<iracing::Client> for AppState {
    fn from(racing_client: iracing::Client) -> Self {
        Self {
            racing_client: Arc::new(racing_client),
        }
    }
}
