//! Full-router tests exercising the session layer end to end.

use std::sync::Arc;

use axum::Router;
use greatrace::{model::app::AppState, router};
use greatrace_test_utils::prelude::*;
use tower_sessions::{MemoryStore, SessionManagerLayer};

mod session_cookie;

/// Build the application router around a stand-in upstream client, with the
/// same session layer shape production uses (unsigned; signing is covered
/// by configuration tests).
pub fn test_app(stub: Arc<StubRacingClient>) -> Router {
    let session_layer = SessionManagerLayer::new(MemoryStore::default());

    router::routes()
        .with_state(AppState {
            racing_client: stub,
        })
        .layer(session_layer)
}
