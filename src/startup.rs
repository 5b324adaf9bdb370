//! Startup wiring: upstream client, session layer, CORS, static assets.

use axum::http::{header, HeaderValue, Method};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
};
use tower_sessions::{
    cookie::{Key, SameSite},
    service::SignedCookie,
    Expiry, MemoryStore, SessionManagerLayer,
};

use crate::{
    config::Config,
    error::Error,
};

const USER_AGENT: &str = concat!(
    "GreatRace/",
    env!("CARGO_PKG_VERSION"),
    " (+https://greatrace.gg)"
);

/// Build and configure the upstream racing client.
pub fn build_racing_client(config: &Config) -> Result<iracing::Client, Error> {
    let mut racing_config = iracing::Config::builder();
    if let Some(api_url) = &config.iracing_api_url {
        racing_config = racing_config.api_url(api_url);
    }

    let racing_client = iracing::Client::builder()
        .config(racing_config.build())
        .user_agent(USER_AGENT)
        .build()?;

    Ok(racing_client)
}

/// Configure cookie-backed session management.
///
/// Production cookies are Secure and cross-site so the separately hosted
/// frontend can send them; other modes stay same-site-lax over plain HTTP.
/// No expiry is set: the cookie lives for the browser session, and the
/// in-memory store evicts with the process. The cookie is signed with the
/// configured session secret.
pub fn session_layer(config: &Config) -> SessionManagerLayer<MemoryStore, SignedCookie> {
    let session_store = MemoryStore::default();

    let secure_cookies = config.environment.is_production();
    let same_site = if secure_cookies {
        SameSite::None
    } else {
        SameSite::Lax
    };

    SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(same_site)
        .with_http_only(true)
        .with_expiry(Expiry::OnSessionEnd)
        .with_signed(Key::derive_from(config.session_secret.as_bytes()))
}

/// Cross-origin policy: exactly one credentialed origin per deployment mode.
pub fn cors_layer(config: &Config) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(HeaderValue::from_static(config.cors_origin()))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

/// Serve the prebuilt frontend bundle in production mode.
///
/// Unmatched GET requests fall back to the bundle's `index.html` so
/// client-side routes resolve. Bootstrap plumbing only; matched in
/// production when the environment selects it.
pub fn spa_fallback(config: &Config) -> ServeDir<ServeFile> {
    let index = std::path::Path::new(&config.static_dir).join("index.html");

    ServeDir::new(&config.static_dir).fallback(ServeFile::new(index))
}
