//! Environment-driven configuration.
//!
//! The recognized variables (`PORT`, `NODE_ENV`, `SESSION_SECRET`) keep the
//! names the original deployment used so existing `.env` files work
//! unchanged.

use crate::error::config::ConfigError;

/// Origin allowed to make credentialed requests in production.
pub const PRODUCTION_ORIGIN: &str = "https://greatrace.gg";
/// Origin of the Vite dev server allowed during development.
pub const DEVELOPMENT_ORIGIN: &str = "http://localhost:5173";

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_STATIC_DIR: &str = "dist";

// Known weakness carried over from the original deployment: the cookie
// signing secret falls back to a fixed default when unset. A warning is
// logged whenever the fallback is used.
const DEFAULT_SESSION_SECRET: &str = "greatrace-insecure-development-session-secret";

// Cookie key derivation needs at least this much secret material.
const MIN_SESSION_SECRET_BYTES: usize = 32;

/// Deployment mode selected by `NODE_ENV`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    /// Local development: lax cookies, dev-server CORS origin, no static
    /// file serving.
    Development,
    /// Production: secure cross-site cookies, production CORS origin,
    /// frontend bundle served for unmatched routes.
    Production,
}

impl Environment {
    fn from_node_env(value: Option<&str>) -> Self {
        match value {
            Some("production") => Self::Production,
            _ => Self::Development,
        }
    }

    /// Whether production behavior is selected.
    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Gateway configuration resolved from the process environment.
pub struct Config {
    /// Listen port, from `PORT` (default 3001).
    pub port: u16,
    /// Deployment mode, from `NODE_ENV`.
    pub environment: Environment,
    /// Session cookie signing secret, from `SESSION_SECRET`.
    pub session_secret: String,
    /// Optional upstream base URL override, from `IRACING_API_URL`.
    pub iracing_api_url: Option<String>,
    /// Directory holding the built frontend bundle, from `STATIC_DIR`.
    pub static_dir: String,
}

impl Config {
    /// Resolve configuration from environment variables.
    ///
    /// Every variable has a default; only malformed values fail, and those
    /// are fatal at startup.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(value) => parse_port(&value)?,
            Err(_) => DEFAULT_PORT,
        };

        let environment = Environment::from_node_env(std::env::var("NODE_ENV").ok().as_deref());

        let session_secret = match std::env::var("SESSION_SECRET") {
            Ok(secret) => validate_session_secret(secret)?,
            Err(_) => {
                tracing::warn!(
                    "SESSION_SECRET is not set; falling back to the built-in development secret"
                );
                DEFAULT_SESSION_SECRET.to_string()
            }
        };

        Ok(Self {
            port,
            environment,
            session_secret,
            iracing_api_url: std::env::var("IRACING_API_URL").ok(),
            static_dir: std::env::var("STATIC_DIR")
                .unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string()),
        })
    }

    /// The single origin allowed to make credentialed cross-origin requests.
    pub fn cors_origin(&self) -> &'static str {
        match self.environment {
            Environment::Production => PRODUCTION_ORIGIN,
            Environment::Development => DEVELOPMENT_ORIGIN,
        }
    }
}

fn parse_port(value: &str) -> Result<u16, ConfigError> {
    value.parse::<u16>().map_err(|e| ConfigError::InvalidEnvValue {
        var: "PORT".to_string(),
        reason: e.to_string(),
    })
}

fn validate_session_secret(secret: String) -> Result<String, ConfigError> {
    if secret.len() < MIN_SESSION_SECRET_BYTES {
        return Err(ConfigError::InvalidEnvValue {
            var: "SESSION_SECRET".to_string(),
            reason: format!(
                "must be at least {MIN_SESSION_SECRET_BYTES} bytes, got {}",
                secret.len()
            ),
        });
    }

    Ok(secret)
}
