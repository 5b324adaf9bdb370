//! Programmable in-memory stand-in for the upstream racing client.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use iracing::{Error, RacingClient};
use serde_json::json;

/// Stand-in upstream client with call counters.
///
/// Counts invocations of both operations so tests can assert the gateway
/// never contacted upstream (e.g. when a session is unauthenticated).
pub struct StubRacingClient {
    accept_login: bool,
    recent_races: Option<serde_json::Value>,
    login_calls: AtomicUsize,
    recent_races_calls: AtomicUsize,
}

impl StubRacingClient {
    /// Stub that accepts any credentials and returns an empty race list.
    pub fn accepting() -> Self {
        Self {
            accept_login: true,
            recent_races: Some(json!([])),
            login_calls: AtomicUsize::new(0),
            recent_races_calls: AtomicUsize::new(0),
        }
    }

    /// Stub that rejects every login attempt.
    pub fn rejecting() -> Self {
        Self {
            accept_login: false,
            ..Self::accepting()
        }
    }

    /// Set the payload returned by the recent-races operation.
    pub fn with_recent_races(mut self, payload: serde_json::Value) -> Self {
        self.recent_races = Some(payload);
        self
    }

    /// Make the recent-races operation fail.
    pub fn with_failing_recent_races(mut self) -> Self {
        self.recent_races = None;
        self
    }

    /// Number of times `login` was invoked.
    pub fn login_calls(&self) -> usize {
        self.login_calls.load(Ordering::SeqCst)
    }

    /// Number of times `recent_races` was invoked.
    pub fn recent_races_calls(&self) -> usize {
        self.recent_races_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RacingClient for StubRacingClient {
    async fn login(&self, _username: &str, _password: &str) -> Result<(), Error> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);

        if self.accept_login {
            Ok(())
        } else {
            Err(Error::LoginRejected(
                "invalid email address or password".to_string(),
            ))
        }
    }

    async fn recent_races(&self) -> Result<serde_json::Value, Error> {
        self.recent_races_calls.fetch_add(1, Ordering::SeqCst);

        match &self.recent_races {
            Some(payload) => Ok(payload.clone()),
            None => Err(Error::UnexpectedResponse {
                status: 500,
                body: "stubbed upstream failure".to_string(),
            }),
        }
    }
}
