//! Authentication session data model.
//!
//! Stores the single per-client authenticated flag. The flag is only set
//! true as a direct result of a successful upstream login completing within
//! the same request.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::Error;

/// Session key for the authenticated flag.
///
/// Namespaced under "greatrace:auth:" to avoid collisions with other
/// session data.
pub const SESSION_AUTHENTICATED_KEY: &str = "greatrace:auth:authenticated";

/// Session wrapper for the per-client authenticated flag.
///
/// Two logins racing on the same session are last-write-wins; the flag is
/// the only state involved, so this is left unguarded.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAuthenticated(pub bool);

impl SessionAuthenticated {
    /// Mark the session as authenticated.
    ///
    /// Only the login handler calls this, directly after the upstream login
    /// succeeds.
    pub async fn insert(session: &Session) -> Result<(), Error> {
        session
            .insert(SESSION_AUTHENTICATED_KEY, SessionAuthenticated(true))
            .await?;

        Ok(())
    }

    /// Whether the session has been authenticated.
    ///
    /// An absent flag reads as false: sessions start unauthenticated.
    pub async fn get(session: &Session) -> Result<bool, Error> {
        Ok(session
            .get::<SessionAuthenticated>(SESSION_AUTHENTICATED_KEY)
            .await?
            .map(|SessionAuthenticated(flag)| flag)
            .unwrap_or(false))
    }

    /// Invalidate the session's authentication.
    ///
    /// Returns the previous flag value, `None` when the session never
    /// carried one.
    pub async fn clear(session: &Session) -> Result<Option<bool>, Error> {
        Ok(session
            .remove::<SessionAuthenticated>(SESSION_AUTHENTICATED_KEY)
            .await?
            .map(|SessionAuthenticated(flag)| flag))
    }
}
