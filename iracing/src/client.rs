//! The reqwest-backed iRacing client and the [`RacingClient`] trait.

use async_trait::async_trait;
use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::json;
use sha2::{Digest, Sha256};

use crate::{config::Config, error::Error};

/// Operations the gateway needs from the racing data provider.
///
/// Implemented by the reqwest-backed [`Client`] for the live service and by
/// in-memory stand-ins under test.
#[async_trait]
pub trait RacingClient: Send + Sync {
    /// Authenticate against the provider with the member's credentials.
    ///
    /// On success the provider's auth cookie is retained by the client for
    /// follow-up data calls.
    async fn login(&self, username: &str, password: &str) -> Result<(), Error>;

    /// Fetch the authenticated member's recent race results.
    ///
    /// The payload shape is owned by the provider and returned untouched.
    async fn recent_races(&self) -> Result<serde_json::Value, Error>;
}

#[derive(Serialize)]
struct AuthRequest<'a> {
    email: &'a str,
    password: String,
}

#[derive(Deserialize)]
struct AuthResponse {
    #[serde(default)]
    authcode: serde_json::Value,
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client for the iRacing data API.
///
/// Holds a cookie store so the auth cookie issued by `/auth` is sent with
/// subsequent data requests.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    config: Config,
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client against the live API with only a user agent set.
    pub fn new(user_agent: &str) -> Result<Self, Error> {
        Self::builder().user_agent(user_agent).build()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_url(), path)
    }
}

/// iRacing requires the password hashed with the lowercased e-mail as salt
/// before transport: base64(sha256(password + lowercase(email))).
fn encode_credentials(email: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(email.to_lowercase().as_bytes());

    base64::engine::general_purpose::STANDARD.encode(hasher.finalize())
}

#[async_trait]
impl RacingClient for Client {
    async fn login(&self, username: &str, password: &str) -> Result<(), Error> {
        let request = AuthRequest {
            email: username,
            password: encode_credentials(username, password),
        };

        let response = self.http.post(self.url("/auth")).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::UnexpectedResponse {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        // The service answers 200 with `authcode: 0` when it rejects
        // credentials; any other authcode carries a session token.
        let auth: AuthResponse = response.json().await?;
        if auth.authcode == json!(0) {
            return Err(Error::LoginRejected(
                auth.message
                    .unwrap_or_else(|| "invalid email address or password".to_string()),
            ));
        }

        Ok(())
    }

    async fn recent_races(&self) -> Result<serde_json::Value, Error> {
        let response = self
            .http
            .get(self.url("/data/stats/member_recent_races"))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::UnexpectedResponse {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        Ok(response.json().await?)
    }
}

/// Builder for [`Client`].
#[derive(Default)]
pub struct ClientBuilder {
    config: Option<Config>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply a configuration (defaults to the live API otherwise).
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the User-Agent header sent with every request.
    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    /// Build the client, enabling the cookie store the auth flow relies on.
    pub fn build(self) -> Result<Client, Error> {
        let mut builder = reqwest::Client::builder().cookie_store(true);

        if let Some(user_agent) = &self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        Ok(Client {
            http: builder.build()?,
            config: self.config.unwrap_or_default(),
        })
    }
}
