/// Base URL of the live iRacing data API.
pub const DEFAULT_API_URL: &str = "https://members-ng.iracing.com";

/// Client configuration.
///
/// The API base URL is overridable so tests can point the client at a mock
/// server; everything else about the wire protocol is fixed.
#[derive(Clone, Debug)]
pub struct Config {
    api_url: String,
}

impl Config {
    /// Create a builder with the live API URL preconfigured.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// The API base URL requests are issued against.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Builder for [`Config`].
#[derive(Default)]
pub struct ConfigBuilder {
    api_url: Option<String>,
}

impl ConfigBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the API base URL (trailing slashes are stripped).
    pub fn api_url(mut self, api_url: &str) -> Self {
        self.api_url = Some(api_url.trim_end_matches('/').to_string());
        self
    }

    /// Finalize the configuration.
    pub fn build(self) -> Config {
        Config {
            api_url: self.api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        }
    }
}
