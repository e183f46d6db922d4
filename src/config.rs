//! API client configuration

use std::fmt;

/// Public GraphQL endpoint of the Republik API
pub const DEFAULT_API_URL: &str = "https://api.republik.ch/graphql";

/// Environment variable holding the `connect.sid` session id
pub const ENV_SESSION_ID: &str = "REPUBLIK_SID";

/// Environment variable overriding the API endpoint
pub const ENV_API_URL: &str = "REPUBLIK_API_URL";

/// Republik API client configuration
///
/// The session id is the value of the `connect.sid` cookie of a logged-in
/// browser session. The client never obtains or refreshes it.
///
/// # Example
///
/// ```
/// use republik_rs::ClientConfig;
///
/// let config = ClientConfig::new("s%3Aabc.def");
/// assert_eq!(config.api_url, "https://api.republik.ch/graphql");
///
/// let staging = ClientConfig::new("s%3Aabc.def").with_api_url("http://localhost:5000/graphql");
/// assert_eq!(staging.api_url, "http://localhost:5000/graphql");
/// ```
#[must_use]
#[derive(Clone, serde::Serialize, serde::Deserialize)]
pub struct ClientConfig {
    /// GraphQL endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Value sent as `Cookie: connect.sid=<session_id>`
    pub session_id: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl ClientConfig {
    /// Create a configuration for the public endpoint
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            api_url: default_api_url(),
            session_id: session_id.into(),
        }
    }

    /// Point the client at another endpoint
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Read the configuration from `REPUBLIK_SID` and `REPUBLIK_API_URL`
    ///
    /// Returns `None` when no session id is set.
    pub fn from_env() -> Option<Self> {
        let session_id = std::env::var(ENV_SESSION_ID).ok().filter(|s| !s.is_empty())?;
        let api_url = std::env::var(ENV_API_URL)
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(default_api_url);

        Some(Self {
            api_url,
            session_id,
        })
    }

    /// The `Cookie` header value carrying the session
    pub fn cookie(&self) -> String {
        format!("connect.sid={}", self.session_id)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redacted = match self.session_id.len() {
            0 => "",
            _ => "***",
        };
        f.debug_struct("ClientConfig")
            .field("api_url", &self.api_url)
            .field("session_id", &redacted)
            .finish()
    }
}
