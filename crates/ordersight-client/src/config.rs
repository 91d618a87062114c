//! Client configuration.

/// Configuration for connecting to the fulfillment operations API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL, e.g. `https://ops.example.com`.
    pub base_url: String,
    /// Optional bearer token.
    pub api_token: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".into(),
            api_token: None,
            timeout_secs: 30,
        }
    }
}
