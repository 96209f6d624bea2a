//! Client configuration

use crate::http::HttpClient;

/// Default upstream request timeout; fixed, no retry on expiry
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Configuration for connecting to the upstream SportHub API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Upstream base URL (e.g. "http://localhost:8000")
    pub base_url: String,

    /// Request timeout in milliseconds
    pub timeout_ms: u64,

    /// Bearer token forwarded on every request, if any
    pub token: Option<String>,
}

impl ClientConfig {
    /// Create a new configuration for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            token: None,
        }
    }

    /// Set the request timeout
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build(&self) -> HttpClient {
        HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8000")
    }
}
