//! Server state

use sporthub_client::{ClientConfig, HttpClient};

use crate::core::Config;

/// Shared state handed to every handler.
///
/// Holds the configured upstream client; handlers receive it by
/// injection instead of constructing their own. Cloning is cheap, the
/// inner HTTP client is reference counted. There is no other shared
/// state: requests do not coordinate.
#[derive(Debug, Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Upstream system-of-record client
    pub upstream: HttpClient,
}

impl ServerState {
    /// Build the state from configuration
    pub fn initialize(config: &Config) -> Self {
        let mut client_config = ClientConfig::new(&config.upstream_base_url)
            .with_timeout_ms(config.upstream_timeout_ms);
        if let Some(token) = &config.upstream_token {
            client_config = client_config.with_token(token);
        }

        Self {
            config: config.clone(),
            upstream: client_config.build(),
        }
    }
}
