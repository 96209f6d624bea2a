//! Server configuration

use sporthub_client::config::DEFAULT_TIMEOUT_MS;

/// BFF configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 4000 | HTTP listen port |
/// | UPSTREAM_BASE_URL | http://localhost:8000 | System-of-record base URL |
/// | UPSTREAM_TIMEOUT_MS | 10000 | Upstream request timeout |
/// | UPSTREAM_TOKEN | (none) | Bearer token forwarded upstream |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | LOG_LEVEL | info | tracing filter level |
/// | LOG_DIR | (none) | Daily log files when set |
///
/// The upstream URL is configuration only; nothing in the codebase
/// hard-codes a remote address.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API listen port
    pub http_port: u16,
    /// Upstream system-of-record base URL
    pub upstream_base_url: String,
    /// Upstream request timeout (milliseconds)
    pub upstream_timeout_ms: u64,
    /// Bearer token forwarded on upstream requests, if any
    pub upstream_token: Option<String>,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Log filter level
    pub log_level: String,
    /// Directory for daily log files, stdout-only when unset
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables, with defaults for
    /// anything unset
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(4000),
            upstream_base_url: std::env::var("UPSTREAM_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8000".into()),
            upstream_timeout_ms: std::env::var("UPSTREAM_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_MS),
            upstream_token: std::env::var("UPSTREAM_TOKEN").ok(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// Override the pieces tests care about
    pub fn with_overrides(upstream_base_url: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.upstream_base_url = upstream_base_url.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
