//! Dashboard configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_ORDERS_URL: &str = "http://localhost:8082/api/orders";
pub const DEFAULT_ASSISTANT_URL: &str = "http://localhost:5050/api/assistant/chat";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 5000;
pub const DEFAULT_HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_HTTP_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl HttpTimeouts {
    #[must_use]
    pub fn request(self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    #[must_use]
    pub fn connect(self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

impl Default for HttpTimeouts {
    fn default() -> Self {
        Self {
            request_secs: DEFAULT_HTTP_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_HTTP_CONNECT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub orders_url: String,
    pub assistant_url: String,
    pub poll_interval: Duration,
    pub timeouts: HttpTimeouts,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            orders_url: DEFAULT_ORDERS_URL.to_owned(),
            assistant_url: DEFAULT_ASSISTANT_URL.to_owned(),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            timeouts: HttpTimeouts::default(),
        }
    }
}

impl DashboardConfig {
    /// Build typed dashboard config from environment variables.
    ///
    /// Optional:
    /// - `ORDERS_URL`: order backend list endpoint
    /// - `ASSISTANT_URL`: assistant chat endpoint
    /// - `POLL_INTERVAL_MS`: auto-refresh period, default 5000, must be non-zero
    /// - `HTTP_REQUEST_TIMEOUT_SECS`: default 30
    /// - `HTTP_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the poll interval is zero.
    pub fn from_env() -> Result<Self, ConfigError> {
        let orders_url = env_url("ORDERS_URL", DEFAULT_ORDERS_URL);
        let assistant_url = env_url("ASSISTANT_URL", DEFAULT_ASSISTANT_URL);

        let poll_ms = env_parse_u64("POLL_INTERVAL_MS", DEFAULT_POLL_INTERVAL_MS);
        if poll_ms == 0 {
            return Err(ConfigError::Parse("POLL_INTERVAL_MS must be greater than zero".into()));
        }

        let timeouts = HttpTimeouts {
            request_secs: env_parse_u64("HTTP_REQUEST_TIMEOUT_SECS", DEFAULT_HTTP_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("HTTP_CONNECT_TIMEOUT_SECS", DEFAULT_HTTP_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { orders_url, assistant_url, poll_interval: Duration::from_millis(poll_ms), timeouts })
    }
}

fn env_url(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_owned())
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
