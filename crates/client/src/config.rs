//! Client configuration

use std::time::Duration;
use tracing::warn;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Where and how the client talks to the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    /// Read `TASKBOX_API_URL` and `TASKBOX_TIMEOUT_SECS`, falling back to defaults
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("TASKBOX_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let timeout = match std::env::var("TASKBOX_TIMEOUT_SECS") {
            Ok(raw) => parse_timeout(&raw).unwrap_or_else(|| {
                warn!("Ignoring invalid TASKBOX_TIMEOUT_SECS={:?}", raw);
                Duration::from_secs(DEFAULT_TIMEOUT_SECS)
            }),
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Self::default().with_base_url(base_url).with_timeout(timeout)
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of an API resource
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

fn parse_timeout(raw: &str) -> Option<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ApiConfig::default().with_base_url("https://tasks.example.com/api/");
        assert_eq!(config.base_url, "https://tasks.example.com/api");
        assert_eq!(config.url("tasks"), "https://tasks.example.com/api/tasks");
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout(" 30 "), Some(Duration::from_secs(30)));
        assert_eq!(parse_timeout("0"), None);
        assert_eq!(parse_timeout("soon"), None);
    }
}
