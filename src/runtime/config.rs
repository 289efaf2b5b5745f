//! Configuration for the HTTP transport.
//!
//! Defaults work against a local development server; every value can be
//! overridden from the environment (a `.env` file is honoured).
//!
//! | Variable            | Field        | Default                  |
//! |---------------------|--------------|--------------------------|
//! | `REST_BASE_URL`     | `base_url`   | `http://localhost:3000`  |
//! | `REST_TIMEOUT_SECS` | `timeout`    | `30`                     |
//! | `REST_USER_AGENT`   | `user_agent` | `rest-resource/<version>`|

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{info, warn};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for [`HttpTransport`](crate::http::HttpTransport).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Origin every resource path is joined onto.
    pub base_url: String,

    /// Per-request timeout.
    pub timeout: Duration,

    pub user_agent: String,

    /// Extra headers sent with every request.
    pub headers: BTreeMap<String, String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!("rest-resource/", env!("CARGO_PKG_VERSION")).to_string(),
            headers: BTreeMap::new(),
        }
    }
}

impl HttpConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Load configuration from environment variables (prefixed `REST_`).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(base_url) = var("REST_BASE_URL") {
            info!(%base_url, "Base URL loaded from environment");
            config.base_url = base_url;
        }

        if let Some(raw) = var("REST_TIMEOUT_SECS") {
            match raw.parse::<u64>() {
                Ok(secs) => config.timeout = Duration::from_secs(secs),
                Err(_) => warn!(
                    value = %raw,
                    "Invalid REST_TIMEOUT_SECS, using default of {DEFAULT_TIMEOUT_SECS}s"
                ),
            }
        }

        if let Some(user_agent) = var("REST_USER_AGENT") {
            config.user_agent = user_agent;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = HttpConfig::from_vars(vars(&[]));
        assert_eq!(config, HttpConfig::default());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_overrides_from_env() {
        let config = HttpConfig::from_vars(vars(&[
            ("REST_BASE_URL", "https://api.example.com"),
            ("REST_TIMEOUT_SECS", "5"),
            ("REST_USER_AGENT", "contacts-app"),
        ]));
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "contacts-app");
    }

    #[test]
    fn test_invalid_timeout_falls_back() {
        let config = HttpConfig::from_vars(vars(&[("REST_TIMEOUT_SECS", "soon")]));
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_builder_helpers() {
        let config = HttpConfig::new("http://api")
            .with_timeout(Duration::from_millis(250))
            .with_header("Authorization", "Bearer t");
        assert_eq!(config.base_url, "http://api");
        assert_eq!(config.timeout, Duration::from_millis(250));
        assert_eq!(config.headers.get("Authorization").map(String::as_str), Some("Bearer t"));
    }
}
