// SPDX-FileCopyrightText: 2026 Phonebook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration for the remote contacts service

use std::env;
use std::time::Duration;

/// Environment variable holding the service base URL.
pub const ENV_BASE_URL: &str = "PHONEBOOK_BASE_URL";
/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "PHONEBOOK_API_KEY";
/// Environment variable holding the request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "PHONEBOOK_TIMEOUT_SECS";
/// Environment variable holding an optional proxy URL.
pub const ENV_PROXY_URL: &str = "PHONEBOOK_PROXY_URL";

/// Connection settings for the contacts service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Service root, e.g. "https://phonebook.example.com/"
    pub base_url: String,

    /// Value sent in the `ApiKey` header on every request
    pub api_key: Option<String>,

    /// HTTP timeout per request
    pub timeout: Duration,

    /// Proxy URL (http, https or socks5)
    pub proxy_url: Option<String>,

    /// User-Agent header
    pub user_agent: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/".to_string(),
            api_key: None,
            timeout: Duration::from_secs(30),
            proxy_url: None,
            user_agent: format!(
                "Phonebook/{}",
                option_env!("CARGO_PKG_VERSION").unwrap_or("0.1.0")
            ),
        }
    }
}

impl ServiceConfig {
    /// Creates a config for the given base URL with default settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Reads the config from `PHONEBOOK_*` environment variables.
    ///
    /// Unset or unparsable variables keep their defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = env::var(ENV_BASE_URL) {
            config.base_url = url;
        }
        if let Ok(key) = env::var(ENV_API_KEY) {
            if !key.is_empty() {
                config.api_key = Some(key);
            }
        }
        if let Some(secs) = env::var(ENV_TIMEOUT_SECS)
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
        {
            config.timeout = Duration::from_secs(secs);
        }
        if let Ok(proxy) = env::var(ENV_PROXY_URL) {
            if !proxy.is_empty() {
                config.proxy_url = Some(proxy);
            }
        }

        config
    }

    /// Sets the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Routes requests through a proxy.
    pub fn with_proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy_url = Some(proxy_url.into());
        self
    }
}
