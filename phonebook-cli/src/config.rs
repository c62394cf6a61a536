// SPDX-FileCopyrightText: 2026 Phonebook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI Configuration

use std::time::Duration;

use phonebook_core::ServiceConfig;

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Service base URL.
    pub base_url: String,
    /// API key, if the service requires one.
    pub api_key: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Proxy URL.
    pub proxy_url: Option<String>,
}

impl CliConfig {
    /// Builds the service client settings.
    pub fn service_config(&self) -> ServiceConfig {
        let mut service = ServiceConfig::new(&self.base_url).with_timeout(self.timeout);
        if let Some(key) = self.api_key.as_deref().filter(|k| !k.is_empty()) {
            service = service.with_api_key(key);
        }
        if let Some(proxy) = &self.proxy_url {
            service = service.with_proxy(proxy);
        }
        service
    }
}
