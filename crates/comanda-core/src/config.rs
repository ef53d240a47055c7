// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ComandaError, Result};

/// Environment variable that overrides [`AppConfig::api_base_url`].
pub const API_URL_ENV: &str = "COMANDA_API_URL";

/// Persistent application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the restaurant API. `None` runs against the built-in menu.
    pub api_base_url: Option<String>,
    /// Per-request timeout for backend calls.
    pub request_timeout_secs: u64,
    /// Suggestions offered under the menu search box.
    pub popular_searches: Vec<String>,
    /// How long a toast notification stays on screen.
    pub toast_duration_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            request_timeout_secs: 10,
            popular_searches: ["Pizza", "Pasta", "Ensalada", "Postre", "Bebida"]
                .into_iter()
                .map(String::from)
                .collect(),
            toast_duration_secs: 4,
        }
    }
}

impl AppConfig {
    /// Apply overrides from the process environment.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            let url = url.trim();
            if !url.is_empty() {
                self.api_base_url = Some(url.to_owned());
            }
        }
        self
    }

    /// Reject settings the client cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.request_timeout_secs == 0 {
            return Err(ComandaError::InvalidConfig(
                "request_timeout_secs must be greater than zero".into(),
            ));
        }
        if let Some(ref url) = self.api_base_url
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            return Err(ComandaError::InvalidConfig(format!(
                "api_base_url must start with http:// or https://, got '{url}'"
            )));
        }
        Ok(())
    }
}
