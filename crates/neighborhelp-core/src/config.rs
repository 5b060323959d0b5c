// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{NeighborHelpError, Result};

/// Environment variable that overrides the persisted API base URL.
pub const API_BASE_URL_ENV: &str = "NEIGHBORHELP_API_BASE_URL";

/// Persistent application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Root of the marketplace API, e.g. `https://api.example.com/api`.
    /// Supplied per deployment; there is no built-in default.
    pub api_base_url: Option<String>,
    /// Per-request timeout.
    pub request_timeout_secs: u64,
    /// Pause after a successful sign-in so the success message is readable.
    pub redirect_delay_ms: u64,
    /// Pause before the add-service overlay closes itself.
    pub modal_close_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            request_timeout_secs: 30,
            redirect_delay_ms: 1000,
            modal_close_delay_ms: 1000,
        }
    }
}

impl AppConfig {
    /// Apply overrides from a variable lookup (normally `std::env::var`).
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(API_BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.api_base_url = Some(url);
        }
        self
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// The configured base URL, trimmed of trailing slashes.
    pub fn base_url(&self) -> Result<String> {
        let raw = self
            .api_base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                NeighborHelpError::Config(format!(
                    "no API base URL configured (set {API_BASE_URL_ENV} or api_base_url in config.json)"
                ))
            })?;

        if !(raw.starts_with("http://") || raw.starts_with("https://")) {
            return Err(NeighborHelpError::Config(format!(
                "API base URL must start with http:// or https://, got '{raw}'"
            )));
        }

        Ok(raw.trim_end_matches('/').to_string())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }

    pub fn modal_close_delay(&self) -> Duration {
        Duration::from_millis(self.modal_close_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_required() {
        let err = AppConfig::default().base_url().expect_err("missing url");
        assert!(matches!(err, NeighborHelpError::Config(_)));
    }

    #[test]
    fn base_url_normalised() {
        let config = AppConfig {
            api_base_url: Some(" https://api.example.com/api/ ".into()),
            ..Default::default()
        };
        assert_eq!(
            config.base_url().expect("valid url"),
            "https://api.example.com/api"
        );
    }

    #[test]
    fn base_url_scheme_checked() {
        let config = AppConfig {
            api_base_url: Some("api.example.com".into()),
            ..Default::default()
        };
        assert!(config.base_url().is_err());
    }

    #[test]
    fn override_wins_over_file_value() {
        let config = AppConfig {
            api_base_url: Some("http://from-file".into()),
            ..Default::default()
        }
        .with_overrides(|key| (key == API_BASE_URL_ENV).then(|| "http://from-env".to_string()));
        assert_eq!(config.api_base_url.as_deref(), Some("http://from-env"));

        let untouched = AppConfig::default().with_overrides(|_| Some("   ".into()));
        assert_eq!(untouched.api_base_url, None);
    }

    #[test]
    fn partial_config_file_uses_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "api_base_url": "http://localhost:5000/api" }"#)
                .expect("parse");
        assert_eq!(config.redirect_delay(), Duration::from_millis(1000));
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }
}
