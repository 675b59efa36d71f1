// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.
//
// Layering: built-in defaults, then an optional JSON file named by
// `MONODASH_CONFIG`, then the `SERVICE_A_URL` / `SERVICE_B_URL` environment
// variables.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{MonodashError, Result};

pub const DEFAULT_SERVICE_A_URL: &str = "http://localhost:8081";
pub const DEFAULT_SERVICE_B_URL: &str = "http://localhost:8082";

pub const ENV_CONFIG_FILE: &str = "MONODASH_CONFIG";
pub const ENV_SERVICE_A_URL: &str = "SERVICE_A_URL";
pub const ENV_SERVICE_B_URL: &str = "SERVICE_B_URL";

/// Fixed-interval retry schedule for failed list fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Retries attempted before the loop goes quiet.
    pub max_retries: u32,
    /// Delay before each retry, in milliseconds.
    pub delay_ms: u64,
}

impl RetryPolicy {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 10,
            delay_ms: 3_000,
        }
    }
}

/// Dashboard settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Base URL of Service A (users).
    pub service_a_url: String,
    /// Base URL of Service B (orders).
    pub service_b_url: String,
    /// Auto-retry schedule shared by both list components.
    pub retry: RetryPolicy,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            service_a_url: DEFAULT_SERVICE_A_URL.to_string(),
            service_b_url: DEFAULT_SERVICE_B_URL.to_string(),
            retry: RetryPolicy::default(),
        }
    }
}

impl DashboardConfig {
    /// Load the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration using `lookup` in place of the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(ENV_CONFIG_FILE) {
            Some(path) => Self::load_file(Path::new(&path))?,
            None => Self::default(),
        };

        if let Some(url) = lookup(ENV_SERVICE_A_URL).filter(|v| !v.trim().is_empty()) {
            config.service_a_url = url;
        }
        if let Some(url) = lookup(ENV_SERVICE_B_URL).filter(|v| !v.trim().is_empty()) {
            config.service_b_url = url;
        }

        config.normalize()?;
        info!(
            service_a = %config.service_a_url,
            service_b = %config.service_b_url,
            "configuration loaded"
        );
        Ok(config)
    }

    /// Read a JSON config file. Missing keys fall back to defaults.
    pub fn load_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "reading config file");
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Validate base URLs and strip trailing slashes.
    pub fn normalize(&mut self) -> Result<()> {
        self.service_a_url = normalize_base_url(ENV_SERVICE_A_URL, &self.service_a_url)?;
        self.service_b_url = normalize_base_url(ENV_SERVICE_B_URL, &self.service_b_url)?;
        Ok(())
    }
}

fn normalize_base_url(name: &str, raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(MonodashError::Config(format!(
            "{name} must be an http(s) URL, got {raw:?}"
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_point_at_local_services() {
        let config = DashboardConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.service_a_url, "http://localhost:8081");
        assert_eq!(config.service_b_url, "http://localhost:8082");
        assert_eq!(config.retry.max_retries, 10);
        assert_eq!(config.retry.delay(), Duration::from_secs(3));
    }

    #[test]
    fn env_overrides_and_trailing_slash_is_dropped() {
        let config = DashboardConfig::from_lookup(lookup(&[
            (ENV_SERVICE_A_URL, "http://users.internal:9000/"),
            (ENV_SERVICE_B_URL, "https://orders.internal"),
        ]))
        .unwrap();
        assert_eq!(config.service_a_url, "http://users.internal:9000");
        assert_eq!(config.service_b_url, "https://orders.internal");
    }

    #[test]
    fn blank_env_value_is_ignored() {
        let config =
            DashboardConfig::from_lookup(lookup(&[(ENV_SERVICE_A_URL, "  ")])).unwrap();
        assert_eq!(config.service_a_url, DEFAULT_SERVICE_A_URL);
    }

    #[test]
    fn non_http_url_is_rejected() {
        let err = DashboardConfig::from_lookup(lookup(&[(ENV_SERVICE_B_URL, "localhost:8082")]))
            .unwrap_err();
        assert!(matches!(err, MonodashError::Config(_)));
    }

    #[test]
    fn file_is_layered_under_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("monodash.json");
        std::fs::write(
            &path,
            r#"{ "service_a_url": "http://a.from-file", "retry": { "max_retries": 2, "delay_ms": 50 } }"#,
        )
        .unwrap();

        let path_str = path.to_string_lossy().to_string();
        let config = DashboardConfig::from_lookup(lookup(&[
            (ENV_CONFIG_FILE, path_str.as_str()),
            (ENV_SERVICE_B_URL, "http://b.from-env"),
        ]))
        .unwrap();

        assert_eq!(config.service_a_url, "http://a.from-file");
        assert_eq!(config.service_b_url, "http://b.from-env");
        assert_eq!(config.retry, RetryPolicy { max_retries: 2, delay_ms: 50 });
    }

    #[test]
    fn partial_retry_section_keeps_remaining_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("monodash.json");
        std::fs::write(&path, r#"{ "retry": { "max_retries": 2 } }"#).unwrap();

        let config = DashboardConfig::load_file(&path).unwrap();
        assert_eq!(config.retry.max_retries, 2);
        assert_eq!(config.retry.delay_ms, 3_000);
        assert_eq!(config.service_a_url, DEFAULT_SERVICE_A_URL);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = DashboardConfig::from_lookup(lookup(&[(ENV_CONFIG_FILE, "/nonexistent/monodash.json")]))
            .unwrap_err();
        assert!(matches!(err, MonodashError::Io(_)));
    }
}
