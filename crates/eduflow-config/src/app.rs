//! Application-level configuration.
//!
//! # Environment Variables
//!
//! - `EDUFLOW_API_BASE_URL`: REST endpoint (default: `https://api.schoolmgmt.example.com`)
//! - `EDUFLOW_USE_MOCK`: serve data from the in-memory mock table (default: `true`)
//! - `EDUFLOW_APP_NAME`: display name (default: `EduFlow`)
//!
//! Feature flags and storage settings are read by [`FeatureFlags`] and
//! [`StorageConfig`] from the same source.

use crate::{FeatureFlags, StorageConfig, flag};

pub const DEFAULT_API_BASE_URL: &str = "https://api.schoolmgmt.example.com";
pub const DEFAULT_APP_NAME: &str = "EduFlow";
pub const APP_VERSION: &str = "1.0.0";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    /// Use the in-memory mock API instead of the REST endpoint.
    pub use_mock: bool,
    pub app_name: String,
    pub version: &'static str,
    pub features: FeatureFlags,
    pub storage: StorageConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            use_mock: true,
            app_name: DEFAULT_APP_NAME.to_string(),
            version: APP_VERSION,
            features: FeatureFlags::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl AppConfig {
    /// Creates a new `AppConfig` from environment variables.
    ///
    /// Falls back to default values if variables are not set or cannot be
    /// parsed.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("EDUFLOW_API_BASE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Self {
            api_base_url,
            use_mock: flag(&lookup, "EDUFLOW_USE_MOCK", true),
            app_name: lookup("EDUFLOW_APP_NAME")
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            version: APP_VERSION,
            features: FeatureFlags::from_lookup(&lookup),
            storage: StorageConfig::from_lookup(&lookup),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_base_url, "https://api.schoolmgmt.example.com");
        assert!(config.use_mock);
        assert_eq!(config.app_name, "EduFlow");
        assert_eq!(config.version, "1.0.0");
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("EDUFLOW_API_BASE_URL", "http://localhost:8080/"),
            ("EDUFLOW_USE_MOCK", "false"),
            ("EDUFLOW_APP_NAME", "Campus"),
            ("FEATURE_ROLE_SWITCHING", "off"),
            ("EDUFLOW_SESSION_DIR", "/var/lib/eduflow"),
        ]));
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert!(!config.use_mock);
        assert_eq!(config.app_name, "Campus");
        assert!(!config.features.role_switching);
        assert_eq!(
            config.storage.session_path(),
            std::path::PathBuf::from("/var/lib/eduflow/session.json")
        );
    }
}
