//! # EduFlow Config
//!
//! Configuration types for EduFlow, loaded from environment variables.
//!
//! - [`app`]: API endpoint, mock switch and application identity
//! - [`features`]: feature flags (notifications, role switching, offline mode)
//! - [`storage`]: where the session file lives
//!
//! Every type offers `from_env()` and a `from_lookup()` twin that takes the
//! variable source as a closure, so tests never touch the process
//! environment.
//!
//! # Example
//!
//! ```ignore
//! use eduflow_config::AppConfig;
//!
//! dotenvy::dotenv().ok();
//! let config = AppConfig::from_env();
//! if config.features.role_switching {
//!     // expose the role switcher
//! }
//! ```

pub mod app;
pub mod features;
pub mod storage;

// Re-export commonly used types at crate root
pub use app::AppConfig;
pub use features::FeatureFlags;
pub use storage::StorageConfig;

/// Parse a boolean flag leniently: `1/true/yes/on` and `0/false/no/off`,
/// case-insensitive. Anything else yields `None`.
pub(crate) fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read a flag through `lookup`, falling back to `default` when it is unset
/// or unparseable.
pub(crate) fn flag<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
            tracing::warn!(key, value = %raw, default, "Ignoring unparseable flag");
            default
        }),
        None => default,
    }
}
