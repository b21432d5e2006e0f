//! Feature flags.
//!
//! - `FEATURE_NOTIFICATIONS`: notification center (default: on)
//! - `FEATURE_ROLE_SWITCHING`: development-only role switcher (default: on)
//! - `FEATURE_OFFLINE_MODE`: reserved, no behaviour attached (default: off)

use crate::flag;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureFlags {
    pub notifications: bool,
    pub role_switching: bool,
    pub offline_mode: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            notifications: true,
            role_switching: true,
            offline_mode: false,
        }
    }
}

impl FeatureFlags {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            notifications: flag(&lookup, "FEATURE_NOTIFICATIONS", defaults.notifications),
            role_switching: flag(&lookup, "FEATURE_ROLE_SWITCHING", defaults.role_switching),
            offline_mode: flag(&lookup, "FEATURE_OFFLINE_MODE", defaults.offline_mode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(FeatureFlags::from_lookup(|_| None), FeatureFlags::default());
    }

    #[test]
    fn test_overrides() {
        let flags = FeatureFlags::from_lookup(|key| match key {
            "FEATURE_ROLE_SWITCHING" => Some("false".into()),
            "FEATURE_OFFLINE_MODE" => Some("1".into()),
            _ => None,
        });
        assert!(flags.notifications);
        assert!(!flags.role_switching);
        assert!(flags.offline_mode);
    }
}
