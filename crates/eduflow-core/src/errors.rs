//! Error types for catalog parsing and access decisions.
//!
//! Closed enums make most failures unrepresentable. What remains are the
//! string boundaries (storage, CLI arguments, JSON route catalogs) and the
//! allow/deny outcome of a guard check.

use crate::roles::Role;
use thiserror::Error;

/// Failures raised while parsing role/permission keys or building a route catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A role key outside the closed role set.
    #[error("unknown role: '{0}'")]
    UnknownRole(String),

    /// A permission key outside the closed permission set.
    #[error("unknown permission: '{0}'")]
    UnknownPermission(String),

    /// A route declared without any role allowed to see it.
    #[error("route '{path}' has no allowed roles")]
    EmptyAllowedRoles { path: String },

    /// Two routes share the same navigation path.
    #[error("duplicate route path: '{0}'")]
    DuplicatePath(String),

    /// The route catalog document could not be decoded.
    #[error("invalid route catalog: {0}")]
    InvalidDocument(String),
}

/// Outcome of a denied access check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// No role is attached to the current session.
    #[error("You need to sign in to access this section.")]
    Unauthenticated,

    /// The role is not in the screen's allowed set.
    #[error("You don't have permission to access this section.")]
    Forbidden { role: Role, allowed: Vec<Role> },

    /// The role lacks a permission required by the action.
    #[error("You don't have permission to access this section.")]
    MissingPermission {
        role: Role,
        permission: crate::roles::Permission,
    },
}

impl AccessError {
    /// Short machine-readable reason, used in log fields.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::Forbidden { .. } => "forbidden",
            Self::MissingPermission { .. } => "missing_permission",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::Permission;

    #[test]
    fn test_catalog_error_messages() {
        assert_eq!(
            CatalogError::UnknownRole("principal".into()).to_string(),
            "unknown role: 'principal'"
        );
        assert_eq!(
            CatalogError::EmptyAllowedRoles {
                path: "/(tabs)/x".into()
            }
            .to_string(),
            "route '/(tabs)/x' has no allowed roles"
        );
    }

    #[test]
    fn test_access_error_reason() {
        assert_eq!(AccessError::Unauthenticated.reason(), "unauthenticated");
        let forbidden = AccessError::Forbidden {
            role: Role::Student,
            allowed: vec![Role::OrgAdmin],
        };
        assert_eq!(forbidden.reason(), "forbidden");
        assert_eq!(
            forbidden.to_string(),
            "You don't have permission to access this section."
        );
        let missing = AccessError::MissingPermission {
            role: Role::Student,
            permission: Permission::ManageUsers,
        };
        assert_eq!(missing.reason(), "missing_permission");
    }
}
