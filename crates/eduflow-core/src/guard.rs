//! Screen-level role guards.
//!
//! A [`RoleGuard`] is checked before a screen renders. It receives the
//! session role as an `Option` because a signed-out session has none, and a
//! missing role always denies.
//!
//! # Example
//!
//! ```
//! use eduflow_core::guard::RoleGuard;
//! use eduflow_core::roles::Role;
//!
//! let marks = RoleGuard::new([Role::Student]);
//!
//! assert!(marks.check(Some(Role::Student)).is_ok());
//! assert!(marks.check(Some(Role::OrgAdmin)).is_err());
//! assert!(marks.check(None).is_err());
//! ```

use crate::errors::AccessError;
use crate::roles::Role;
use std::collections::BTreeSet;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleGuard {
    allowed: BTreeSet<Role>,
}

impl RoleGuard {
    pub fn new<I>(allowed: I) -> Self
    where
        I: IntoIterator<Item = Role>,
    {
        Self {
            allowed: allowed.into_iter().collect(),
        }
    }

    pub fn allowed(&self) -> &BTreeSet<Role> {
        &self.allowed
    }

    /// Whether `role` may pass without producing an error.
    pub fn allows(&self, role: Option<Role>) -> bool {
        role.is_some_and(|role| self.allowed.contains(&role))
    }

    /// Check the session role against the allowed set.
    pub fn check(&self, role: Option<Role>) -> Result<(), AccessError> {
        let denial = match role {
            None => AccessError::Unauthenticated,
            Some(role) if self.allowed.contains(&role) => return Ok(()),
            Some(role) => AccessError::Forbidden {
                role,
                allowed: self.allowed.iter().copied().collect(),
            },
        };

        warn!(
            reason = denial.reason(),
            role = ?role,
            allowed = ?self.allowed,
            "Access denied"
        );
        Err(denial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_exact_match() {
        let guard = RoleGuard::new([Role::OrgAdmin]);
        assert!(guard.check(Some(Role::OrgAdmin)).is_ok());
    }

    #[test]
    fn test_check_multiple_roles() {
        let guard = RoleGuard::new([Role::HeadOfDepartment, Role::Student]);
        assert!(guard.check(Some(Role::HeadOfDepartment)).is_ok());
        assert!(guard.check(Some(Role::Student)).is_ok());
        assert_eq!(
            guard.check(Some(Role::OrgAdmin)),
            Err(AccessError::Forbidden {
                role: Role::OrgAdmin,
                allowed: vec![Role::HeadOfDepartment, Role::Student],
            })
        );
    }

    #[test]
    fn test_check_without_role() {
        let guard = RoleGuard::new(Role::ALL);
        assert_eq!(guard.check(None), Err(AccessError::Unauthenticated));
        assert!(!guard.allows(None));
    }

    #[test]
    fn test_empty_guard_denies_everyone() {
        let guard = RoleGuard::new([]);
        for role in Role::ALL {
            assert!(guard.check(Some(role)).is_err());
            assert!(!guard.allows(Some(role)));
        }
    }
}
