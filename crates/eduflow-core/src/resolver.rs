//! Permission and role-membership queries.
//!
//! [`PermissionResolver`] answers every allow/deny question a screen asks.
//! It holds a shared, read-only [`RolePermissionTable`]; cloning the resolver
//! only clones the `Arc`.
//!
//! # Example
//!
//! ```
//! use eduflow_core::resolver::PermissionResolver;
//! use eduflow_core::roles::{Permission, Role};
//!
//! let resolver = PermissionResolver::default();
//!
//! assert!(resolver.has_permission(Role::OrgAdmin, Permission::ManageUsers));
//! assert!(resolver.can_access_route(Role::Student, &[Role::HeadOfDepartment, Role::Student]));
//! assert_eq!(resolver.display_name(Role::HeadOfDepartment), "Head of Department");
//! ```

use crate::color::Color;
use crate::errors::AccessError;
use crate::roles::{Permission, Role, RolePermissionTable};
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, Clone, Default)]
pub struct PermissionResolver {
    table: Arc<RolePermissionTable>,
}

impl PermissionResolver {
    pub fn new(table: Arc<RolePermissionTable>) -> Self {
        Self { table }
    }

    /// The table this resolver reads.
    pub fn table(&self) -> &RolePermissionTable {
        &self.table
    }

    /// Whether `permission` is granted to `role`.
    pub fn has_permission(&self, role: Role, permission: Permission) -> bool {
        self.table.contains(role, permission)
    }

    /// Whether `role` is one of `allowed_roles`. An empty set always denies.
    pub fn can_access_route<'a, I>(&self, role: Role, allowed_roles: I) -> bool
    where
        I: IntoIterator<Item = &'a Role>,
    {
        allowed_roles.into_iter().any(|allowed| *allowed == role)
    }

    /// Like [`has_permission`](Self::has_permission), but returns the denial as an error.
    pub fn require_permission(&self, role: Role, permission: Permission) -> Result<(), AccessError> {
        if self.has_permission(role, permission) {
            return Ok(());
        }

        warn!(
            role = %role,
            permission = %permission,
            "Permission denied"
        );
        Err(AccessError::MissingPermission { role, permission })
    }

    /// Human-readable label for `role`.
    pub fn display_name(&self, role: Role) -> &'static str {
        match role {
            Role::OrgAdmin => "Administrator",
            Role::HeadOfDepartment => "Head of Department",
            Role::Student => "Student",
        }
    }

    /// Accent color for `role`.
    pub fn display_color(&self, role: Role) -> Color {
        role.palette().shade_500
    }
}
