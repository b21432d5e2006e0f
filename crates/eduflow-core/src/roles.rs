//! Role and permission catalog.
//!
//! Roles and permissions are closed enumerations. Their string keys
//! (`org_admin`, `view_users`, ...) only matter at the storage/CLI/JSON
//! boundary, where parsing an unknown key is reported as a
//! [`CatalogError`] instead of being mapped to a default.
//!
//! # Example
//!
//! ```
//! use eduflow_core::roles::{Permission, Role, RolePermissionTable};
//!
//! let table = RolePermissionTable::default();
//! assert!(table.contains(Role::OrgAdmin, Permission::ManageUsers));
//! assert!(!table.contains(Role::Student, Permission::ManageUsers));
//!
//! let role: Role = "hod".parse().unwrap();
//! assert_eq!(role, Role::HeadOfDepartment);
//! ```

use crate::errors::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Roles
// =============================================================================

/// The kind of user a session represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
    /// Organisation administrator
    OrgAdmin,
    /// Head of a department
    HeadOfDepartment,
    /// Enrolled student
    Student,
}

impl Role {
    /// Number of roles in the closed set.
    pub const COUNT: usize = 3;

    /// Every role, in declaration order.
    pub const ALL: [Role; Role::COUNT] = [Role::OrgAdmin, Role::HeadOfDepartment, Role::Student];

    /// Storage key for the role.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::OrgAdmin => "org_admin",
            Role::HeadOfDepartment => "hod",
            Role::Student => "student",
        }
    }

    pub(crate) const fn index(&self) -> usize {
        match self {
            Role::OrgAdmin => 0,
            Role::HeadOfDepartment => 1,
            Role::Student => 2,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownRole(s.to_string()))
    }
}

impl TryFrom<String> for Role {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

// =============================================================================
// Permissions
// =============================================================================

/// A named capability a role may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Permission {
    ViewUsers,
    ManageUsers,
    ViewDepartments,
    ManageDepartments,
    ViewFinance,
    ManageFinance,
    ViewAnalytics,
    ViewAttendance,
    ManageAttendance,
    ViewExams,
    ManageExams,
    ViewMarks,
    ManageMarks,
    ViewProfile,
    EditProfile,
}

impl Permission {
    /// Every permission, in declaration order.
    pub const ALL: [Permission; 15] = [
        Permission::ViewUsers,
        Permission::ManageUsers,
        Permission::ViewDepartments,
        Permission::ManageDepartments,
        Permission::ViewFinance,
        Permission::ManageFinance,
        Permission::ViewAnalytics,
        Permission::ViewAttendance,
        Permission::ManageAttendance,
        Permission::ViewExams,
        Permission::ManageExams,
        Permission::ViewMarks,
        Permission::ManageMarks,
        Permission::ViewProfile,
        Permission::EditProfile,
    ];

    /// Storage key for the permission.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Permission::ViewUsers => "view_users",
            Permission::ManageUsers => "manage_users",
            Permission::ViewDepartments => "view_departments",
            Permission::ManageDepartments => "manage_departments",
            Permission::ViewFinance => "view_finance",
            Permission::ManageFinance => "manage_finance",
            Permission::ViewAnalytics => "view_analytics",
            Permission::ViewAttendance => "view_attendance",
            Permission::ManageAttendance => "manage_attendance",
            Permission::ViewExams => "view_exams",
            Permission::ManageExams => "manage_exams",
            Permission::ViewMarks => "view_marks",
            Permission::ManageMarks => "manage_marks",
            Permission::ViewProfile => "view_profile",
            Permission::EditProfile => "edit_profile",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .into_iter()
            .find(|permission| permission.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownPermission(s.to_string()))
    }
}

impl TryFrom<String> for Permission {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Permission> for String {
    fn from(permission: Permission) -> Self {
        permission.as_str().to_string()
    }
}

// =============================================================================
// Role -> permission table
// =============================================================================

/// Total mapping from every [`Role`] to its permission set.
///
/// The table is backed by one slot per role, so a role can never be missing.
/// Once built it is only read; share it behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolePermissionTable {
    grants: [BTreeSet<Permission>; Role::COUNT],
}

impl RolePermissionTable {
    /// A table where every role holds no permission.
    pub fn empty() -> Self {
        Self {
            grants: Default::default(),
        }
    }

    /// Build a table by asking `grants` for each role's permissions.
    pub fn from_fn<F, I>(mut grants: F) -> Self
    where
        F: FnMut(Role) -> I,
        I: IntoIterator<Item = Permission>,
    {
        let mut table = Self::empty();
        for role in Role::ALL {
            table.grants[role.index()].extend(grants(role));
        }
        table
    }

    /// Add `permissions` to `role`'s set. Duplicates collapse.
    #[must_use]
    pub fn grant<I>(mut self, role: Role, permissions: I) -> Self
    where
        I: IntoIterator<Item = Permission>,
    {
        self.grants[role.index()].extend(permissions);
        self
    }

    /// The permissions held by `role`, in declaration order.
    pub fn permissions(&self, role: Role) -> &BTreeSet<Permission> {
        &self.grants[role.index()]
    }

    /// Whether `permission` belongs to `role`'s set.
    pub fn contains(&self, role: Role, permission: Permission) -> bool {
        self.grants[role.index()].contains(&permission)
    }

    /// The table shipped with the school application.
    pub fn school_defaults() -> Self {
        use Permission::*;

        Self::empty()
            .grant(
                Role::OrgAdmin,
                [
                    ViewUsers,
                    ManageUsers,
                    ViewDepartments,
                    ManageDepartments,
                    ViewFinance,
                    ManageFinance,
                    ViewAnalytics,
                    ViewAttendance,
                    ViewExams,
                    ViewMarks,
                    ViewProfile,
                    EditProfile,
                ],
            )
            .grant(
                Role::HeadOfDepartment,
                [
                    ViewUsers,
                    ViewDepartments,
                    ViewAnalytics,
                    ViewAttendance,
                    ManageAttendance,
                    ViewExams,
                    ManageExams,
                    ViewMarks,
                    ManageMarks,
                    ViewProfile,
                    EditProfile,
                ],
            )
            .grant(
                Role::Student,
                [ViewAttendance, ViewMarks, ViewProfile, EditProfile],
            )
    }
}

impl Default for RolePermissionTable {
    fn default() -> Self {
        Self::school_defaults()
    }
}
