use eduflow_core::{AccessError, Color, Permission, PermissionResolver, Role, RoleGuard};

/// Role queries scoped to one session.
///
/// Holds the session's role, if any, next to a resolver. Every query
/// denies when there is no role.
#[derive(Debug, Clone, Copy)]
pub struct RoleAccess<'a> {
    role: Option<Role>,
    resolver: &'a PermissionResolver,
}

impl<'a> RoleAccess<'a> {
    pub fn new(role: Option<Role>, resolver: &'a PermissionResolver) -> Self {
        Self { role, resolver }
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.role
            .is_some_and(|role| self.resolver.has_permission(role, permission))
    }

    pub fn can_access_route<'r, I>(&self, allowed_roles: I) -> bool
    where
        I: IntoIterator<Item = &'r Role>,
    {
        self.role
            .is_some_and(|role| self.resolver.can_access_route(role, allowed_roles))
    }

    pub fn display_name(&self) -> Option<&'static str> {
        self.role.map(|role| self.resolver.display_name(role))
    }

    pub fn display_color(&self) -> Option<Color> {
        self.role.map(|role| self.resolver.display_color(role))
    }

    pub fn check(&self, guard: &RoleGuard) -> Result<(), AccessError> {
        guard.check(self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_out_denies_everything() {
        let resolver = PermissionResolver::default();
        let access = RoleAccess::new(None, &resolver);

        for permission in Permission::ALL {
            assert!(!access.has_permission(permission));
        }
        assert!(!access.can_access_route(&Role::ALL));
        assert_eq!(access.display_name(), None);
        assert_eq!(access.display_color(), None);
        assert_eq!(
            access.check(&RoleGuard::new(Role::ALL)),
            Err(AccessError::Unauthenticated)
        );
    }

    #[test]
    fn test_student_view() {
        let resolver = PermissionResolver::default();
        let access = RoleAccess::new(Some(Role::Student), &resolver);

        assert!(access.has_permission(Permission::ViewMarks));
        assert!(!access.has_permission(Permission::ManageUsers));
        assert!(access.can_access_route(&[Role::HeadOfDepartment, Role::Student]));
        assert!(!access.can_access_route(&[Role::OrgAdmin]));
        assert_eq!(access.display_name(), Some("Student"));
        assert_eq!(access.display_color().map(|c| c.to_string()).as_deref(), Some("#F97316"));
        assert!(access.check(&RoleGuard::new([Role::Student])).is_ok());
    }
}
