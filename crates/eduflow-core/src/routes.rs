//! Route catalog: every addressable screen and the roles allowed to see it.
//!
//! The catalog is an ordered list; order is the menu order. It is validated
//! once on construction and never changes afterwards.
//!
//! # Example
//!
//! ```
//! use eduflow_core::roles::Role;
//! use eduflow_core::routes::RouteCatalog;
//!
//! let catalog = RouteCatalog::school_defaults();
//!
//! let names: Vec<_> = catalog
//!     .nav_routes_for(Role::Student)
//!     .iter()
//!     .map(|route| route.name.as_str())
//!     .collect();
//! assert_eq!(names[0], "Dashboard");
//! assert!(names.contains(&"Wallet"));
//! assert!(!names.contains(&"Users"));
//! ```

use crate::errors::CatalogError;
use crate::guard::RoleGuard;
use crate::roles::Role;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

/// A named screen destination with a role-based visibility rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDescriptor {
    pub name: String,
    pub path: String,
    pub allowed_roles: BTreeSet<Role>,
    pub icon: String,
    pub show_in_primary_nav: bool,
}

impl RouteDescriptor {
    /// A route shown in primary navigation.
    pub fn new<I>(name: impl Into<String>, path: impl Into<String>, icon: impl Into<String>, roles: I) -> Self
    where
        I: IntoIterator<Item = Role>,
    {
        Self {
            name: name.into(),
            path: path.into(),
            allowed_roles: roles.into_iter().collect(),
            icon: icon.into(),
            show_in_primary_nav: true,
        }
    }

    /// Keep the route reachable but out of the main menu.
    #[must_use]
    pub fn hidden_from_nav(mut self) -> Self {
        self.show_in_primary_nav = false;
        self
    }

    pub fn allows(&self, role: Role) -> bool {
        self.allowed_roles.contains(&role)
    }
}

/// Wire shape of a route entry; role keys are checked on conversion.
#[derive(Debug, Deserialize)]
struct RawRoute {
    name: String,
    path: String,
    allowed_roles: Vec<String>,
    icon: String,
    #[serde(default = "default_show_in_primary_nav")]
    show_in_primary_nav: bool,
}

fn default_show_in_primary_nav() -> bool {
    true
}

impl TryFrom<RawRoute> for RouteDescriptor {
    type Error = CatalogError;

    fn try_from(raw: RawRoute) -> Result<Self, Self::Error> {
        let allowed_roles = raw
            .allowed_roles
            .iter()
            .map(|key| key.parse::<Role>())
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(Self {
            name: raw.name,
            path: raw.path,
            allowed_roles,
            icon: raw.icon,
            show_in_primary_nav: raw.show_in_primary_nav,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteCatalog {
    routes: Vec<RouteDescriptor>,
}

impl RouteCatalog {
    /// Validate and wrap `routes`, keeping their order.
    ///
    /// Every route needs at least one allowed role, and paths must be unique.
    pub fn new(routes: Vec<RouteDescriptor>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(routes.len());
        for route in &routes {
            if route.allowed_roles.is_empty() {
                return Err(CatalogError::EmptyAllowedRoles {
                    path: route.path.clone(),
                });
            }
            if !seen.insert(route.path.as_str()) {
                return Err(CatalogError::DuplicatePath(route.path.clone()));
            }
        }

        debug!(routes = routes.len(), "Route catalog loaded");
        Ok(Self { routes })
    }

    /// Load a catalog from a JSON array of route entries.
    ///
    /// `show_in_primary_nav` defaults to `true` when omitted.
    pub fn from_json(document: &str) -> Result<Self, CatalogError> {
        let raw: Vec<RawRoute> = serde_json::from_str(document)
            .map_err(|e| CatalogError::InvalidDocument(e.to_string()))?;
        let routes = raw
            .into_iter()
            .map(RouteDescriptor::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(routes)
    }

    /// The catalog shipped with the school application.
    ///
    /// Departments, Finance, Analytics, Department, Exams and Performance have
    /// no screen attached yet; they are listed like any other destination.
    pub fn school_defaults() -> Self {
        use Role::*;

        let routes = vec![
            RouteDescriptor::new("Dashboard", "/(tabs)/", "home", Role::ALL),
            RouteDescriptor::new("Profile", "/(tabs)/profile", "user", Role::ALL),
            RouteDescriptor::new("Notifications", "/(tabs)/notifications", "bell", Role::ALL),
            RouteDescriptor::new("Settings", "/(tabs)/settings", "settings", Role::ALL),
            // Org admin
            RouteDescriptor::new("Users", "/(tabs)/users", "users", [OrgAdmin]),
            RouteDescriptor::new("Departments", "/(tabs)/departments", "building", [OrgAdmin]),
            RouteDescriptor::new("Finance", "/(tabs)/finance", "dollar-sign", [OrgAdmin]),
            RouteDescriptor::new("Analytics", "/(tabs)/analytics", "bar-chart", [OrgAdmin]),
            // Head of department
            RouteDescriptor::new("Department", "/(tabs)/department", "building", [HeadOfDepartment]),
            RouteDescriptor::new("Exams", "/(tabs)/exams", "clipboard-list", [HeadOfDepartment]),
            RouteDescriptor::new(
                "Attendance",
                "/(tabs)/attendance",
                "calendar-check",
                [HeadOfDepartment, Student],
            ),
            RouteDescriptor::new(
                "Performance",
                "/(tabs)/performance",
                "trending-up",
                [HeadOfDepartment],
            ),
            // Student
            RouteDescriptor::new("Marks", "/(tabs)/marks", "award", [Student]),
            RouteDescriptor::new("Food Court", "/(tabs)/food-court", "utensils", [Student]),
            RouteDescriptor::new("Wallet", "/(tabs)/wallet", "wallet", [Student]),
        ];

        Self { routes }
    }

    /// Every route, in catalog order.
    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Routes visible to `role`, in catalog order.
    pub fn routes_for(&self, role: Role) -> Vec<&RouteDescriptor> {
        self.routes.iter().filter(|route| route.allows(role)).collect()
    }

    /// Routes visible to `role` that belong in primary navigation, in catalog order.
    pub fn nav_routes_for(&self, role: Role) -> Vec<&RouteDescriptor> {
        self.routes
            .iter()
            .filter(|route| route.allows(role) && route.show_in_primary_nav)
            .collect()
    }

    pub fn find(&self, path: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|route| route.path == path)
    }

    /// Guard for the screen at `path`, built from the route's allowed roles.
    pub fn guard_for(&self, path: &str) -> Option<RoleGuard> {
        self.find(path)
            .map(|route| RoleGuard::new(route.allowed_roles.iter().copied()))
    }
}

impl Default for RouteCatalog {
    fn default() -> Self {
        Self::school_defaults()
    }
}
