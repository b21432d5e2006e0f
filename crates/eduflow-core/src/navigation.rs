//! Primary-navigation entries for a role.
//!
//! The navigation chrome calls [`NavigationFilter::entries_for`] on every
//! render. It walks the catalog once and keeps no cache.

use crate::roles::Role;
use crate::routes::{RouteCatalog, RouteDescriptor};
use serde::Serialize;
use std::sync::Arc;

/// Tab-group paths that are routable but never listed in the tab bar.
pub const HIDDEN_PATHS: [&str; 2] = ["/(tabs)/login", "/(tabs)/role-switch"];

/// One item of the tab bar / main menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub title: String,
    pub path: String,
    pub icon: String,
    /// Screen name the router resolves the path to.
    pub screen: String,
}

impl From<&RouteDescriptor> for NavEntry {
    fn from(route: &RouteDescriptor) -> Self {
        Self {
            title: route.name.clone(),
            path: route.path.clone(),
            icon: route.icon.clone(),
            screen: screen_name(&route.path).to_string(),
        }
    }
}

/// Last path segment, or `index` when it is empty or a route group.
///
/// `/(tabs)/food-court` resolves to `food-court`; `/(tabs)/`, `/(tabs)` and
/// `/(tabs)/marks/` all resolve to `index`.
pub fn screen_name(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some(segment) if !segment.is_empty() && !is_route_group(segment) => segment,
        _ => "index",
    }
}

fn is_route_group(segment: &str) -> bool {
    segment.starts_with('(') && segment.ends_with(')')
}

#[derive(Debug, Clone, Default)]
pub struct NavigationFilter {
    catalog: Arc<RouteCatalog>,
}

impl NavigationFilter {
    pub fn new(catalog: Arc<RouteCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &RouteCatalog {
        &self.catalog
    }

    /// Primary-navigation entries for `role`, in catalog order.
    pub fn entries_for(&self, role: Role) -> Vec<NavEntry> {
        self.catalog
            .nav_routes_for(role)
            .into_iter()
            .filter(|route| !HIDDEN_PATHS.contains(&route.path.as_str()))
            .map(NavEntry::from)
            .collect()
    }
}
