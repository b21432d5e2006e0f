use eduflow::AppState;
use eduflow_config::AppConfig;
use eduflow_core::{Role, RolePermissionTable, RouteCatalog, RouteDescriptor};
use std::collections::HashMap;
use std::path::Path;

/// App state with default tables and no environment overrides.
#[allow(dead_code)]
pub fn default_state() -> AppState {
    state_with(&[])
}

/// App state configured from the given variables only.
#[allow(dead_code)]
pub fn state_with(vars: &[(&str, &str)]) -> AppState {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    AppState::new(
        AppConfig::from_lookup(move |key: &str| vars.get(key).cloned()),
        RolePermissionTable::school_defaults(),
        RouteCatalog::school_defaults(),
    )
}

/// App state whose session file lives under `dir`.
#[allow(dead_code)]
pub fn state_in(dir: &Path) -> AppState {
    let dir = dir.to_string_lossy().into_owned();
    state_with(&[("EDUFLOW_SESSION_DIR", dir.as_str())])
}

/// Five routes where the third is OrgAdmin-only.
#[allow(dead_code)]
pub fn five_route_catalog() -> RouteCatalog {
    use Role::*;

    RouteCatalog::new(vec![
        RouteDescriptor::new("Home", "/home", "home", Role::ALL),
        RouteDescriptor::new("Profile", "/profile", "user", Role::ALL),
        RouteDescriptor::new("Users", "/users", "users", [OrgAdmin]),
        RouteDescriptor::new("Attendance", "/attendance", "calendar", [HeadOfDepartment, Student]),
        RouteDescriptor::new("Marks", "/marks", "award", [Student]),
    ])
    .expect("valid catalog")
}
