mod common;

use eduflow_core::{AccessError, CatalogError, NavigationFilter, Role, RouteCatalog};
use proptest::prelude::*;
use std::sync::Arc;

fn titles(filter: &NavigationFilter, role: Role) -> Vec<String> {
    filter.entries_for(role).into_iter().map(|e| e.title).collect()
}

#[test]
fn test_five_route_catalog_student_menu() {
    let filter = NavigationFilter::new(Arc::new(common::five_route_catalog()));

    assert_eq!(
        titles(&filter, Role::Student),
        ["Home", "Profile", "Attendance", "Marks"]
    );
    assert_eq!(titles(&filter, Role::OrgAdmin), ["Home", "Profile", "Users"]);
}

#[test]
fn test_school_menus() {
    let state = common::default_state();

    assert_eq!(
        titles(&state.navigation, Role::OrgAdmin),
        [
            "Dashboard",
            "Profile",
            "Notifications",
            "Settings",
            "Users",
            "Departments",
            "Finance",
            "Analytics",
        ]
    );
    assert_eq!(
        titles(&state.navigation, Role::HeadOfDepartment),
        [
            "Dashboard",
            "Profile",
            "Notifications",
            "Settings",
            "Department",
            "Exams",
            "Attendance",
            "Performance",
        ]
    );
    assert_eq!(
        titles(&state.navigation, Role::Student),
        [
            "Dashboard",
            "Profile",
            "Notifications",
            "Settings",
            "Attendance",
            "Marks",
            "Food Court",
            "Wallet",
        ]
    );
}

#[test]
fn test_entry_screens() {
    let state = common::default_state();
    let entries = state.navigation.entries_for(Role::Student);

    assert_eq!(entries[0].screen, "index");
    let food = entries.iter().find(|e| e.title == "Food Court").unwrap();
    assert_eq!(food.screen, "food-court");
    assert_eq!(food.icon, "utensils");
}

#[test]
fn test_hidden_routes_stay_out_of_navigation() {
    let catalog = RouteCatalog::from_json(
        r#"[
            {"name": "Dashboard", "path": "/(tabs)/", "allowed_roles": ["student"], "icon": "home"},
            {"name": "Switch Role", "path": "/(tabs)/role-switch", "allowed_roles": ["student"], "icon": "repeat"},
            {"name": "Reports", "path": "/(tabs)/reports", "allowed_roles": ["student"], "icon": "file", "show_in_primary_nav": false}
        ]"#,
    )
    .unwrap();
    let filter = NavigationFilter::new(Arc::new(catalog));

    assert_eq!(titles(&filter, Role::Student), ["Dashboard"]);
    assert_eq!(filter.catalog().routes_for(Role::Student).len(), 3);
}

#[test]
fn test_catalog_json_errors() {
    assert_eq!(
        RouteCatalog::from_json(
            r#"[{"name": "X", "path": "/x", "allowed_roles": ["principal"], "icon": "x"}]"#
        ),
        Err(CatalogError::UnknownRole("principal".to_string()))
    );
    assert!(matches!(
        RouteCatalog::from_json("not json"),
        Err(CatalogError::InvalidDocument(_))
    ));
}

#[test]
fn test_guard_for_screens() {
    let state = common::default_state();

    let marks = state.catalog.guard_for("/(tabs)/marks").unwrap();
    assert!(marks.check(Some(Role::Student)).is_ok());
    assert!(matches!(
        marks.check(Some(Role::OrgAdmin)),
        Err(AccessError::Forbidden { role: Role::OrgAdmin, .. })
    ));
    assert_eq!(marks.check(None), Err(AccessError::Unauthenticated));

    assert!(state.catalog.guard_for("/(tabs)/unknown").is_none());
}

#[test]
fn test_forbidden_message() {
    let guard = common::default_state()
        .catalog
        .guard_for("/(tabs)/users")
        .unwrap();
    let err = guard.check(Some(Role::Student)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "You don't have permission to access this section."
    );
}

fn role_strategy() -> impl Strategy<Value = Role> {
    prop::sample::select(Role::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_nav_routes_preserve_catalog_order(role in role_strategy()) {
        let catalog = RouteCatalog::school_defaults();
        let positions: Vec<usize> = catalog
            .nav_routes_for(role)
            .into_iter()
            .map(|route| catalog.routes().iter().position(|r| r.path == route.path).unwrap())
            .collect();

        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        for route in catalog.nav_routes_for(role) {
            prop_assert!(route.allowed_roles.contains(&role));
            prop_assert!(route.show_in_primary_nav);
        }
    }
}
