//! # EduFlow Core
//!
//! Role-based access decisions for the EduFlow school application.
//!
//! Every screen asks this crate two questions: "may the current role open
//! me?" and "which menu entries does the current role see?". Both are
//! answered from two immutable tables built once in a composition root:
//!
//! - [`roles`]: the closed [`Role`] and [`Permission`] sets and the
//!   [`RolePermissionTable`]
//! - [`resolver`]: permission and membership queries, role labels and colors
//! - [`routes`]: the ordered [`RouteCatalog`] of screen destinations
//! - [`navigation`]: primary-navigation entries for a role
//! - [`guard`]: screen-level [`RoleGuard`]s
//! - [`errors`]: parse and access errors
//!
//! # Example
//!
//! ```
//! use eduflow_core::{NavigationFilter, Permission, PermissionResolver, Role};
//!
//! let resolver = PermissionResolver::default();
//! let navigation = NavigationFilter::default();
//!
//! if resolver.has_permission(Role::HeadOfDepartment, Permission::ManageAttendance) {
//!     let menu = navigation.entries_for(Role::HeadOfDepartment);
//!     assert_eq!(menu[0].title, "Dashboard");
//! }
//! ```

pub mod color;
pub mod errors;
pub mod guard;
pub mod navigation;
pub mod resolver;
pub mod roles;
pub mod routes;

// Re-export commonly used types at crate root
pub use color::{Color, RolePalette};
pub use errors::{AccessError, CatalogError};
pub use guard::RoleGuard;
pub use navigation::{NavEntry, NavigationFilter};
pub use resolver::PermissionResolver;
pub use roles::{Permission, Role, RolePermissionTable};
pub use routes::{RouteCatalog, RouteDescriptor};
