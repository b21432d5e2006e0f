//! # EduFlow
//!
//! Role-based access for the EduFlow school application: which role may do
//! what, which screens it may open and which menu entries it sees.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── eduflow-core/           # roles, permissions, route catalog, navigation, guards
//! ├── eduflow-config/         # environment-driven configuration
//! ├── eduflow-models/         # DTOs and derived metrics
//! ├── eduflow-session/        # session lifecycle and durable storage
//! └── eduflow-observability/  # console logging
//! src/
//! ├── state.rs                # AppState composition root
//! ├── cli/                    # argument parsing and command execution
//! └── bin/cli.rs              # eduflow-cli binary
//! ```
//!
//! ## Roles
//!
//! | Role               | Key         | Label              | Color     |
//! |--------------------|-------------|--------------------|-----------|
//! | `OrgAdmin`         | `org_admin` | Administrator      | `#3B82F6` |
//! | `HeadOfDepartment` | `hod`       | Head of Department | `#10B981` |
//! | `Student`          | `student`   | Student            | `#F97316` |
//!
//! Role and permission tables are immutable and built once in [`AppState`];
//! tests substitute their own.
//!
//! ## Example
//!
//! ```
//! use eduflow::AppState;
//! use eduflow_config::AppConfig;
//! use eduflow_core::{Permission, Role, RolePermissionTable, RouteCatalog};
//!
//! let state = AppState::new(
//!     AppConfig::from_lookup(|_| None),
//!     RolePermissionTable::school_defaults(),
//!     RouteCatalog::school_defaults(),
//! );
//!
//! assert!(!state.resolver.has_permission(Role::Student, Permission::ManageUsers));
//! let menu: Vec<_> = state
//!     .navigation
//!     .entries_for(Role::Student)
//!     .into_iter()
//!     .map(|entry| entry.title)
//!     .collect();
//! assert!(menu.contains(&"Marks".to_string()));
//! ```

pub mod cli;
pub mod state;

pub use state::AppState;
