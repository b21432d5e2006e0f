//! # EduFlow Session
//!
//! The signed-in user's session and where it is kept between runs.
//!
//! - [`store`]: the [`KeyValueStore`] seam with in-memory and file-backed stores
//! - [`storage`]: typed access to the persisted token, user and role
//! - [`manager`]: [`SessionManager`], which restores, logs in, logs out,
//!   switches roles and updates the profile
//! - [`access`]: [`RoleAccess`], the permission view of the current session
//!
//! # Example
//!
//! ```
//! use eduflow_config::FeatureFlags;
//! use eduflow_core::{Permission, PermissionResolver, Role};
//! use eduflow_models::LoginRequest;
//! use eduflow_session::{MemoryStore, SessionManager};
//!
//! let mut session = SessionManager::new(MemoryStore::new(), FeatureFlags::default());
//! session.login(LoginRequest::new("hod@school.com", "secret")).unwrap();
//!
//! let resolver = PermissionResolver::default();
//! let access = session.access(&resolver);
//! assert_eq!(access.role(), Some(Role::HeadOfDepartment));
//! assert!(access.has_permission(Permission::ManageMarks));
//! ```

pub mod access;
pub mod errors;
pub mod manager;
pub mod storage;
pub mod store;

pub use access::RoleAccess;
pub use errors::{SessionError, StorageError};
pub use manager::{AuthState, Authenticator, MockAuthenticator, SessionManager};
pub use storage::{ROLE_KEY, SessionStorage, TOKEN_KEY, USER_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore};
