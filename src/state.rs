use std::sync::Arc;

use eduflow_config::AppConfig;
use eduflow_core::{NavigationFilter, PermissionResolver, RolePermissionTable, RouteCatalog};
use eduflow_session::{FileStore, SessionManager};

/// Composition root: configuration plus the two access tables, built once
/// and shared read-only.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: AppConfig,
    pub resolver: PermissionResolver,
    pub catalog: Arc<RouteCatalog>,
    pub navigation: NavigationFilter,
}

impl AppState {
    pub fn new(config: AppConfig, table: RolePermissionTable, catalog: RouteCatalog) -> Self {
        let catalog = Arc::new(catalog);

        Self {
            config,
            resolver: PermissionResolver::new(Arc::new(table)),
            navigation: NavigationFilter::new(Arc::clone(&catalog)),
            catalog,
        }
    }

    /// Environment configuration with the school tables.
    pub fn from_env() -> Self {
        Self::new(
            AppConfig::from_env(),
            RolePermissionTable::school_defaults(),
            RouteCatalog::school_defaults(),
        )
    }

    /// A signed-out session backed by the configured session file.
    pub fn session(&self) -> SessionManager<FileStore> {
        SessionManager::new(
            FileStore::new(self.config.storage.session_path()),
            self.config.features.clone(),
        )
    }
}
