use eduflow_core::CatalogError;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of the durable key/value store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access session file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("session file {path} is not valid JSON: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode '{key}': {source}")]
    Encode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("stored '{key}' could not be decoded: {source}")]
    Decode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("invalid request: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("no user is signed in")]
    NotAuthenticated,

    #[error("role switching is disabled")]
    RoleSwitchingDisabled,

    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),
}
