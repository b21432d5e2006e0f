use std::path::PathBuf;

/// Location of the durable session file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageConfig {
    pub session_dir: PathBuf,
    pub file_name: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            session_dir: PathBuf::from(".eduflow"),
            file_name: "session.json".to_string(),
        }
    }
}

impl StorageConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            session_dir: lookup("EDUFLOW_SESSION_DIR")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.session_dir),
            file_name: lookup("EDUFLOW_SESSION_FILE")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.file_name),
        }
    }

    pub fn session_path(&self) -> PathBuf {
        self.session_dir.join(&self.file_name)
    }
}
