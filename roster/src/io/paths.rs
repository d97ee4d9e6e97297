//! Canonical paths within `.roster/` for a project root.

use std::path::PathBuf;

/// Filesystem layout of the roster data directory.
#[derive(Debug, Clone)]
pub struct RosterPaths {
    pub root: PathBuf,
    pub roster_dir: PathBuf,
    pub config_path: PathBuf,
}

impl RosterPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let roster_dir = root.join(".roster");
        Self {
            root,
            config_path: roster_dir.join("config.toml"),
            roster_dir,
        }
    }

    /// Snapshot location for the configured file name.
    pub fn snapshot_path(&self, file_name: &str) -> PathBuf {
        self.roster_dir.join(file_name)
    }
}
