//! Snapshot backend abstraction and the file-backed implementation.
//!
//! The [`SnapshotBackend`] trait decouples the store from where the snapshot
//! lives. The roster owns exclusive access to its one snapshot location and
//! always writes the full collection in a single atomic step. Tests use an
//! in-memory backend that never touches the filesystem.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

/// Abstraction over the persisted snapshot location.
pub trait SnapshotBackend {
    /// Read the raw snapshot text. `None` means no snapshot exists yet.
    fn load(&self) -> Result<Option<String>>;
    /// Replace the snapshot with `payload`.
    fn save(&self, payload: &str) -> Result<()>;
    /// Remove the snapshot. Succeeds when none exists.
    fn clear(&self) -> Result<()>;
}

impl<B: SnapshotBackend + ?Sized> SnapshotBackend for &B {
    fn load(&self) -> Result<Option<String>> {
        (**self).load()
    }

    fn save(&self, payload: &str) -> Result<()> {
        (**self).save(payload)
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}

/// Snapshot stored as one JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileSnapshot {
    path: PathBuf,
}

impl FileSnapshot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotBackend for FileSnapshot {
    fn load(&self) -> Result<Option<String>> {
        debug!(path = %self.path.display(), "loading snapshot");
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => {
                Err(err).with_context(|| format!("read snapshot {}", self.path.display()))
            }
        }
    }

    fn save(&self, payload: &str) -> Result<()> {
        debug!(path = %self.path.display(), bytes = payload.len(), "writing snapshot");
        write_atomic(&self.path, payload)
    }

    fn clear(&self) -> Result<()> {
        debug!(path = %self.path.display(), "clearing snapshot");
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => {
                Err(err).with_context(|| format!("remove snapshot {}", self.path.display()))
            }
        }
    }
}

/// Atomically write the snapshot (temp file + rename).
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("snapshot path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp snapshot {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace snapshot {}", path.display()))?;
    Ok(())
}
