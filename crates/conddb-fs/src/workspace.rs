//! Scoped output workspace with a wipe-and-rebuild lifecycle

use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// The output directory tree for one generation run.
///
/// The orchestrator owns the workspace for the run's duration. [`recreate`]
/// deletes any previous tree wholesale before the builders repopulate it, so
/// fixtures never accumulate stale state across runs.
///
/// [`recreate`]: Workspace::recreate
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Wrap `root` without touching the filesystem.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Delete any previous tree at the root, then create it afresh.
    pub fn recreate(&self) -> Result<()> {
        if self.root.exists() {
            tracing::debug!(root = %self.root.display(), "removing existing output tree");
            fs::remove_dir_all(&self.root).map_err(|e| Error::io(&self.root, e))?;
        }
        fs::create_dir_all(&self.root).map_err(|e| Error::io(&self.root, e))
    }

    /// Root of the workspace.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a path inside the workspace.
    pub fn path(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.root.join(rel)
    }
}
