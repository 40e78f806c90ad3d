//! Scenario builders and orchestration for CondDB test fixtures
//!
//! Produces deterministic, version-controlled fixture trees modelling a
//! time-partitioned conditions database: named datasets with multiple
//! historical revisions, resolved through per-directory IOV indices.

pub mod error;
pub mod full;
pub mod mini;
pub mod statics;
pub mod template;

use std::path::{Path, PathBuf};

use conddb_fs::Workspace;
use conddb_git::GitDriver;

pub use error::{Error, Result};

/// Author identity pinned into every generated repository.
pub const USER_NAME: &str = "Test User";
pub const USER_EMAIL: &str = "test.user@no.where";

/// Regenerate every fixture under the workspace root.
///
/// The previous output tree is deleted wholesale first, so a run never
/// accumulates stale state; the scenarios then build in a strict sequence,
/// each step depending on the on-disk state left by the previous one.
pub fn generate(git: &GitDriver, workspace: &Workspace) -> Result<()> {
    workspace.recreate()?;

    full::build(git, &workspace.path("full/repo"))?;
    mini::build(git, &workspace.path("mini/repo"))?;
    statics::write_json_fixtures(&workspace.path("json"))?;

    tracing::info!(root = %workspace.root().display(), "fixture generation complete");
    Ok(())
}

/// Sibling path of `repo` with the given suffix appended to its name,
/// e.g. `full/repo` → `full/repo-bare.git`.
pub(crate) fn sibling(repo: &Path, suffix: &str) -> PathBuf {
    let name = repo
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    repo.with_file_name(format!("{name}{suffix}"))
}
