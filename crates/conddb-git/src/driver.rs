//! Synchronous command execution against the external git binary
//!
//! The builders depend only on the documented effects of five operations:
//! create a repository, snapshot the working tree as a revision, alias a
//! revision with a tag, and produce a read-only full-history mirror.
//! Captured output is logged for diagnostics only; a non-zero exit is fatal
//! to the whole generation run.

use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

use crate::{Error, Result};

/// Authorship moment for a commit, in seconds since the epoch.
///
/// Exported as both `GIT_AUTHOR_DATE` and `GIT_COMMITTER_DATE` with a fixed
/// `+0000` zone, so commit hashes are reproducible across machine clocks
/// and timezones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitStamp(pub i64);

impl CommitStamp {
    fn as_git_date(self) -> String {
        format!("{} +0000", self.0)
    }
}

/// Executes git operations synchronously, failing fast on non-zero exit.
#[derive(Debug, Default)]
pub struct GitDriver;

impl GitDriver {
    pub fn new() -> Self {
        Self
    }

    /// Initialize a fresh repository at `path`.
    pub fn init(&self, path: &Path) -> Result<()> {
        self.run(None, None, &[OsStr::new("init"), path.as_os_str()])
    }

    /// Initialize a repository with `path` itself as the working directory.
    ///
    /// Used for the overlay directory, which must carry freshly initialized,
    /// zero-commit metadata.
    pub fn init_in(&self, path: &Path) -> Result<()> {
        self.run(Some(path), None, &["init"].map(OsStr::new))
    }

    /// Set a repository-local config value, written with `-f .git/config` so
    /// user and system git configuration never leak into fixtures.
    pub fn config(&self, repo: &Path, key: &str, value: &str) -> Result<()> {
        self.run(
            Some(repo),
            None,
            &["config", "-f", ".git/config", key, value].map(OsStr::new),
        )
    }

    /// Pin the repository-local identity and disable commit signing.
    pub fn configure_identity(&self, repo: &Path, name: &str, email: &str) -> Result<()> {
        self.config(repo, "user.name", name)?;
        self.config(repo, "user.email", email)?;
        self.config(repo, "commit.gpgsign", "false")
    }

    /// Stage everything under the repository root.
    pub fn add_all(&self, repo: &Path) -> Result<()> {
        self.run(Some(repo), None, &["add", "."].map(OsStr::new))
    }

    /// Stage additions, modifications and deletions under `pathspec`.
    pub fn add(&self, repo: &Path, pathspec: &str) -> Result<()> {
        self.run(Some(repo), None, &["add", "--all", pathspec].map(OsStr::new))
    }

    /// Snapshot the staged tree as a revision with a pinned authorship
    /// moment.
    pub fn commit(&self, repo: &Path, message: &str, stamp: CommitStamp) -> Result<()> {
        self.run(
            Some(repo),
            Some(stamp),
            &["commit", "-m", message].map(OsStr::new),
        )
    }

    /// Snapshot the working tree as a revision, staging modifications to
    /// already-tracked files first (`commit -a`).
    pub fn commit_all(&self, repo: &Path, message: &str, stamp: CommitStamp) -> Result<()> {
        self.run(
            Some(repo),
            Some(stamp),
            &["commit", "-a", "-m", message].map(OsStr::new),
        )
    }

    /// Alias the current revision with a lightweight tag.
    pub fn tag(&self, repo: &Path, name: &str) -> Result<()> {
        self.run(Some(repo), None, &["tag", name].map(OsStr::new))
    }

    /// Produce a read-only full-history mirror (tags and all revisions, no
    /// working tree) of `src` at `dest`.
    pub fn mirror_clone(&self, src: &Path, dest: &Path) -> Result<()> {
        self.run(
            None,
            None,
            &[
                OsStr::new("clone"),
                OsStr::new("--mirror"),
                src.as_os_str(),
                dest.as_os_str(),
            ],
        )
    }

    fn run(&self, cwd: Option<&Path>, stamp: Option<CommitStamp>, args: &[&OsStr]) -> Result<()> {
        let cmdline = format!(
            "git {}",
            args.iter()
                .map(|a| a.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        );
        tracing::debug!(command = %cmdline, "running git");

        let mut command = Command::new("git");
        command.args(args);
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }
        if let Some(stamp) = stamp {
            let date = stamp.as_git_date();
            command.env("GIT_AUTHOR_DATE", &date);
            command.env("GIT_COMMITTER_DATE", &date);
        }

        let output = command.output().map_err(|source| Error::Spawn {
            command: cmdline.clone(),
            source,
        })?;

        let mut captured = String::from_utf8_lossy(&output.stdout)
            .trim_end()
            .to_string();
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim_end();
        if !stderr.is_empty() {
            if !captured.is_empty() {
                captured.push('\n');
            }
            captured.push_str(stderr);
        }

        if !output.status.success() {
            tracing::error!(
                command = %cmdline,
                code = ?output.status.code(),
                output = %captured,
                "git command failed"
            );
            return Err(Error::CommandFailed {
                command: cmdline,
                code: output.status.code(),
                output: captured,
            });
        }

        if !captured.is_empty() {
            tracing::debug!(command = %cmdline, output = %captured, "git output");
        }
        Ok(())
    }
}
