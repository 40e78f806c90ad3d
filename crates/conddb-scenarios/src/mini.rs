//! Mini scenario: nested IOV indices inside a single revision
//!
//! Two sibling datasets share each revision: `TheDir/TheFile.txt`, a plain
//! file, and `Cond/`, an IOV-indexed dataset whose root index chains into a
//! child index (`Cond/group/IOVs`). Both indices are extended between the
//! two revisions, so the same index paths change content across tags, not
//! just the leaves they point to.

use std::path::Path;

use conddb_fs::write_text;
use conddb_git::{CommitStamp, GitDriver};
use conddb_iov::IovEntry;
use conddb_iov::index;

use crate::{Result, sibling};

const STAMP_V0: CommitStamp = CommitStamp(1_483_225_100);
const STAMP_V1: CommitStamp = CommitStamp(1_483_225_200);

/// Build the scenario: repository at `repo`, mirror at `<repo>.git`.
pub fn build(git: &GitDriver, repo: &Path) -> Result<()> {
    tracing::info!(repo = %repo.display(), "building mini scenario");

    git.init(repo)?;
    git.configure_identity(repo, crate::USER_NAME, crate::USER_EMAIL)?;

    // Revision v0.
    write_text(&repo.join("TheDir").join("TheFile.txt"), "some data\n")?;

    let cond = repo.join("Cond");
    index::write(&cond, &[IovEntry::new(0, "v0"), IovEntry::new(50, "group")])?;
    index::write(&cond.join("group"), &[IovEntry::new(50, "../v1")])?;
    write_text(&cond.join("v0"), "data 0")?;
    write_text(&cond.join("v1"), "data 1")?;

    git.add_all(repo)?;
    git.commit(repo, "message 1", STAMP_V0)?;
    git.tag(repo, "v0")?;

    // Revision v1 extends both indices and adds two leaves.
    index::write(
        &cond,
        &[
            IovEntry::new(0, "v0"),
            IovEntry::new(50, "group"),
            IovEntry::new(200, "v3"),
        ],
    )?;
    index::write(
        &cond.join("group"),
        &[IovEntry::new(50, "../v1"), IovEntry::new(150, "../v2")],
    )?;
    write_text(&cond.join("v2"), "data 2")?;
    write_text(&cond.join("v3"), "data 3")?;

    git.add_all(repo)?;
    git.commit(repo, "message 2", STAMP_V1)?;
    git.tag(repo, "v1")?;

    // Local uncommitted change to the plain file.
    write_text(
        &repo.join("TheDir").join("TheFile.txt"),
        "some uncommitted data\n",
    )?;

    // Read-only full-history mirror.
    git.mirror_clone(repo, &sibling(repo, ".git"))?;

    Ok(())
}
