//! Full scenario: a partitioned, multi-tag IOV tree
//!
//! Three committed revisions (tags `v0` and `v1`, then an untagged HEAD),
//! an uncommitted working-tree change, a full-history mirror clone, and a
//! detached overlay directory outside any history.

use std::path::Path;

use conddb_fs::{copy_file, materialize_dirs, remove_file, write_text};
use conddb_git::{CommitStamp, GitDriver};
use conddb_iov::IovEntry;
use conddb_iov::index;
use conddb_iov::time::date;

use crate::{Result, sibling, template};

// Committed moments, strictly increasing. Downstream expectations bake
// these values in; reordering breaks every consumer test.
const STAMP_V0: CommitStamp = CommitStamp(1_483_225_200);
const STAMP_V1: CommitStamp = CommitStamp(1_483_225_300);
const STAMP_HEAD: CommitStamp = CommitStamp(1_483_225_400);

/// Build the scenario: repository at `repo`, mirror at `<repo>-bare.git`,
/// overlay at `<repo>-overlay`.
pub fn build(git: &GitDriver, repo: &Path) -> Result<()> {
    tracing::info!(repo = %repo.display(), "building full scenario");

    // Revision v0: seed from the static template.
    template::seed(repo)?;
    git.init(repo)?;
    git.configure_identity(repo, crate::USER_NAME, crate::USER_EMAIL)?;
    git.add_all(repo)?;
    git.commit(repo, "initial version", STAMP_V0)?;
    git.tag(repo, "v0")?;

    // Revision v1: new dataset value plus time partitioning of changing.xml.
    write_text(&repo.join("values.xml"), &template::values_with("2016"))?;

    let changing = repo.join("changing.xml");
    let dir_initial = changing.join("initial");
    let dir_2016 = changing.join("2016");
    let dir_2017 = changing.join("2017");
    materialize_dirs([dir_initial.as_path(), dir_2016.as_path(), dir_2017.as_path()])?;

    index::write(
        &changing,
        &[
            IovEntry::new(0, "initial"),
            IovEntry::at(date(2016, 1, 1), "2016"),
            IovEntry::at(date(2017, 1, 1), "2017"),
        ],
    )?;

    copy_file(&changing.join("v0.xml"), &dir_initial.join("v0"))?;
    index::write(&dir_initial, &[IovEntry::new(0, "v0")])?;

    copy_file(&changing.join("v1.xml"), &dir_2016.join("v1"))?;
    index::write(
        &dir_2016,
        &[
            IovEntry::new(0, "../initial/v0"),
            IovEntry::at(date(2016, 7, 1), "v1"),
        ],
    )?;

    // The future partition holds no local leaf, only the indirection.
    index::write(&dir_2017, &[IovEntry::new(0, "../2016/v1")])?;

    remove_file(&changing.join("v0.xml"))?;
    remove_file(&changing.join("v1.xml"))?;

    git.add(repo, "changing.xml")?;
    git.commit_all(repo, "v1 data", STAMP_V1)?;
    git.tag(repo, "v1")?;

    // HEAD revision, deliberately left untagged.
    write_text(&repo.join("values.xml"), &template::values_with("0"))?;
    git.commit_all(repo, "new data", STAMP_HEAD)?;

    // Local, unversioned override left in the working tree.
    write_text(&repo.join("values.xml"), &template::values_with("-123"))?;

    // Read-only full-history mirror.
    git.mirror_clone(repo, &sibling(repo, "-bare.git"))?;

    // Detached overlay: highest-priority override outside any history.
    let overlay = sibling(repo, "-overlay");
    materialize_dirs([overlay.as_path()])?;
    write_text(&overlay.join("values.xml"), &template::values_with("777"))?;
    git.init_in(&overlay)?;

    Ok(())
}
