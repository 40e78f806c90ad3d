//! Whole-tree generation properties: index ordering, termination,
//! reproducibility, stale-state cleanup

use std::fs;

use conddb_fs::checksum::tree_checksums;
use conddb_iov::index;
use conddb_iov::time::{date, to_nanos};
use integration_tests::{commit_ids, find_iov_indices, generate_into, resolve};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn every_emitted_index_is_strictly_increasing() {
    let temp = TempDir::new().unwrap();
    let ws = generate_into(&temp.path().join("test_data"));

    let indices = find_iov_indices(ws.root());
    // Working trees carry six indices: the full partition root plus its
    // three partitions, and the mini root plus its child.
    assert_eq!(indices.len(), 6);

    for path in indices {
        let entries = index::parse(&fs::read_to_string(&path).unwrap())
            .unwrap_or_else(|e| panic!("{} does not parse: {e}", path.display()));
        assert!(!entries.is_empty(), "{} is empty", path.display());
        for pair in entries.windows(2) {
            assert!(
                pair[0].since < pair[1].since,
                "{} is not strictly increasing",
                path.display()
            );
        }
    }
}

#[test]
fn resolution_terminates_at_a_leaf_for_every_probed_moment() {
    let temp = TempDir::new().unwrap();
    let ws = generate_into(&temp.path().join("test_data"));
    let partition_root = ws.path("full/repo/changing.xml");

    let moments = [
        0,
        to_nanos(date(2016, 2, 1)),
        to_nanos(date(2016, 8, 1)),
        to_nanos(date(2017, 5, 1)),
        to_nanos(date(2100, 1, 1)),
    ];
    for at in moments {
        let leaf = resolve(&partition_root, at);
        assert!(leaf.is_file(), "moment {at} resolved to {}", leaf.display());
    }
}

#[test]
fn regeneration_from_clean_state_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    let first = generate_into(&temp.path().join("first"));
    let second = generate_into(&temp.path().join("second"));

    // Same bytes everywhere outside git metadata, the deliberately
    // uncommitted working-tree files included.
    assert_eq!(
        tree_checksums(first.root()).unwrap(),
        tree_checksums(second.root()).unwrap()
    );

    // Pinned authorship makes the histories identical too.
    assert_eq!(
        commit_ids(&first.path("full/repo")),
        commit_ids(&second.path("full/repo"))
    );
    assert_eq!(
        commit_ids(&first.path("mini/repo")),
        commit_ids(&second.path("mini/repo"))
    );
}

#[test]
fn regeneration_discards_stale_output() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("test_data");

    generate_into(&root);
    fs::write(root.join("stale.txt"), "left over").unwrap();

    generate_into(&root);

    assert!(!root.join("stale.txt").exists());
    assert!(root.join("full/repo").is_dir());
}

#[test]
fn workspace_layout_is_complete() {
    let temp = TempDir::new().unwrap();
    let ws = generate_into(&temp.path().join("test_data"));

    for dir in [
        "full/repo",
        "full/repo-bare.git",
        "full/repo-overlay",
        "mini/repo",
        "mini/repo.git",
    ] {
        assert!(ws.path(dir).is_dir(), "missing directory {dir}");
    }
    for file in ["json/minimal.json", "json/basic.json"] {
        assert!(ws.path(file).is_file(), "missing file {file}");
    }
}
