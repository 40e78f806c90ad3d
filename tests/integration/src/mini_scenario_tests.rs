//! End-to-end properties of the mini (nested-index) scenario

use std::fs;

use integration_tests::{
    blob_at, commit_ids, commit_times, generate_into, resolve_at_rev, tag_names,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn sibling_datasets_share_the_first_revision() {
    let temp = TempDir::new().unwrap();
    let ws = generate_into(&temp.path().join("test_data"));
    let repo = ws.path("mini/repo");

    assert_eq!(blob_at(&repo, "v0", "TheDir/TheFile.txt"), "some data\n");
    assert_eq!(blob_at(&repo, "v0", "Cond/v0"), "data 0");
}

#[test]
fn nested_index_resolves_through_the_child_at_v0() {
    let temp = TempDir::new().unwrap();
    let ws = generate_into(&temp.path().join("test_data"));
    let repo = ws.path("mini/repo");

    // Root index hands over to `group` at 50; the child index sends
    // moment 75 one level back up to the v1 leaf.
    assert_eq!(resolve_at_rev(&repo, "v0", "Cond", 75), "data 1");
}

#[test]
fn extended_child_index_resolves_newer_leaf_at_v1() {
    let temp = TempDir::new().unwrap();
    let ws = generate_into(&temp.path().join("test_data"));
    let repo = ws.path("mini/repo");

    assert_eq!(resolve_at_rev(&repo, "v1", "Cond", 160), "data 2");
}

#[test]
fn epoch_leaf_is_served_directly_at_both_revisions() {
    let temp = TempDir::new().unwrap();
    let ws = generate_into(&temp.path().join("test_data"));
    let repo = ws.path("mini/repo");

    assert_eq!(resolve_at_rev(&repo, "v0", "Cond", 10), "data 0");
    assert_eq!(resolve_at_rev(&repo, "v1", "Cond", 10), "data 0");
}

#[test]
fn root_index_extension_adds_a_late_leaf_at_v1() {
    let temp = TempDir::new().unwrap();
    let ws = generate_into(&temp.path().join("test_data"));
    let repo = ws.path("mini/repo");

    assert_eq!(resolve_at_rev(&repo, "v1", "Cond", 250), "data 3");
}

#[test]
fn indices_change_content_between_revisions() {
    let temp = TempDir::new().unwrap();
    let ws = generate_into(&temp.path().join("test_data"));
    let repo = ws.path("mini/repo");

    assert_eq!(blob_at(&repo, "v0", "Cond/IOVs"), "0 v0\n50 group\n");
    assert_eq!(
        blob_at(&repo, "v1", "Cond/IOVs"),
        "0 v0\n50 group\n200 v3\n"
    );

    assert_eq!(blob_at(&repo, "v0", "Cond/group/IOVs"), "50 ../v1\n");
    assert_eq!(
        blob_at(&repo, "v1", "Cond/group/IOVs"),
        "50 ../v1\n150 ../v2\n"
    );
}

#[test]
fn plain_file_carries_an_uncommitted_modification() {
    let temp = TempDir::new().unwrap();
    let ws = generate_into(&temp.path().join("test_data"));
    let repo = ws.path("mini/repo");

    let working = fs::read_to_string(repo.join("TheDir/TheFile.txt")).unwrap();
    assert_eq!(working, "some uncommitted data\n");
    assert_ne!(working, blob_at(&repo, "v1", "TheDir/TheFile.txt"));
}

#[test]
fn commit_moments_are_pinned_and_strictly_increasing() {
    let temp = TempDir::new().unwrap();
    let ws = generate_into(&temp.path().join("test_data"));

    // Newest first.
    assert_eq!(
        commit_times(&ws.path("mini/repo")),
        vec![1_483_225_200, 1_483_225_100]
    );
}

#[test]
fn mirror_contains_exactly_the_source_tags_and_revisions() {
    let temp = TempDir::new().unwrap();
    let ws = generate_into(&temp.path().join("test_data"));
    let repo = ws.path("mini/repo");
    let mirror = ws.path("mini/repo.git");

    assert!(git2::Repository::open(&mirror).unwrap().is_bare());
    assert_eq!(tag_names(&mirror), vec!["v0", "v1"]);
    assert_eq!(tag_names(&mirror), tag_names(&repo));
    assert_eq!(commit_ids(&mirror), commit_ids(&repo));
}
