//! Integration test for the current-directory convenience functions.
//!
//! Kept as a single test: it changes the process working directory, which
//! must not race with other tests in the same binary.

mod common;

use common::TestRepo;
use relver::ReleaseLine;
use semver::Version;

#[test]
fn convenience_functions_use_the_current_directory() {
    let repo = TestRepo::new();
    repo.create_branch("release/1.2");
    repo.tag("v1.2.0");

    std::env::set_current_dir(repo.path()).unwrap();

    assert!(relver::git::is_git_clean().unwrap());

    let branch = relver::git::current_git_branch().unwrap();
    assert_eq!(branch.name, "main");

    assert!(relver::git::version_tag_exists(&Version::new(1, 2, 0)).unwrap());
    assert!(!relver::git::version_tag_exists(&Version::new(9, 9, 9)).unwrap());

    assert_eq!(
        relver::git::latest_release_line().unwrap(),
        Some(ReleaseLine::new(1, 2))
    );
}
