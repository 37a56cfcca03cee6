//! Integration tests for the relver binary.

mod common;

use assert_cmd::Command;
use common::TestRepo;
use predicates::prelude::*;

fn relver() -> Command {
    Command::cargo_bin("relver").expect("binary built")
}

#[test]
fn head_prints_the_commit_hash() {
    let repo = TestRepo::new();

    relver()
        .current_dir(repo.path())
        .arg("head")
        .assert()
        .success()
        .stdout(format!("{}\n", repo.head()));
}

#[test]
fn head_short_prints_a_prefix() {
    let repo = TestRepo::new();
    let head = repo.head();

    relver()
        .current_dir(repo.path())
        .args(["head", "--short"])
        .assert()
        .success()
        .stdout(predicate::function(move |out: &str| {
            let trimmed = out.trim();
            !trimmed.is_empty() && head.starts_with(trimmed)
        }));
}

#[test]
fn status_reports_clean_and_dirty_trees() {
    let repo = TestRepo::new();

    relver()
        .current_dir(repo.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("working directory clean"));

    std::fs::write(repo.path().join("notes.txt"), "scratch\n").unwrap();

    relver()
        .current_dir(repo.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("?? notes.txt"));
}

#[test]
fn status_json_carries_the_clean_flag() {
    let repo = TestRepo::new();

    relver()
        .current_dir(repo.path())
        .args(["status", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"clean\": true"));
}

#[test]
fn branch_names_the_current_branch() {
    let repo = TestRepo::new();

    relver()
        .current_dir(repo.path())
        .arg("branch")
        .assert()
        .success()
        .stdout(predicate::str::contains("main"));
}

#[test]
fn branches_lists_local_and_remote() {
    let repo = TestRepo::new();
    repo.create_branch("release/1.0");
    repo.add_remote_branch("origin", "release/2.0");

    relver()
        .current_dir(repo.path())
        .arg("branches")
        .assert()
        .success()
        .stdout(predicate::str::contains("main").and(predicate::str::contains("release/1.0")));

    relver()
        .current_dir(repo.path())
        .args(["branches", "--remote"])
        .assert()
        .success()
        .stdout(predicate::str::contains("origin/release/2.0"));
}

#[test]
fn lines_are_ordered_numerically() {
    let repo = TestRepo::new();
    repo.create_branch("release/1.10");
    repo.create_branch("release/1.9");

    relver()
        .current_dir(repo.path())
        .arg("lines")
        .assert()
        .success()
        .stdout("1.9\n1.10\n");
}

#[test]
fn lines_json_serializes_components() {
    let repo = TestRepo::new();
    repo.create_branch("release/1.9");

    relver()
        .current_dir(repo.path())
        .args(["lines", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"major\": 1").and(predicate::str::contains("\"minor\": 9")));
}

#[test]
fn tags_prints_versions_in_semantic_order() {
    let repo = TestRepo::new();
    repo.tag("v1.0.1");
    repo.tag("v1.0.0");
    repo.tag("nightly");

    relver()
        .current_dir(repo.path())
        .arg("tags")
        .assert()
        .success()
        .stdout("1.0.0\n1.0.1\n");

    relver()
        .current_dir(repo.path())
        .args(["tags", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nightly"));
}

#[test]
fn latest_resolves_the_highest_line_by_default() {
    let repo = TestRepo::new();
    repo.create_branch("release/1.0");
    repo.tag("v1.0.0");
    repo.tag("v1.0.1");

    relver()
        .current_dir(repo.path())
        .arg("latest")
        .assert()
        .success()
        .stdout("1.0.1\n");

    relver()
        .current_dir(repo.path())
        .args(["latest", "--line", "1.0", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\": \"1.0.1\""));
}

#[test]
fn latest_fails_without_release_branches() {
    let repo = TestRepo::new();

    relver()
        .current_dir(repo.path())
        .arg("latest")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No release branches"));
}

#[test]
fn next_advances_the_patch_version() {
    let repo = TestRepo::new();
    repo.tag("v1.0.0");
    repo.tag("v1.0.1");

    relver()
        .current_dir(repo.path())
        .args(["next", "--line", "1.0"])
        .assert()
        .success()
        .stdout("1.0.2\n");

    // Untagged lines start at their floor version.
    relver()
        .current_dir(repo.path())
        .args(["next", "--line", "3.0"])
        .assert()
        .success()
        .stdout("3.0.0\n");
}

#[test]
fn describe_prints_the_tag_derived_version() {
    let repo = TestRepo::new();
    repo.tag("v1.1.0");

    relver()
        .current_dir(repo.path())
        .arg("describe")
        .assert()
        .success()
        .stdout("v1.1.0\n");
}

#[test]
fn diff_name_only_lists_changed_paths() {
    let repo = TestRepo::new();
    repo.commit_file("file.txt", "original\n", "add file");
    std::fs::write(repo.path().join("file.txt"), "changed\n").unwrap();

    relver()
        .current_dir(repo.path())
        .args(["diff", "--name-only"])
        .assert()
        .success()
        .stdout("file.txt\n");
}

#[test]
fn repo_flag_selects_the_repository() {
    let repo = TestRepo::new();
    let elsewhere = tempfile::tempdir().unwrap();
    let repo_path = repo.path().display().to_string();

    relver()
        .current_dir(elsewhere.path())
        .args(["--repo", repo_path.as_str(), "head"])
        .assert()
        .success()
        .stdout(format!("{}\n", repo.head()));
}

#[test]
fn non_repositories_fail_with_a_typed_message() {
    let dir = tempfile::tempdir().unwrap();

    relver()
        .current_dir(dir.path())
        .arg("head")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Not a git repository"));
}

#[test]
fn missing_repo_path_is_rejected_up_front() {
    let dir = tempfile::tempdir().unwrap();

    relver()
        .current_dir(dir.path())
        .args(["--repo", "does-not-exist", "head"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn verbose_and_quiet_conflict() {
    let repo = TestRepo::new();

    relver()
        .current_dir(repo.path())
        .args(["--verbose", "--quiet", "status"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn malformed_release_lines_are_rejected() {
    let repo = TestRepo::new();

    relver()
        .current_dir(repo.path())
        .args(["next", "--line", "banana"])
        .assert()
        .failure()
        .code(2);
}
