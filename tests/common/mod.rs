//! Shared test fixture: real git repositories created in temp directories.

#![allow(dead_code)]

use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Test fixture that creates a real git repository.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new test repository on branch `main` with an initial commit.
    pub fn new() -> Self {
        let repo = Self::empty();

        std::fs::write(repo.path().join("README.md"), "# Test Repo\n").unwrap();
        repo.git(&["add", "README.md"]);
        repo.commit("initial commit");

        repo
    }

    /// Create an initialized repository with no commits.
    pub fn empty() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");

        run_git(dir.path(), &["init", "--initial-branch=main"]);
        run_git(dir.path(), &["config", "user.email", "test@example.com"]);
        run_git(dir.path(), &["config", "user.name", "Test User"]);

        Self { dir }
    }

    /// Get the path to the repository.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Run a git command in this repository, asserting success.
    pub fn git(&self, args: &[&str]) {
        run_git(self.path(), args);
    }

    /// Commit staged and given changes with the given message.
    pub fn commit(&self, message: &str) {
        self.git(&["-c", "commit.gpgsign=false", "commit", "-m", message]);
    }

    /// Create (or overwrite) a file and commit it.
    pub fn commit_file(&self, path: &str, content: &str, message: &str) {
        std::fs::write(self.path().join(path), content).unwrap();
        self.git(&["add", path]);
        self.commit(message);
    }

    /// Create a branch at the current HEAD.
    pub fn create_branch(&self, name: &str) {
        self.git(&["branch", name]);
    }

    /// Create a lightweight tag at the current HEAD.
    pub fn tag(&self, name: &str) {
        self.git(&["-c", "tag.gpgsign=false", "tag", name]);
    }

    /// Simulate a remote-tracking branch pointing at HEAD.
    pub fn add_remote_branch(&self, remote: &str, name: &str) {
        let refname = format!("refs/remotes/{}/{}", remote, name);
        self.git(&["update-ref", &refname, "HEAD"]);
    }

    /// Get the HEAD hash using git directly.
    pub fn head(&self) -> String {
        let output = Command::new("git")
            .args(["rev-parse", "HEAD"])
            .current_dir(self.path())
            .output()
            .expect("git rev-parse failed");
        assert!(output.status.success(), "git rev-parse HEAD failed");
        String::from_utf8(output.stdout).unwrap().trim().to_string()
    }
}

/// Run a git command in the given directory, asserting success.
pub fn run_git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .env("GIT_CONFIG_GLOBAL", "/dev/null")
        .env("GIT_CONFIG_SYSTEM", "/dev/null")
        .output()
        .unwrap_or_else(|e| panic!("failed to run git {:?}: {}", args, e));

    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}
