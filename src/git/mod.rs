//! Git interrogation for release workflows.
//!
//! This module provides the command-execution facade over the external
//! `git` binary: repository status, diffs, commit hashes, branch and tag
//! lists, and the release-line and patch-version queries built on them.
//! Execution is synchronous and blocking; every non-zero exit surfaces as
//! a typed error carrying the failing command and its captured output.

mod config;
mod operations;
mod operations_branch;
mod operations_tag;

pub use config::GitConfig;
pub use operations::{
    BranchInfo, CommitInfo, GitOperations, GitRepository, RemoteInfo, StatusEntry,
};

use crate::error::Result;
use crate::version::ReleaseLine;
use semver::Version;

/// Check if the current directory is inside a clean git repository
pub fn is_git_clean() -> Result<bool> {
    let repo = GitRepository::open(".")?;
    repo.is_working_directory_clean()
}

/// Get current git branch information for the current directory
pub fn current_git_branch() -> Result<BranchInfo> {
    let repo = GitRepository::open(".")?;
    repo.current_branch()
}

/// Check if a version tag exists in the current directory's repository
pub fn version_tag_exists(version: &Version) -> Result<bool> {
    let repo = GitRepository::open(".")?;
    let tag_name = format!("{}{}", repo.config().version_tag_prefix, version);
    repo.tag_exists(&tag_name)
}

/// The highest release line in the current directory's repository
pub fn latest_release_line() -> Result<Option<ReleaseLine>> {
    let repo = GitRepository::open(".")?;
    repo.latest_release_line()
}
