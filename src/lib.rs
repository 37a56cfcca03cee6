//! # relver
//!
//! Git CLI integration for detecting and advancing release versions.
//!
//! This crate wraps the external `git` binary for build/release pipelines
//! that encode minor versions as release branches and patch versions as
//! tags. Each operation runs one git command, surfaces non-zero exit as a
//! typed error carrying the failing command and its captured output, and
//! parses the plain-text result in-process.
//!
//! ## Features
//!
//! - **Repository interrogation**: status, diffs, commit hashes, branch
//!   and tag lists via blocking subprocess execution
//! - **Release line detection**: `release/<major>.<minor>` branches
//!   collected, deduplicated and ordered numerically
//! - **Patch version detection**: `v<major>.<minor>.<patch>` tags per
//!   release line, with latest and next-patch queries
//! - **Lock retry**: bounded retry with sleep backoff for transient
//!   `index.lock` conflicts, for harness use around mutating git calls
//!
//! ## Usage
//!
//! ```no_run
//! use relver::{GitOperations, GitRepository, ReleaseLine};
//!
//! # fn main() -> relver::Result<()> {
//! let repo = GitRepository::open(".")?;
//! if repo.is_working_directory_clean()? {
//!     let next = repo.next_patch(ReleaseLine::new(1, 4))?;
//!     println!("next patch release: {}", next);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Core modules
pub mod cli;
pub mod error;
pub mod git;
pub mod retry;
pub mod version;

// Re-export main types for public API
pub use error::{CliError, Error, GitError, Result, VersionError};
pub use git::{
    BranchInfo, CommitInfo, GitConfig, GitOperations, GitRepository, RemoteInfo, StatusEntry,
};
pub use retry::{retry_with_backoff, RetryPolicy};
pub use version::ReleaseLine;
