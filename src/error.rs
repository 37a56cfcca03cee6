//! Error types for relver operations.
//!
//! This module defines all error types with actionable error messages and recovery suggestions.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for relver operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for all relver operations
#[derive(Error, Debug)]
pub enum Error {
    /// Git operation errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    /// Version detection errors
    #[error("Version error: {0}")]
    Version(#[from] VersionError),

    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Git operation errors
#[derive(Error, Debug)]
pub enum GitError {
    /// The git executable could not be located
    #[error("Could not locate the git executable: {reason}")]
    GitNotFound {
        /// Reason the lookup failed
        reason: String,
    },

    /// Not a git repository
    #[error("Not a git repository: {path}")]
    NotRepository {
        /// The path that was checked
        path: PathBuf,
    },

    /// A git command exited with a non-zero status
    #[error("Git command '{command}' failed: {output}")]
    CommandFailed {
        /// The command line that was executed
        command: String,
        /// Captured output of the failing command
        output: String,
    },

    /// HEAD does not point at a branch
    #[error("Repository is in detached HEAD state")]
    DetachedHead,

    /// A ref could not be resolved to a commit
    #[error("Ref '{refspec}' not found")]
    RefNotFound {
        /// The refspec that failed to resolve
        refspec: String,
    },

    /// Output of a git command did not have the expected shape
    #[error("Unexpected output from 'git {command}': {reason}")]
    UnexpectedOutput {
        /// The subcommand whose output was malformed
        command: String,
        /// Description of the problem
        reason: String,
    },
}

/// Version detection errors
#[derive(Error, Debug)]
pub enum VersionError {
    /// Version parsing failed
    #[error("Failed to parse version '{version}': {source}")]
    ParseFailed {
        /// The version string that failed to parse
        version: String,
        /// The underlying semver parsing error
        #[source]
        source: semver::Error,
    },

    /// A release line string was not of the form `major.minor`
    #[error("Invalid release line '{value}': {reason}")]
    InvalidReleaseLine {
        /// The offending input
        value: String,
        /// Reason why the input is invalid
        reason: String,
    },

    /// A branch or tag pattern failed to compile
    #[error("Invalid pattern '{pattern}': {reason}")]
    PatternFailed {
        /// The pattern that failed to compile
        pattern: String,
        /// The underlying regex error
        reason: String,
    },

    /// No release branches exist in the repository
    #[error("No release branches found")]
    NoReleaseLines,

    /// No version tags exist for the requested release line
    #[error("No version tags found for release line {line}")]
    NoVersionsForLine {
        /// The release line that has no tags
        line: String,
    },
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for invalid arguments
        reason: String,
    },
}

/// Markers in git output that indicate a transient lock conflict
const LOCK_MARKERS: &[&str] = &[
    "index.lock",
    ".lock': File exists",
    "Unable to create",
    "could not lock",
];

impl Error {
    /// Check whether this error is a transient git lock conflict.
    ///
    /// Only command failures whose captured output names a git lock file
    /// qualify; everything else is treated as permanent.
    pub fn is_transient_lock(&self) -> bool {
        match self {
            Error::Git(GitError::CommandFailed { output, .. }) => {
                LOCK_MARKERS.iter().any(|marker| output.contains(marker))
            }
            _ => false,
        }
    }

    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            Error::Git(GitError::GitNotFound { .. }) => vec![
                "Install git and ensure it is on PATH".to_string(),
            ],
            Error::Git(GitError::NotRepository { .. }) => vec![
                "Run from within a git working tree".to_string(),
                "Pass the repository path with --repo".to_string(),
            ],
            Error::Git(GitError::DetachedHead) => vec![
                "Check out a branch: git switch <branch>".to_string(),
            ],
            Error::Version(VersionError::NoReleaseLines) => vec![
                "Create a release branch, e.g. git branch release/1.0".to_string(),
            ],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command_failed(output: &str) -> Error {
        GitError::CommandFailed {
            command: "git commit".to_string(),
            output: output.to_string(),
        }
        .into()
    }

    #[test]
    fn index_lock_failure_is_transient() {
        let err = command_failed(
            "fatal: Unable to create '/repo/.git/index.lock': File exists.",
        );
        assert!(err.is_transient_lock());
    }

    #[test]
    fn ordinary_failure_is_permanent() {
        let err = command_failed("fatal: pathspec 'nope' did not match any files");
        assert!(!err.is_transient_lock());
    }

    #[test]
    fn non_command_errors_are_permanent() {
        let err: Error = GitError::DetachedHead.into();
        assert!(!err.is_transient_lock());
    }
}
