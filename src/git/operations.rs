//! Git operations using CLI commands via std::process.

use crate::error::{GitError, Result};
use crate::git::GitConfig;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Trait defining the interrogation operations release tooling needs
pub trait GitOperations {
    /// Parsed `git status --porcelain` entries
    fn status_entries(&self) -> Result<Vec<StatusEntry>>;
    /// Whether the working directory has no uncommitted changes
    fn is_working_directory_clean(&self) -> Result<bool>;
    /// The currently checked-out branch
    fn current_branch(&self) -> Result<BranchInfo>;
    /// Full hash of HEAD
    fn head_commit(&self) -> Result<String>;
    /// Abbreviated hash of HEAD
    fn short_head_commit(&self) -> Result<String>;
    /// Resolve an arbitrary refspec to a commit hash
    fn resolve_ref(&self, refspec: &str) -> Result<String>;
    /// Unified diff of the working tree against HEAD or a base ref
    fn diff(&self, base: Option<&str>) -> Result<String>;
    /// Paths changed relative to HEAD or a base ref
    fn changed_files(&self, base: Option<&str>) -> Result<Vec<String>>;
    /// The most recent commits, newest first
    fn recent_commits(&self, count: usize) -> Result<Vec<CommitInfo>>;
    /// Configured remotes with their fetch and push URLs
    fn remotes(&self) -> Result<Vec<RemoteInfo>>;
}

/// One entry of `git status --porcelain` output
#[derive(Debug, Clone, Serialize)]
pub struct StatusEntry {
    /// Two-character status code (e.g. `??`, ` M`, `A `)
    pub status: String,
    /// Path relative to the repository root
    pub path: String,
}

/// Information about a single commit
#[derive(Debug, Clone, Serialize)]
pub struct CommitInfo {
    /// Full commit hash
    pub hash: String,
    /// Abbreviated commit hash
    pub short_hash: String,
    /// Commit subject line
    pub subject: String,
    /// Author name
    pub author_name: String,
    /// Author email
    pub author_email: String,
    /// Committer timestamp
    pub timestamp: DateTime<FixedOffset>,
}

/// Information about the currently checked-out branch
#[derive(Debug, Clone, Serialize)]
pub struct BranchInfo {
    /// Branch name
    pub name: String,
    /// Commit hash the branch points at
    pub commit_hash: String,
    /// Upstream branch, if one is configured
    pub upstream: Option<String>,
}

/// A configured remote
#[derive(Debug, Clone, Serialize)]
pub struct RemoteInfo {
    /// Remote name
    pub name: String,
    /// URL used for fetching
    pub fetch_url: String,
    /// URL used for pushing
    pub push_url: String,
}

/// Git repository handle using CLI commands
#[derive(Debug, Clone)]
pub struct GitRepository {
    repo_path: PathBuf,
    git_exe: PathBuf,
    config: GitConfig,
}

impl GitRepository {
    /// Open the repository whose working tree contains `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_config(path, GitConfig::default())
    }

    /// Open a repository with custom branch and tag naming conventions
    pub fn open_with_config(path: impl AsRef<Path>, config: GitConfig) -> Result<Self> {
        let path = path.as_ref();
        let git_exe = which::which("git").map_err(|e| GitError::GitNotFound {
            reason: e.to_string(),
        })?;

        if !path.is_dir() {
            return Err(GitError::NotRepository {
                path: path.to_path_buf(),
            }
            .into());
        }

        let repo = Self {
            repo_path: path.to_path_buf(),
            git_exe,
            config,
        };

        let output = repo.run_git(&["rev-parse", "--is-inside-work-tree"])?;
        let inside = output.status.success()
            && String::from_utf8_lossy(&output.stdout).trim() == "true";
        if !inside {
            return Err(GitError::NotRepository {
                path: path.to_path_buf(),
            }
            .into());
        }

        Ok(repo)
    }

    /// Path the repository was opened at
    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }

    /// The naming conventions this handle was opened with
    pub fn config(&self) -> &GitConfig {
        &self.config
    }

    pub(crate) fn run_git(&self, args: &[&str]) -> Result<Output> {
        log::debug!("running git {}", args.join(" "));
        Command::new(&self.git_exe)
            .args(args)
            .current_dir(&self.repo_path)
            .output()
            .map_err(|e| {
                GitError::CommandFailed {
                    command: render_command(args),
                    output: format!("failed to execute: {}", e),
                }
                .into()
            })
    }

    /// Run a git command, surfacing non-zero exit as a typed failure
    /// carrying the command line and captured output. Stdout is trimmed.
    pub(crate) fn run_git_checked(&self, args: &[&str]) -> Result<String> {
        Ok(self.run_git_raw(args)?.trim().to_string())
    }

    /// As `run_git_checked`, but stdout is returned untouched. Needed where
    /// leading whitespace is significant (porcelain status, diffs).
    pub(crate) fn run_git_raw(&self, args: &[&str]) -> Result<String> {
        let output = self.run_git(args)?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command: render_command(args),
                output: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Checked run split into trimmed, non-empty stdout lines
    pub(crate) fn run_git_lines(&self, args: &[&str]) -> Result<Vec<String>> {
        let stdout = self.run_git_raw(args)?;
        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}

fn render_command(args: &[&str]) -> String {
    format!("git {}", args.join(" "))
}

impl GitOperations for GitRepository {
    fn status_entries(&self) -> Result<Vec<StatusEntry>> {
        let stdout = self.run_git_raw(&["status", "--porcelain"])?;
        Ok(stdout.lines().filter_map(parse_status_line).collect())
    }

    fn is_working_directory_clean(&self) -> Result<bool> {
        let output = self.run_git_checked(&["status", "--porcelain"])?;
        Ok(output.is_empty())
    }

    fn current_branch(&self) -> Result<BranchInfo> {
        let name = self.run_git_checked(&["branch", "--show-current"])?;
        if name.is_empty() {
            return Err(GitError::DetachedHead.into());
        }
        let commit_hash = self.head_commit()?;

        let upstream = self
            .run_git(&["rev-parse", "--abbrev-ref", "@{upstream}"])
            .ok()
            .and_then(|output| {
                if output.status.success() {
                    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
                } else {
                    None
                }
            });

        Ok(BranchInfo {
            name,
            commit_hash,
            upstream,
        })
    }

    fn head_commit(&self) -> Result<String> {
        self.run_git_checked(&["rev-parse", "HEAD"])
    }

    fn short_head_commit(&self) -> Result<String> {
        self.run_git_checked(&["rev-parse", "--short", "HEAD"])
    }

    fn resolve_ref(&self, refspec: &str) -> Result<String> {
        let spec = format!("{}^{{commit}}", refspec);
        let output = self.run_git(&["rev-parse", "--verify", "--quiet", &spec])?;
        if !output.status.success() {
            return Err(GitError::RefNotFound {
                refspec: refspec.to_string(),
            }
            .into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn diff(&self, base: Option<&str>) -> Result<String> {
        match base {
            Some(base) => self.run_git_raw(&["diff", base]),
            None => self.run_git_raw(&["diff"]),
        }
    }

    fn changed_files(&self, base: Option<&str>) -> Result<Vec<String>> {
        match base {
            Some(base) => self.run_git_lines(&["diff", "--name-only", base]),
            None => self.run_git_lines(&["diff", "--name-only"]),
        }
    }

    fn recent_commits(&self, count: usize) -> Result<Vec<CommitInfo>> {
        let limit = format!("-{}", count);
        let stdout = self.run_git_checked(&[
            "log",
            &limit,
            "--format=%H%x00%h%x00%s%x00%an%x00%ae%x00%cI",
        ])?;

        stdout
            .lines()
            .filter(|line| !line.is_empty())
            .map(parse_commit_record)
            .collect()
    }

    fn remotes(&self) -> Result<Vec<RemoteInfo>> {
        let lines = self.run_git_lines(&["remote", "-v"])?;

        let mut remotes = std::collections::BTreeMap::new();
        for line in &lines {
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() < 3 {
                continue;
            }
            let name = parts[0];
            let url = parts[1];
            let remote_type = parts[2].trim_matches(|c| c == '(' || c == ')');

            let entry = remotes
                .entry(name.to_string())
                .or_insert_with(|| RemoteInfo {
                    name: name.to_string(),
                    fetch_url: String::new(),
                    push_url: String::new(),
                });

            if remote_type == "fetch" {
                entry.fetch_url = url.to_string();
            } else if remote_type == "push" {
                entry.push_url = url.to_string();
            }
        }

        Ok(remotes.into_values().collect())
    }
}

fn parse_status_line(line: &str) -> Option<StatusEntry> {
    if line.len() < 4 {
        return None;
    }
    Some(StatusEntry {
        status: line[..2].to_string(),
        path: line[3..].to_string(),
    })
}

fn parse_commit_record(record: &str) -> Result<CommitInfo> {
    let parts: Vec<&str> = record.split('\0').collect();
    if parts.len() < 6 {
        return Err(GitError::UnexpectedOutput {
            command: "log".to_string(),
            reason: format!("expected 6 fields, found {}", parts.len()),
        }
        .into());
    }

    let timestamp = DateTime::parse_from_rfc3339(parts[5]).map_err(|e| {
        GitError::UnexpectedOutput {
            command: "log".to_string(),
            reason: format!("bad committer date '{}': {}", parts[5], e),
        }
    })?;

    Ok(CommitInfo {
        hash: parts[0].to_string(),
        short_hash: parts[1].to_string(),
        subject: parts[2].to_string(),
        author_name: parts[3].to_string(),
        author_email: parts[4].to_string(),
        timestamp,
    })
}
