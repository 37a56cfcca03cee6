//! Branch listings and minor-version (release line) detection.
//!
//! Release lines are encoded as branches named
//! `<release_branch_prefix><major>.<minor>`, locally or on any remote.

use crate::error::Result;
use crate::git::GitRepository;
use crate::version::{parse_release_branch, release_branch_regex, ReleaseLine};
use std::collections::BTreeSet;

impl GitRepository {
    /// Names of all local branches
    pub fn local_branches(&self) -> Result<Vec<String>> {
        let lines = self.run_git_lines(&["branch", "--list", "--format=%(refname)"])?;
        Ok(lines
            .into_iter()
            .filter_map(|name| {
                name.strip_prefix("refs/heads/").map(str::to_string)
            })
            .collect())
    }

    /// Names of all remote-tracking branches, remote prefix included.
    ///
    /// The symbolic `<remote>/HEAD` entry is skipped.
    pub fn remote_branches(&self) -> Result<Vec<String>> {
        let lines = self.run_git_lines(&["branch", "-r", "--list", "--format=%(refname)"])?;
        Ok(lines
            .into_iter()
            .filter_map(|name| {
                name.strip_prefix("refs/remotes/").map(str::to_string)
            })
            .filter(|name| !name.ends_with("/HEAD"))
            .collect())
    }

    /// Release lines encoded as branches, ascending and deduplicated.
    ///
    /// Both local and remote branches are scanned; a line present in both
    /// places appears once. Branch names that do not match the configured
    /// pattern are ignored.
    pub fn release_lines(&self) -> Result<Vec<ReleaseLine>> {
        let pattern = release_branch_regex(&self.config().release_branch_prefix)?;

        let mut lines = BTreeSet::new();
        for name in self.local_branches()? {
            if let Some(line) = parse_release_branch(&name, &pattern) {
                lines.insert(line);
            }
        }
        for name in self.remote_branches()? {
            // Strip the remote part so `origin/release/1.4` matches too.
            let local_part = name.split_once('/').map(|(_, rest)| rest).unwrap_or(&name);
            if let Some(line) = parse_release_branch(local_part, &pattern) {
                lines.insert(line);
            }
        }

        log::debug!("found {} release line(s)", lines.len());
        Ok(lines.into_iter().collect())
    }

    /// The highest release line, or `None` when no release branches exist
    pub fn latest_release_line(&self) -> Result<Option<ReleaseLine>> {
        Ok(self.release_lines()?.into_iter().next_back())
    }
}
