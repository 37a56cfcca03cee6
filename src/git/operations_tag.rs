//! Tag listings and patch-version detection.
//!
//! Released versions are encoded as tags named
//! `<version_tag_prefix><major>.<minor>.<patch>`.

use crate::error::Result;
use crate::git::GitRepository;
use crate::version::{parse_version_tag, version_tag_regex, ReleaseLine};
use semver::Version;

impl GitRepository {
    /// All tag names, as git emits them
    pub fn tags(&self) -> Result<Vec<String>> {
        self.run_git_lines(&["tag", "--list"])
    }

    /// Versions encoded as tags, ascending semantic order.
    ///
    /// Tags that do not match the configured pattern (including tags with
    /// pre-release or build suffixes) are ignored.
    pub fn version_tags(&self) -> Result<Vec<Version>> {
        let pattern = version_tag_regex(&self.config().version_tag_prefix)?;

        let mut versions: Vec<Version> = self
            .tags()?
            .iter()
            .filter_map(|tag| parse_version_tag(tag, &pattern))
            .collect();
        versions.sort();
        Ok(versions)
    }

    /// Versions on the given release line, ascending
    pub fn patch_versions(&self, line: ReleaseLine) -> Result<Vec<Version>> {
        Ok(self
            .version_tags()?
            .into_iter()
            .filter(|version| line.contains(version))
            .collect())
    }

    /// The highest released version on the line, or `None` when untagged
    pub fn latest_patch(&self, line: ReleaseLine) -> Result<Option<Version>> {
        Ok(self.patch_versions(line)?.into_iter().next_back())
    }

    /// The version the next patch release on the line would carry.
    ///
    /// `<line>.0` when the line has no tags yet, otherwise the successor of
    /// the highest existing patch version.
    pub fn next_patch(&self, line: ReleaseLine) -> Result<Version> {
        Ok(match self.latest_patch(line)? {
            Some(latest) => Version::new(latest.major, latest.minor, latest.patch + 1),
            None => line.floor_version(),
        })
    }

    /// Check whether a tag with the given name exists
    pub fn tag_exists(&self, tag_name: &str) -> Result<bool> {
        let output = self.run_git_checked(&["tag", "--list", tag_name])?;
        Ok(!output.is_empty())
    }

    /// The tag-derived version string for the current checkout.
    ///
    /// Wraps `git describe --tags --always --dirty`, so the result is an
    /// exact tag name on a tagged commit, a `<tag>-<n>-g<hash>` stamp past
    /// one, or a bare hash in an untagged repository.
    pub fn describe(&self) -> Result<String> {
        self.run_git_checked(&["describe", "--tags", "--always", "--dirty"])
    }
}
