//! Release line values.
//!
//! A release line is the `major.minor` pair a release branch encodes; patch
//! releases within the line are encoded as version tags.

use crate::error::{Result, VersionError};
use regex::Regex;
use semver::Version;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A `major.minor` release line.
///
/// Ordering is numeric per component, so `1.10` sorts after `1.9`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ReleaseLine {
    /// Major version component
    pub major: u64,
    /// Minor version component
    pub minor: u64,
}

impl ReleaseLine {
    /// Create a release line from its components
    pub fn new(major: u64, minor: u64) -> Self {
        Self { major, minor }
    }

    /// The release line a full version belongs to
    pub fn of_version(version: &Version) -> Self {
        Self {
            major: version.major,
            minor: version.minor,
        }
    }

    /// The lowest version on this line (`major.minor.0`)
    pub fn floor_version(&self) -> Version {
        Version::new(self.major, self.minor, 0)
    }

    /// Check whether a full version belongs to this line
    pub fn contains(&self, version: &Version) -> bool {
        version.major == self.major && version.minor == self.minor
    }
}

impl fmt::Display for ReleaseLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for ReleaseLine {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| VersionError::InvalidReleaseLine {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let (major, minor) = s
            .split_once('.')
            .ok_or_else(|| invalid("expected 'major.minor'"))?;
        let major = major
            .parse::<u64>()
            .map_err(|_| invalid("major component is not a number"))?;
        let minor = minor
            .parse::<u64>()
            .map_err(|_| invalid("minor component is not a number"))?;

        Ok(Self { major, minor })
    }
}

/// Compile the pattern matching release branch names for a prefix.
///
/// Matches `<prefix><major>.<minor>` exactly; the remote part of a remote
/// branch name must be stripped before matching.
pub(crate) fn release_branch_regex(prefix: &str) -> Result<Regex> {
    compile(&format!(r"^{}(\d+)\.(\d+)$", regex::escape(prefix)))
}

/// Compile the pattern matching version tag names for a prefix.
///
/// Matches `<prefix><major>.<minor>.<patch>` exactly; tags carrying
/// pre-release or build suffixes do not match.
pub(crate) fn version_tag_regex(prefix: &str) -> Result<Regex> {
    compile(&format!(r"^{}(\d+)\.(\d+)\.(\d+)$", regex::escape(prefix)))
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| {
        VersionError::PatternFailed {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// Extract the release line from a branch name, if it matches the pattern
pub(crate) fn parse_release_branch(name: &str, pattern: &Regex) -> Option<ReleaseLine> {
    let caps = pattern.captures(name)?;
    let major = caps.get(1)?.as_str().parse().ok()?;
    let minor = caps.get(2)?.as_str().parse().ok()?;
    Some(ReleaseLine { major, minor })
}

/// Extract the version from a tag name, if it matches the pattern
pub(crate) fn parse_version_tag(name: &str, pattern: &Regex) -> Option<Version> {
    let caps = pattern.captures(name)?;
    let major = caps.get(1)?.as_str().parse().ok()?;
    let minor = caps.get(2)?.as_str().parse().ok()?;
    let patch = caps.get(3)?.as_str().parse().ok()?;
    Some(Version::new(major, minor, patch))
}
