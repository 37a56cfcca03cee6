//! Configuration for git operations.

/// Configuration for branch and tag naming conventions
#[derive(Debug, Clone)]
pub struct GitConfig {
    /// Prefix of branches encoding a release line (`release/` by default)
    pub release_branch_prefix: String,
    /// Prefix of tags encoding a released version (`v` by default)
    pub version_tag_prefix: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            release_branch_prefix: "release/".to_string(),
            version_tag_prefix: "v".to_string(),
        }
    }
}
