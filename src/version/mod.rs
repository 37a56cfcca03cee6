//! Release line and version pattern handling.
//!
//! This module owns the `major.minor` release line value type and the
//! branch/tag name patterns shared by the git modules and the CLI.

mod lines;

pub use lines::ReleaseLine;

pub(crate) use lines::{
    parse_release_branch, parse_version_tag, release_branch_regex, version_tag_regex,
};
