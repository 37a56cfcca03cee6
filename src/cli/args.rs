//! Command line argument parsing and validation.

use crate::version::ReleaseLine;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// relver - Git CLI integration for detecting and advancing release versions
#[derive(Parser, Debug)]
#[command(
    name = "relver",
    version,
    about = "Inspect git repositories for release pipelines",
    long_about = "relver wraps the git command-line tool to report repository status, \
diffs, commit hashes and branch lists, and to detect minor and patch release \
versions encoded as git branches and tags."
)]
pub struct Args {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors and results
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to the repository (defaults to current directory)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub repo: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show working directory status
    Status {
        /// Format output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the currently checked-out branch
    Branch,

    /// Print the HEAD commit hash
    Head {
        /// Print the abbreviated hash
        #[arg(short, long)]
        short: bool,
    },

    /// List branches
    Branches {
        /// List remote-tracking branches instead of local ones
        #[arg(long)]
        remote: bool,
    },

    /// List version tags in ascending semantic order
    Tags {
        /// List all tags verbatim instead of parsed version tags
        #[arg(long)]
        all: bool,
    },

    /// Print the tag-derived version string for the current checkout
    Describe,

    /// Show changes in the working tree
    Diff {
        /// Diff against this ref instead of HEAD
        #[arg(long, value_name = "REF")]
        base: Option<String>,

        /// Print changed paths only
        #[arg(long)]
        name_only: bool,
    },

    /// List release lines encoded as branches
    Lines {
        /// Format output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the latest released version on a release line
    Latest {
        /// Release line to inspect (defaults to the highest line)
        #[arg(long, value_name = "X.Y")]
        line: Option<ReleaseLine>,

        /// Format output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the version the next patch release on a line would carry
    Next {
        /// Release line to advance
        #[arg(long, value_name = "X.Y")]
        line: ReleaseLine,
    },
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get repository path or default to current directory
    pub fn repo_path(&self) -> PathBuf {
        self.repo.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if let Some(ref repo) = self.repo {
            if !repo.exists() {
                return Err(format!("Repository path does not exist: {}", repo.display()));
            }
            if !repo.is_dir() {
                return Err(format!(
                    "Repository path is not a directory: {}",
                    repo.display()
                ));
            }
        }

        Ok(())
    }
}

impl Command {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Command::Status { .. } => "status",
            Command::Branch => "branch",
            Command::Head { .. } => "head",
            Command::Branches { .. } => "branches",
            Command::Tags { .. } => "tags",
            Command::Describe => "describe",
            Command::Diff { .. } => "diff",
            Command::Lines { .. } => "lines",
            Command::Latest { .. } => "latest",
            Command::Next { .. } => "next",
        }
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Repository path
    pub repo_path: PathBuf,
    /// Verbosity level
    pub verbosity: VerbosityLevel,
}

/// Verbosity level for output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbosityLevel {
    /// Minimal output, results and errors only
    Quiet,
    /// Standard output level
    Normal,
    /// Detailed output with debug information
    Verbose,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        let verbosity = if args.quiet {
            VerbosityLevel::Quiet
        } else if args.verbose {
            VerbosityLevel::Verbose
        } else {
            VerbosityLevel::Normal
        };

        Self {
            repo_path: args.repo_path(),
            verbosity,
        }
    }
}

impl RuntimeConfig {
    /// Check if output should be suppressed
    pub fn is_quiet(&self) -> bool {
        self.verbosity == VerbosityLevel::Quiet
    }

    /// Check if verbose output is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbosity == VerbosityLevel::Verbose
    }

    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) {
        if self.is_verbose() {
            println!("🔍 {}", message);
        }
    }

    /// Print error message (always shown)
    pub fn error_println(&self, message: &str) {
        eprintln!("❌ {}", message);
    }
}
