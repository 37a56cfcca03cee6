//! Command line interface for relver.

mod args;
mod commands;

pub use args::{Args, Command, RuntimeConfig, VerbosityLevel};
pub use commands::execute_command;

use crate::error::{CliError, Result};

/// Main CLI entry point
pub fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute_command(args)
}

/// Validate arguments without executing
pub fn validate_args(args: &Args) -> Result<()> {
    args.validate()
        .map_err(|e| CliError::InvalidArguments { reason: e }.into())
}
