//! Command execution for the relver binary.

use crate::cli::{Args, Command, RuntimeConfig};
use crate::error::{Result, VersionError};
use crate::git::{GitOperations, GitRepository, StatusEntry};
use crate::version::ReleaseLine;
use serde::Serialize;

/// Execute the main command based on parsed arguments
pub fn execute_command(args: Args) -> Result<i32> {
    if let Err(e) = crate::cli::validate_args(&args) {
        eprintln!("❌ {}", e);
        return Ok(1);
    }

    let config = RuntimeConfig::from(&args);
    config.verbose_println(&format!("repository: {}", config.repo_path.display()));

    match run_command(&args, &config) {
        Ok(()) => Ok(0),
        Err(e) => {
            config.error_println(&format!("Command '{}' failed: {}", args.command.name(), e));

            let suggestions = e.recovery_suggestions();
            if config.is_verbose() && !suggestions.is_empty() {
                eprintln!("💡 Recovery suggestions:");
                for suggestion in suggestions {
                    eprintln!("  • {}", suggestion);
                }
            }

            Ok(1)
        }
    }
}

fn run_command(args: &Args, config: &RuntimeConfig) -> Result<()> {
    let repo = GitRepository::open(&config.repo_path)?;

    match &args.command {
        Command::Status { json } => execute_status(&repo, *json),
        Command::Branch => execute_branch(&repo),
        Command::Head { short } => execute_head(&repo, *short),
        Command::Branches { remote } => execute_branches(&repo, *remote),
        Command::Tags { all } => execute_tags(&repo, *all),
        Command::Describe => execute_describe(&repo),
        Command::Diff { base, name_only } => execute_diff(&repo, base.as_deref(), *name_only),
        Command::Lines { json } => execute_lines(&repo, *json),
        Command::Latest { line, json } => execute_latest(&repo, *line, *json),
        Command::Next { line } => execute_next(&repo, *line),
    }
}

/// Status report serialized by `status --json`
#[derive(Serialize)]
struct StatusReport {
    clean: bool,
    entries: Vec<StatusEntry>,
}

fn execute_status(repo: &GitRepository, json: bool) -> Result<()> {
    let entries = repo.status_entries()?;

    if json {
        let report = StatusReport {
            clean: entries.is_empty(),
            entries,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("working directory clean");
    } else {
        for entry in entries {
            println!("{} {}", entry.status, entry.path);
        }
    }
    Ok(())
}

fn execute_branch(repo: &GitRepository) -> Result<()> {
    let info = repo.current_branch()?;
    match info.upstream {
        Some(upstream) => println!("{} {} (upstream: {})", info.name, info.commit_hash, upstream),
        None => println!("{} {}", info.name, info.commit_hash),
    }
    Ok(())
}

fn execute_head(repo: &GitRepository, short: bool) -> Result<()> {
    let hash = if short {
        repo.short_head_commit()?
    } else {
        repo.head_commit()?
    };
    println!("{}", hash);
    Ok(())
}

fn execute_branches(repo: &GitRepository, remote: bool) -> Result<()> {
    let branches = if remote {
        repo.remote_branches()?
    } else {
        repo.local_branches()?
    };
    for branch in branches {
        println!("{}", branch);
    }
    Ok(())
}

fn execute_tags(repo: &GitRepository, all: bool) -> Result<()> {
    if all {
        for tag in repo.tags()? {
            println!("{}", tag);
        }
    } else {
        for version in repo.version_tags()? {
            println!("{}", version);
        }
    }
    Ok(())
}

fn execute_describe(repo: &GitRepository) -> Result<()> {
    println!("{}", repo.describe()?);
    Ok(())
}

fn execute_diff(repo: &GitRepository, base: Option<&str>, name_only: bool) -> Result<()> {
    if name_only {
        for path in repo.changed_files(base)? {
            println!("{}", path);
        }
    } else {
        print!("{}", repo.diff(base)?);
    }
    Ok(())
}

fn execute_lines(repo: &GitRepository, json: bool) -> Result<()> {
    let lines = repo.release_lines()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&lines)?);
        return Ok(());
    }

    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

fn execute_latest(repo: &GitRepository, line: Option<ReleaseLine>, json: bool) -> Result<()> {
    let line = match line {
        Some(line) => line,
        None => repo
            .latest_release_line()?
            .ok_or(VersionError::NoReleaseLines)?,
    };

    let version = repo
        .latest_patch(line)?
        .ok_or_else(|| VersionError::NoVersionsForLine {
            line: line.to_string(),
        })?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "line": line,
                "version": version,
            }))?
        );
    } else {
        println!("{}", version);
    }
    Ok(())
}

fn execute_next(repo: &GitRepository, line: ReleaseLine) -> Result<()> {
    println!("{}", repo.next_patch(line)?);
    Ok(())
}
