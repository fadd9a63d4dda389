//! Sync and sync-if-needed command implementations

use colored::Colorize;

use projgen_core::{SyncOutcome, SyncReport};
use projgen_fs::NormalizedPath;

use super::engine_for;
use crate::error::{CliError, Result};

/// Run the sync command
///
/// Regenerates every project file, or lists them for `--dry-run`.
pub fn run_sync(root: &NormalizedPath, dry_run: bool, json: bool) -> Result<()> {
    let engine = engine_for(root)?;

    if dry_run {
        let plan = engine.plan()?;
        if json {
            let paths: Vec<&str> = plan.files.iter().map(|file| file.path.as_str()).collect();
            println!("{}", serde_json::to_string_pretty(&paths)?);
        } else {
            println!("{} Would write:", "=>".blue().bold());
            for file in &plan.files {
                println!("   {} {}", "+".green(), file.path.as_str().cyan());
            }
        }
        return Ok(());
    }

    if !json {
        println!("{} Generating project files...", "=>".blue().bold());
    }
    let report = engine.sync_always();
    print_report(&report, json)
}

/// Run the sync-if-needed command
///
/// Regenerates project files only if the change batch touches sources,
/// module definitions or reimported binaries, or no index exists yet.
pub fn run_sync_if_needed(
    root: &NormalizedPath,
    changed: &[String],
    reimported: &[String],
    json: bool,
) -> Result<()> {
    let engine = engine_for(root)?;
    let report = engine.sync_if_needed(changed, reimported);
    print_report(&report, json)
}

fn print_report(report: &SyncReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        match report.outcome {
            SyncOutcome::Skipped => {
                println!("{} No relevant changes. Nothing to do.", "OK".green().bold());
            }
            SyncOutcome::Regenerated => {
                if let Some(reason) = &report.reason {
                    println!("{} Regenerated ({}):", "OK".green().bold(), reason);
                } else {
                    println!("{} Regenerated:", "OK".green().bold());
                }
                for path in &report.written {
                    println!("   {} {}", "+".green(), path);
                }
            }
            SyncOutcome::Failed => {
                println!("{} Generation failed:", "ERROR".red().bold());
                for error in &report.errors {
                    println!("   {} {}", "!".red(), error);
                }
            }
        }
    }

    if report.is_success() {
        Ok(())
    } else {
        Err(CliError::user("Generation failed"))
    }
}
