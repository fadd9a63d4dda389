//! Open and installations command implementations
//!
//! Launches the external editor on the workspace root, generating project
//! files first if none exist yet.

use std::path::{Path, PathBuf};

use colored::Colorize;

use projgen_core::ManifestGraph;
use projgen_editor::{EditorProfile, Installation, LaunchTarget, Launcher, OpenResult, Platform};
use projgen_fs::NormalizedPath;

use super::engine_for;
use crate::error::{CliError, Result};

const EDITOR: EditorProfile = EditorProfile::ANTIGRAVITY;

/// Resolve the installation to launch: an explicit path, or the first found.
fn resolve_installation(editor: Option<&Path>) -> Result<Installation> {
    match editor {
        Some(path) => Ok(Installation::require(&EDITOR, path)?),
        None => Installation::find(&EDITOR, Platform::current()).map_err(|_| {
            CliError::user(format!(
                "No {} installation found. Pass --editor <path> to choose one.",
                EDITOR.name
            ))
        }),
    }
}

/// Resolve a target file relative to the workspace root.
fn resolve_target(root: &NormalizedPath, file: &Path) -> PathBuf {
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        root.to_native().join(file)
    }
}

/// Run the open command
pub fn run_open(
    root: &NormalizedPath,
    file: Option<&Path>,
    line: i64,
    column: i64,
    editor: Option<&Path>,
    print: bool,
    no_sync: bool,
) -> Result<()> {
    let installation = resolve_installation(editor)?;
    let launcher = Launcher::new(installation);
    let target = file.map(|file| LaunchTarget::new(resolve_target(root, file), line, column));

    if print {
        match launcher.command(&root.to_native(), target.as_ref()) {
            Some(command) => {
                let mut parts = vec![command.program.display().to_string()];
                parts.extend(command.args.iter().map(|arg| arg.to_string_lossy().into_owned()));
                println!("{}", parts.join(" "));
            }
            None => println!("{} Not handled by {}.", "SKIP".yellow().bold(), EDITOR.name),
        }
        return Ok(());
    }

    if !no_sync && ManifestGraph::for_root(root).path().is_file() {
        let engine = engine_for(root)?;
        let no_changes: [&str; 0] = [];
        let report = engine.sync_if_needed(no_changes, no_changes);
        if !report.is_success() {
            println!(
                "{} Project generation failed: {}",
                "WARN".yellow().bold(),
                report.errors.join("; ")
            );
        }
    }

    println!(
        "{} Launching {} ...",
        "=>".blue().bold(),
        launcher.installation().path.display().to_string().cyan()
    );

    match launcher.open(&root.to_native(), target.as_ref()) {
        OpenResult::Launched => {
            println!("{} Opened in {}.", "OK".green().bold(), EDITOR.name);
            Ok(())
        }
        OpenResult::NotHandled => {
            println!("{} Not handled by {}.", "SKIP".yellow().bold(), EDITOR.name);
            Ok(())
        }
        OpenResult::Failed(message) => Err(CliError::user(message)),
    }
}

/// Run the installations command
pub fn run_installations(json: bool) -> Result<()> {
    let installations = Installation::discover(&EDITOR, Platform::current());

    if json {
        println!("{}", serde_json::to_string_pretty(&installations)?);
        return Ok(());
    }

    if installations.is_empty() {
        println!("{} No {} installation found.", "=>".blue().bold(), EDITOR.name);
        return Ok(());
    }

    println!("{} {} installations:", "=>".blue().bold(), EDITOR.name);
    for installation in &installations {
        println!("   {} {}", "-".green(), installation.path.display());
    }
    Ok(())
}
