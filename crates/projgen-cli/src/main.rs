//! projgen CLI
//!
//! Generates IDE project files from a host module graph and opens the
//! workspace in the external editor.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands, ConfigAction};
use error::{CliError, Result};
use projgen_fs::NormalizedPath;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)
        .map_err(|e| CliError::user(format!("Failed to initialise logging: {}", e)))?;
    tracing::debug!("Verbose mode enabled");

    match cli.command {
        Some(cmd) => {
            let root = resolve_root(cli.root)?;
            execute_command(&root, cmd)
        }
        None => {
            println!("{} IDE project file generator", "projgen".green().bold());
            println!();
            println!("Run {} for available commands.", "projgen --help".cyan());
            Ok(())
        }
    }
}

/// The workspace root: `--root`, or the current directory.
fn resolve_root(root: Option<std::path::PathBuf>) -> Result<NormalizedPath> {
    let path = match root {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    if !path.is_dir() {
        return Err(CliError::user(format!(
            "Workspace root {} is not a directory",
            path.display()
        )));
    }
    Ok(NormalizedPath::canonical(&path)?)
}

fn execute_command(root: &NormalizedPath, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Sync { dry_run, json } => commands::run_sync(root, dry_run, json),
        Commands::SyncIfNeeded {
            changed,
            reimported,
            json,
        } => commands::run_sync_if_needed(root, &changed, &reimported, json),
        Commands::Open {
            file,
            line,
            column,
            editor,
            print,
            no_sync,
        } => commands::run_open(
            root,
            file.as_deref(),
            line,
            column,
            editor.as_deref(),
            print,
            no_sync,
        ),
        Commands::Installations { json } => commands::run_installations(json),
        Commands::Config { action } => match action {
            ConfigAction::Show { json } => commands::run_config_show(root, json),
            ConfigAction::Set { key, value } => commands::run_config_set(root, &key, &value),
        },
    }
}
