//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// projgen - Generate IDE project files from a host module graph
#[derive(Parser, Debug)]
#[command(name = "projgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Workspace root (defaults to the current directory)
    #[arg(long, global = true, env = "PROJGEN_ROOT")]
    pub root: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Regenerate every project file unconditionally
    Sync {
        /// Show the files that would be written without writing them
        #[arg(long)]
        dry_run: bool,

        /// Output the report as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Regenerate project files only if a change batch requires it
    ///
    /// Examples:
    ///   projgen sync-if-needed -c Assets/Player.cs
    ///   projgen sync-if-needed -r Assets/Plugins/Native.dll
    SyncIfNeeded {
        /// Added, deleted, moved or imported asset path
        #[arg(short, long = "changed")]
        changed: Vec<String>,

        /// Reimported asset path
        #[arg(short, long = "reimported")]
        reimported: Vec<String>,

        /// Output the report as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Open the workspace in the external editor
    Open {
        /// File to jump to
        file: Option<PathBuf>,

        /// Line to jump to
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        line: i64,

        /// Column to jump to
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        column: i64,

        /// Editor executable or application bundle to use
        #[arg(short, long)]
        editor: Option<PathBuf>,

        /// Print the launch command instead of running it
        #[arg(long)]
        print: bool,

        /// Do not generate missing project files before opening
        #[arg(long)]
        no_sync: bool,
    },

    /// List editor installations found on this machine
    Installations {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show or change generation settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Settings actions
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show the effective settings
    Show {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Change one setting
    ///
    /// Examples:
    ///   projgen config set registry true
    ///   projgen config set show-meta-files false
    Set {
        /// A package source (e.g. registry, git, embedded) or show-meta-files
        key: String,

        /// true or false
        value: String,
    },
}
