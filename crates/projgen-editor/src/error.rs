//! Error types for projgen-editor

use std::path::PathBuf;

/// Result type for projgen-editor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while locating or starting an editor
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No {editor} installation found")]
    NoInstallation { editor: String },

    #[error("{path} is not a recognised {editor} installation")]
    UnrecognisedInstallation { path: PathBuf, editor: String },

    #[error("Failed to launch '{program}': {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
