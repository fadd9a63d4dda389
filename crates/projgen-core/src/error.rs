//! Error types for projgen-core

use std::path::PathBuf;

/// Result type for projgen-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a module graph or generating files
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No module graph document at the expected path
    #[error("Module graph not found at {path}")]
    GraphNotFound { path: PathBuf },

    /// The module graph names the same module twice
    #[error("Duplicate module '{name}' in module graph")]
    DuplicateModule { name: String },

    /// A module name that cannot be used as a file name under the root
    #[error("Module name '{name}' cannot be used as a descriptor file name")]
    InvalidModuleName { name: String },

    /// Unrecognised provenance name in settings or a graph document
    #[error("Unknown provenance: {name}")]
    UnknownProvenance { name: String },

    /// The workspace root has no final path component to name the index after
    #[error("Workspace root {path} has no directory name")]
    InvalidRoot { path: String },

    /// Filesystem error from projgen-fs
    #[error(transparent)]
    Fs(#[from] projgen_fs::Error),

    /// XML writer error while rendering a descriptor
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Writer error surfaced by the XML emitter's sink
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Rendered document was not valid UTF-8
    #[error(transparent)]
    Encoding(#[from] std::string::FromUtf8Error),

    /// JSON serialization/deserialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
