//! Filesystem abstraction for projgen
//!
//! Provides forward-slash path handling, atomic writes and format-agnostic
//! configuration loading for the generated workspace files.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use constants::WorkspacePath;
pub use error::{Error, Result};
pub use path::NormalizedPath;
