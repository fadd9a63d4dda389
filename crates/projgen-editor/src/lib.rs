//! External editor integration for projgen
//!
//! Finds installations of the external editor and opens a workspace root,
//! optionally jumping to a file position.
//!
//! # Modules
//!
//! - [`profile`]: editor identity and per-platform install locations
//! - [`installation`]: discovery and recognition of installations
//! - [`launch`]: launch command construction and process spawning

pub mod error;
pub mod installation;
pub mod launch;
pub mod profile;

pub use error::{Error, Result};
pub use installation::Installation;
pub use launch::{LaunchCommand, LaunchTarget, Launcher, OpenResult, REJECTED_EXTENSIONS};
pub use profile::{EditorProfile, Platform};
