//! Shared test utilities for the projgen workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`workspace`]: [`TestWorkspace`](workspace::TestWorkspace) builder for a
//!   host project root with an exported module graph

pub mod workspace;

pub use workspace::{GraphBuilder, TestWorkspace};
