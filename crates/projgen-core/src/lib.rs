//! Project file generation for projgen
//!
//! Turns a host build system's module graph into IDE project files:
//!
//! - **Descriptors**: one `<module>.csproj` per included module
//! - **Index**: one `<root>.sln` registering every descriptor
//! - **Editor settings**: `.vscode/settings.json` hiding generated and binary artifacts
//!
//! and decides per change batch whether regenerating them is needed.
//!
//! # Architecture
//!
//! ```text
//!   ModuleGraph ──> SyncEngine ──> FilterPolicy ──> Descriptor ──> <module>.csproj
//!                       │                      └──> Index ──────> <root>.sln
//!                       └──> editor_settings ───────────────────> .vscode/settings.json
//! ```
//!
//! Module identifiers are derived from module names ([`identifier`]), so the
//! descriptors and the index agree with each other and stay the same across
//! regenerations.

pub mod descriptor;
pub mod editor_settings;
pub mod error;
pub mod filter;
pub mod identifier;
pub mod index;
pub mod manifest;
pub mod model;
pub mod settings;
pub mod sync;

pub use descriptor::{Descriptor, descriptor_file_name};
pub use error::{Error, Result};
pub use filter::{FilterPolicy, Inclusion};
pub use identifier::{ModuleId, derive_id};
pub use index::{Index, IndexEntry, index_file_name};
pub use manifest::{GraphManifest, ManifestGraph, ModuleEntry, PackageEntry};
pub use model::{Module, ModuleGraph, Provenance, Snapshot};
pub use settings::Settings;
pub use sync::{SyncDecision, SyncEngine, SyncOutcome, SyncPlan, SyncReason, SyncReport};
