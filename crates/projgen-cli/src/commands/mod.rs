//! Command implementations for projgen-cli

pub mod config;
pub mod open;
pub mod sync;

pub use config::{run_config_set, run_config_show};
pub use open::{run_installations, run_open};
pub use sync::{run_sync, run_sync_if_needed};

use projgen_core::{ManifestGraph, Settings, SyncEngine};
use projgen_fs::NormalizedPath;

use crate::error::Result;

/// Build a sync engine for `root` from its graph document and settings.
pub fn engine_for(root: &NormalizedPath) -> Result<SyncEngine> {
    let settings = Settings::load_or_default(root)?;
    Ok(SyncEngine::new(
        root.clone(),
        ManifestGraph::for_root(root),
        settings,
    ))
}
