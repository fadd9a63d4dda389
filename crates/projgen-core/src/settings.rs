//! Generation settings persisted in `.projgen/settings.toml`.

use std::collections::BTreeMap;

use projgen_fs::{ConfigStore, NormalizedPath, WorkspacePath};
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::model::Provenance;

/// User-controlled generation settings.
///
/// `sources` maps a provenance key (see [`Provenance::as_str`]) to whether
/// modules of that provenance get project files. Loading from disk fills
/// every packaged provenance the file omits with its default. A provenance
/// with no entry, as in [`Settings::empty`], is unconfigured and its modules
/// are excluded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Show `.meta` files in the editor's file tree
    #[serde(default = "default_show_meta_files")]
    pub show_meta_files: bool,

    #[serde(default)]
    sources: BTreeMap<String, bool>,
}

fn default_show_meta_files() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        let mut settings = Self::empty();
        settings.set_source(Provenance::Embedded, true);
        settings.set_source(Provenance::LocalPath, true);
        settings.set_source(Provenance::Registry, false);
        settings.set_source(Provenance::VersionControl, false);
        settings.set_source(Provenance::BuiltIn, false);
        settings.set_source(Provenance::LocalArchive, false);
        settings.set_source(Provenance::Unknown, false);
        settings
    }
}

impl Settings {
    /// Settings with no provenance configured.
    pub fn empty() -> Self {
        Self {
            show_meta_files: default_show_meta_files(),
            sources: BTreeMap::new(),
        }
    }

    /// Configured inclusion for `provenance`, or `None` if unconfigured.
    pub fn source(&self, provenance: Provenance) -> Option<bool> {
        self.sources.get(provenance.as_str()).copied()
    }

    pub fn set_source(&mut self, provenance: Provenance, include: bool) {
        self.sources.insert(provenance.as_str().to_string(), include);
    }

    pub fn with_source(mut self, provenance: Provenance, include: bool) -> Self {
        self.set_source(provenance, include);
        self
    }

    pub fn with_meta_files(mut self, show: bool) -> Self {
        self.show_meta_files = show;
        self
    }

    /// Location of the settings file under `root`.
    pub fn path(root: &NormalizedPath) -> NormalizedPath {
        root.join(WorkspacePath::SettingsFile.as_str())
    }

    /// Load settings for `root`, falling back to defaults when no file exists.
    ///
    /// Keys that do not name a provenance are dropped with a warning. Packaged
    /// provenances the file leaves out take their default value.
    pub fn load_or_default(root: &NormalizedPath) -> Result<Self> {
        let path = Self::path(root);
        if !path.exists() {
            tracing::debug!(path = %path, "no settings file, using defaults");
            return Ok(Self::default());
        }

        let mut settings: Settings = ConfigStore::new().load(&path)?;
        // Aliases such as `git` are stored under their canonical key
        settings.sources = std::mem::take(&mut settings.sources)
            .into_iter()
            .filter_map(|(key, value)| match key.parse::<Provenance>() {
                Ok(provenance) if provenance.is_packaged() => {
                    Some((provenance.as_str().to_string(), value))
                }
                _ => {
                    tracing::warn!(key = %key, "ignoring unrecognised source setting");
                    None
                }
            })
            .collect();

        let defaults = Self::default();
        for provenance in Provenance::PACKAGED {
            if let Some(include) = defaults.source(provenance) {
                settings
                    .sources
                    .entry(provenance.as_str().to_string())
                    .or_insert(include);
            }
        }
        Ok(settings)
    }

    /// Persist settings for `root`.
    pub fn save(&self, root: &NormalizedPath) -> Result<()> {
        ConfigStore::new().save(&Self::path(root), self)?;
        Ok(())
    }
}
