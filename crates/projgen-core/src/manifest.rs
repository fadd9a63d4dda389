//! File-backed module graph (`.projgen/graph.json`).
//!
//! The host build system exports its resolved module graph as JSON. Modules
//! that do not state a provenance are classified by the package that owns
//! their first source file.

use std::collections::HashSet;

use projgen_fs::{ConfigStore, NormalizedPath, WorkspacePath};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{Module, ModuleGraph, Provenance};

/// A package root and where its contents come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageEntry {
    /// Path prefix owned by the package, e.g. `Packages/com.acme.net/`
    pub prefix: String,
    pub source: Provenance,
}

/// One module as exported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleEntry {
    pub name: String,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub compiled_references: Vec<String>,
    #[serde(default)]
    pub references: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provenance: Option<Provenance>,
}

/// The exported graph document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphManifest {
    #[serde(default)]
    pub packages: Vec<PackageEntry>,
    #[serde(default)]
    pub modules: Vec<ModuleEntry>,
}

impl GraphManifest {
    /// Provenance of the package owning `path`, by longest matching prefix.
    ///
    /// `None` means the path belongs to no package, i.e. project code.
    pub fn provenance_of(&self, path: &NormalizedPath) -> Option<Provenance> {
        self.packages
            .iter()
            .filter(|package| path.as_str().starts_with(package.prefix.as_str()))
            .max_by_key(|package| package.prefix.len())
            .map(|package| package.source)
    }

    /// Convert to modules, in document order.
    pub fn to_modules(&self) -> Result<Vec<Module>> {
        let mut seen = HashSet::new();
        let mut modules = Vec::with_capacity(self.modules.len());

        for entry in &self.modules {
            if !seen.insert(entry.name.as_str()) {
                return Err(Error::DuplicateModule {
                    name: entry.name.clone(),
                });
            }

            let module = Module::new(entry.name.clone())
                .with_sources(entry.sources.iter().map(String::as_str))
                .with_compiled_references(entry.compiled_references.iter().map(String::as_str))
                .with_references(entry.references.iter().cloned());

            let provenance = entry.provenance.unwrap_or_else(|| {
                module
                    .source_files
                    .first()
                    .and_then(|first| self.provenance_of(first))
                    .unwrap_or(Provenance::ProjectLocal)
            });

            modules.push(module.with_provenance(provenance));
        }

        Ok(modules)
    }
}

/// Module graph read from a JSON document on every call.
#[derive(Debug, Clone)]
pub struct ManifestGraph {
    path: NormalizedPath,
}

impl ManifestGraph {
    pub fn new(path: NormalizedPath) -> Self {
        Self { path }
    }

    /// The graph at the conventional location under `root`.
    pub fn for_root(root: &NormalizedPath) -> Self {
        Self::new(root.join(WorkspacePath::GraphFile.as_str()))
    }

    pub fn path(&self) -> &NormalizedPath {
        &self.path
    }

    pub fn load(&self) -> Result<GraphManifest> {
        if !self.path.is_file() {
            return Err(Error::GraphNotFound {
                path: self.path.to_native(),
            });
        }
        Ok(ConfigStore::new().load(&self.path)?)
    }
}

impl ModuleGraph for ManifestGraph {
    fn modules(&self) -> Result<Vec<Module>> {
        self.load()?.to_modules()
    }
}

impl ModuleGraph for GraphManifest {
    fn modules(&self) -> Result<Vec<Module>> {
        self.to_modules()
    }
}
