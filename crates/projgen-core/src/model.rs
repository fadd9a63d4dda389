//! Module graph types consumed from the host build system.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use projgen_fs::NormalizedPath;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Where a module's sources originate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Provenance {
    /// Code that lives in the project itself, not resolved from any package
    ProjectLocal,
    /// A package copied into the project's package folder
    Embedded,
    /// A package referenced from a folder on disk
    #[serde(alias = "local")]
    LocalPath,
    /// A package fetched from a package registry
    Registry,
    /// A package fetched from a version-control URL
    #[serde(alias = "git")]
    VersionControl,
    /// A package shipped with the host itself
    #[serde(alias = "builtin")]
    BuiltIn,
    /// A package referenced from an archive on disk
    #[serde(alias = "local-tarball")]
    LocalArchive,
    /// A package whose source the host could not classify
    Unknown,
}

impl Provenance {
    /// Every provenance that is governed by a configuration toggle.
    ///
    /// `ProjectLocal` is absent: project code is always included.
    pub const PACKAGED: [Provenance; 7] = [
        Provenance::Embedded,
        Provenance::LocalPath,
        Provenance::Registry,
        Provenance::VersionControl,
        Provenance::BuiltIn,
        Provenance::LocalArchive,
        Provenance::Unknown,
    ];

    /// Stable kebab-case key used in settings and graph documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::ProjectLocal => "project-local",
            Provenance::Embedded => "embedded",
            Provenance::LocalPath => "local-path",
            Provenance::Registry => "registry",
            Provenance::VersionControl => "version-control",
            Provenance::BuiltIn => "built-in",
            Provenance::LocalArchive => "local-archive",
            Provenance::Unknown => "unknown",
        }
    }

    /// Whether this module comes from a package rather than the project.
    pub fn is_packaged(&self) -> bool {
        !matches!(self, Provenance::ProjectLocal)
    }
}

impl FromStr for Provenance {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "projectlocal" | "project" | "none" => Ok(Provenance::ProjectLocal),
            "embedded" => Ok(Provenance::Embedded),
            "localpath" | "local" => Ok(Provenance::LocalPath),
            "registry" => Ok(Provenance::Registry),
            "versioncontrol" | "git" => Ok(Provenance::VersionControl),
            "builtin" => Ok(Provenance::BuiltIn),
            "localarchive" | "localtarball" | "tarball" => Ok(Provenance::LocalArchive),
            "unknown" => Ok(Provenance::Unknown),
            _ => Err(Error::UnknownProvenance {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A compilable unit exported by the host build system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    /// Unique within one graph snapshot
    pub name: String,
    /// Source files in host order
    pub source_files: Vec<NormalizedPath>,
    /// Precompiled binaries the module links against, in host order
    pub compiled_references: Vec<NormalizedPath>,
    /// Names of other modules in the same snapshot
    pub module_references: Vec<String>,
    pub provenance: Provenance,
}

impl Module {
    /// Create a project-local module with no sources or references.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_files: Vec::new(),
            compiled_references: Vec::new(),
            module_references: Vec::new(),
            provenance: Provenance::ProjectLocal,
        }
    }

    pub fn with_sources<I, P>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<NormalizedPath>,
    {
        self.source_files = sources.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_compiled_references<I, P>(mut self, references: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<NormalizedPath>,
    {
        self.compiled_references = references.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_references<I, S>(mut self, references: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.module_references = references.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_provenance(mut self, provenance: Provenance) -> Self {
        self.provenance = provenance;
        self
    }
}

/// Source of the current module graph.
///
/// Implementations return the full module list at call time, in the order
/// the host enumerates them. That order is preserved in every generated
/// document.
pub trait ModuleGraph {
    fn modules(&self) -> Result<Vec<Module>>;
}

impl ModuleGraph for Vec<Module> {
    fn modules(&self) -> Result<Vec<Module>> {
        Ok(self.clone())
    }
}

/// Name lookup over one graph snapshot.
#[derive(Debug)]
pub struct Snapshot<'a> {
    modules: &'a [Module],
    by_name: HashMap<&'a str, &'a Module>,
}

impl<'a> Snapshot<'a> {
    pub fn new(modules: &'a [Module]) -> Self {
        let mut by_name = HashMap::with_capacity(modules.len());
        for module in modules {
            by_name.entry(module.name.as_str()).or_insert(module);
        }
        Self { modules, by_name }
    }

    /// Modules in host order.
    pub fn modules(&self) -> &'a [Module] {
        self.modules
    }

    pub fn get(&self, name: &str) -> Option<&'a Module> {
        self.by_name.get(name).copied()
    }
}
