//! Which modules get project files.

use crate::model::{Module, Provenance};
use crate::settings::Settings;

/// Why a module was included or excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inclusion {
    /// No source files, nothing to compile or reference
    NoSources,
    /// Project code, included regardless of settings
    ProjectLocal,
    /// Settings hold an explicit toggle for the provenance
    Configured { provenance: Provenance, include: bool },
    /// Settings hold no toggle for the provenance
    Unconfigured { provenance: Provenance },
}

impl Inclusion {
    pub fn is_included(&self) -> bool {
        match self {
            Inclusion::NoSources | Inclusion::Unconfigured { .. } => false,
            Inclusion::ProjectLocal => true,
            Inclusion::Configured { include, .. } => *include,
        }
    }
}

/// Inclusion rules applied to every module of a sync.
#[derive(Debug, Clone, Copy)]
pub struct FilterPolicy<'a> {
    settings: &'a Settings,
}

impl<'a> FilterPolicy<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    pub fn classify(&self, module: &Module) -> Inclusion {
        if module.source_files.is_empty() {
            return Inclusion::NoSources;
        }
        match module.provenance {
            Provenance::ProjectLocal => Inclusion::ProjectLocal,
            provenance => match self.settings.source(provenance) {
                Some(include) => Inclusion::Configured {
                    provenance,
                    include,
                },
                None => Inclusion::Unconfigured { provenance },
            },
        }
    }

    pub fn include(&self, module: &Module) -> bool {
        let inclusion = self.classify(module);
        if let Inclusion::Unconfigured { provenance } = inclusion {
            tracing::debug!(module = %module.name, %provenance, "provenance not configured, excluding");
        }
        inclusion.is_included()
    }

    /// Modules that pass the filter, in input order.
    pub fn included<'m>(&self, modules: &'m [Module]) -> Vec<&'m Module> {
        modules.iter().filter(|m| self.include(m)).collect()
    }
}
