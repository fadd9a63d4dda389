//! SyncEngine implementation
//!
//! The SyncEngine turns the current module graph into descriptor files, an
//! index and the editor settings document, and decides per change batch
//! whether that work is needed at all.

use projgen_fs::{NormalizedPath, io};

use crate::descriptor::Descriptor;
use crate::editor_settings;
use crate::error::{Error, Result};
use crate::filter::FilterPolicy;
use crate::index::{Index, index_file_name};
use crate::model::{ModuleGraph, Snapshot};
use crate::settings::Settings;

use super::decision::{SyncDecision, SyncReason};
use super::report::SyncReport;

/// A file a sync will write, fully rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub path: NormalizedPath,
    pub content: String,
}

/// Everything a sync writes, in write order: descriptors, index, settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncPlan {
    /// Names of the modules that passed the filter, in host order
    pub included: Vec<String>,
    pub files: Vec<PlannedFile>,
}

/// Engine for generating project files from a module graph.
///
/// Each invocation recomputes everything from the graph; nothing is cached
/// between calls. Callers must not run two invocations on the same root
/// concurrently.
pub struct SyncEngine {
    /// Workspace root the files are written to
    root: NormalizedPath,
    graph: Box<dyn ModuleGraph>,
    settings: Settings,
}

impl SyncEngine {
    pub fn new(root: NormalizedPath, graph: impl ModuleGraph + 'static, settings: Settings) -> Self {
        Self {
            root,
            graph: Box::new(graph),
            settings,
        }
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace the settings used by subsequent syncs.
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    /// Path of the index file, `<root>/<root name>.sln`.
    pub fn index_path(&self) -> Result<NormalizedPath> {
        Ok(self.root.join(&index_file_name(&self.root)?))
    }

    /// Whether an index has been written before.
    pub fn has_index(&self) -> bool {
        self.index_path().map(|path| path.is_file()).unwrap_or(false)
    }

    /// Decide whether a change batch requires regeneration.
    pub fn decide<C, R>(&self, changed: C, reimported: R) -> SyncDecision
    where
        C: IntoIterator,
        C::Item: AsRef<str>,
        R: IntoIterator,
        R::Item: AsRef<str>,
    {
        SyncDecision::evaluate(self.has_index(), changed, reimported)
    }

    /// Render every file a sync would write without touching the disk.
    pub fn plan(&self) -> Result<SyncPlan> {
        let modules = self.graph.modules()?;
        let snapshot = Snapshot::new(&modules);
        let policy = FilterPolicy::new(&self.settings);
        let included = policy.included(&modules);

        let mut files = Vec::with_capacity(included.len() + 2);
        for &module in &included {
            if module.name.is_empty()
                || module.name.contains(['/', '\\'])
                || module.name.starts_with('.')
            {
                return Err(Error::InvalidModuleName {
                    name: module.name.clone(),
                });
            }
            let descriptor = Descriptor::new(module, &snapshot, &policy);
            files.push(PlannedFile {
                path: self.root.join(&descriptor.file_name()),
                content: descriptor.render()?,
            });
        }

        files.push(PlannedFile {
            path: self.index_path()?,
            content: Index::new(&modules, &policy).render(),
        });

        let (settings_path, settings_content) = editor_settings::plan(&self.root, &self.settings)?;
        files.push(PlannedFile {
            path: settings_path,
            content: settings_content,
        });

        Ok(SyncPlan {
            included: included.iter().map(|m| m.name.clone()).collect(),
            files,
        })
    }

    /// Regenerate all files unconditionally.
    pub fn sync_always(&self) -> SyncReport {
        self.regenerate(SyncReason::Forced)
    }

    /// Regenerate all files if the change batch requires it.
    ///
    /// `changed` holds added, deleted, moved and imported asset paths;
    /// `reimported` holds paths the host reimported.
    pub fn sync_if_needed<C, R>(&self, changed: C, reimported: R) -> SyncReport
    where
        C: IntoIterator,
        C::Item: AsRef<str>,
        R: IntoIterator,
        R::Item: AsRef<str>,
    {
        match self.decide(changed, reimported) {
            SyncDecision::Skip => {
                tracing::debug!(root = %self.root, "no relevant changes, skipping sync");
                SyncReport::skipped()
            }
            SyncDecision::Regenerate(reason) => self.regenerate(reason),
        }
    }

    fn regenerate(&self, reason: SyncReason) -> SyncReport {
        tracing::info!(root = %self.root, %reason, "regenerating project files");

        let plan = match self.plan() {
            Ok(plan) => plan,
            Err(e) => {
                tracing::error!(root = %self.root, error = %e, "sync failed");
                return SyncReport::failed(Vec::new(), e.to_string()).with_reason(reason.to_string());
            }
        };

        let mut written = Vec::with_capacity(plan.files.len());
        for file in &plan.files {
            if let Err(e) = io::write_text(&file.path, &file.content) {
                tracing::error!(path = %file.path, error = %e, "write failed, aborting sync");
                return SyncReport::failed(written, e.to_string()).with_reason(reason.to_string());
            }
            written.push(file.path.to_string());
        }

        tracing::info!(
            modules = plan.included.len(),
            files = written.len(),
            "project files regenerated"
        );
        SyncReport::regenerated(written).with_reason(reason.to_string())
    }
}
