//! Whether a change batch requires regenerating the project files.

use std::fmt;

use projgen_fs::NormalizedPath;

/// Extensions of changed files that affect the generated projects.
pub const SOLUTION_EXTENSIONS: &[&str] = &["cs", "asmdef", "shader"];

/// Extensions of reimported files that affect the generated projects.
pub const REIMPORT_EXTENSIONS: &[&str] = &["dll", "asmdef"];

/// Why a regeneration is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncReason {
    /// No index has been written yet
    FirstRun,
    /// A changed file belongs in the generated projects
    Changed(String),
    /// A reimported binary or module definition
    Reimported(String),
    /// Regeneration was requested unconditionally
    Forced,
}

impl fmt::Display for SyncReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncReason::FirstRun => write!(f, "no index has been generated yet"),
            SyncReason::Changed(path) => write!(f, "{} changed", path),
            SyncReason::Reimported(path) => write!(f, "{} was reimported", path),
            SyncReason::Forced => write!(f, "full sync requested"),
        }
    }
}

/// Outcome of checking a change batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncDecision {
    Skip,
    Regenerate(SyncReason),
}

impl SyncDecision {
    /// Decide from whether an index exists and the paths of a change batch.
    ///
    /// Only the first matching path is recorded as the reason.
    pub fn evaluate<C, R>(index_exists: bool, changed: C, reimported: R) -> Self
    where
        C: IntoIterator,
        C::Item: AsRef<str>,
        R: IntoIterator,
        R::Item: AsRef<str>,
    {
        if !index_exists {
            return SyncDecision::Regenerate(SyncReason::FirstRun);
        }

        if let Some(path) = changed
            .into_iter()
            .find(|path| is_solution_relevant(path.as_ref()))
        {
            return SyncDecision::Regenerate(SyncReason::Changed(path.as_ref().to_string()));
        }

        if let Some(path) = reimported
            .into_iter()
            .find(|path| is_reimport_relevant(path.as_ref()))
        {
            return SyncDecision::Regenerate(SyncReason::Reimported(path.as_ref().to_string()));
        }

        SyncDecision::Skip
    }

    pub fn should_regenerate(&self) -> bool {
        matches!(self, SyncDecision::Regenerate(_))
    }
}

/// A changed file with this path affects the generated projects.
pub fn is_solution_relevant(path: &str) -> bool {
    NormalizedPath::new(path).has_extension(SOLUTION_EXTENSIONS)
}

/// A reimported file with this path affects the generated projects.
pub fn is_reimport_relevant(path: &str) -> bool {
    NormalizedPath::new(path).has_extension(REIMPORT_EXTENSIONS)
}
