//! Report returned by the sync entry points.

use serde::{Deserialize, Serialize};

/// What a sync invocation ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncOutcome {
    /// All files were regenerated
    Regenerated,
    /// Nothing relevant changed, no file was touched
    Skipped,
    /// Generation stopped at the first error
    Failed,
}

/// Report from a sync invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    pub outcome: SyncOutcome,
    /// Why files were (or were not) regenerated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Files written, in write order
    pub written: Vec<String>,
    /// Errors encountered
    pub errors: Vec<String>,
}

impl SyncReport {
    pub fn skipped() -> Self {
        Self {
            outcome: SyncOutcome::Skipped,
            reason: None,
            written: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn regenerated(written: Vec<String>) -> Self {
        Self {
            outcome: SyncOutcome::Regenerated,
            reason: None,
            written,
            errors: Vec::new(),
        }
    }

    /// A failed sync; `written` lists the files completed before the error.
    pub fn failed(written: Vec<String>, error: String) -> Self {
        Self {
            outcome: SyncOutcome::Failed,
            reason: None,
            written,
            errors: vec![error],
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn is_success(&self) -> bool {
        self.outcome != SyncOutcome::Failed
    }
}
