//! Incremental project file sync
//!
//! - **decision**: decide from a change batch whether regeneration is needed
//! - **engine**: render and write descriptors, index and editor settings
//! - **report**: outcome of a sync invocation

mod decision;
mod engine;
mod report;

pub use decision::{
    REIMPORT_EXTENSIONS, SOLUTION_EXTENSIONS, SyncDecision, SyncReason, is_reimport_relevant,
    is_solution_relevant,
};
pub use engine::{PlannedFile, SyncEngine, SyncPlan};
pub use report::{SyncOutcome, SyncReport};
