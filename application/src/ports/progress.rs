//! Progress notification port
//!
//! Defines the interface for reporting progress during a curation run.

use curator_domain::{RunStage, ToolError};

/// Callback for progress updates during a curation run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bars, plain lines, nothing).
pub trait RunProgressNotifier: Send + Sync {
    /// Called when a stage starts; `total_tasks` is the number of remote calls expected
    fn on_stage_start(&self, stage: RunStage, total_tasks: usize);

    /// Called after each remote call within a stage
    fn on_task_complete(&self, stage: RunStage, label: &str, success: bool);

    /// Called when a stage ends
    fn on_stage_complete(&self, stage: RunStage, success: bool);

    /// Called when an error or warning is recorded on the run
    fn on_error_recorded(&self, _error: &ToolError) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl RunProgressNotifier for NoProgress {
    fn on_stage_start(&self, _stage: RunStage, _total_tasks: usize) {}
    fn on_task_complete(&self, _stage: RunStage, _label: &str, _success: bool) {}
    fn on_stage_complete(&self, _stage: RunStage, _success: bool) {}
}
