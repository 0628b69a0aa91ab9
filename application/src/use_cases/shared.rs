//! Shared utilities for use cases.
//!
//! Wraps remote-call outcomes into [`ToolResult`] values so that every
//! failure is logged once and carries the name of the tool that produced it.

use crate::ports::llm_gateway::GatewayError;
use crate::ports::progress::RunProgressNotifier;
use curator_domain::{RunState, ToolError, ToolResult};
use tracing::warn;

/// Capture a remote call's outcome, attributing failures to `tool`.
pub(crate) fn capture<T>(tool: &str, result: Result<T, GatewayError>) -> ToolResult<T> {
    match result {
        Ok(value) => ToolResult::Success(value),
        Err(e) => {
            warn!("Tool {} failed: {}", tool, e);
            ToolResult::Failure(e.to_tool_error(tool))
        }
    }
}

/// Append an error to the run and tell the progress reporter about it.
pub(crate) fn record(state: &mut RunState, progress: &dyn RunProgressNotifier, error: ToolError) {
    progress.on_error_recorded(&error);
    state.record(error);
}
