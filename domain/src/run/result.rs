//! Run value objects — tagged results and structured errors
//!
//! Every remote call made during a curation run is wrapped in a
//! [`ToolResult`]: either the payload, or a [`ToolError`] naming the tool
//! that failed and why. Errors are collected in order on the
//! [`RunState`](crate::run::state::RunState) and shown to the user at the end.
//!
//! | Kind | Meaning | Fatal? |
//! |------|---------|--------|
//! | `MalformedResponse` | bad JSON or shape from the language model | depends on stage |
//! | `RemoteCallFailed` | transport or HTTP failure | depends on stage |
//! | `NotFound` | a song had no catalog match | never |
//! | `MissingIdentifier` | an expected `id` was absent | depends on stage |

use serde::{Deserialize, Serialize};

/// Category of a recorded error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MalformedResponse,
    RemoteCallFailed,
    NotFound,
    MissingIdentifier,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MalformedResponse => "malformed_response",
            ErrorKind::RemoteCallFailed => "remote_call_failed",
            ErrorKind::NotFound => "not_found",
            ErrorKind::MissingIdentifier => "missing_identifier",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How loudly a recorded error should be shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

/// Error recorded against a single remote call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolError {
    /// Name of the tool (remote call) that failed
    pub tool: String,
    pub kind: ErrorKind,
    /// Human-readable cause
    pub exception: String,
    /// Diagnostic detail (e.g. the debug form of the underlying error)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
    /// Song the error refers to, for per-song failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub song: Option<String>,
    #[serde(default)]
    pub severity: Severity,
}

impl ToolError {
    pub fn new(tool: impl Into<String>, kind: ErrorKind, exception: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            kind,
            exception: exception.into(),
            trace: None,
            song: None,
            severity: Severity::Error,
        }
    }

    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = Some(trace.into());
        self
    }

    pub fn with_song(mut self, song: impl ToString) -> Self {
        self.song = Some(song.to_string());
        self
    }

    pub fn as_warning(mut self) -> Self {
        self.severity = Severity::Warning;
        self
    }

    // Common error constructors
    pub fn malformed_response(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(tool, ErrorKind::MalformedResponse, message)
    }

    pub fn remote_call_failed(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(tool, ErrorKind::RemoteCallFailed, message)
    }

    pub fn not_found(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(tool, ErrorKind::NotFound, message).as_warning()
    }

    pub fn missing_identifier(tool: impl Into<String>, what: &str) -> Self {
        Self::new(
            tool,
            ErrorKind::MissingIdentifier,
            format!("no {} id returned", what),
        )
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.tool, self.exception)?;
        if let Some(song) = &self.song {
            write!(f, " ({})", song)?;
        }
        Ok(())
    }
}

impl std::error::Error for ToolError {}

/// Outcome of one remote call: the payload XOR a structured error.
///
/// Serializes as `{"result": ...}` or `{"error": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolResult<T> {
    #[serde(rename = "result")]
    Success(T),
    #[serde(rename = "error")]
    Failure(ToolError),
}

impl<T> ToolResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ToolResult::Success(_))
    }

    pub fn error(&self) -> Option<&ToolError> {
        match self {
            ToolResult::Success(_) => None,
            ToolResult::Failure(e) => Some(e),
        }
    }

    pub fn into_result(self) -> Result<T, ToolError> {
        self.into()
    }
}

impl<T> From<Result<T, ToolError>> for ToolResult<T> {
    fn from(result: Result<T, ToolError>) -> Self {
        match result {
            Ok(value) => ToolResult::Success(value),
            Err(e) => ToolResult::Failure(e),
        }
    }
}

impl<T> From<ToolResult<T>> for Result<T, ToolError> {
    fn from(result: ToolResult<T>) -> Self {
        match result {
            ToolResult::Success(value) => Ok(value),
            ToolResult::Failure(e) => Err(e),
        }
    }
}
