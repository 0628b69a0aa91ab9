//! Presentation layer for playlist-curator
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive shell.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod shell;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use config::{OutputConfig, ShellConfig};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use shell::{CuratorShell, ShellCommand, ShellError, interactive_login};
