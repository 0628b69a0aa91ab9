//! Interactive shell
//!
//! - [`CuratorShell`]: runs curations, keeps the session and the last run
//! - [`ShellCommand`]: slash-command parsing
//! - [`interactive_login`]: terminal side of the authorization-code flow

mod command;
mod login;
mod repl;

pub use command::ShellCommand;
pub use login::interactive_login;
pub use repl::{CuratorShell, ShellError};
