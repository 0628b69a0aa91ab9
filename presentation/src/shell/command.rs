//! Slash commands understood by the interactive shell

use curator_domain::{MAX_SONGS, MIN_SONGS};

/// One line of shell input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Anything that is not a command: a playlist description
    Curate(String),
    Help,
    Quit,
    /// Show the last run again
    Last,
    /// Show the errors and warnings of the last run
    Errors,
    /// Print the last run as JSON
    Json,
    /// Show the current song limit
    ShowLimit,
    /// Change the song limit
    SetLimit(usize),
    /// `/limit` with a value that is not a number in range
    InvalidLimit(String),
    Unknown(String),
}

impl ShellCommand {
    /// Parse a line; `None` for blank input
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        if !line.starts_with('/') {
            return Some(ShellCommand::Curate(line.to_string()));
        }

        let (cmd, arg) = match line.split_once(char::is_whitespace) {
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (line, ""),
        };
        let command = match cmd {
            "/quit" | "/exit" | "/q" => ShellCommand::Quit,
            "/help" | "/h" | "/?" => ShellCommand::Help,
            "/last" => ShellCommand::Last,
            "/errors" => ShellCommand::Errors,
            "/json" => ShellCommand::Json,
            "/limit" if arg.is_empty() => ShellCommand::ShowLimit,
            "/limit" => match arg.parse::<usize>() {
                Ok(n) if (MIN_SONGS..=MAX_SONGS).contains(&n) => ShellCommand::SetLimit(n),
                _ => ShellCommand::InvalidLimit(arg.to_string()),
            },
            _ => ShellCommand::Unknown(cmd.to_string()),
        };
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_description() {
        assert_eq!(
            ShellCommand::parse("  late night jazz  "),
            Some(ShellCommand::Curate("late night jazz".to_string()))
        );
        assert_eq!(ShellCommand::parse("   "), None);
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(ShellCommand::parse("/q"), Some(ShellCommand::Quit));
        assert_eq!(ShellCommand::parse("/help"), Some(ShellCommand::Help));
        assert_eq!(ShellCommand::parse("/errors"), Some(ShellCommand::Errors));
        assert_eq!(
            ShellCommand::parse("/shuffle"),
            Some(ShellCommand::Unknown("/shuffle".to_string()))
        );
    }

    #[test]
    fn test_parse_limit() {
        assert_eq!(ShellCommand::parse("/limit"), Some(ShellCommand::ShowLimit));
        assert_eq!(ShellCommand::parse("/limit 25"), Some(ShellCommand::SetLimit(25)));
        assert_eq!(
            ShellCommand::parse("/limit 51"),
            Some(ShellCommand::InvalidLimit("51".to_string()))
        );
        assert_eq!(
            ShellCommand::parse("/limit many"),
            Some(ShellCommand::InvalidLimit("many".to_string()))
        );
    }
}
