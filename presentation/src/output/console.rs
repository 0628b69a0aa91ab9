//! Console output formatter for curation runs

use colored::Colorize;
use curator_domain::{OutputFormat, RunState, ToolError};

/// Public web address of a playlist
pub fn playlist_url(playlist_id: &str) -> String {
    format!("https://open.spotify.com/playlist/{}", playlist_id)
}

/// Formats run results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render a run in the chosen format
    pub fn render(state: &RunState, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format(state),
            OutputFormat::Summary => Self::format_summary(state),
            OutputFormat::Json => Self::format_json(state),
        }
    }

    /// Format the complete run: playlist, songs, errors and warnings
    pub fn format(state: &RunState) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Playlist Curator"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Description:".cyan().bold(),
            state.description
        ));
        output.push_str(&format!("{} {}\n\n", "Songs requested:".cyan().bold(), state.limit));

        output.push_str(&Self::playlist_block(state));

        if !state.songs.is_empty() {
            output.push_str(&Self::section_header(&format!(
                "Songs ({} suggested, {} found)",
                state.songs.len(),
                state.resolved_track_count
            )));
            for (i, song) in state.songs.iter().enumerate() {
                output.push_str(&format!("  {:>2}. {}\n", i + 1, song));
            }
        }

        if !state.errors.is_empty() {
            output.push_str(&Self::format_errors(state));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format the playlist line and counts only
    pub fn format_summary(state: &RunState) -> String {
        let mut output = Self::playlist_block(state);
        if !state.songs.is_empty() {
            output.push_str(&format!(
                "{} {} of {} songs found\n",
                "Tracks:".bold(),
                state.resolved_track_count,
                state.songs.len()
            ));
        }

        let errors = state.hard_errors().count();
        let warnings = state.warnings().count();
        if errors + warnings > 0 {
            output.push_str(&format!(
                "{} {} error(s), {} warning(s) (use -o full to see them)\n",
                "Issues:".yellow().bold(),
                errors,
                warnings
            ));
        }
        output
    }

    /// Format as JSON
    pub fn format_json(state: &RunState) -> String {
        serde_json::to_string_pretty(state).unwrap_or_else(|_| "{}".to_string())
    }

    /// Errors and warnings section
    pub fn format_errors(state: &RunState) -> String {
        let mut output = String::new();

        let errors: Vec<&ToolError> = state.hard_errors().collect();
        if !errors.is_empty() {
            output.push_str(&Self::section_header(&format!("Errors ({})", errors.len())));
            for error in errors {
                output.push_str(&format!("  {} {}\n", "x".red(), Self::error_line(error)));
                if let Some(trace) = &error.trace {
                    output.push_str(&Self::trace_block(trace));
                }
            }
        }

        let warnings: Vec<&ToolError> = state.warnings().collect();
        if !warnings.is_empty() {
            output.push_str(&Self::section_header(&format!("Warnings ({})", warnings.len())));
            for warning in warnings {
                output.push_str(&format!("  {} {}\n", "!".yellow(), Self::error_line(warning)));
            }
        }

        if output.is_empty() {
            output.push_str("No errors or warnings.\n");
        }
        output
    }

    fn error_line(error: &ToolError) -> String {
        let mut line = format!("[{}] {}: {}", error.kind, error.tool, error.exception);
        if let Some(song) = &error.song {
            line.push_str(&format!(" ({})", song));
        }
        line
    }

    fn trace_block(trace: &str) -> String {
        trace
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| format!("      {}\n", line.dimmed()))
            .collect()
    }

    fn playlist_block(state: &RunState) -> String {
        match &state.summary {
            Some(summary) => format!(
                "{} {}\n{} {}\n",
                "Playlist:".green().bold(),
                summary.playlist_name,
                "Open:".green().bold(),
                playlist_url(&summary.playlist_id)
            ),
            None => format!(
                "{} stopped at stage {} ({}), no playlist was created\n",
                "Run:".red().bold(),
                state.stage.number(),
                state.stage
            ),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curator_domain::{RunStage, Song};

    fn finished_run() -> RunState {
        let mut state = RunState::new("songs about rain", 3);
        state.playlist_title = Some("Rainy Mood".into());
        state.playlist_name = Some("AI: Rainy Mood".into());
        state.songs = vec![
            Song::new("Purple Rain", "Prince").unwrap(),
            Song::new("Set Fire to the Rain", "Adele").unwrap(),
            Song::new("Imaginary Rain", "Nobody").unwrap(),
        ];
        state.resolved_track_count = 2;
        state.playlist_id = Some("pl123".into());
        state.record(
            ToolError::not_found("search_for_item", "no track match")
                .with_song("Imaginary Rain — Nobody"),
        );
        state.finalize();
        state
    }

    #[test]
    fn test_format_full_lists_songs_and_warnings() {
        colored::control::set_override(false);
        let out = ConsoleFormatter::format(&finished_run());

        assert!(out.contains("AI: Rainy Mood"));
        assert!(out.contains("https://open.spotify.com/playlist/pl123"));
        assert!(out.contains("1. Purple Rain — Prince"));
        assert!(out.contains("Songs (3 suggested, 2 found)"));
        assert!(out.contains("Warnings (1)"));
        assert!(out.contains("[not_found] search_for_item: no track match (Imaginary Rain — Nobody)"));
        assert!(!out.contains("Errors ("));
    }

    #[test]
    fn test_format_stopped_run() {
        colored::control::set_override(false);
        let mut state = RunState::new("x", 5);
        state.enter(RunStage::IdentifyUser);
        state.record(ToolError::missing_identifier("get_current_user_profile", "user"));

        let out = ConsoleFormatter::format(&state);
        assert!(out.contains("stopped at stage 2 (Identify User)"));
        assert!(out.contains("Errors (1)"));
        assert!(out.contains("no user id returned"));
    }

    #[test]
    fn test_format_full_shows_trace_under_hard_errors() {
        colored::control::set_override(false);
        let mut state = RunState::new("x", 5);
        state.record(
            ToolError::malformed_response("create_chat_completion", "expected a JSON object")
                .with_trace("Sure! Here are\nsome songs"),
        );
        state.record(
            ToolError::not_found("search_for_item", "no track match").with_trace("hidden"),
        );

        let out = ConsoleFormatter::format(&state);

        assert!(out.contains("create_chat_completion: expected a JSON object\n      Sure! Here are\n      some songs\n"));
        assert!(!out.contains("hidden"));
    }

    #[test]
    fn test_format_summary_counts_issues() {
        colored::control::set_override(false);
        let out = ConsoleFormatter::format_summary(&finished_run());
        assert!(out.contains("2 of 3 songs found"));
        assert!(out.contains("0 error(s), 1 warning(s)"));
        assert!(!out.contains("Purple Rain"));
    }

    #[test]
    fn test_format_json_is_parseable() {
        let out = ConsoleFormatter::render(&finished_run(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["playlist_id"], "pl123");
        assert_eq!(value["errors"][0]["kind"], "not_found");
    }

    #[test]
    fn test_format_errors_when_clean() {
        let state = RunState::new("x", 1);
        assert_eq!(ConsoleFormatter::format_errors(&state), "No errors or warnings.\n");
    }
}
