//! Interactive shell and single-run driver
//!
//! [`CuratorShell`] owns the [`AuthSession`] and the last [`RunState`]. The
//! session is refreshed before every run; the run state is replaced by each
//! new run and kept for `/last`, `/errors` and `/json`.

use super::command::ShellCommand;
use crate::config::{OutputConfig, ShellConfig};
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::{ProgressReporter, SimpleProgress};
use chrono::Utc;
use colored::Colorize;
use curator_application::{
    AuthError, AuthProvider, AuthenticateUseCase, ChatCompletionGateway, CuratePlaylistUseCase,
    MusicCatalog, NoProgress, RunProgressNotifier,
};
use curator_domain::{AuthSession, CurationRequest, DomainError, OutputFormat, RunState};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::io::IsTerminal;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};

/// Entries kept in the shell history file
const HISTORY_SIZE: usize = 500;

/// Why a run could not start
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthError),

    #[error("Invalid input: {0}")]
    Input(#[from] DomainError),
}

/// Drives curation runs for the one-shot CLI and the interactive shell
pub struct CuratorShell<L, C, A>
where
    L: ChatCompletionGateway + 'static,
    C: MusicCatalog + 'static,
    A: AuthProvider + 'static,
{
    curation: CuratePlaylistUseCase<L, C>,
    auth: AuthenticateUseCase<A>,
    session: AuthSession,
    output: OutputConfig,
    config: ShellConfig,
    limit: usize,
    last_run: Option<RunState>,
}

impl<L, C, A> CuratorShell<L, C, A>
where
    L: ChatCompletionGateway + 'static,
    C: MusicCatalog + 'static,
    A: AuthProvider + 'static,
{
    pub fn new(
        curate: CuratePlaylistUseCase<L, C>,
        auth: AuthenticateUseCase<A>,
        session: AuthSession,
    ) -> Self {
        let config = ShellConfig::default();
        Self {
            curation: curate,
            auth,
            session,
            output: OutputConfig::default(),
            limit: config.default_limit,
            config,
            last_run: None,
        }
    }

    pub fn with_output(mut self, output: OutputConfig) -> Self {
        if !output.color {
            colored::control::set_override(false);
        }
        self.output = output;
        self
    }

    pub fn with_config(mut self, config: ShellConfig) -> Self {
        self.limit = config.default_limit;
        self.config = config;
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn last_run(&self) -> Option<&RunState> {
        self.last_run.as_ref()
    }

    /// Refresh the session if needed, then run one curation.
    ///
    /// The returned state replaces the previous run.
    pub async fn curate(&mut self, description: &str, limit: usize) -> Result<&RunState, ShellError> {
        let request = CurationRequest::new(description, limit)?;
        self.session = self.auth.ensure_fresh(self.session.clone(), Utc::now()).await?;

        let state = if self.config.show_progress {
            if std::io::stdout().is_terminal() {
                self.execute(&request, &ProgressReporter::new()).await
            } else {
                self.execute(&request, &SimpleProgress).await
            }
        } else {
            self.execute(&request, &NoProgress).await
        };

        info!(
            "Run finished at stage {} with {} error(s)",
            state.stage.as_str(),
            state.errors.len()
        );
        Ok(self.last_run.insert(state))
    }

    async fn execute(&self, request: &CurationRequest, progress: &dyn RunProgressNotifier) -> RunState {
        self.curation
            .execute_with_progress(request, &self.session, progress)
            .await
    }

    /// Render a run in the configured format
    pub fn render(&self, state: &RunState) -> String {
        ConsoleFormatter::render(state, self.output.format)
    }

    /// Run the interactive shell until `/quit` or end of input
    pub async fn run(&mut self) {
        let mut line_editor = Reedline::create();
        if let Some(path) = self.history_path() {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match FileBackedHistory::with_file(HISTORY_SIZE, path) {
                Ok(history) => line_editor = line_editor.with_history(Box::new(history)),
                Err(e) => warn!("Shell history disabled: {}", e),
            }
        }
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("curator".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match line_editor.read_line(&prompt) {
                Ok(Signal::Success(line)) => {
                    let Some(command) = ShellCommand::parse(&line) else {
                        continue;
                    };
                    if self.handle_command(command).await {
                        break;
                    }
                }
                Ok(Signal::CtrlC) => {
                    println!("^C");
                    continue;
                }
                Ok(_) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }
    }

    fn history_path(&self) -> Option<PathBuf> {
        match &self.config.history_file {
            Some(file) => Some(PathBuf::from(file)),
            None => dirs::data_dir().map(|p| p.join("playlist-curator").join("history.txt")),
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        Playlist Curator - Interactive       │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Describe a playlist and press enter. Songs per playlist: {}", self.limit);
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Commands:");
        println!("  {}   - Show this help", "/help".cyan());
        println!("  {}   - Show the last run again", "/last".cyan());
        println!("  {} - Show errors and warnings of the last run", "/errors".cyan());
        println!("  {}   - Print the last run as JSON", "/json".cyan());
        println!("  {} - Show or set the number of songs (1-50)", "/limit [N]".cyan());
        println!("  {}   - Exit", "/quit".cyan());
        println!();
    }

    /// Handle one parsed line. Returns true if the shell should exit.
    async fn handle_command(&mut self, command: ShellCommand) -> bool {
        match command {
            ShellCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ShellCommand::Help => Self::print_help(),
            ShellCommand::Last => match &self.last_run {
                Some(state) => println!("{}", self.render(state)),
                None => println!("No run yet."),
            },
            ShellCommand::Errors => match &self.last_run {
                Some(state) => println!("{}", ConsoleFormatter::format_errors(state)),
                None => println!("No run yet."),
            },
            ShellCommand::Json => match &self.last_run {
                Some(state) => println!("{}", ConsoleFormatter::render(state, OutputFormat::Json)),
                None => println!("No run yet."),
            },
            ShellCommand::ShowLimit => println!("Songs per playlist: {}", self.limit),
            ShellCommand::SetLimit(n) => {
                self.limit = n;
                println!("Songs per playlist set to {}", n);
            }
            ShellCommand::InvalidLimit(arg) => {
                println!("Invalid limit '{}': expected a number from 1 to 50", arg);
            }
            ShellCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
            ShellCommand::Curate(description) => {
                println!();
                let limit = self.limit;
                let format = self.output.format;
                match self.curate(&description, limit).await {
                    Ok(state) => println!("{}", ConsoleFormatter::render(state, format)),
                    Err(e) => eprintln!("{} {}", "Error:".red().bold(), e),
                }
                println!();
            }
        }
        false
    }
}
