//! CLI entrypoint for Playlist Curator
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use curator_application::{AuthenticateUseCase, CuratePlaylistUseCase};
use curator_infrastructure::{
    ConfigLoader, FileConfig, OpenAiChatGateway, SpotifyClient, SpotifyOAuth,
};
use curator_presentation::{
    Cli, ConsoleFormatter, CuratorShell, OutputConfig, ShellConfig, interactive_login,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    info!("Starting Playlist Curator");

    // === Configuration ===
    let config: FileConfig = if cli.no_config {
        ConfigLoader::load_env_only()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    }
    .context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    // Mode check before any network traffic
    let description = match (&cli.description, cli.interactive) {
        (_, true) => None,
        (Some(d), false) => Some(d.clone()),
        (None, false) => {
            bail!("A playlist description is required. Use --interactive for the shell.")
        }
    };

    if config.openai.api_key().is_none() {
        bail!("OPENAI_API_KEY is not set (environment or [openai].api_key)");
    }
    if config.spotify.client_id().is_none() || config.spotify.client_secret().is_none() {
        bail!("SPOTIPY_CLIENT_ID and SPOTIPY_CLIENT_SECRET must both be set");
    }

    // === Dependency Injection ===
    let llm = Arc::new(OpenAiChatGateway::from_config(&config.openai)?);
    let catalog = Arc::new(SpotifyClient::from_config(&config.spotify)?);
    let auth = AuthenticateUseCase::new(Arc::new(SpotifyOAuth::from_config(&config.spotify)?));

    let session = interactive_login(&auth).await.context("Spotify login failed")?;

    let use_case = CuratePlaylistUseCase::with_params(
        llm,
        catalog,
        config.curation.to_curation_params(),
    );

    let output = OutputConfig {
        format: cli.output.map(Into::into).unwrap_or(config.output.format),
        color: config.output.color,
    };
    let format = output.format;
    let mut shell = CuratorShell::new(use_case, auth, session)
        .with_output(output)
        .with_config(ShellConfig {
            show_progress: !cli.quiet && config.output.show_progress,
            default_limit: config.curation.default_limit,
            history_file: None,
        });

    // Interactive shell
    let Some(description) = description else {
        shell.run().await;
        return Ok(());
    };

    // Single run
    let limit = cli.limit.unwrap_or(config.curation.default_limit);
    let state = shell.curate(&description, limit).await?;
    println!("{}", ConsoleFormatter::render(state, format));

    if !state.is_finalized() {
        bail!(
            "Run stopped at stage {} ({})",
            state.stage.number(),
            state.stage
        );
    }

    Ok(())
}
