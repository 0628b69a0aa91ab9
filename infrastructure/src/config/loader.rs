//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order
const PROJECT_CONFIG_FILES: [&str; 2] = ["curator.toml", ".curator.toml"];

/// Prefix for nested environment overrides (`CURATOR_OPENAI__MODEL=gpt-4o`)
const ENV_PREFIX: &str = "CURATOR_";

/// Legacy environment variables and the config keys they set
const LEGACY_ENV_VARS: [(&str, &str); 5] = [
    ("OPENAI_API_KEY", "openai.api_key"),
    ("SPOTIPY_CLIENT_ID", "spotify.client_id"),
    ("SPOTIPY_CLIENT_SECRET", "spotify.client_secret"),
    ("SPOTIPY_REDIRECT_URI", "spotify.redirect_uri"),
    ("SCOPE", "spotify.scope"),
];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment (`OPENAI_API_KEY`, `SPOTIPY_*`, `SCOPE`, `CURATOR_*`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./curator.toml` or `./.curator.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/playlist-curator/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::with_env(Self::files(config_path)?)
            .extract()
            .map_err(Box::new)
    }

    /// Defaults plus environment, skipping every config file (for --no-config)
    pub fn load_env_only() -> Result<FileConfig, Box<figment::Error>> {
        Self::with_env(Self::defaults()).extract().map_err(Box::new)
    }

    fn with_env(mut figment: Figment) -> Figment {
        for (var, key) in LEGACY_ENV_VARS {
            figment = figment.merge(Env::raw().only(&[var]).map(move |_| key.into()));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn defaults() -> Figment {
        Figment::new().merge(Serialized::defaults(FileConfig::default()))
    }

    /// Load defaults and config files, ignoring the environment
    pub fn load_files(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::files(config_path)?.extract().map_err(Box::new)
    }

    fn files(config_path: Option<&PathBuf>) -> Result<Figment, Box<figment::Error>> {
        let mut figment = Self::defaults();

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            if !path.exists() {
                return Err(Box::new(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))));
            }
            figment = figment.merge(Toml::file(path));
        }

        Ok(figment)
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/playlist-curator/config.toml if set,
    /// otherwise the platform config directory equivalent.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("playlist-curator").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        Self::project_config_in(Path::new("."))
    }

    fn project_config_in(dir: &Path) -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        let set: Vec<&str> = LEGACY_ENV_VARS
            .iter()
            .map(|(var, _)| *var)
            .filter(|var| std::env::var_os(var).is_some())
            .collect();
        if set.is_empty() {
            println!("  [     ] Env:     {}", Self::legacy_var_names());
        } else {
            println!("  [FOUND] Env:     {}", set.join(", "));
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./curator.toml or ./.curator.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }

    fn legacy_var_names() -> String {
        LEGACY_ENV_VARS
            .iter()
            .map(|(var, _)| *var)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
