//! Configuration loading from TOML files with environment overrides.

use crate::schema::Config;
use overbot_common::{OverBotError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "OVERBOT_CONFIG";

/// Environment variable overriding `discord.token`.
pub const TOKEN_ENV: &str = "DISCORD_TOKEN";

/// Environment variable overriding `logging.level`.
pub const LOG_LEVEL_ENV: &str = "OVERBOT_LOG";

/// Default configuration file name.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration loader bound to one file path.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a loader for the path in `OVERBOT_CONFIG`, or `config.toml`.
    pub fn from_env() -> Self {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
        Self::new(path)
    }

    /// The file this loader reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads, overrides from the environment, and validates.
    ///
    /// A missing file is not an error: defaults are used so a token supplied
    /// through the environment is enough to run the bot.
    pub async fn load(&self) -> Result<Config> {
        let mut config = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => {
                debug!(path = %self.path.display(), "Read configuration file");
                Self::parse(&contents)?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(
                    path = %self.path.display(),
                    "Configuration file not found, using defaults"
                );
                Config::default()
            }
            Err(e) => return Err(e.into()),
        };

        apply_env_overrides(&mut config, |key| std::env::var(key).ok());
        config.validate()?;

        info!(path = %self.path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Parses a TOML document into a configuration without validating it.
    pub fn parse(contents: &str) -> Result<Config> {
        toml::from_str(contents).map_err(|e| OverBotError::Serialization(e.to_string()))
    }

    /// Whether the configuration file is present. When it is not, `load`
    /// falls back to defaults.
    pub fn file_exists(&self) -> bool {
        self.path.is_file()
    }
}

/// Applies environment overrides using `lookup` to read variables.
pub fn apply_env_overrides(config: &mut Config, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(token) = lookup(TOKEN_ENV).filter(|t| !t.is_empty()) {
        config.discord.token = token;
    }
    if let Some(level) = lookup(LOG_LEVEL_ENV).filter(|l| !l.is_empty()) {
        config.logging.level = level;
    }
}
