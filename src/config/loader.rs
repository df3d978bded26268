use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Settings;

/// Upper bound accepted for `completion.max_candidates`.
pub const MAX_CANDIDATES_LIMIT: usize = 10_000;

/// Errors that can occur when loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Settings {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/cmdtree/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("cmdtree").join("config.toml")
    }

    /// Loads settings from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads settings from `path`.
    ///
    /// - If the file doesn't exist, returns `Settings::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let settings: Settings = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Validates the settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.completion.max_candidates > MAX_CANDIDATES_LIMIT {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "completion.max_candidates must be at most {} (got {})",
                    MAX_CANDIDATES_LIMIT, self.completion.max_candidates
                ),
            });
        }
        Ok(())
    }
}
