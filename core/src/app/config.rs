//! Configuration management (config.toml)
//!
//! Handles loading, saving, and providing defaults for application settings.
//! Settings are stored in TOML format in the platform-specific config directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::app::input::InputConfig;

/// File name of the configuration inside [`config_dir`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application configuration.
///
/// This is the settings store: the frontend owns one instance, hands copies
/// to dialogs, and writes accepted values back into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Input/controller settings
    #[serde(default)]
    pub input: InputConfig,
}

/// Errors from persisting the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine the configuration directory")]
    NoConfigDir,
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Returns the platform-specific configuration directory.
///
/// On Windows: `%APPDATA%\Stickpan\config`
/// On macOS: `~/Library/Application Support/io.stickpan.Stickpan`
/// On Linux: `~/.config/Stickpan`
///
/// Returns `None` if the home directory cannot be determined.
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io.stickpan", "", "Stickpan")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Path of `config.toml` in the platform configuration directory.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

/// Loads the configuration from the platform configuration directory.
///
/// Returns default values if the file doesn't exist or cannot be parsed.
pub fn load() -> Config {
    match config_path() {
        Some(path) => load_from(&path),
        None => {
            tracing::warn!("No configuration directory available, using defaults");
            Config::default()
        }
    }
}

/// Loads the configuration from an explicit path.
///
/// A missing file is not an error. Unreadable or malformed files are logged
/// and replaced by defaults.
pub fn load_from(path: &Path) -> Config {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Config::default();
        }
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", path.display(), e);
            return Config::default();
        }
    };

    match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to parse {}: {}", path.display(), e);
            Config::default()
        }
    }
}

/// Saves the configuration to the platform configuration directory.
///
/// Creates the directory if it doesn't exist.
pub fn save(config: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;
    save_to(&path, config)?;
    Ok(path)
}

/// Saves the configuration to an explicit path, creating parent directories.
pub fn save_to(path: &Path, config: &Config) -> Result<(), ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(io_err)?;
    }
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(io_err)?;
    Ok(())
}
