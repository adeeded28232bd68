//! core::config
//!
//! Configuration schema and loading.
//!
//! # Locations
//!
//! The config file is searched in order:
//! 1. `$CAIRN_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/cairn/config.toml`
//! 3. `~/.cairn/config.toml`
//!
//! A missing file is not an error; defaults apply. CLI flags always override
//! configured values.
//!
//! # Example
//!
//! ```toml
//! scripts_dir = "/opt/cairn/scripts"
//! clear = false
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// User-scope configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Directory containing the install scripts
    pub scripts_dir: Option<PathBuf>,

    /// Clear the terminal before the welcome screen
    pub clear: Option<bool>,
}

impl GlobalConfig {
    /// Load configuration from the standard locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed,
    /// or validated. No file found means defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_config_file() {
            Some(path) => Self::read_file(&path),
            None => Ok(GlobalConfig::default()),
        }
    }

    /// First existing config file in precedence order.
    fn find_config_file() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("CAIRN_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("cairn/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        if let Some(home) = dirs::home_dir() {
            let path = home.join(".cairn/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        None
    }

    /// Read, parse, and validate one config file.
    fn read_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: GlobalConfig = toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(dir) = &self.scripts_dir {
            if dir.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "scripts_dir cannot be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}
