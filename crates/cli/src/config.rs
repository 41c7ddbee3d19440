// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration management.
//!
//! Configuration is stored in the platform config directory
//! (`~/.config/taskmir/config.toml` on Linux) and includes:
//! - `remote`: base URL and the environment variable holding the bearer token
//! - `state_dir`: optional override for where the mirror database lives

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const APP_DIR_NAME: &str = "taskmir";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "mirror.db";

/// User configuration stored in `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Remote service settings.
    #[serde(default)]
    pub remote: RemoteConfig,
    /// Optional path for the mirror database (absolute).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_dir: Option<PathBuf>,
}

/// Remote service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the task API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Environment variable read for the bearer token.
    #[serde(default = "default_token_env")]
    pub token_env: String,
}

fn default_base_url() -> String {
    "https://graph.microsoft.com/v1.0/me/todo".to_string()
}

fn default_token_env() -> String {
    "TASKMIR_TOKEN".to_string()
}

impl Default for RemoteConfig {
    fn default() -> Self {
        RemoteConfig {
            base_url: default_base_url(),
            token_env: default_token_env(),
        }
    }
}

impl Config {
    /// Loads configuration from the platform config directory.
    ///
    /// A missing file yields the defaults; only an unreadable or malformed
    /// file is an error.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Saves configuration to the platform config directory.
    pub fn save(&self) -> Result<()> {
        self.save_to(&config_file_path()?)
    }

    /// Saves configuration to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Returns the path of the mirror database.
    pub fn db_path(&self) -> Result<PathBuf> {
        match &self.state_dir {
            Some(dir) => Ok(dir.join(DB_FILE_NAME)),
            None => {
                let data_dir = dirs::data_dir().ok_or(Error::NoHomeDirectory)?;
                Ok(data_dir.join(APP_DIR_NAME).join(DB_FILE_NAME))
            }
        }
    }
}

/// The path of the user's config file.
pub fn config_file_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().ok_or(Error::NoHomeDirectory)?;
    Ok(config_dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
