//! TOML-based bot configuration.
//!
//! Stores the platform identifiers (application, guild, check-in channel)
//! and the ordered daily question labels. Secrets -- the bot token and the
//! webhook URL -- never live here; they go to the OS keyring (see
//! [`gateway::keyring_store`](crate::gateway::keyring_store)).
//!
//! Configuration is stored at `~/.config/tally/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/tally[-dev]/` based on TALLY_ENV.
///
/// Set TALLY_ENV=dev to use a separate development data directory.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("TALLY_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("tally-dev")
    } else {
        base_dir.join("tally")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::DirUnavailable(e.to_string()))?;
    Ok(dir)
}

/// Platform identifiers consumed by the gateway adapter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Application (bot) identifier for command registration.
    #[serde(default)]
    pub application_id: String,
    /// Guild the commands are registered in.
    #[serde(default)]
    pub guild_id: String,
    /// The designated check-in channel. Messages anywhere else never
    /// qualify.
    #[serde(default)]
    pub check_in_channel_id: String,
}

/// Daily check-in form configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckinConfig {
    /// Ordered question labels, one required free-text answer each.
    #[serde(default = "default_questions")]
    pub questions: Vec<String>,
}

fn default_questions() -> Vec<String> {
    [
        "Did you finish your to-dos?",
        "Did you work out?",
        "Did you read?",
        "Did you sleep enough?",
        "What are tomorrow's goals?",
    ]
    .map(String::from)
    .to_vec()
}

impl Default for CheckinConfig {
    fn default() -> Self {
        Self {
            questions: default_questions(),
        }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/tally/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub platform: PlatformConfig,
    #[serde(default)]
    pub checkin: CheckinConfig,
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or write and return the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "platform.application_id" => Some(self.platform.application_id.clone()),
            "platform.guild_id" => Some(self.platform.guild_id.clone()),
            "platform.check_in_channel_id" => Some(self.platform.check_in_channel_id.clone()),
            "checkin.questions" => serde_json::to_string(&self.checkin.questions).ok(),
            _ => None,
        }
    }

    /// Set a config value by key and persist.
    ///
    /// `checkin.questions` takes a JSON array of strings; the platform
    /// keys take plain strings.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "platform.application_id" => self.platform.application_id = value.to_string(),
            "platform.guild_id" => self.platform.guild_id = value.to_string(),
            "platform.check_in_channel_id" => {
                self.platform.check_in_channel_id = value.to_string()
            }
            "checkin.questions" => {
                let questions: Vec<String> =
                    serde_json::from_str(value).map_err(|e| ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: format!("expected a JSON array of strings: {e}"),
                    })?;
                if questions.is_empty() {
                    return Err(ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: "question list cannot be empty".to_string(),
                    });
                }
                self.checkin.questions = questions;
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        self.save()
    }
}
