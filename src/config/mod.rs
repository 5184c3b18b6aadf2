//! Configuration management

mod keys;

pub use keys::{Action, KeyBindingError, KeyBindings, key_to_string, parse_key};

use crate::paths;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Poll interval in milliseconds for terminal events
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,

    /// Capture mouse clicks (click the field to focus, the button to submit)
    #[serde(default = "default_mouse_capture")]
    pub mouse_capture: bool,

    /// Keybindings configuration
    #[serde(default)]
    pub keys: KeyBindings,
}

const fn default_poll_interval() -> u64 {
    100
}

const fn default_mouse_capture() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval(),
            mouse_capture: default_mouse_capture(),
            keys: KeyBindings::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns an error if reading or parsing the config file fails
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a
    /// keybinding does not name a key
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let mut config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config
            .keys
            .validate()
            .with_context(|| format!("Invalid keybinding in {}", path.display()))?;
        // Ensure any new default keybindings are available
        config.keys.merge_defaults();
        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn default_path() -> PathBuf {
        paths::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("saludador")
            .join("config.json")
    }
}
