// SPDX-License-Identifier: MPL-2.0
//! Loading and saving of user preferences to a `settings.toml` file.
//!
//! The configuration is deliberately forgiving: a missing or malformed file
//! falls back to defaults so a bad edit can never keep the kiosk from
//! starting.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedVitrine";

/// Seconds between automatic slide advances.
pub const DEFAULT_ROTATION_INTERVAL_SECS: u64 = 5;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Seconds between automatic slide advances.
    #[serde(default)]
    pub rotation_interval_secs: Option<u64>,
    /// Whether hovering the hero area pauses the rotation.
    #[serde(default)]
    pub hover_pause: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rotation_interval_secs: Some(DEFAULT_ROTATION_INTERVAL_SECS),
            hover_pause: Some(true),
        }
    }
}

fn default_config_path(dir_override: Option<&Path>) -> Option<PathBuf> {
    let base = match dir_override {
        Some(dir) => Some(dir.to_path_buf()),
        None => dirs::config_dir().map(|mut path| {
            path.push(APP_NAME);
            path
        }),
    };
    base.map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the platform config directory, or from
/// `dir_override` when given (CLI `--config-dir`).
pub fn load(dir_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = default_config_path(dir_override) {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config, dir_override: Option<&Path>) -> Result<()> {
    if let Some(path) = default_config_path(dir_override) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
