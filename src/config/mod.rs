// SPDX-License-Identifier: MPL-2.0
//! Persisted user preferences.
//!
//! This module is the persistence collaborator of the localization
//! resolver: a `settings.toml` file in the platform config directory that
//! survives session restarts. The only preference the resolver reads and
//! writes is the explicitly chosen display language.
//!
//! Read failures and malformed files degrade to [`Config::default`]; the
//! resolver treats an unreadable store exactly like an absent preference.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Storefront";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Locale code of the user's explicit language choice, e.g. `"fr"`.
    /// `None` until the user confirms a language in the picker; a detected
    /// locale is never written back here.
    pub language: Option<String>,
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
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
