// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use gallery_lens::config::{self, Config, LoadStrategy};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.strategy = LoadStrategy::Lazy;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub mod defaults;

pub use defaults::{
    DEFAULT_API_BASE, DEFAULT_IMAGE_BASE, DEFAULT_PAGE, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT,
    MIN_PAGE_LIMIT,
};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "GalleryLens";

/// How the collection loader validates and loads artwork images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadStrategy {
    /// Probe every candidate image up front; failed probes are dropped from
    /// the collection before anything is displayed.
    #[default]
    Eager,
    /// Fetch metadata only; entries are resolved one at a time on demand,
    /// starting from the first, with image failures logged but kept.
    Lazy,
}

impl FromStr for LoadStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "eager" => Ok(LoadStrategy::Eager),
            "lazy" => Ok(LoadStrategy::Lazy),
            other => Err(format!("unknown load strategy: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the artwork metadata API.
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Base URL for full-resolution IIIF image requests.
    #[serde(default = "default_image_base")]
    pub image_base: String,
    /// Metadata page to fetch.
    #[serde(default = "default_page")]
    pub page: u32,
    /// Number of records requested per page, clamped to the API's bounds.
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Image loading strategy.
    #[serde(default)]
    pub strategy: LoadStrategy,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_image_base() -> String {
    DEFAULT_IMAGE_BASE.to_string()
}

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            image_base: default_image_base(),
            page: default_page(),
            limit: default_limit(),
            strategy: LoadStrategy::default(),
        }
    }
}

impl Config {
    /// Returns the page limit clamped to the bounds the upstream API accepts.
    #[must_use]
    pub fn clamped_limit(&self) -> u32 {
        self.limit.clamp(MIN_PAGE_LIMIT, MAX_PAGE_LIMIT)
    }
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
