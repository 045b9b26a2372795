use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Configuration file picked up from the working directory when no
/// explicit path is given.
pub const DEFAULT_CONFIG_PATH: &str = "miti.toml";

/// Top-level miti configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct MitiConfig {
    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Display settings shared by all subcommands.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Digit script: "devanagari" or "ascii".
    #[serde(default = "default_numerals")]
    pub numerals: String,

    /// Weekday name length: "short" or "full".
    #[serde(default = "default_weekday")]
    pub weekday: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            numerals: default_numerals(),
            weekday: default_weekday(),
        }
    }
}

fn default_numerals() -> String {
    "devanagari".to_string()
}
fn default_weekday() -> String {
    "short".to_string()
}

/// Loads configuration from `path`, or from [`DEFAULT_CONFIG_PATH`] when no
/// path is given. A missing implicit file falls back to defaults; a missing
/// explicit file is an error.
pub fn load(path: Option<&Path>) -> Result<MitiConfig> {
    let (path, explicit) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
    };

    if !explicit && !path.exists() {
        debug!("no {DEFAULT_CONFIG_PATH} found, using defaults");
        return Ok(MitiConfig::default());
    }

    let toml_str = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: MitiConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;
    Ok(config)
}
