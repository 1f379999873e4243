//! Podium configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level Podium configuration (podium.toml)
///
/// The file is optional: a missing file resolves to defaults, and every
/// section defaults independently.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PodiumConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Theme resolution defaults
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Theme applied when neither the command line nor the deck names one.
    /// Unknown names still fall back to the built-in default downstream.
    #[serde(default)]
    pub default: Option<String>,
}

/// Render-plan output options
#[derive(Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Pretty-print the emitted JSON
    #[serde(default = "default_true")]
    pub pretty: bool,
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl PodiumConfig {
    /// Load configuration from a directory (looks for podium.toml) or a
    /// direct file path. A missing file yields the default configuration.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = if path.is_file() {
            path.to_path_buf()
        } else {
            path.join("podium.toml")
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config: PodiumConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
