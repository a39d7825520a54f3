//! Configuration handling for the refalign CLI
//!
//! Supports loading configuration from refalign.toml files with CLI argument overrides.

use anyhow::{Context, Result};
use refalign_core::io::ReportFormat;
use refalign_core::ScorerKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CliError;

pub const DEFAULT_CONFIG_FILE: &str = "refalign.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub align: AlignConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Print reports to stdout when no output file is given
    #[serde(default = "default_true")]
    pub report_stdout: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignConfig {
    /// Default scoring strategy
    #[serde(default)]
    pub scorer: ScorerKind,

    /// Default report format
    #[serde(default)]
    pub format: ReportFormat,

    /// Default report file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

fn default_true() -> bool { true }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            report_stdout: default_true(),
        }
    }
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            scorer: ScorerKind::default(),
            format: ReportFormat::default(),
            output: None,
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => {
                log::info!("Loading configuration from: {}", path.display());
                Self::load_from_file(path)?
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    log::info!("Loading configuration from: {}", DEFAULT_CONFIG_FILE);
                    Self::load_from_file(&default_path)?
                } else {
                    log::debug!("Using default configuration");
                    Self::default()
                }
            }
        };

        Ok(config)
    }

    /// Load configuration from a specific TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => CliError::file_not_found(path.to_path_buf()),
                _ => CliError::config(format!("cannot read {}: {}", path.display(), e)),
            })
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .map_err(CliError::from)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(CliError::from)
            .context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .map_err(CliError::from)
            .with_context(|| format!("Failed to write configuration file: {}", path.display()))?;

        Ok(())
    }

    /// Generate example configuration file content
    pub fn example_toml() -> Result<String> {
        toml::to_string_pretty(&Self::default())
            .map_err(CliError::from)
            .context("Failed to serialize default configuration")
    }
}
