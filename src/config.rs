use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::path::PathBuf;

use crate::catalog::DEFAULT_ROOT_KEY;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub planner: PlannerConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CatalogConfig {
    /// Explicit path to the curriculum export
    pub path: Option<PathBuf>,
    /// Key holding the course map inside the export
    #[serde(default = "default_root_key")]
    pub root_key: String,
}

fn default_root_key() -> String {
    DEFAULT_ROOT_KEY.to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            root_key: default_root_key(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PlannerConfig {
    #[serde(default = "default_chunk_minutes")]
    pub default_chunk_minutes: u32,
}

fn default_chunk_minutes() -> u32 {
    60
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_chunk_minutes: default_chunk_minutes(),
        }
    }
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<()> {
        if self.root_key.trim().is_empty() {
            anyhow::bail!("Catalog root_key must not be empty");
        }
        Ok(())
    }
}

impl PlannerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.default_chunk_minutes == 0 {
            anyhow::bail!("Default chunk duration must be greater than 0");
        }
        Ok(())
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.catalog.validate()?;
        self.planner.validate()?;
        Ok(())
    }
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let loader = ConfigBuilder::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .build()
        .context("Failed to build config loader")?;

    let config: Config = loader
        .try_deserialize()
        .context("Failed to parse config file")?;

    config.validate()?;
    Ok(config)
}

/// Load `~/.lecture-planner/config.toml`, or defaults when it does not exist.
pub fn load() -> Result<Config> {
    let config_path = crate::platform::config_dir()?.join("config.toml");

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config file, using defaults");
        return Ok(Config::default());
    }

    load_from_path(&config_path)
        .with_context(|| format!("Invalid config at {}", config_path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert_eq!(config.catalog.root_key, "json_data");
        assert_eq!(config.planner.default_chunk_minutes, 60);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_chunk_minutes_rejected() {
        let planner = PlannerConfig {
            default_chunk_minutes: 0,
        };
        let err = planner.validate().unwrap_err();
        assert!(err.to_string().contains("greater than 0"));
    }

    #[test]
    fn test_empty_root_key_rejected() {
        let catalog = CatalogConfig {
            path: None,
            root_key: "  ".to_string(),
        };
        assert!(catalog.validate().is_err());
    }
}
