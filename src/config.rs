use crate::cli::{Mode, OutputFormat};
use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    pub mode: Option<Mode>,
    pub format: Option<OutputFormat>,
    pub color: Option<bool>,
}

pub struct ConfigManager {
    config_path: PathBuf,
    pub config: Config,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        let config_path = dirs::home_dir()
            .ok_or_else(|| anyhow!("Could not find home directory"))?
            .join(".config")
            .join("countrynorm")
            .join("config.toml");

        Self::from_path(config_path)
    }

    pub fn from_path(config_path: impl Into<PathBuf>) -> Result<Self> {
        let config_path = config_path.into();
        let config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse {}", config_path.display()))?
        } else {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            Config::default()
        };

        Ok(Self {
            config_path,
            config,
        })
    }

    pub fn save(&self) -> Result<()> {
        if let Some(dir) = self.config_path.parent()
            && !dir.exists()
        {
            std::fs::create_dir_all(dir).context("Failed to create config directory")?;
        }

        let content = toml::to_string(&self.config).context("Failed to serialize config")?;
        std::fs::write(&self.config_path, content).context("Failed to write config.toml")?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }
}
