use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable that overrides `rpc_url` from the config file
pub const RPC_URL_ENV: &str = "ETHEX_RPC_URL";

const DEFAULT_POLL_INTERVAL_SECS: u64 = 15;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub rpc_url: Option<String>,
    /// Home screen refresh period
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Defaults to `ethex.log` beside the config file
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_poll_interval_secs() -> u64 {
    DEFAULT_POLL_INTERVAL_SECS
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: None,
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

impl Config {
    /// Returns the config directory path (~/.config/ethex on Linux)
    fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join("ethex"))
            .context("Could not determine config directory")
    }

    fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load config from disk (default if absent), then apply `ETHEX_RPC_URL`
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config from {path:?}"))?;
            Self::from_toml(&contents)?
        } else {
            Self::default()
        };

        config.apply_rpc_override(std::env::var(RPC_URL_ENV).ok());
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse config file")
    }

    fn apply_rpc_override(&mut self, url: Option<String>) {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.rpc_url = Some(url.trim().to_string());
        }
    }

    /// Save config to disk
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {dir:?}"))?;

        let path = Self::config_path()?;
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config to {path:?}"))?;

        Ok(())
    }

    /// Set the RPC URL and persist
    pub fn set_rpc(&mut self, url: String) -> Result<()> {
        self.rpc_url = Some(url);
        self.save()
    }

    /// Never zero; a zero-length interval cannot tick
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(1))
    }

    pub fn log_file_path(&self) -> Result<PathBuf> {
        match &self.log_file {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("ethex.log")),
        }
    }
}
