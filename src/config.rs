use crate::constants::{KITSU_API, limits};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub api: ApiConfig,

    pub browse: BrowseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// `tracing` filter directive; `RUST_LOG` takes precedence.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,

    pub user_agent: String,

    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: KITSU_API.to_string(),
            user_agent: concat!("kitsu/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_seconds: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowseConfig {
    /// Page size used when a command does not pass `--limit`.
    pub default_limit: u32,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            default_limit: limits::DEFAULT_PAGE_LIMIT,
        }
    }
}

impl BrowseConfig {
    #[must_use]
    pub fn limit(&self) -> NonZeroU32 {
        NonZeroU32::new(self.default_limit).unwrap_or(NonZeroU32::MIN)
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let paths = Self::config_paths();

        for path in &paths {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                return Self::load_from_path(path);
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Config saved to: {}", path.display());
        Ok(())
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        paths.push(PathBuf::from("config.toml"));

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("kitsu").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".kitsu").join("config.toml"));
        }

        paths
    }

    fn default_config_path() -> PathBuf {
        PathBuf::from("config.toml")
    }

    /// Writes the default config to `./config.toml` unless it exists.
    /// Returns whether a file was created.
    pub fn create_default_if_missing() -> Result<bool> {
        let path = Self::default_config_path();
        if path.exists() {
            Ok(false)
        } else {
            let config = Self::default();
            config.save_to_path(&path)?;
            info!("Created default config file: {}", path.display());
            Ok(true)
        }
    }

    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.api.base_url)
            .with_context(|| format!("Invalid API base URL: {}", self.api.base_url))?;

        if self.api.user_agent.trim().is_empty() {
            anyhow::bail!("API user agent cannot be empty");
        }

        if self.api.timeout_seconds == 0 {
            anyhow::bail!("API timeout must be > 0 seconds");
        }

        if !(1..=limits::MAX_PAGE_LIMIT).contains(&self.browse.default_limit) {
            anyhow::bail!(
                "Default page limit must be between 1 and {}",
                limits::MAX_PAGE_LIMIT
            );
        }

        Ok(())
    }
}
