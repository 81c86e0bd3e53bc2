use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::{warn, LevelFilter};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Console logs are off unless switched on, to keep the prompt clean
    #[serde(default)]
    pub console_enabled: bool,
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "debug".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { console_enabled: false, level: default_level() }
    }
}

impl LoggingConfig {
    /// The configured level, or `Info` if the setting is not a level name
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.level).unwrap_or_else(|_| {
            warn!("Unknown log level '{}', falling back to info", self.level);
            LevelFilter::Info
        })
    }

    /// The level that should be active right now
    pub fn effective_level(&self) -> LevelFilter {
        if self.console_enabled {
            self.level_filter()
        } else {
            LevelFilter::Off
        }
    }
}

impl Config {
    /// Load the user config file, or the defaults when there is none.
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;
        if !config_path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

fn get_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "spoken-time", "spoken-time")
        .context("Failed to determine config directory")?;

    Ok(proj_dirs.config_dir().join("config.toml"))
}
