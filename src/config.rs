//! User configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::warn;

/// Record delimiter used when the config does not name one.
pub const DEFAULT_DELIMITER: char = '|';

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Path to the task file. A leading `~/` expands to the home
    /// directory. Defaults to `tasks.txt` inside the app directory.
    #[serde(default)]
    pub tasks_file: Option<String>,

    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Field delimiter for task records: "|" or ",".
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
        }
    }
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

/// Application directory (`~/.taskdeck`), created on first use.
pub fn get_app_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("could not determine home directory")?;
    let dir = home.join(".taskdeck");
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

fn config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.toml"))
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = config_path()?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid config at {}", path.display()))?;
        Ok(config)
    }

    /// Resolved location of the task file.
    pub fn tasks_path(&self) -> Result<PathBuf> {
        match &self.tasks_file {
            Some(raw) => Ok(expand_home(raw)),
            None => Ok(get_app_dir()?.join("tasks.txt")),
        }
    }

    /// Active record delimiter. Only `|` and `,` are supported; any other
    /// configured value falls back to the default.
    pub fn delimiter(&self) -> char {
        match self.storage.delimiter.as_str() {
            "|" => '|',
            "," => ',',
            other => {
                warn!(
                    "unsupported delimiter {:?} in config, using {:?}",
                    other, DEFAULT_DELIMITER
                );
                DEFAULT_DELIMITER
            }
        }
    }
}

fn expand_home(raw: &str) -> PathBuf {
    if let Some(stripped) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(raw)
}
