use anyhow::Context;
use remit_client::{data_dir, DEFAULT_BALANCE, DEFAULT_CURRENCY};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::io;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "remit.config.json";

#[derive(Debug)]
pub enum ConfigError {
    InvalidConfig,
    IoError(io::Error),
    SerdeError(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig => write!(f, "Config file is invalid"),
            Self::IoError(e) => write!(f, "IO error: {e}"),
            Self::SerdeError(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(error: io::Error) -> Self {
        Self::IoError(error)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        Self::SerdeError(error)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Balance the form opens with
    pub initial_balance: f64,
    /// Label shown next to amounts, e.g. "S/."
    pub currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_balance: DEFAULT_BALANCE,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

/// Reads the config from the data dir, creating a default one on first launch.
pub fn load_config() -> anyhow::Result<Config> {
    let root = data_dir().context("Could not find home directory")?;
    std::fs::create_dir_all(&root)
        .with_context(|| format!("Could not create datadir {}", root.display()))?;

    let config_path = root.join(CONFIG_FILE_NAME);
    read_config(&config_path)
        .with_context(|| format!("Could not read config at {}", config_path.display()))
}

pub fn read_config(config_path: &Path) -> Result<Config, ConfigError> {
    // if no config file, write and return the default
    if !config_path.exists() {
        let config = Config::default();
        write_config(config_path, &config)?;
        return Ok(config);
    } else if !config_path.is_file() {
        return Err(ConfigError::InvalidConfig);
    }

    let data = std::fs::read_to_string(config_path)?;
    Ok(serde_json::from_str(&data)?)
}

pub fn write_config(config_path: &Path, config: &Config) -> Result<(), ConfigError> {
    let json_string = serde_json::to_string_pretty(config)?;
    std::fs::write(config_path, json_string)?;

    Ok(())
}
