use std::{io, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

fn default_database_url() -> String {
    "sqlite://stride.db?mode=rwc".into()
}

fn default_pool_size() -> u32 {
    8
}

fn default_log_level() -> String {
    "info".into()
}

#[derive(Debug, Deserialize, Serialize)]
pub struct AppConfig {
    /// Connection URL for the relational store.
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// Maximum number of pooled connections.
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
    /// Minimum log level to print. Possible values: 'trace', 'debug', 'info', 'warn', 'error'.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            pool_size: default_pool_size(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Error parsing configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

impl AppConfig {
    /// Loads the config from the given path, writing out the defaults if no
    /// file exists yet. `STRIDE_DATABASE_URL` overrides the stored URL.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let mut config: Self = if path.exists() {
            let data = std::fs::read_to_string(path)?;
            toml::from_str(&data)?
        } else {
            let config = Self::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(
                path,
                toml::to_string_pretty(&config).expect("config serialization failed"),
            )?;
            config
        };

        if let Ok(url) = std::env::var("STRIDE_DATABASE_URL") {
            config.database_url = url;
        }

        Ok(config)
    }
}
