//! Site configuration loading from config.toml
//!
//! The file holds the HTTP bind address and the impact counters that should
//! exist on first run. Every section is optional; a missing file yields the
//! defaults.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Environment variable naming an alternative config file
pub const CONFIG_PATH_VAR: &str = "DONATION_HUB_CONFIG";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize)]
pub struct SiteConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Impact counters to seed
    #[serde(default)]
    pub impact_counters: Vec<ImpactCounterConfig>,
}

/// HTTP server settings
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Address the server listens on
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

fn default_bind_address() -> String {
    "127.0.0.1:8000".to_string()
}

/// Seed entry for a single impact counter
#[derive(Debug, Deserialize, Clone)]
pub struct ImpactCounterConfig {
    /// Counter name, e.g. `"meals_served"`
    pub name: String,
    /// Initial value
    #[serde(default)]
    pub value: i64,
    /// Icon identifier
    #[serde(default)]
    pub icon_class: String,
}

/// Loads site configuration from a TOML file
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SiteConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads the configuration named by `DONATION_HUB_CONFIG` (default `./config.toml`).
///
/// A missing file is not an error; the defaults are used instead.
pub fn load_default_config() -> Result<SiteConfig> {
    let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| "config.toml".to_string());
    if !Path::new(&path).exists() {
        tracing::warn!("Config file {} not found, using defaults", path);
        return Ok(SiteConfig::default());
    }
    load_config(path)
}
