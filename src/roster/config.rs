//! # Configuration
//!
//! Roster configuration is managed by [`confique`], which layers a TOML file
//! under environment variables.
//!
//! ## Storage Hierarchy
//!
//! Values are resolved in priority order:
//! 1. **Command line**: `--data-dir` (applied by the CLI after loading)
//! 2. **Environment variables**: `ROSTER_DATA_DIR`, `ROSTER_WEATHER_API_KEY`, etc.
//! 3. **Config file**: `roster.toml` in the OS config directory (via `directories`)
//! 4. **Compiled defaults**: `#[config(default = ...)]`
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | OS data dir | Where the record store lives |
//! | `storage_key` | `appData` | Key the collection is stored under |
//! | `notification_ttl_ms` | `3000` | How long a notification stays open |
//! | `weather.api_key` | none | OpenWeather key; lookups are off without it |
//! | `weather.base_url` | `https://api.openweathermap.org` | Weather service root |
//! | `weather.timeout_secs` | `10` | Per-request timeout |

use crate::error::{Result, RosterError};
use crate::notifications::DEFAULT_TTL_MS;
use crate::store::DEFAULT_STORAGE_KEY;
use crate::weather::DEFAULT_BASE_URL;
use confique::Config;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "roster.toml";

/// Stands in for a configured API key when the config is rendered.
pub const REDACTED: &str = "***";

#[derive(Config, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    /// Directory holding the record store. Defaults to the OS data directory.
    #[config(env = "ROSTER_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[config(env = "ROSTER_STORAGE_KEY", default = "appData")]
    pub storage_key: String,

    #[config(env = "ROSTER_NOTIFICATION_TTL_MS", default = 3000)]
    pub notification_ttl_ms: u64,

    #[config(nested)]
    pub weather: WeatherConfig,
}

#[derive(Config, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct WeatherConfig {
    #[config(env = "ROSTER_WEATHER_API_KEY")]
    pub api_key: Option<String>,

    #[config(env = "ROSTER_WEATHER_BASE_URL", default = "https://api.openweathermap.org")]
    pub base_url: String,

    #[config(env = "ROSTER_WEATHER_TIMEOUT_SECS", default = 10)]
    pub timeout_secs: u64,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            notification_ttl_ms: DEFAULT_TTL_MS,
            weather: WeatherConfig::default(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

impl RosterConfig {
    /// Loads env vars over the TOML file at `path`. A missing file is fine.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::builder().env().file(path).load()?)
    }

    /// Renders the effective configuration as TOML, with the API key masked.
    pub fn to_toml(&self) -> Result<String> {
        let mut shown = self.clone();
        if shown.weather.api_key.is_some() {
            shown.weather.api_key = Some(REDACTED.to_string());
        }
        toml::to_string_pretty(&shown).map_err(|e| RosterError::Api(e.to_string()))
    }
}

impl WeatherConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The key, unless it is missing or blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }
}
