//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\album-browser\config.toml
//! - macOS: ~/Library/Application Support/album-browser/config.toml
//! - Linux: ~/.config/album-browser/config.toml
//!
//! Command-line flags override values from the file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::albums::AlbumsStoreConfig;
use crate::albums::endpoint::DEFAULT_BASE_URL;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API credentials
    pub credentials: Credentials,

    /// Last.fm API settings
    pub api: ApiConfig,
}

/// API credentials
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    /// Last.fm API key
    pub lastfm_api_key: Option<String>,
}

/// Last.fm API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// API root URL
    pub base_url: String,

    /// Whole-request timeout in seconds (0 = no timeout)
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// Keys shorter than this are masked entirely
const MIN_KEY_LEN_FOR_HINT: usize = 16;

impl Config {
    /// Request timeout, if one is configured
    pub fn timeout(&self) -> Option<Duration> {
        (self.api.timeout_secs > 0).then(|| Duration::from_secs(self.api.timeout_secs))
    }

    /// Store settings, or `None` when no API key is available
    pub fn store_config(&self) -> Option<AlbumsStoreConfig> {
        let api_key = self
            .credentials
            .lastfm_api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())?;

        Some(AlbumsStoreConfig {
            base_url: self.api.base_url.clone(),
            api_key: api_key.to_string(),
        })
    }

    /// API key masked for display
    pub fn masked_api_key(&self) -> String {
        match self.credentials.lastfm_api_key.as_deref() {
            None | Some("") => "(not set)".to_string(),
            Some(key) if key.chars().count() < MIN_KEY_LEN_FOR_HINT => "****".to_string(),
            Some(key) => {
                let tail: String = key.chars().skip(key.chars().count() - 4).collect();
                format!("****{}", tail)
            }
        }
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("album-browser"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from the default location
///
/// Returns default config if the file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };

    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match load_from(&path) {
        Ok(config) => {
            tracing::info!("Loaded config from {:?}", path);
            config
        }
        Err(e) => {
            tracing::error!("{}", e);
            tracing::warn!("Using default configuration");
            Config::default()
        }
    }
}

/// Load configuration from a specific file
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
    toml::from_str(&contents).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    Read(PathBuf, std::io::Error),

    #[error("Failed to parse config file {0}: {1}")]
    Parse(PathBuf, toml::de::Error),

    #[error("Missing Last.fm API key (set [credentials] lastfm_api_key, --api-key or LASTFM_API_KEY)")]
    MissingApiKey,
}

// ============================================================================
// Tests
// ============================================================================
