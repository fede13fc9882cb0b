use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable holding the Gemini API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Configuration for the recommendation client
///
/// The API key is never read from or written to the config file; it only
/// comes from the environment via [`TriageConfig::with_env_api_key`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TriageConfig {
    #[serde(skip)]
    pub api_key: Option<String>,
    pub model_name: String,
    pub api_base_url: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub log_level: String,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model_name: DEFAULT_MODEL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            log_level: "info".to_string(),
        }
    }
}

/// Optional overrides, typically from command-line arguments
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub model_name: Option<String>,
    pub api_base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub log_level: Option<String>,
}

impl TriageConfig {
    /// Loads configuration from a file if it exists, otherwise returns the default config
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = fs::read_to_string(path).map_err(ConfigError::Read)?;
            let config: Self = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves configuration to a file
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string(self)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::Write)?;
        }

        fs::write(path, content).map_err(ConfigError::Write)?;

        Ok(())
    }

    /// Applies overrides, preferring values from `overrides` where present
    pub fn merge(&self, overrides: &ConfigOverrides) -> Self {
        Self {
            api_key: self.api_key.clone(),
            model_name: overrides
                .model_name
                .clone()
                .unwrap_or_else(|| self.model_name.clone()),
            api_base_url: overrides
                .api_base_url
                .clone()
                .unwrap_or_else(|| self.api_base_url.clone()),
            timeout_secs: overrides.timeout_secs.unwrap_or(self.timeout_secs),
            connect_timeout_secs: self.connect_timeout_secs,
            log_level: overrides
                .log_level
                .clone()
                .unwrap_or_else(|| self.log_level.clone()),
        }
    }

    /// Reads the API key from `GEMINI_API_KEY`; unset is treated as empty.
    pub fn with_env_api_key(self) -> Self {
        let api_key = env::var(API_KEY_ENV).unwrap_or_default();
        self.with_api_key(api_key)
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// The key, if present and non-blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

/// Helper function to get default config directory
pub fn get_default_config_dir(app_name: &str) -> Result<PathBuf, ConfigError> {
    let home_dir = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home_dir.join(".config").join(app_name))
}

/// Helper function to get default config file path
pub fn get_default_config_file(app_name: &str) -> Result<PathBuf, ConfigError> {
    let config_dir = get_default_config_dir(app_name)?;
    Ok(config_dir.join("config.toml"))
}
