use crate::PRISM_API_BASE_URL;
use crate::error::config::ConfigError;

use common::ErrorLocation;
use models::{ModelTier, TargetLanguage, UiLanguage};

use std::panic::Location;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "config.json";
const CONFIG_VERSION: u32 = 1;

/// Environment variable that overrides `api.base_url`.
pub const API_BASE_URL_ENV: &str = "PRISM_API_BASE_URL";

// ============================================
// CONFIG STRUCTS
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Picker selections remembered between sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct UiPreferences {
    #[serde(default)]
    pub language: UiLanguage,
    #[serde(default)]
    pub target_language: TargetLanguage,
    #[serde(default)]
    pub model_tier: ModelTier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub ui: UiPreferences,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            api: ApiConfig::default(),
            ui: UiPreferences::default(),
        }
    }
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

fn default_base_url() -> String {
    PRISM_API_BASE_URL.to_string()
}

// ============================================
// IMPLEMENTATION
// ============================================

impl AppConfig {
    /// Load config from {config_dir}/config.json.
    ///
    /// # Returns
    ///
    /// Returns `Ok(AppConfig)` if loaded successfully or defaults if file missing.
    /// Returns `Err(ConfigError)` if file exists but is corrupted/invalid.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            info!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path).map_err(|e| {
            warn!("Failed to read config file: {}", e);
            ConfigError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                source: e,
            }
        })?;

        let config: AppConfig = serde_json::from_str(&contents).map_err(|e| {
            warn!("Failed to parse config JSON: {}", e);
            ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                reason: e.to_string(),
            }
        })?;

        config.validate()?;

        info!("Config loaded from {}", config_path.display());
        Ok(config)
    }

    /// Save config to {config_dir}/config.json (temp file + rename).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if validation, directory creation, serialization,
    /// write or rename fails.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_dir.to_path_buf(),
            source: e,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let temp_path = config_dir.join(format!("{}.tmp", CONFIG_FILE_NAME));

        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
            location: ErrorLocation::from(Location::caller()),
            reason: e.to_string(),
        })?;

        std::fs::write(&temp_path, json).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, &config_path).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_path.clone(),
            source: e,
        })?;

        info!("Config saved to {}", config_path.display());
        Ok(())
    }

    /// Replace `api.base_url` with `value` if it is set and non-blank.
    ///
    /// Returns `true` when the override was applied.
    pub fn apply_base_url_override(&mut self, value: Option<String>) -> bool {
        match value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            Some(base_url) => {
                info!("API base URL overridden by {API_BASE_URL_ENV}: {base_url}");
                self.api.base_url = base_url;
                true
            }
            None => false,
        }
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedVersion`] for a version this build cannot
    /// read and [`ConfigError::InvalidBaseUrl`] unless `api.base_url` is an
    /// http(s) URL.
    #[track_caller]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 || self.version > CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                location: ErrorLocation::from(Location::caller()),
                version: self.version,
                supported: CONFIG_VERSION,
            });
        }

        let base_url = self.api.base_url.trim();
        let reason = if base_url.is_empty() {
            Some("must not be empty")
        } else if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            Some("must start with http:// or https://")
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(ConfigError::InvalidBaseUrl {
                location: ErrorLocation::from(Location::caller()),
                base_url: self.api.base_url.clone(),
                reason,
            });
        }

        Ok(())
    }
}
