use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::file_service::{ensure_dir, write_atomic};
use crate::error::{ConfigError, GatewayError, StorageError};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const API_KEY_ENV_VARS: [&str; 2] = ["API_KEY", "GEMINI_API_KEY"];

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

/// Settings actually used to reach the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: String,
}

impl Config {
    /// Fills gaps with environment variables and defaults. The environment
    /// wins over the file for the API key.
    pub fn effective(&self) -> Result<EffectiveConfig, GatewayError> {
        let api_key = API_KEY_ENV_VARS
            .iter()
            .find_map(|var| std::env::var(var).ok().filter(|v| !v.is_empty()))
            .or_else(|| self.api_key.clone().filter(|k| !k.is_empty()))
            .ok_or(GatewayError::MissingApiKey)?;

        Ok(EffectiveConfig {
            base_url: self
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: self
                .model
                .clone()
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key,
        })
    }
}

/// Reads and writes `config.json` inside a data directory.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("config.json"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(dir) = self.path.parent() {
            ensure_dir(dir)?;
        }
        let content = serde_json::to_string_pretty(config).map_err(StorageError::from)?;
        write_atomic(&self.path, &content)?;
        Ok(())
    }

    fn update(&self, apply: impl FnOnce(&mut Config)) -> Result<(), ConfigError> {
        let mut config = self.load().unwrap_or_else(|e| {
            tracing::warn!("Replacing unreadable config: {}", e);
            Config::default()
        });
        apply(&mut config);
        self.save(&config)
    }

    pub fn set_api_key(&self, key: &str) -> Result<(), ConfigError> {
        self.update(|c| c.api_key = Some(key.to_string()))
    }

    pub fn set_base_url(&self, url: &str) -> Result<(), ConfigError> {
        self.update(|c| c.base_url = Some(url.to_string()))
    }

    pub fn set_model(&self, model: &str) -> Result<(), ConfigError> {
        self.update(|c| c.model = Some(model.to_string()))
    }
}
