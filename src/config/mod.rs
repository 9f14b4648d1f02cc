//! Configuration management
//!
//! Handles loading, validation, and persistence of the TOML configuration,
//! with environment variable overrides layered on top.

use crate::error::{Result, UnimatchError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod validator;

pub use validator::ConfigValidator;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "_meta")]
    pub meta: MetaConfig,
    pub catalog: CatalogConfig,
    pub engine: EngineConfig,
}

/// Metadata about the configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaConfig {
    pub schema_version: String,
    #[serde(default = "current_timestamp")]
    pub created_at: String,
    #[serde(default = "current_timestamp")]
    pub last_modified: String,
}

fn current_timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Data file locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub courses_file: PathBuf,
    pub rankings_file: PathBuf,
}

/// Recommendation engine tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Fixed size of the recommendation set per query
    pub top_k: usize,
    /// Rows delivered per pagination batch
    pub batch_size: usize,
    /// Vocabulary cap for the term index
    pub max_features: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            top_k: 15,
            batch_size: 15,
            max_features: 5000,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(UnimatchError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| UnimatchError::Io {
            source: e,
            context: format!("Failed to read config file: {:?}", path),
        })?;
        let mut config: Config = toml::from_str(&content)?;

        // Apply environment variable overrides
        config.apply_env_overrides();

        // Validate configuration
        ConfigValidator::validate(&config)?;

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| UnimatchError::Io {
            source: e,
            context: format!("Failed to write config file: {:?}", path),
        })?;
        Ok(())
    }

    /// Apply environment variable overrides
    /// Environment variables in format: UNIMATCH_SECTION__KEY=value
    pub fn apply_env_overrides(&mut self) {
        for (key, value) in std::env::vars() {
            if let Some(config_key) = key.strip_prefix("UNIMATCH_") {
                if let Err(e) = self.set_value_from_env(config_key, &value) {
                    tracing::warn!("Failed to apply env override {}: {}", key, e);
                }
            }
        }
    }

    fn set_value_from_env(&mut self, path: &str, value: &str) -> Result<()> {
        match path {
            "CATALOG__COURSES_FILE" => {
                self.catalog.courses_file = PathBuf::from(value);
            }
            "CATALOG__RANKINGS_FILE" => {
                self.catalog.rankings_file = PathBuf::from(value);
            }
            "ENGINE__TOP_K" => {
                self.engine.top_k = parse_env(path, value)?;
            }
            "ENGINE__BATCH_SIZE" => {
                self.engine.batch_size = parse_env(path, value)?;
            }
            "ENGINE__MAX_FEATURES" => {
                self.engine.max_features = parse_env(path, value)?;
            }
            _ => {
                tracing::debug!("Unknown env config key: {}", path);
            }
        }
        Ok(())
    }

    /// Get the default configuration file path
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| UnimatchError::Config("Cannot determine config directory".to_string()))?;

        Ok(config_dir.join("unimatch").join("config.toml"))
    }

    /// Get the default data directory
    pub fn default_data_dir() -> Result<PathBuf> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| UnimatchError::Config("Cannot determine home directory".to_string()))?;

        Ok(home_dir.join(".unimatch"))
    }
}

fn parse_env(path: &str, value: &str) -> Result<usize> {
    value.parse().map_err(|_| UnimatchError::InvalidConfigValue {
        path: path.to_string(),
        message: format!("Cannot parse '{}' as integer", value),
    })
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = PathBuf::from("~/.unimatch");

        Self {
            meta: MetaConfig {
                schema_version: "1.0.0".to_string(),
                created_at: current_timestamp(),
                last_modified: current_timestamp(),
            },
            catalog: CatalogConfig {
                courses_file: data_dir.join("courses.csv"),
                rankings_file: data_dir.join("rankings.csv"),
            },
            engine: EngineConfig::default(),
        }
    }
}
