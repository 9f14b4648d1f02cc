use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the Unimatch engine
#[derive(Error, Debug)]
pub enum UnimatchError {
    /// Configuration related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration validation errors
    #[error("Configuration validation failed: {errors:?}")]
    ConfigValidation { errors: Vec<ValidationError> },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Invalid configuration value
    #[error("Invalid configuration value at {path}: {message}")]
    InvalidConfigValue { path: String, message: String },

    /// Course catalog file missing or unreadable (pipeline-fatal)
    #[error("Catalog not found: {path}")]
    CatalogNotFound { path: PathBuf },

    /// Catalog is missing required columns (pipeline-fatal)
    #[error("Catalog is missing required columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// Catalog contained no course rows; no index can be built
    #[error("Catalog is empty; cannot build a vector index")]
    EmptyCatalog,

    /// Profile file errors
    #[error("Profile error: {0}")]
    Profile(String),

    /// IO errors
    #[error("IO error: {context}: {source}")]
    Io {
        source: std::io::Error,
        context: String,
    },

    /// CSV parsing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML deserialization errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error("TOML serialization error: {0}")]
    TomlSerialization(#[from] toml::ser::Error),

    /// JSON errors
    #[error("JSON error: {context}: {source}")]
    Json {
        source: serde_json::Error,
        context: String,
    },

    /// Generic errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Path to the configuration key that failed validation
    pub path: String,
    /// Error message describing the validation failure
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type for Unimatch operations
pub type Result<T> = std::result::Result<T, UnimatchError>;
