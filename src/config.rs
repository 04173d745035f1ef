//! Configuration management for the image resizer
//!
//! Settings come from an optional `config.toml` with environment overrides
//! prefixed `IMAGE_RESIZER`, e.g. `IMAGE_RESIZER__STORAGE__ROOT=/data`.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "IMAGE_RESIZER";
const DEFAULT_CONFIG_NAME: &str = "config";
const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Complete resizer configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Filesystem store settings
#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Root directory for stored objects
    pub root: String,

    /// Per-object size limit in MB, 0 means unlimited
    pub max_object_size_mb: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Default level when RUST_LOG is not set
    pub level: String,
}

impl AppConfig {
    /// Load `config.toml` from the working directory (if present) with
    /// environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(File::with_name(DEFAULT_CONFIG_NAME).required(false))
    }

    /// Load an explicit configuration file with environment overrides
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::build(File::from(path).required(true))
    }

    fn build<S>(file: S) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let settings = Config::builder()
            .set_default("storage.root", "./storage")?
            .set_default("storage.max_object_size_mb", 0)?
            .set_default("logging.level", "info")?
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.root.trim().is_empty() {
            return Err(ConfigError::Message("storage.root cannot be empty".into()));
        }

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Message(format!(
                "logging.level must be one of {:?}, got {:?}",
                LOG_LEVELS, self.logging.level
            )));
        }

        Ok(())
    }
}

impl StorageConfig {
    /// Get the store root as PathBuf
    pub fn root_path(&self) -> PathBuf {
        PathBuf::from(&self.root)
    }

    /// Get the per-object limit in bytes, `None` when unlimited
    pub fn max_object_size_bytes(&self) -> Option<u64> {
        match self.max_object_size_mb {
            0 => None,
            mb => Some(mb.saturating_mul(1024 * 1024)),
        }
    }
}
