//! Configuration module for the bloomfilter crate.
//!
//! Settings can be loaded from files (TOML, YAML, JSON) and overridden with
//! environment variables. Everything is validated before use.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError as ExternalConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::data_structures::bloom_filter::BloomFilterConfig;
use crate::error::config::ConfigError;
use crate::error::BloomResult;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "BLOOM";

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    fn validate(&self) -> ConfigResult<()>;
}

/// Top-level settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Filter sizing
    pub filter: BloomFilterConfig,

    /// Log configuration
    pub log: LogConfig,
}

impl Validate for Settings {
    fn validate(&self) -> ConfigResult<()> {
        Validate::validate(&self.filter)?;
        self.log.validate()?;
        Ok(())
    }
}

impl Validate for BloomFilterConfig {
    fn validate(&self) -> ConfigResult<()> {
        BloomFilterConfig::validate(self)
            .map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,

    /// Whether to include source code locations in logs
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            source_location: true,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValueOutOfRange {
                key: "log.level".to_string(),
                message: format!(
                    "expected one of trace, debug, info, warn, error; got {}",
                    self.level
                ),
            }),
        }
    }
}

/// Configuration loader.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the settings from defaults, the file, and then the environment.
    ///
    /// Environment keys take the form `PREFIX__SECTION__KEY`, for example
    /// `BLOOM__FILTER__EXPECTED_ITEMS=5000`.
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` if the configuration was loaded and validated
    /// * `Err(ConfigError)` otherwise
    pub fn load(&self) -> ConfigResult<Settings> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&Settings::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let format = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => FileFormat::Toml,
                Some("json") => FileFormat::Json,
                Some("yaml" | "yml") => FileFormat::Yaml,
                _ => {
                    return Err(ConfigError::ParseError(format!(
                        "Unsupported file extension for: {path:?}"
                    )))
                }
            };
            builder = builder.add_source(File::from(path.as_path()).format(format));
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(|e| match e {
            ExternalConfigError::NotFound(path) => ConfigError::FileNotFound(PathBuf::from(path)),
            other => ConfigError::ParseError(other.to_string()),
        })?;

        let settings: Settings = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        settings.validate()?;

        tracing::debug!(?settings, "Loaded configuration");

        Ok(settings)
    }
}

/// Write the default settings to `output` as TOML, creating parent directories.
pub fn write_default_config<P: AsRef<Path>>(output: P) -> BloomResult<()> {
    let output = output.as_ref();
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&Settings::default())
        .map_err(|e| ConfigError::ParseError(format!("Failed to serialize config: {e}")))?;
    std::fs::write(output, toml)?;

    tracing::info!("Default configuration written to {:?}", output);
    Ok(())
}
