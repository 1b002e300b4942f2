//! Configuration module for vitrine-admin.
//!
//! Handles loading configuration from the TOML file with
//! environment-variable overrides. The document address, cloud name and
//! upload preset are deployment-time constants, never user input.

pub mod file;

use crate::config::file::FileConfig;
use std::path::Path;
use thiserror::Error;
use url::Url;
use vitrine_sdk::config::MediaHost;

/// Environment override for the document address.
pub const ENV_DOCUMENT_URL: &str = "VITRINE_DOCUMENT_URL";
/// Environment override for the media-host cloud name.
pub const ENV_CLOUD_NAME: &str = "VITRINE_CLOUD_NAME";
/// Environment override for the upload preset.
pub const ENV_UPLOAD_PRESET: &str = "VITRINE_UPLOAD_PRESET";

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("invalid {name}: {source}")]
    InvalidUrl {
        name: &'static str,
        source: url::ParseError,
    },

    #[error("validation error: {0}")]
    ValidationError(String),
}

/// Loaded configuration result.
pub struct LoadedConfig {
    pub document_url: Url,
    pub media_host: MediaHost,
}

/// Configuration loader that handles the complete loading process.
pub struct ConfigLoader {
    config_path: std::path::PathBuf,
}

impl ConfigLoader {
    /// Create a new config loader.
    pub fn new(config_path: impl AsRef<Path>) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
        }
    }

    /// Load and process the configuration.
    ///
    /// This will:
    /// 1. Read the TOML file
    /// 2. Apply `VITRINE_*` environment overrides
    /// 3. Validate the result
    pub fn load(&self) -> Result<LoadedConfig, ConfigError> {
        let config_content = std::fs::read_to_string(&self.config_path)?;
        let file_config: FileConfig = toml::from_str(&config_content)?;

        let document_url = match std::env::var(ENV_DOCUMENT_URL) {
            Ok(raw) => Url::parse(&raw).map_err(|source| ConfigError::InvalidUrl {
                name: ENV_DOCUMENT_URL,
                source,
            })?,
            Err(_) => file_config.site.document_url,
        };
        let cloud_name = std::env::var(ENV_CLOUD_NAME)
            .unwrap_or(file_config.media_host.cloud_name);
        let upload_preset = std::env::var(ENV_UPLOAD_PRESET)
            .unwrap_or(file_config.media_host.upload_preset);

        let loaded = LoadedConfig {
            document_url,
            media_host: MediaHost::new(cloud_name, upload_preset),
        };
        self.validate(&loaded)?;
        Ok(loaded)
    }

    fn validate(&self, config: &LoadedConfig) -> Result<(), ConfigError> {
        if config.media_host.cloud_name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "media_host.cloud_name is empty".to_string(),
            ));
        }
        if config.media_host.upload_preset.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "media_host.upload_preset is empty".to_string(),
            ));
        }
        Ok(())
    }
}
