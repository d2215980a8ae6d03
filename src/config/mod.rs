//! Configuration module for the VoxClone client
//!
//! This module handles client configuration from various sources: .env files,
//! YAML files, and environment variables. Priority: YAML > ENV vars > .env
//! values > defaults.
//!
//! # Example
//! ```rust,no_run
//! use voxclone_client::config::ClientConfig;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load from environment variables only
//! let config = ClientConfig::from_env()?;
//!
//! // Load from YAML file with environment variable overrides
//! let config_path = PathBuf::from("config.yaml");
//! let config = ClientConfig::from_file(&config_path)?;
//!
//! println!("Generation endpoint: {}", config.clone_api().endpoint_url());
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::clone::{CloneApiConfig, DEFAULT_BASE_URL};

/// Fixed suggested filename for downloaded results.
///
/// Deliberately independent of the artifact's actual content type; the
/// service answers with MP3 today and the suggested name follows it.
pub const DEFAULT_DOWNLOAD_FILENAME: &str = "voix-clonee.mp3";

/// Environment variable overriding the service base URL.
pub const ENV_BASE_URL: &str = "VOXCLONE_BASE_URL";

/// Environment variable overriding the suggested download filename.
pub const ENV_DOWNLOAD_FILENAME: &str = "VOXCLONE_DOWNLOAD_FILENAME";

/// Environment variable overriding the download directory.
pub const ENV_DOWNLOAD_DIR: &str = "VOXCLONE_DOWNLOAD_DIR";

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Client configuration
///
/// Contains everything the workflow host needs: where the generation service
/// lives and how downloaded results are named and placed.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the generation service.
    pub base_url: String,

    /// Suggested filename for the download action.
    pub download_filename: String,

    /// Directory downloaded results are written to.
    pub download_dir: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            download_filename: DEFAULT_DOWNLOAD_FILENAME.to_string(),
            download_dir: PathBuf::from("."),
        }
    }
}

/// YAML representation of [`ClientConfig`]; every field optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct YamlClientConfig {
    base_url: Option<String>,
    download_filename: Option<String>,
    download_dir: Option<PathBuf>,
}

impl ClientConfig {
    /// Load configuration from environment variables over defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::defaults_with_env();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file, with environment variables and
    /// defaults filling in anything the file leaves out.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::defaults_with_env();

        let raw = std::fs::read_to_string(path)?;
        let yaml: YamlClientConfig = serde_yaml::from_str(&raw)?;

        if let Some(base_url) = yaml.base_url {
            config.base_url = base_url;
        }
        if let Some(filename) = yaml.download_filename {
            config.download_filename = filename;
        }
        if let Some(dir) = yaml.download_dir {
            config.download_dir = dir;
        }

        config.validate()?;
        Ok(config)
    }

    fn defaults_with_env() -> Self {
        let mut config = Self::default();
        if let Ok(value) = std::env::var(ENV_BASE_URL)
            && !value.is_empty()
        {
            config.base_url = value;
        }
        if let Ok(value) = std::env::var(ENV_DOWNLOAD_FILENAME)
            && !value.is_empty()
        {
            config.download_filename = value;
        }
        if let Ok(value) = std::env::var(ENV_DOWNLOAD_DIR)
            && !value.is_empty()
        {
            config.download_dir = PathBuf::from(value);
        }
        config
    }

    /// Connection settings for the generation API, derived from this
    /// configuration.
    pub fn clone_api(&self) -> CloneApiConfig {
        CloneApiConfig::new(self.base_url.clone())
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.clone_api().validate().map_err(ConfigError::Invalid)?;

        if self.download_filename.is_empty() {
            return Err(ConfigError::Invalid(
                "Download filename is required".to_string(),
            ));
        }
        if self.download_filename.contains(['/', '\\']) {
            return Err(ConfigError::Invalid(format!(
                "Download filename '{}' must not contain path separators",
                self.download_filename
            )));
        }

        Ok(())
    }
}
