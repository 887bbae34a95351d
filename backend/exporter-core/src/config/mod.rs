use crate::error::config::ConfigError;
use crate::{DEFAULT_TIMEOUT, EXPORTER_USER_AGENT};

use common::ErrorLocation;

use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use log::{info, warn};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "exporter.toml";
const CONFIG_VERSION: u32 = 1;
const MAX_TIMEOUT_SECS: u64 = 3600;

// ============================================
// CONFIG STRUCT
// ============================================

/// Settings the host add-on may ship next to itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExporterConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Texture folder, relative to the project directory.
    #[serde(default = "default_textures_dir")]
    pub textures_dir: String,

    /// Accepted texture extensions, without the dot.
    #[serde(default = "default_texture_extensions")]
    pub texture_extensions: Vec<String>,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            timeout_secs: default_timeout_secs(),
            textures_dir: default_textures_dir(),
            texture_extensions: default_texture_extensions(),
            user_agent: default_user_agent(),
        }
    }
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_version() -> u32 {
    CONFIG_VERSION
}
fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}
fn default_textures_dir() -> String {
    "textures".to_string()
}
fn default_texture_extensions() -> Vec<String> {
    vec!["png".to_string(), "jpg".to_string()]
}
fn default_user_agent() -> String {
    EXPORTER_USER_AGENT.to_string()
}

// ============================================
// IMPLEMENTATION
// ============================================

impl ExporterConfig {
    /// Load `{config_dir}/exporter.toml`.
    ///
    /// # Returns
    ///
    /// Returns defaults when the file does not exist.
    /// Returns `Err(ConfigError)` if the file exists but cannot be read, parsed or validated.
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

        let config = Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::ParseError {
                location, reason, ..
            } => ConfigError::ParseError {
                location,
                path: config_path.clone(),
                reason,
            },
            other => other,
        })?;

        info!("Config loaded from {}", config_path.display());
        Ok(config)
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: ExporterConfig = toml::from_str(contents).map_err(|e| {
            warn!("Failed to parse config TOML: {}", e);
            ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: Path::new(CONFIG_FILE_NAME).to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// True when `file_name` ends in one of the texture extensions.
    ///
    /// Case-sensitive, matching what the host writes.
    pub fn is_texture(&self, file_name: &str) -> bool {
        self.texture_extensions
            .iter()
            .any(|extension| file_name.ends_with(&format!(".{extension}")))
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 || self.version > CONFIG_VERSION {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid version: {} (expected 1-{})",
                    self.version, CONFIG_VERSION
                ),
            });
        }

        if self.timeout_secs == 0 || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid timeout: {}s (must be 1-{MAX_TIMEOUT_SECS})",
                    self.timeout_secs
                ),
            });
        }

        if self.textures_dir.trim().is_empty() || Path::new(&self.textures_dir).is_absolute() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid textures_dir '{}' (must be a non-empty relative path)",
                    self.textures_dir
                ),
            });
        }

        if self.texture_extensions.is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "texture_extensions cannot be empty".to_string(),
            });
        }

        if let Some(bad) = self
            .texture_extensions
            .iter()
            .find(|extension| extension.is_empty() || extension.starts_with('.'))
        {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("Invalid texture extension '{bad}' (no leading dot)"),
            });
        }

        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "user_agent cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}
