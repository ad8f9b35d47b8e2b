use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::share::{Placeholder, ShareTargetRegistry};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/gallery-social/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("gallery-social").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The site URL is set
    /// - The share popup has a non-zero size
    /// - Configured share targets have unique ids and at least one placeholder
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.url.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "site.url must not be empty".to_string(),
            });
        }

        if self.share.popup_width == 0 || self.share.popup_height == 0 {
            return Err(ConfigError::ValidationError {
                message: "Share popup size must be non-zero".to_string(),
            });
        }

        if let Some(targets) = &self.share.targets {
            let mut seen = HashSet::new();
            for target in targets {
                if !seen.insert(target.id.as_str()) {
                    return Err(ConfigError::ValidationError {
                        message: format!("Duplicate share target '{}'", target.id),
                    });
                }
                if !Placeholder::ALL
                    .iter()
                    .any(|p| target.template.contains(p.token()))
                {
                    return Err(ConfigError::ValidationError {
                        message: format!(
                            "Share target '{}' template has no placeholder",
                            target.id
                        ),
                    });
                }
            }
        }

        Ok(())
    }

    /// Share targets from config, or the built-in catalog.
    pub fn share_targets(&self) -> ShareTargetRegistry {
        match &self.share.targets {
            Some(targets) => ShareTargetRegistry::new(targets.clone()),
            None => ShareTargetRegistry::builtin(),
        }
    }
}
