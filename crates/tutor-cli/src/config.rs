//! Tutor CLI Configuration Management
//!
//! Configuration is layered with figment, lowest priority first:
//! - Built-in defaults
//! - Configuration file (`tutor.toml` in the working directory, or the path
//!   given with `--config`)
//! - Environment variables (`TUTOR_*`, nested keys separated by `__`, e.g.
//!   `TUTOR_GUESS__MAX_GUESSES=5`)
//! - Command line overrides

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use tutor_core::{GuessConfig, RandomConfig, TowerConfig};

/// Default configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "tutor.toml";

// ----------------------------------------------------------------------------
// CLI Application Configuration
// ----------------------------------------------------------------------------

/// Complete configuration for the tutor CLI
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Seeding of the random source
    pub random: RandomConfig,

    /// Guessing game bounds
    pub guess: GuessConfig,

    /// Tower drop physics
    pub tower: TowerConfig,

    /// CLI-specific settings
    pub cli: CliConfig,
}

/// CLI-specific configuration options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Enable verbose logging output
    pub verbose: bool,
}

// ----------------------------------------------------------------------------
// Configuration Loading Logic
// ----------------------------------------------------------------------------

impl AppConfig {
    /// Load configuration and apply command line overrides on top.
    ///
    /// An explicit `path` must exist. Without one, `tutor.toml` in the
    /// working directory is read if present.
    pub fn load_with_overrides(
        path: Option<&Path>,
        verbose: Option<bool>,
    ) -> Result<Self, ConfigError> {
        let mut figment = match path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::Loading(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            Some(path) => Self::figment(path),
            None => Self::figment(Path::new(DEFAULT_CONFIG_FILE)),
        };

        if let Some(v) = verbose {
            figment = figment.merge(("cli.verbose", v));
        }

        Self::extract(figment)
    }

    fn figment(path: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("TUTOR_").split("__"))
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: AppConfig = figment
            .extract()
            .map_err(|e| ConfigError::Loading(format!("Failed to load configuration: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.random
            .validate()
            .and_then(|_| self.guess.validate())
            .and_then(|_| self.tower.validate())
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Serialization(format!("Failed to serialize config: {}", e)))
    }
}

// ----------------------------------------------------------------------------
// Error Types
// ----------------------------------------------------------------------------

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration loading error: {0}")]
    Loading(String),

    #[error("Configuration validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
