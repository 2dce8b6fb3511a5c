//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::calculation::AllocationOptions;
use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── engine.yaml   # Threshold, day boundary and batch policy
/// ```
///
/// # Example
///
/// ```no_run
/// use timecard_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("Daily threshold: {}h", loader.config().daily_threshold_hours);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
    options: AllocationOptions,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `engine.yaml` is missing
    /// - the file contains invalid YAML or unknown fields
    /// - a value is out of range
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let config_path = path.as_ref().join("engine.yaml");
        let config = Self::load_yaml::<EngineConfig>(&config_path)?;
        let loader = Self::from_config(config)?;

        info!(
            path = %config_path.display(),
            daily_threshold_hours = %loader.config.daily_threshold_hours,
            day_boundary = %loader.config.day_boundary,
            "Loaded engine configuration"
        );
        Ok(loader)
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        let options = config.allocation_options()?;
        Ok(Self { config, options })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the allocation options derived from the configuration.
    pub fn allocation_options(&self) -> AllocationOptions {
        self.options
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        let config = EngineConfig::default();
        Self {
            options: AllocationOptions::default(),
            config,
        }
    }
}
