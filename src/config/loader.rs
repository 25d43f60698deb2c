//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PayrollError, PayrollResult};
use crate::payrun::ErrorMessageMap;

use super::types::{PayrollConfig, ServerConfig};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── error_messages.yaml  # Known collaborator errors (required)
/// └── server.yaml          # Calculator API settings (optional)
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Binding to {}", loader.server().bind_address);
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `error_messages.yaml` is missing or if any
    /// present file contains invalid YAML. A missing `server.yaml` falls
    /// back to [`ServerConfig::default`].
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();

        let messages = Self::load_yaml::<ErrorMessageMap>(&path.join("error_messages.yaml"))?;

        let server_path = path.join("server.yaml");
        let server = if server_path.exists() {
            Self::load_yaml::<ServerConfig>(&server_path)?
        } else {
            debug!(path = %server_path.display(), "No server.yaml, using defaults");
            ServerConfig::default()
        };

        Ok(Self {
            config: PayrollConfig::new(messages, server),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: PayrollConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the known-error message map.
    pub fn messages(&self) -> &ErrorMessageMap {
        self.config.messages()
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        self.config.server()
    }
}
