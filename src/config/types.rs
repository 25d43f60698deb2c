//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::payrun::ErrorMessageMap;

/// Default address the calculator API binds to.
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

/// HTTP server settings from `server.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on (e.g., "0.0.0.0:8080").
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

fn default_bind_address() -> String {
    DEFAULT_BIND_ADDRESS.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

/// The complete payroll configuration loaded from YAML files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayrollConfig {
    /// Known collaborator errors and their friendlier messages.
    messages: ErrorMessageMap,
    /// HTTP server settings.
    server: ServerConfig,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(messages: ErrorMessageMap, server: ServerConfig) -> Self {
        Self { messages, server }
    }

    /// Returns the known-error message map.
    pub fn messages(&self) -> &ErrorMessageMap {
        &self.messages
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }
}
