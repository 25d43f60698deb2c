//! Configuration loading and management for the payroll engine.
//!
//! This module loads the known-error message map and server settings from
//! YAML files in a configuration directory.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("{} known error messages", config.messages().messages.len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_BIND_ADDRESS, PayrollConfig, ServerConfig};
