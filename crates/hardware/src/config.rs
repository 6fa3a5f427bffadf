//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize a simulation
//! session. It provides:
//! 1. **Structures:** A hierarchical `Config` with a `general` section.
//! 2. **Defaults:** Every field is optional in the serialized form.
//! 3. **Loading:** JSON deserialization from a string or a file.
//!
//! Use `Config::default()` when no file is supplied.
//!
//! # Example
//!
//! ```
//! use regsim_core::config::Config;
//!
//! let json = r#"{ "general": { "trace_instructions": true } }"#;
//! let config: Config = serde_json::from_str(json).unwrap();
//! assert!(config.general.trace_instructions);
//! assert!(!config.general.print_stats);
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// General simulation settings.
    #[serde(default)]
    pub general: GeneralConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not a valid configuration document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or [`ConfigError::Parse`] if
    /// its contents are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Log every executed instruction with the register change it caused.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Print execution statistics when a run finishes.
    #[serde(default)]
    pub print_stats: bool,
}
