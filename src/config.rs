//! Project configuration for droidstamp.
//! An optional `droidstamp.json` / `droidstamp.yml` / `droidstamp.yaml` at the
//! project root supplies defaults for parameters not given on the command line.

use crate::constants::{CONFIG_FILES, DEFAULT_SOURCE_SET};
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Project-level defaults. Every field is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub application_id: Option<String>,
    pub package_name: Option<String>,
    pub source_set: Option<String>,
    /// Override template directory, relative to the project root
    pub templates: Option<PathBuf>,
}

impl Config {
    pub fn source_set(&self) -> &str {
        self.source_set.as_deref().unwrap_or(DEFAULT_SOURCE_SET)
    }
}

/// Loads the first configuration file found in the project directory.
///
/// # Returns
/// * `Result<Option<String>>` - Contents of the first found configuration
///   file, or `None` when the project has none
pub fn load_config<P: AsRef<Path>>(project_dir: P, config_files: &[&str]) -> Result<Option<String>> {
    for file in config_files {
        let config_path = project_dir.as_ref().join(file);
        if config_path.is_file() {
            debug!("Loading configuration from {}", config_path.display());
            return Ok(Some(std::fs::read_to_string(&config_path)?));
        }
    }

    debug!("No configuration file found (tried: {})", config_files.join(", "));
    Ok(None)
}

/// Parses configuration content, trying JSON first and then YAML.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor valid YAML,
///   or carries unknown fields
pub fn parse_config(content: &str) -> Result<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}"))),
    }
}

/// Reads and parses the project configuration, defaulting when absent.
pub fn get_config<P: AsRef<Path>>(project_dir: P) -> Result<Config> {
    match load_config(project_dir, &CONFIG_FILES)? {
        Some(content) => parse_config(&content),
        None => Ok(Config::default()),
    }
}
