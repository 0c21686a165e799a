//! Configuration management
//!
//! Form rule limits are configurable so deployments can tune them without
//! a rebuild. Resolution order: `$TASKBOARD_CONFIG`, then
//! `<config_dir>/taskboard/config.toml`, then built-in defaults. A missing
//! file is not an error; a malformed one is.

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Taskboard configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub form: FormConfig,
}

/// Limits applied to form fields at intake
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Minimum description length, inclusive
    pub description_min_length: usize,
    /// Minimum people count, inclusive
    pub people_min: f64,
    /// Maximum people count, inclusive
    pub people_max: f64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            description_min_length: 5,
            people_min: 1.0,
            people_max: 5.0,
        }
    }
}

impl Config {
    /// Load configuration from disk, falling back to defaults
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => {
                let raw = fs::read_to_string(&path)?;
                toml::from_str(&raw)
                    .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
            }
            _ => Ok(Self::default()),
        }
    }

    /// Resolve the config file path, if any
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = env::var("TASKBOARD_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("taskboard").join("config.toml"))
    }
}
