//! Configuration for automergeforward

use eyre::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings that are not action inputs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Remote to fetch from and push to
    pub remote: String,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remote: crate::DEFAULT_REMOTE.to_string(),
            log_level: None,
        }
    }
}

impl Config {
    /// Load from `path`, `.automergeforward.yml`, the user config dir, or defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        actionkit::load_config(crate::APP_NAME, path)
    }
}
