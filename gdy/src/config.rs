//! Configuration for dependabotgen

use eyre::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings that are not action inputs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Where the expanded configuration is written
    #[serde(rename = "output-path")]
    pub output_path: PathBuf,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(crate::DEFAULT_OUTPUT_PATH),
            log_level: None,
        }
    }
}

impl Config {
    /// Load from `path`, `.dependabotgen.yml`, the user config dir, or defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        actionkit::load_config(crate::APP_NAME, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.output_path, PathBuf::from(".github/dependabot.yml"));
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gdy.yml");
        std::fs::write(&path, "log-level: warn\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.output_path, PathBuf::from(".github/dependabot.yml"));
        assert_eq!(config.log_level.as_deref(), Some("warn"));
    }

    #[test]
    fn test_output_path_override() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gdy.yml");
        std::fs::write(&path, "output-path: ci/dependabot.yml\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.output_path, PathBuf::from("ci/dependabot.yml"));
    }
}
