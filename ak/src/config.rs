//! YAML config discovery shared by the actions

use eyre::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Load configuration with fallback chain
///
/// 1. An explicit path; failures here are fatal
/// 2. Project-local `.{app}.yml` in the working directory
/// 3. User config `{config_dir}/{app}/{app}.yml`
/// 4. `T::default()`
///
/// Unreadable fallback files are logged and skipped.
pub fn load_config<T>(app: &str, config_path: Option<&PathBuf>) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    debug!(%app, ?config_path, "load_config: called");
    if let Some(path) = config_path {
        return load_from_file(path).context(format!("Failed to load config from {}", path.display()));
    }

    for candidate in candidate_paths(app) {
        if !candidate.exists() {
            continue;
        }
        match load_from_file(&candidate) {
            Ok(config) => return Ok(config),
            Err(e) => {
                warn!("Failed to load config from {}: {}", candidate.display(), e);
            }
        }
    }

    info!("No config file found, using defaults");
    Ok(T::default())
}

fn candidate_paths(app: &str) -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(format!(".{}.yml", app))];
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join(app).join(format!("{}.yml", app)));
    }
    paths
}

fn load_from_file<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let content = fs::read_to_string(&path).context("Failed to read config file")?;
    let config: T = serde_yaml::from_str(&content).context("Failed to parse config file")?;
    info!("Loaded config from: {}", path.as_ref().display());
    Ok(config)
}
