//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use folio::{FolioError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for FolioError {
    fn from(err: ConfigError) -> Self {
        FolioError::Config(err.to_string())
    }
}

/// Configuration file name inside each search directory.
const CONFIG_FILE: &str = "config.toml";

/// Implicit configuration locations, in search order.
///
/// The project-local `folio/` directory comes first, then the platform
/// configuration directory when one can be determined.
fn search_paths() -> Vec<(&'static str, PathBuf)> {
    let mut paths = vec![("local", Path::new("folio").join(CONFIG_FILE))];
    match ProjectDirs::from("com", "folio", "folio") {
        Some(dirs) => paths.push(("system", dirs.config_dir().join(CONFIG_FILE))),
        None => debug!("Could not determine platform-specific config directory"),
    }
    paths
}

/// Find and load the language configuration.
///
/// An explicit path must exist. Otherwise the first file found among
/// [`search_paths`] is used, and the built-in presets alone when none is.
///
/// # Errors
///
/// Returns [`FolioError::Config`] when the explicit file is missing or a
/// configuration file fails to parse.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, FolioError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(origin = "explicit", path = path.display().to_string(); "Loading configuration");
        return load_config_file(path);
    }

    for (origin, path) in search_paths() {
        if path.exists() {
            info!(origin, path = path.display().to_string(); "Loading configuration");
            return load_config_file(&path);
        }
        debug!(origin, path = path.display().to_string(); "No configuration file");
    }

    debug!("Using built-in language presets only");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if:
/// - File doesn't exist
/// - File cannot be read
/// - TOML parsing fails
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, FolioError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

fn parse_config(content: &str) -> Result<AppConfig, FolioError> {
    let config: AppConfig =
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    debug!(languages = config.languages().len(); "Configuration parsed");
    Ok(config)
}
