//! Process configuration.
//!
//! The store location used to be a process-wide constant; it now lives in
//! an `AppConfig` that is handed to `Database` at construction.

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Overrides the store file location.
pub const DB_PATH_ENV: &str = "CRIMERECORDS_DB_PATH";
/// Overrides the location of the config file.
pub const CONFIG_PATH_ENV: &str = "CRIMERECORDS_CONFIG_PATH";

/// Store file used when nothing else is configured, relative to the
/// working directory so existing data files next to the program are found.
pub const DEFAULT_DB_FILE: &str = "crimemanagement.db";
pub const DEFAULT_CONFIG_FILE: &str = "crimerecords.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub db_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE),
        }
    }
}

impl AppConfig {
    pub fn with_db_path(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }
}

/// Load the config file, then apply `CRIMERECORDS_DB_PATH`.
pub fn load_config() -> AppConfig {
    let config = load_config_at(&config_path(), std::env::var_os(DB_PATH_ENV));
    log::info!("Using record store {}", config.db_path.display());
    config
}

fn load_config_at(path: &Path, db_override: Option<OsString>) -> AppConfig {
    let mut config = match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<AppConfig>(&contents) {
            Ok(config) => config,
            Err(err) => {
                log::warn!(
                    "Ignoring malformed config at {}: {}",
                    path.display(),
                    err
                );
                AppConfig::default()
            }
        },
        Err(err) if err.kind() == ErrorKind::NotFound => AppConfig::default(),
        Err(err) => {
            log::warn!("Ignoring unreadable config at {}: {}", path.display(), err);
            AppConfig::default()
        }
    };

    if let Some(db_path) = db_override.filter(|p| !p.is_empty()) {
        config.db_path = PathBuf::from(db_path);
    }
    config
}

fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}
