//! Configuration directory resolution.
//!
//! Priority: `--config-dir` flag, then `VPNSET_CONFIG_DIR`, then `~/.vpnset`.

use super::ConfigError;
use crate::log_debug;
use once_cell::sync::OnceCell;
use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

pub const CONFIG_DIR_ENV: &str = "VPNSET_CONFIG_DIR";
const DEFAULT_DIR_NAME: &str = ".vpnset";
const SETTINGS_FILE_NAME: &str = "settings.yaml";
const PASSFILE_NAME: &str = "passfile";
const PID_FILE_NAME: &str = "vpn.pid";
const LOG_DIR_NAME: &str = "logs";
const LOG_FILE_NAME: &str = "vpnset.log";

static CONFIG_PATHS: OnceCell<ConfigPaths> = OnceCell::new();

/// Every file the editor touches, derived from one root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    root: PathBuf,
}

impl ConfigPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn settings_file(&self) -> PathBuf {
        self.root.join(SETTINGS_FILE_NAME)
    }

    pub fn passfile(&self) -> PathBuf {
        self.root.join(PASSFILE_NAME)
    }

    pub fn pid_file(&self) -> PathBuf {
        self.root.join(PID_FILE_NAME)
    }

    pub fn log_file(&self) -> PathBuf {
        self.root.join(LOG_DIR_NAME).join(LOG_FILE_NAME)
    }
}

/// Resolve the configuration directory from the flag, environment and home directory.
pub fn resolve_config_dir(flag: Option<&Path>) -> Result<ConfigPaths, ConfigError> {
    resolve_from(flag, env::var_os(CONFIG_DIR_ENV), dirs::home_dir())
}

fn resolve_from(flag: Option<&Path>, env_value: Option<OsString>, home: Option<PathBuf>) -> Result<ConfigPaths, ConfigError> {
    if let Some(dir) = flag {
        return Ok(ConfigPaths::new(dir));
    }

    if let Some(value) = env_value.filter(|value| !value.is_empty()) {
        return Ok(ConfigPaths::new(PathBuf::from(value)));
    }

    let home = home.ok_or(ConfigError::HomeDirectoryNotFound)?;
    Ok(ConfigPaths::new(home.join(DEFAULT_DIR_NAME)))
}

/// Publish the resolved paths for the rest of the process. Only the first call wins.
pub fn set_config_paths(paths: ConfigPaths) {
    let root = paths.root().to_path_buf();
    if CONFIG_PATHS.set(paths).is_ok() {
        log_debug!("Using configuration directory {}", root.display());
    }
}

pub fn config_paths() -> Option<&'static ConfigPaths> {
    CONFIG_PATHS.get()
}

pub fn log_file_path() -> Option<PathBuf> {
    config_paths().map(ConfigPaths::log_file)
}

#[cfg(test)]
#[path = "../test/config/paths.rs"]
mod tests;
