//! Credentials pass file.

use super::ConfigError;
use crate::log_debug;
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

#[cfg(unix)]
const PASSFILE_MODE: u32 = 0o600;

/// Write-only destination for the VPN username and password.
pub trait CredentialSink {
    fn write_credentials(&mut self, username: &str, password: &str) -> Result<(), ConfigError>;
}

/// Two-line `username\npassword` file readable by its owner only.
#[derive(Debug, Clone)]
pub struct PassFile {
    path: PathBuf,
}

impl PassFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialSink for PassFile {
    fn write_credentials(&mut self, username: &str, password: &str) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut options = OpenOptions::new();
        options.create(true).write(true).truncate(true);
        #[cfg(unix)]
        {
            options.mode(PASSFILE_MODE);
        }

        let mut file = options.open(&self.path)?;
        // The mode above only applies when the file is created.
        restrict_permissions(&self.path)?;
        write!(file, "{}\n{}", username, password)?;
        file.flush()?;

        log_debug!("Pass file updated at {}", self.path.display());
        Ok(())
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<(), ConfigError> {
    fs::set_permissions(path, fs::Permissions::from_mode(PASSFILE_MODE))?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<(), ConfigError> {
    Ok(())
}

#[cfg(test)]
#[path = "../test/config/credentials.rs"]
mod tests;
