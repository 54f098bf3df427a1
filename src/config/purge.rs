//! Removal of the whole configuration directory.

use super::ConfigError;
use crate::log_info;
use std::{
    fs,
    path::{Path, PathBuf},
};

pub trait ConfigPurge {
    fn purge(&mut self) -> Result<(), ConfigError>;
}

#[derive(Debug, Clone)]
pub struct DirectoryPurge {
    root: PathBuf,
}

impl DirectoryPurge {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ConfigPurge for DirectoryPurge {
    fn purge(&mut self) -> Result<(), ConfigError> {
        if !self.root.is_dir() {
            log_info!("Nothing to purge at {}", self.root.display());
            return Ok(());
        }

        fs::remove_dir_all(&self.root)?;
        log_info!("Purged configuration directory {}", self.root.display());
        Ok(())
    }
}

#[cfg(test)]
#[path = "../test/config/purge.rs"]
mod tests;
