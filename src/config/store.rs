//! Key/value settings store.
//!
//! The document is a two-level map, `section -> key -> value`, kept as YAML:
//!
//! ```yaml
//! USER:
//!   username: alice
//!   tier: "2"
//! ```
//!
//! Values are strings. The literal `None` marks a deliberately unset value and
//! reads back as absent.

use super::ConfigError;
use crate::{log_debug, log_info, log_warn};
use serde::Deserialize;
use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

pub const USER_SECTION: &str = "USER";

pub const KEY_USERNAME: &str = "username";
pub const KEY_TIER: &str = "tier";
pub const KEY_DEFAULT_PROTOCOL: &str = "default_protocol";
pub const KEY_DNS_LEAK_PROTECTION: &str = "dns_leak_protection";
pub const KEY_CUSTOM_DNS: &str = "custom_dns";
pub const KEY_KILLSWITCH: &str = "killswitch";
pub const KEY_SPLIT_TUNNEL: &str = "split_tunnel";
pub const KEY_SPLIT_TUNNEL_IPS: &str = "split_tunnel_ips";

pub const UNSET_VALUE: &str = "None";
pub const LIST_DELIMITER: &str = ", ";

type SettingsDocument = BTreeMap<String, BTreeMap<String, String>>;

/// Scalar as found on disk. Hand-edited files may hold bare numbers or booleans.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
    Null,
}

impl RawValue {
    fn into_text(self) -> String {
        match self {
            RawValue::Text(text) => text,
            RawValue::Integer(value) => value.to_string(),
            RawValue::Float(value) => value.to_string(),
            RawValue::Flag(value) => value.to_string(),
            RawValue::Null => UNSET_VALUE.to_string(),
        }
    }
}

/// One `(section, key, value)` write.
pub type SettingWrite<'a> = (&'a str, &'a str, &'a str);

/// Storage used by the editors. Implementations decide the on-disk format.
pub trait ConfigStore {
    fn get(&self, section: &str, key: &str) -> Result<Option<String>, ConfigError>;

    /// Apply every write or none of them.
    fn set_all(&mut self, writes: &[SettingWrite<'_>]) -> Result<(), ConfigError>;

    fn set(&mut self, section: &str, key: &str, value: &str) -> Result<(), ConfigError> {
        self.set_all(&[(section, key, value)])
    }
}

/// Read an integer setting, treating unparsable values as absent.
pub fn get_index(store: &dyn ConfigStore, section: &str, key: &str) -> Result<Option<usize>, ConfigError> {
    Ok(store.get(section, key)?.and_then(|value| value.trim().parse::<usize>().ok()))
}

/// Read a delimited list setting. Absent and empty values give an empty list.
pub fn get_list(store: &dyn ConfigStore, section: &str, key: &str) -> Result<Vec<String>, ConfigError> {
    Ok(store
        .get(section, key)?
        .map(|value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default())
}

pub fn join_list(entries: &[String]) -> String {
    entries.join(LIST_DELIMITER)
}

/// YAML-backed store that writes through on every `set`.
#[derive(Debug)]
pub struct YamlSettingsStore {
    path: PathBuf,
    document: SettingsDocument,
}

impl YamlSettingsStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let document = load_document(&path)?;
        log_info!("Loaded settings from {}", path.display());
        Ok(Self { path, document })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), ConfigError> {
        let serialized = serde_yml::to_string(&self.document).map_err(|err| ConfigError::FormattingError(err.to_string()))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.path.with_extension("yaml.tmp");
        fs::write(&temp_path, serialized)?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

impl ConfigStore for YamlSettingsStore {
    fn get(&self, section: &str, key: &str) -> Result<Option<String>, ConfigError> {
        Ok(self
            .document
            .get(section)
            .and_then(|entries| entries.get(key))
            .filter(|value| value.as_str() != UNSET_VALUE)
            .cloned())
    }

    fn set_all(&mut self, writes: &[SettingWrite<'_>]) -> Result<(), ConfigError> {
        let previous: Vec<Option<String>> = writes
            .iter()
            .map(|(section, key, value)| {
                self.document
                    .entry(section.to_string())
                    .or_default()
                    .insert(key.to_string(), value.to_string())
            })
            .collect();

        if let Err(err) = self.save() {
            // Undo in reverse so a key written twice gets its original value back.
            for ((section, key, _), previous) in writes.iter().zip(previous).rev() {
                let entries = self.document.entry(section.to_string()).or_default();
                match previous {
                    Some(previous) => {
                        entries.insert(key.to_string(), previous);
                    }
                    None => {
                        entries.remove(*key);
                    }
                }
            }
            log_warn!("Failed to persist {} setting(s): {}", writes.len(), err);
            return Err(err);
        }

        for (section, key, _) in writes {
            log_debug!("Persisted {}.{}", section, key);
        }
        Ok(())
    }
}

fn load_document(path: &Path) -> Result<SettingsDocument, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log_debug!("No settings file at {}, starting empty", path.display());
            return Ok(SettingsDocument::new());
        }
        Err(err) => return Err(err.into()),
    };

    if content.trim().is_empty() {
        return Ok(SettingsDocument::new());
    }

    let raw = serde_yml::from_str::<BTreeMap<String, BTreeMap<String, RawValue>>>(&content).map_err(|err| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    Ok(raw
        .into_iter()
        .map(|(section, entries)| {
            let entries = entries.into_iter().map(|(key, value)| (key, value.into_text())).collect();
            (section, entries)
        })
        .collect())
}

#[cfg(test)]
#[path = "../test/config/store.rs"]
mod tests;
