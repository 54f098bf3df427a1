use super::{ConfigPaths, resolve_from};
use crate::config::ConfigError;
use std::{ffi::OsString, path::PathBuf};

#[test]
fn flag_wins_over_environment_and_home() {
    let paths = resolve_from(
        Some(PathBuf::from("/flag/dir").as_path()),
        Some(OsString::from("/env/dir")),
        Some(PathBuf::from("/home/user")),
    )
    .expect("resolve");
    assert_eq!(paths.root(), PathBuf::from("/flag/dir").as_path());
}

#[test]
fn environment_wins_over_home_unless_empty() {
    let paths = resolve_from(None, Some(OsString::from("/env/dir")), Some(PathBuf::from("/home/user"))).expect("resolve");
    assert_eq!(paths.root(), PathBuf::from("/env/dir").as_path());

    let paths = resolve_from(None, Some(OsString::new()), Some(PathBuf::from("/home/user"))).expect("resolve");
    assert_eq!(paths.root(), PathBuf::from("/home/user/.vpnset").as_path());
}

#[test]
fn missing_home_is_an_error() {
    let err = resolve_from(None, None, None).expect_err("no home directory");
    assert!(matches!(err, ConfigError::HomeDirectoryNotFound));
}

#[test]
fn files_are_derived_from_root() {
    let paths = ConfigPaths::new("/cfg");
    assert_eq!(paths.settings_file(), PathBuf::from("/cfg/settings.yaml"));
    assert_eq!(paths.passfile(), PathBuf::from("/cfg/passfile"));
    assert_eq!(paths.pid_file(), PathBuf::from("/cfg/vpn.pid"));
    assert_eq!(paths.log_file(), PathBuf::from("/cfg/logs/vpnset.log"));
}
