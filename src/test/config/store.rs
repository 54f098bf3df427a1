use super::{ConfigStore, KEY_CUSTOM_DNS, KEY_TIER, USER_SECTION, YamlSettingsStore, get_index, get_list, join_list};
use crate::config::ConfigError;
use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

fn temp_path(prefix: &str) -> PathBuf {
    let unique = SystemTime::now().duration_since(UNIX_EPOCH).expect("clock should be after epoch").as_nanos();
    std::env::temp_dir().join(format!("vpnset-store-{prefix}-{unique}"))
}

#[test]
fn missing_file_opens_as_empty_store() {
    let root = temp_path("missing");
    let store = YamlSettingsStore::open(root.join("settings.yaml")).expect("open");
    assert_eq!(store.get(USER_SECTION, KEY_TIER).expect("get"), None);
}

#[test]
fn set_writes_through_and_reloads() {
    let root = temp_path("write-through");
    let path = root.join("settings.yaml");

    let mut store = YamlSettingsStore::open(&path).expect("open");
    store.set(USER_SECTION, KEY_TIER, "2").expect("set tier");
    store.set(USER_SECTION, KEY_CUSTOM_DNS, "1.1.1.1, 9.9.9.9").expect("set dns");

    let reopened = YamlSettingsStore::open(&path).expect("reopen");
    assert_eq!(reopened.get(USER_SECTION, KEY_TIER).expect("get"), Some("2".to_string()));
    assert_eq!(get_index(&reopened, USER_SECTION, KEY_TIER).expect("index"), Some(2));
    assert_eq!(
        get_list(&reopened, USER_SECTION, KEY_CUSTOM_DNS).expect("list"),
        vec!["1.1.1.1".to_string(), "9.9.9.9".to_string()]
    );
    assert!(!path.with_extension("yaml.tmp").exists());

    let _ = fs::remove_dir_all(root);
}

#[test]
fn none_literal_reads_as_absent() {
    let root = temp_path("none");
    let mut store = YamlSettingsStore::open(root.join("settings.yaml")).expect("open");
    store.set(USER_SECTION, KEY_CUSTOM_DNS, "None").expect("set");

    assert_eq!(store.get(USER_SECTION, KEY_CUSTOM_DNS).expect("get"), None);
    assert!(get_list(&store, USER_SECTION, KEY_CUSTOM_DNS).expect("list").is_empty());

    let _ = fs::remove_dir_all(root);
}

#[test]
fn unparsable_index_reads_as_absent() {
    let root = temp_path("index");
    let mut store = YamlSettingsStore::open(root.join("settings.yaml")).expect("open");
    store.set(USER_SECTION, KEY_TIER, "plus").expect("set");

    assert_eq!(get_index(&store, USER_SECTION, KEY_TIER).expect("index"), None);

    let _ = fs::remove_dir_all(root);
}

#[test]
fn malformed_document_is_a_parse_error() {
    let root = temp_path("malformed");
    fs::create_dir_all(&root).expect("create root");
    let path = root.join("settings.yaml");
    fs::write(&path, "USER: [not, a, map").expect("write");

    let err = YamlSettingsStore::open(&path).expect_err("malformed yaml");
    assert!(matches!(err, ConfigError::ParseError { .. }));

    let _ = fs::remove_dir_all(root);
}

#[test]
fn join_list_uses_comma_space() {
    let entries = vec!["10.0.0.0/8".to_string(), "192.168.1.1".to_string()];
    assert_eq!(join_list(&entries), "10.0.0.0/8, 192.168.1.1");
}

#[test]
fn bare_scalars_load_as_text() {
    let root = temp_path("scalars");
    fs::create_dir_all(&root).expect("create root");
    let path = root.join("settings.yaml");
    fs::write(&path, "USER:\n  tier: 2\n  killswitch: 0\n  custom_dns: null\n").expect("write");

    let store = YamlSettingsStore::open(&path).expect("open");
    assert_eq!(get_index(&store, USER_SECTION, KEY_TIER).expect("index"), Some(2));
    assert_eq!(store.get(USER_SECTION, KEY_CUSTOM_DNS).expect("get"), None);

    let _ = fs::remove_dir_all(root);
}

#[test]
fn failed_batch_restores_every_key() {
    let root = temp_path("batch");
    let path = root.join("settings.yaml");
    let mut store = YamlSettingsStore::open(&path).expect("open");
    store.set(USER_SECTION, KEY_TIER, "1").expect("seed");

    // A directory in the temp file's place makes the save fail.
    fs::create_dir_all(path.with_extension("yaml.tmp")).expect("block temp file");

    let result = store.set_all(&[(USER_SECTION, KEY_CUSTOM_DNS, "1.1.1.1"), (USER_SECTION, KEY_TIER, "3")]);
    assert!(result.is_err());
    assert_eq!(store.get(USER_SECTION, KEY_CUSTOM_DNS).expect("get"), None);
    assert_eq!(store.get(USER_SECTION, KEY_TIER).expect("get"), Some("1".to_string()));

    let reopened = YamlSettingsStore::open(&path).expect("reopen");
    assert_eq!(reopened.get(USER_SECTION, KEY_TIER).expect("get"), Some("1".to_string()));
    assert_eq!(reopened.get(USER_SECTION, KEY_CUSTOM_DNS).expect("get"), None);

    let _ = fs::remove_dir_all(root);
}
