use super::{ConfigPurge, DirectoryPurge};
use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

fn temp_path(prefix: &str) -> PathBuf {
    let unique = SystemTime::now().duration_since(UNIX_EPOCH).expect("clock should be after epoch").as_nanos();
    std::env::temp_dir().join(format!("vpnset-purge-{prefix}-{unique}"))
}

#[test]
fn purge_removes_the_whole_tree() {
    let root = temp_path("tree");
    fs::create_dir_all(root.join("logs")).expect("create tree");
    fs::write(root.join("settings.yaml"), "USER: {}").expect("write settings");
    fs::write(root.join("logs/vpnset.log"), "line").expect("write log");

    DirectoryPurge::new(&root).purge().expect("purge");
    assert!(!root.exists());
}

#[test]
fn purge_of_missing_directory_succeeds() {
    let root = temp_path("missing");
    DirectoryPurge::new(&root).purge().expect("purge missing");
    assert!(!root.exists());
}
