mod credentials;
mod errors;
mod paths;
mod purge;
mod store;

pub use credentials::{CredentialSink, PassFile};
pub use errors::ConfigError;
pub use paths::{CONFIG_DIR_ENV, ConfigPaths, config_paths, log_file_path, resolve_config_dir, set_config_paths};
pub use purge::{ConfigPurge, DirectoryPurge};
pub use store::{
    ConfigStore, KEY_CUSTOM_DNS, KEY_DEFAULT_PROTOCOL, KEY_DNS_LEAK_PROTECTION, KEY_KILLSWITCH, KEY_SPLIT_TUNNEL, KEY_SPLIT_TUNNEL_IPS,
    KEY_TIER, KEY_USERNAME, LIST_DELIMITER, SettingWrite, UNSET_VALUE, USER_SECTION, YamlSettingsStore, get_index, get_list, join_list,
};
