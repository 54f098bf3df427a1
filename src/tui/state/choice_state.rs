//! Single-choice editor state.

use crate::config::{
    ConfigError, ConfigStore, KEY_CUSTOM_DNS, KEY_DEFAULT_PROTOCOL, KEY_DNS_LEAK_PROTECTION, KEY_KILLSWITCH, KEY_SPLIT_TUNNEL, KEY_TIER,
    USER_SECTION, get_index,
};

pub(crate) const PLAN_TIERS: [&str; 4] = ["Free", "Basic", "Plus", "Visionary"];
pub(crate) const PROTOCOLS: [&str; 2] = ["UDP", "TCP"];
pub(crate) const PROTOCOL_VALUES: [&str; 2] = ["udp", "tcp"];
pub(crate) const DNS_OPTIONS: [&str; 3] = [
    "Enable DNS Leak Protection (recommended)",
    "Configure Custom DNS Servers",
    "Disable DNS Management",
];
pub(crate) const KILLSWITCH_OPTIONS: [&str; 3] = [
    "Disable Kill Switch",
    "Enable Kill Switch (Block access to/from LAN)",
    "Enable Kill Switch (Allow access to/from LAN)",
];
pub(crate) const SPLIT_TUNNEL_OPTIONS: [&str; 2] = ["Disable Split Tunneling", "Enable Split Tunneling"];

pub(crate) const DNS_CUSTOM_INDEX: usize = 1;
pub(crate) const SPLIT_TUNNEL_ENABLE_INDEX: usize = 1;

/// Settings edited by picking one entry of a fixed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChoiceSetting {
    PlanTier,
    Protocol,
    Dns,
    KillSwitch,
    SplitTunnel,
}

impl ChoiceSetting {
    pub(crate) fn options(self) -> &'static [&'static str] {
        match self {
            ChoiceSetting::PlanTier => &PLAN_TIERS,
            ChoiceSetting::Protocol => &PROTOCOLS,
            ChoiceSetting::Dns => &DNS_OPTIONS,
            ChoiceSetting::KillSwitch => &KILLSWITCH_OPTIONS,
            ChoiceSetting::SplitTunnel => &SPLIT_TUNNEL_OPTIONS,
        }
    }

    pub(crate) fn prompt(self) -> &'static str {
        match self {
            ChoiceSetting::PlanTier => "Please select your VPN plan:",
            ChoiceSetting::Protocol => "Input your preferred protocol. (Default: UDP)",
            ChoiceSetting::Dns => "Please select your preferred DNS handling:",
            ChoiceSetting::KillSwitch => "Please select your preferred kill switch configuration:",
            ChoiceSetting::SplitTunnel => "Exclude addresses from the VPN tunnel?",
        }
    }

    pub(crate) fn description(self) -> &'static [&'static str] {
        match self {
            ChoiceSetting::Protocol => &[
                "OpenVPN can act on two different protocols: UDP and TCP.",
                "UDP is preferred for speed but might be blocked in some networks.",
                "TCP is not as fast but a lot harder to block.",
            ],
            ChoiceSetting::KillSwitch => &["The kill switch blocks all traffic while the tunnel is down."],
            ChoiceSetting::SplitTunnel => &["Excluded addresses bypass the tunnel entirely."],
            ChoiceSetting::PlanTier | ChoiceSetting::Dns => &[],
        }
    }

    /// The choice currently saved in the store, if it maps to an option.
    pub(crate) fn persisted(self, store: &dyn ConfigStore) -> Result<Option<usize>, ConfigError> {
        let index = match self {
            ChoiceSetting::PlanTier => get_index(store, USER_SECTION, KEY_TIER)?,
            ChoiceSetting::KillSwitch => get_index(store, USER_SECTION, KEY_KILLSWITCH)?,
            ChoiceSetting::Protocol => store
                .get(USER_SECTION, KEY_DEFAULT_PROTOCOL)?
                .and_then(|value| PROTOCOL_VALUES.iter().position(|candidate| candidate.eq_ignore_ascii_case(value.trim()))),
            ChoiceSetting::Dns => {
                if get_index(store, USER_SECTION, KEY_DNS_LEAK_PROTECTION)? == Some(1) {
                    Some(0)
                } else if store.get(USER_SECTION, KEY_CUSTOM_DNS)?.is_some() {
                    Some(DNS_CUSTOM_INDEX)
                } else {
                    Some(2)
                }
            }
            ChoiceSetting::SplitTunnel => match get_index(store, USER_SECTION, KEY_SPLIT_TUNNEL)? {
                Some(1) => Some(SPLIT_TUNNEL_ENABLE_INDEX),
                _ => Some(0),
            },
        };
        Ok(index.filter(|index| *index < self.options().len()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ChoiceEditor {
    pub(crate) setting: ChoiceSetting,
    pub(crate) persisted: Option<usize>,
    pub(crate) in_progress: usize,
}

impl ChoiceEditor {
    /// Starts on the saved choice, or the first option when nothing is saved.
    pub(crate) fn new(setting: ChoiceSetting, persisted: Option<usize>) -> Self {
        Self {
            setting,
            persisted,
            in_progress: persisted.unwrap_or(0),
        }
    }

    pub(crate) fn open(setting: ChoiceSetting, store: &dyn ConfigStore) -> Result<Self, ConfigError> {
        Ok(Self::new(setting, setting.persisted(store)?))
    }

    pub(crate) fn options(&self) -> &'static [&'static str] {
        self.setting.options()
    }

    pub(crate) fn move_up(&mut self) {
        let count = self.options().len();
        self.in_progress = (self.in_progress + count - 1) % count;
    }

    pub(crate) fn move_down(&mut self) {
        self.in_progress = (self.in_progress + 1) % self.options().len();
    }
}
