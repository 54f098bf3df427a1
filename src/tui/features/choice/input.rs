//! Single-choice editor keyboard handling and commit.

use crate::config::{
    ConfigError, KEY_CUSTOM_DNS, KEY_DEFAULT_PROTOCOL, KEY_DNS_LEAK_PROTECTION, KEY_KILLSWITCH, KEY_SPLIT_TUNNEL, KEY_SPLIT_TUNNEL_IPS,
    KEY_TIER, UNSET_VALUE, USER_SECTION, get_list,
};
use crate::tui::input::InputEvent;
use crate::tui::state::{
    AddressListEditor, AddressListKind, ChoiceEditor, ChoiceSetting, Collaborators, DNS_CUSTOM_INDEX, Editor, EditorOutcome, PROTOCOL_VALUES,
    SPLIT_TUNNEL_ENABLE_INDEX,
};
use crate::{log_debug, log_info};

const DNS_LEAK_PROTECTION_INDEX: usize = 0;

impl ChoiceEditor {
    pub(crate) fn handle_event(&mut self, event: InputEvent, ports: &mut Collaborators) -> Result<EditorOutcome, ConfigError> {
        match event {
            InputEvent::Up => self.move_up(),
            InputEvent::Down => self.move_down(),
            InputEvent::Enter => return self.commit(ports),
            event if event.is_cancel() => return Ok(EditorOutcome::Cancel),
            _ => {}
        }
        Ok(EditorOutcome::Continue)
    }

    fn commit(&self, ports: &mut Collaborators) -> Result<EditorOutcome, ConfigError> {
        let index = self.in_progress;
        let store = ports.store.as_mut();

        let notice = match self.setting {
            ChoiceSetting::PlanTier => {
                store.set(USER_SECTION, KEY_TIER, &index.to_string())?;
                "VPN plan updated"
            }
            ChoiceSetting::Protocol => {
                let value = PROTOCOL_VALUES.get(index).copied().unwrap_or(PROTOCOL_VALUES[0]);
                store.set(USER_SECTION, KEY_DEFAULT_PROTOCOL, value)?;
                "Default protocol updated"
            }
            ChoiceSetting::KillSwitch => {
                store.set(USER_SECTION, KEY_KILLSWITCH, &index.to_string())?;
                "Kill switch updated"
            }
            ChoiceSetting::Dns if index == DNS_CUSTOM_INDEX => {
                let saved = get_list(store, USER_SECTION, KEY_CUSTOM_DNS)?;
                log_debug!("DNS management chains into the custom DNS list");
                return Ok(EditorOutcome::Chain(Box::new(Editor::AddressList(AddressListEditor::new(
                    AddressListKind::DnsServers,
                    &saved,
                )))));
            }
            ChoiceSetting::Dns => {
                let leak_protection = if index == DNS_LEAK_PROTECTION_INDEX { "1" } else { "0" };
                store.set_all(&[(USER_SECTION, KEY_DNS_LEAK_PROTECTION, leak_protection), (USER_SECTION, KEY_CUSTOM_DNS, UNSET_VALUE)])?;
                "DNS management updated"
            }
            ChoiceSetting::SplitTunnel if index == SPLIT_TUNNEL_ENABLE_INDEX => {
                let saved = get_list(store, USER_SECTION, KEY_SPLIT_TUNNEL_IPS)?;
                log_debug!("Split tunneling chains into the exclusion list");
                return Ok(EditorOutcome::Chain(Box::new(Editor::AddressList(AddressListEditor::new(
                    AddressListKind::SplitTunnelExclusions,
                    &saved,
                )))));
            }
            ChoiceSetting::SplitTunnel => {
                store.set(USER_SECTION, KEY_SPLIT_TUNNEL, "0")?;
                "Split tunneling updated"
            }
        };

        log_info!("Committed option {} for {:?}", index, self.setting);
        Ok(EditorOutcome::Commit { notice: notice.to_string() })
    }
}

#[cfg(test)]
#[path = "../../../test/tui/features/choice/input.rs"]
mod tests;
