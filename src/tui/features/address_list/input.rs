//! Address list editor keyboard handling and submit.

use crate::config::{ConfigError, KEY_CUSTOM_DNS, KEY_DNS_LEAK_PROTECTION, KEY_SPLIT_TUNNEL, KEY_SPLIT_TUNNEL_IPS, USER_SECTION, join_list};
use crate::tui::input::InputEvent;
use crate::tui::state::{AddressListEditor, AddressListKind, Collaborators, EditorOutcome};
use crate::validate::validate_address_list;
use crate::{log_debug, log_info};

impl AddressListEditor {
    pub(crate) fn handle_event(&mut self, event: InputEvent, ports: &mut Collaborators) -> Result<EditorOutcome, ConfigError> {
        match event {
            InputEvent::Enter if self.enter_submits() => return self.submit(ports),
            InputEvent::Enter => {
                self.buffer.insert_char('\n');
                self.error = None;
            }
            InputEvent::Backspace => {
                self.buffer.backspace();
                self.error = None;
            }
            InputEvent::Char(ch) => {
                self.buffer.insert_char(ch);
                self.error = None;
            }
            event if event.is_cancel() => return Ok(EditorOutcome::Cancel),
            _ => {}
        }
        Ok(EditorOutcome::Continue)
    }

    /// Invalid or empty input keeps the editor open with an inline error.
    fn submit(&mut self, ports: &mut Collaborators) -> Result<EditorOutcome, ConfigError> {
        let entries = match validate_address_list(self.buffer.as_str(), self.kind.rule()) {
            Ok(entries) => entries,
            Err(err) => {
                log_debug!("Rejected address list: {}", err);
                self.error = Some(err.to_string());
                return Ok(EditorOutcome::Continue);
            }
        };

        let value = join_list(&entries);
        let notice = match self.kind {
            AddressListKind::DnsServers => {
                ports
                    .store
                    .set_all(&[(USER_SECTION, KEY_CUSTOM_DNS, value.as_str()), (USER_SECTION, KEY_DNS_LEAK_PROTECTION, "0")])?;
                "Custom DNS servers updated"
            }
            AddressListKind::SplitTunnelExclusions => {
                ports
                    .store
                    .set_all(&[(USER_SECTION, KEY_SPLIT_TUNNEL_IPS, value.as_str()), (USER_SECTION, KEY_SPLIT_TUNNEL, "1")])?;
                "Split tunneling exclusions updated"
            }
        };

        log_info!("Persisted {} entries for {:?}", entries.len(), self.kind);
        Ok(EditorOutcome::Commit { notice: notice.to_string() })
    }
}

#[cfg(test)]
#[path = "../../../test/tui/features/address_list/input.rs"]
mod tests;
