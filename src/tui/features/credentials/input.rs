//! Credentials editor keyboard handling and commit.

use crate::config::{ConfigError, KEY_USERNAME, UNSET_VALUE, USER_SECTION};
use crate::tui::input::InputEvent;
use crate::tui::state::{Collaborators, CredentialsEditor, CredentialsField, EditorOutcome};
use crate::{log_error, log_info};

const CREDENTIALS_SAVED_NOTICE: &str = "Username and password updated";

impl CredentialsEditor {
    pub(crate) fn handle_event(&mut self, event: InputEvent, ports: &mut Collaborators) -> Result<EditorOutcome, ConfigError> {
        if self.field == CredentialsField::Confirm {
            return match event {
                InputEvent::Enter => self.commit(ports),
                event if event.is_cancel() => Ok(EditorOutcome::Cancel),
                _ => Ok(EditorOutcome::Continue),
            };
        }

        match event {
            InputEvent::Up | InputEvent::Down | InputEvent::Enter => self.advance_field(),
            InputEvent::Backspace => {
                if let Some(buffer) = self.focused_buffer_mut() {
                    buffer.backspace();
                }
            }
            InputEvent::Char(ch) => {
                if let Some(buffer) = self.focused_buffer_mut() {
                    buffer.insert_char(ch);
                }
            }
            _ => {}
        }
        Ok(EditorOutcome::Continue)
    }

    /// Username first, then the credentials file. A failed credentials write
    /// puts the previous username back.
    fn commit(&self, ports: &mut Collaborators) -> Result<EditorOutcome, ConfigError> {
        let username = self.username.as_str();
        let previous = ports.store.get(USER_SECTION, KEY_USERNAME)?;
        ports.store.set(USER_SECTION, KEY_USERNAME, username)?;

        if let Err(err) = ports.credentials.write_credentials(username, self.password.as_str()) {
            let restore = previous.as_deref().unwrap_or(UNSET_VALUE);
            if let Err(restore_err) = ports.store.set(USER_SECTION, KEY_USERNAME, restore) {
                log_error!("Failed to restore previous username: {}", restore_err);
            }
            return Err(err);
        }

        log_info!("Persisted {} and credentials file", KEY_USERNAME);
        Ok(EditorOutcome::Commit {
            notice: CREDENTIALS_SAVED_NOTICE.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "../../../test/tui/features/credentials/input.rs"]
mod tests;
