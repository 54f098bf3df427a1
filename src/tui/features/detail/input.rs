//! Editor dispatch and the Editing -> Browsing transitions.

use crate::config::ConfigError;
use crate::tui::input::InputEvent;
use crate::tui::state::{Collaborators, Editor, EditorOutcome, SessionState, SettingsApp};
use crate::{log_debug, log_error, log_info};

impl Editor {
    pub(crate) fn handle_event(&mut self, event: InputEvent, ports: &mut Collaborators) -> Result<EditorOutcome, ConfigError> {
        match self {
            Editor::Credentials(editor) => editor.handle_event(event, ports),
            Editor::Choice(editor) => editor.handle_event(event, ports),
            Editor::AddressList(editor) => editor.handle_event(event, ports),
            Editor::Purge(editor) => Ok(editor.handle_event(event, ports)),
            Editor::Unavailable(_) => match event {
                InputEvent::Enter | InputEvent::Left | InputEvent::Right => Ok(EditorOutcome::Cancel),
                _ => Ok(EditorOutcome::Continue),
            },
        }
    }
}

impl SettingsApp {
    pub(crate) fn handle_editor_event(&mut self, event: InputEvent) {
        let SessionState::Editing(editor) = &mut self.state else {
            return;
        };

        match editor.handle_event(event, &mut self.ports) {
            Ok(EditorOutcome::Continue) => {
                let tip = editor.tip();
                self.tips.update(tip);
            }
            Ok(EditorOutcome::Commit { notice }) => {
                log_info!("Editor committed: {}", notice);
                self.finish_editing();
                self.tips.notify(notice);
            }
            Ok(EditorOutcome::Cancel) => {
                log_debug!("Editor cancelled");
                self.finish_editing();
            }
            Ok(EditorOutcome::Chain(next)) => {
                log_debug!("Editor chained into a follow-up editor");
                self.tips.set(next.tip());
                self.state = SessionState::Editing(*next);
            }
            Ok(EditorOutcome::Exit(exit)) => self.begin_closing(exit),
            Err(err) => {
                log_error!("Failed to save setting: {}", err);
                self.finish_editing();
                self.tips.notify(format!("Failed to save: {}", err));
            }
        }
    }

    fn finish_editing(&mut self) {
        log_debug!("Editing -> Browsing");
        self.state = SessionState::Browsing;
        self.navigation.rest_on_selection();
        self.tips.reset();
    }
}
