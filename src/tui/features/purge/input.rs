//! Purge confirmation keyboard handling.

use crate::tui::input::InputEvent;
use crate::tui::state::{Collaborators, EditorOutcome, PurgeEditor, SessionExit};
use crate::vpn::Termination;
use crate::{log_error, log_info, log_warn};

impl PurgeEditor {
    pub(crate) fn handle_event(&mut self, event: InputEvent, ports: &mut Collaborators) -> EditorOutcome {
        match event {
            InputEvent::Up => self.move_up(),
            InputEvent::Down => self.move_down(),
            InputEvent::Enter if self.confirmed() => return run_purge(ports),
            InputEvent::Enter => return EditorOutcome::Cancel,
            event if event.is_cancel() => return EditorOutcome::Cancel,
            _ => {}
        }
        EditorOutcome::Continue
    }
}

/// Stop the tunnel, delete the configuration tree, then end the session.
fn run_purge(ports: &mut Collaborators) -> EditorOutcome {
    log_warn!("Configuration purge confirmed");

    match ports.vpn.terminate_active_session() {
        Ok(Termination::NoActiveSession) => log_info!("No active VPN session to stop"),
        Ok(Termination::Terminated(pid)) => log_info!("Stopped VPN session (pid {})", pid),
        Err(err) => log_error!("Failed to stop VPN session before purge: {}", err),
    }

    match ports.purge.purge() {
        Ok(()) => {
            log_info!("Configuration directory removed");
            EditorOutcome::Exit(SessionExit::Purged)
        }
        Err(err) => {
            log_error!("Configuration purge failed: {}", err);
            EditorOutcome::Exit(SessionExit::PurgeFailed(err.to_string()))
        }
    }
}

#[cfg(test)]
#[path = "../../../test/tui/features/purge/input.rs"]
mod tests;
