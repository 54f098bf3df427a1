//! Session controller state.

use super::{Category, Collaborators, Editor, NavigationState, TipLine};
use crate::log_info;
use crate::tui::layout::TerminalGeometry;
use std::fmt;

/// Why the interactive session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionExit {
    /// Ctrl-C or a terminating signal.
    Interrupted,
    /// The configuration was purged.
    Purged,
    /// The user confirmed the purge but deleting the configuration failed.
    PurgeFailed(String),
    /// Drawing failed; the message is shown after the terminal is restored.
    Fatal(String),
}

impl SessionExit {
    pub fn is_success(&self) -> bool {
        matches!(self, SessionExit::Interrupted | SessionExit::Purged)
    }

    /// Message for stderr once the terminal is back to normal.
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            SessionExit::Interrupted => None,
            SessionExit::Purged => Some("Configuration purged.".to_string()),
            SessionExit::PurgeFailed(reason) => Some(format!("Could not purge the configuration: {}", reason)),
            SessionExit::Fatal(reason) => Some(reason.clone()),
        }
    }
}

impl fmt::Display for SessionExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionExit::Interrupted => write!(f, "interrupted"),
            SessionExit::Purged => write!(f, "purged"),
            SessionExit::PurgeFailed(reason) => write!(f, "purge failed: {}", reason),
            SessionExit::Fatal(reason) => write!(f, "fatal: {}", reason),
        }
    }
}

/// Which pane owns keyboard input.
#[derive(Debug)]
pub(crate) enum SessionState {
    Browsing,
    Editing(Editor),
    Closing(SessionExit),
}

/// Main application state.
pub struct SettingsApp {
    pub(crate) navigation: NavigationState,
    pub(crate) geometry: TerminalGeometry,
    pub(crate) state: SessionState,
    pub(crate) tips: TipLine,
    pub(crate) ports: Collaborators,
}

impl SettingsApp {
    pub fn new(ports: Collaborators, tips: TipLine, geometry: TerminalGeometry) -> Self {
        Self {
            navigation: NavigationState::new(Category::COUNT),
            geometry,
            state: SessionState::Browsing,
            tips,
            ports,
        }
    }

    pub(crate) fn hovered_category(&self) -> Category {
        Category::from_index(self.navigation.hovered()).unwrap_or(Category::Credentials)
    }

    pub(crate) fn selected_category(&self) -> Option<Category> {
        self.navigation.selected().and_then(Category::from_index)
    }

    pub(crate) fn is_browsing(&self) -> bool {
        matches!(self.state, SessionState::Browsing)
    }

    pub(crate) fn active_editor(&self) -> Option<&Editor> {
        match &self.state {
            SessionState::Editing(editor) => Some(editor),
            _ => None,
        }
    }

    pub fn closing_reason(&self) -> Option<&SessionExit> {
        match &self.state {
            SessionState::Closing(exit) => Some(exit),
            _ => None,
        }
    }

    pub(crate) fn begin_closing(&mut self, exit: SessionExit) {
        log_info!("Closing settings session: {}", exit);
        self.state = SessionState::Closing(exit);
    }

    /// Record the new size. Selection, hover and editor contents are kept.
    pub(crate) fn on_resize(&mut self, geometry: TerminalGeometry) {
        self.geometry = geometry;
        self.tips.refresh();
    }
}

#[cfg(test)]
#[path = "../../test/tui/state/app_state.rs"]
mod tests;
