//! TUI bootstrap and teardown lifecycle.

use super::events::run_app;
use crate::tui::input::{CrosstermSource, InputDecoder, install_termination_handlers};
use crate::tui::layout::TerminalGeometry;
use crate::tui::state::{Collaborators, SessionExit, SettingsApp, TipLine};
use crate::{log_debug, log_error, log_info};
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{io, panic};

/// Raw mode, alternate screen and hidden cursor, restored exactly once.
#[derive(Debug, Default)]
struct TerminalModeGuard {
    active: bool,
}

impl TerminalModeGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self { active: true };
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, Hide) {
            guard.cleanup();
            return Err(err);
        }
        Ok(guard)
    }

    fn cleanup(&mut self) {
        if !self.active {
            return;
        }

        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, Show, LeaveAlternateScreen);
        self.active = false;
        log_debug!("Terminal restored");
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Run the interactive settings editor until it closes.
pub fn run_settings(ports: Collaborators) -> io::Result<SessionExit> {
    log_info!("Starting VPN settings editor");
    install_termination_handlers()?;

    let mut mode_guard = TerminalModeGuard::enter()?;
    let previous_hook = panic::take_hook();
    panic::set_hook(Box::new(|info| {
        log_error!("Panic while the settings screen was active: {}", info);
    }));

    let exit = match Terminal::new(CrosstermBackend::new(io::stdout())) {
        Ok(mut terminal) => {
            let mut input = InputDecoder::new(CrosstermSource::new());
            let mut app = SettingsApp::new(ports, TipLine::new(), TerminalGeometry::new(0, 0));
            run_app(&mut terminal, &mut input, &mut app)
        }
        Err(err) => {
            log_error!("Failed to create terminal: {}", err);
            SessionExit::Fatal(format!("terminal setup failed: {}", err))
        }
    };

    mode_guard.cleanup();
    panic::set_hook(previous_hook);

    log_info!("VPN settings editor exited: {}", exit);
    Ok(exit)
}
