//! Event loop and top-level event routing.

use crate::tui::input::{EventSource, InputDecoder, InputEvent};
use crate::tui::layout::{RenderError, ensure_legible};
use crate::tui::screen::Screen;
use crate::tui::state::{SessionExit, SettingsApp};
use crate::{debug_enabled, log_debug, log_error};
use std::{
    any::Any,
    io,
    panic::{self, AssertUnwindSafe},
    time::Instant,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AppAction {
    Navigate,
    Edit,
    Interrupt,
    Ignore,
}

fn resolve_action(app: &SettingsApp, event: InputEvent) -> AppAction {
    if app.closing_reason().is_some() {
        return AppAction::Ignore;
    }
    if event == InputEvent::CtrlC {
        return AppAction::Interrupt;
    }
    if app.is_browsing() {
        return AppAction::Navigate;
    }
    AppAction::Edit
}

impl SettingsApp {
    /// Route one key event. Resize is handled by the loop since it needs the screen.
    pub(crate) fn handle_event(&mut self, event: InputEvent) {
        self.tips.clear_notice();
        match resolve_action(self, event) {
            AppAction::Interrupt => self.begin_closing(SessionExit::Interrupted),
            AppAction::Navigate => self.handle_navigation_event(event),
            AppAction::Edit => self.handle_editor_event(event),
            AppAction::Ignore => {}
        }
    }
}

/// Read, dispatch and redraw until the session reaches `Closing`.
pub(crate) fn run_app<S: Screen, E: EventSource>(screen: &mut S, input: &mut InputDecoder<E>, app: &mut SettingsApp) -> SessionExit {
    if let Err(err) = refresh_geometry(screen, app) {
        return fatal(RenderError::Backend(err));
    }

    loop {
        if let Some(exit) = app.closing_reason() {
            return exit.clone();
        }

        if let Err(err) = render_frame(screen, app) {
            return fatal(err);
        }

        let event = match input.next_event() {
            Ok(event) => event,
            Err(err) => {
                log_error!("Failed to read terminal input: {}", err);
                return SessionExit::Fatal(format!("terminal input error: {}", err));
            }
        };

        if debug_enabled!() {
            log_debug!("Input event: {:?}", event);
        }

        if event == InputEvent::Resize {
            let resized = screen.clear().and_then(|()| refresh_geometry(screen, app));
            if let Err(err) = resized {
                return fatal(RenderError::Backend(err));
            }
            continue;
        }

        if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| app.handle_event(event))) {
            let message = panic_message(payload.as_ref());
            log_error!("Handling {:?} failed: {}", event, message);
            return SessionExit::Fatal(format!("internal error: {}", message));
        }
    }
}

fn refresh_geometry<S: Screen>(screen: &mut S, app: &mut SettingsApp) -> io::Result<()> {
    let geometry = screen.geometry()?;
    log_debug!("Terminal geometry {}x{}", geometry.cols, geometry.rows);
    app.on_resize(geometry);
    Ok(())
}

/// Draw one frame. Panics raised while painting are caught here.
pub(crate) fn render_frame<S: Screen>(screen: &mut S, app: &SettingsApp) -> Result<(), RenderError> {
    ensure_legible(app.geometry)?;

    let started_at = Instant::now();
    let drawn = panic::catch_unwind(AssertUnwindSafe(|| screen.draw(&mut |frame| app.draw(frame))));
    match drawn {
        Ok(result) => result?,
        Err(payload) => return Err(RenderError::Panicked(panic_message(payload.as_ref()))),
    }

    if debug_enabled!() {
        log_debug!("Frame rendered in {:?}", started_at.elapsed());
    }
    Ok(())
}

fn fatal(err: RenderError) -> SessionExit {
    log_error!("Rendering failed: {}", err);
    SessionExit::Fatal(err.to_string())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        return (*message).to_string();
    }
    if let Some(message) = payload.downcast_ref::<String>() {
        return message.clone();
    }
    "unknown panic".to_string()
}

#[cfg(test)]
#[path = "../../test/tui/app/events.rs"]
mod tests;
