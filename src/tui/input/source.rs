//! Terminal input sources.

use super::signals;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{io, time::Duration};

#[cfg(test)]
use std::collections::VecDeque;

const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// One unit read from the terminal environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    /// Bytes as they would arrive on a raw-mode stdin.
    Bytes(Vec<u8>),
    /// The terminal changed size. Delivered out of band.
    Resize,
    /// Ctrl-C, SIGTERM or SIGHUP.
    Interrupt,
}

pub trait EventSource {
    /// Block until something arrives.
    fn next_raw(&mut self) -> io::Result<RawInput>;
}

/// Reads crossterm events and re-encodes keys as raw-mode byte sequences.
#[derive(Debug, Default)]
pub struct CrosstermSource;

impl CrosstermSource {
    pub fn new() -> Self {
        Self
    }
}

impl EventSource for CrosstermSource {
    fn next_raw(&mut self) -> io::Result<RawInput> {
        loop {
            if signals::take_termination_request() {
                return Ok(RawInput::Interrupt);
            }

            if !event::poll(EVENT_POLL_INTERVAL)? {
                continue;
            }

            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if let Some(raw) = encode_key(key) {
                        return Ok(raw);
                    }
                }
                Event::Resize(_, _) => return Ok(RawInput::Resize),
                _ => {}
            }
        }
    }
}

/// Map a crossterm key to the bytes a raw terminal would have sent.
///
/// A lone `Esc` maps to nothing: crossterm has already separated it from an
/// escape sequence, and forwarding `0x1B` would stall the byte decoder.
pub(crate) fn encode_key(key: KeyEvent) -> Option<RawInput> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(RawInput::Interrupt),
            _ => None,
        };
    }

    let bytes = match key.code {
        KeyCode::Up => vec![0x1B, 0x5B, 0x41],
        KeyCode::Down => vec![0x1B, 0x5B, 0x42],
        KeyCode::Right => vec![0x1B, 0x5B, 0x43],
        KeyCode::Left => vec![0x1B, 0x5B, 0x44],
        KeyCode::Enter => vec![0x0D],
        KeyCode::Backspace => vec![0x7F],
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::ALT) => {
            let mut buf = [0u8; 4];
            ch.encode_utf8(&mut buf).as_bytes().to_vec()
        }
        _ => return None,
    };
    Some(RawInput::Bytes(bytes))
}

/// Replays a fixed script, then reports an interrupt forever.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ScriptedSource {
    script: VecDeque<RawInput>,
}

#[cfg(test)]
impl ScriptedSource {
    pub(crate) fn new(script: impl IntoIterator<Item = RawInput>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }
}

#[cfg(test)]
impl EventSource for ScriptedSource {
    fn next_raw(&mut self) -> io::Result<RawInput> {
        Ok(self.script.pop_front().unwrap_or(RawInput::Interrupt))
    }
}

#[cfg(test)]
#[path = "../../test/tui/input/source.rs"]
mod tests;
