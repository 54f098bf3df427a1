//! Raw byte to input event decoding.
//!
//! Accepted bytes:
//! - `0x20..=0x7D` printable characters
//! - `0x0A` / `0x0D` enter
//! - `0x7F` backspace
//! - `0x1B 0x5B 0x41..=0x44` arrow keys (up, down, right, left)
//!
//! Everything else is dropped without producing an event. After `0x1B` the
//! decoder always consumes exactly two more bytes, so a lone ESC stays pending
//! until two further bytes arrive.

use super::source::{EventSource, RawInput};
use std::{collections::VecDeque, io};

const ESC: u8 = 0x1B;
const CSI: u8 = 0x5B;
const ARROW_UP: u8 = 0x41;
const ARROW_DOWN: u8 = 0x42;
const ARROW_RIGHT: u8 = 0x43;
const ARROW_LEFT: u8 = 0x44;
const LINE_FEED: u8 = 0x0A;
const CARRIAGE_RETURN: u8 = 0x0D;
const DELETE: u8 = 0x7F;
const PRINTABLE_FIRST: u8 = 0x20;
const PRINTABLE_LAST: u8 = 0x7D;

/// Logical input consumed by the session controller and editors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Backspace,
    Char(char),
    CtrlC,
    Resize,
}

impl InputEvent {
    /// Left and right leave an editor without saving.
    pub fn is_cancel(self) -> bool {
        matches!(self, InputEvent::Left | InputEvent::Right)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DecoderState {
    #[default]
    Ground,
    Escape,
    EscapeContinuation(u8),
}

/// Byte-at-a-time decoding state machine.
#[derive(Debug, Clone, Default)]
pub struct KeyDecoder {
    state: DecoderState,
}

impl KeyDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one byte. Returns an event once a complete key has been seen.
    pub fn push(&mut self, byte: u8) -> Option<InputEvent> {
        match self.state {
            DecoderState::Ground => match byte {
                ESC => {
                    self.state = DecoderState::Escape;
                    None
                }
                LINE_FEED | CARRIAGE_RETURN => Some(InputEvent::Enter),
                DELETE => Some(InputEvent::Backspace),
                PRINTABLE_FIRST..=PRINTABLE_LAST => Some(InputEvent::Char(char::from(byte))),
                _ => None,
            },
            DecoderState::Escape => {
                self.state = DecoderState::EscapeContinuation(byte);
                None
            }
            DecoderState::EscapeContinuation(second) => {
                self.state = DecoderState::Ground;
                match (second, byte) {
                    (CSI, ARROW_UP) => Some(InputEvent::Up),
                    (CSI, ARROW_DOWN) => Some(InputEvent::Down),
                    (CSI, ARROW_RIGHT) => Some(InputEvent::Right),
                    (CSI, ARROW_LEFT) => Some(InputEvent::Left),
                    _ => None,
                }
            }
        }
    }

    /// True while an escape sequence has started but not completed.
    pub fn is_pending(&self) -> bool {
        self.state != DecoderState::Ground
    }
}

/// Decode a complete byte slice.
pub fn decode_bytes(bytes: &[u8]) -> Vec<InputEvent> {
    let mut decoder = KeyDecoder::new();
    bytes.iter().filter_map(|byte| decoder.push(*byte)).collect()
}

/// Blocking event reader over an [`EventSource`].
///
/// Resize and interrupt notifications bypass the byte decoder; a partially
/// read escape sequence survives them and continues with the next bytes.
pub struct InputDecoder<S> {
    source: S,
    decoder: KeyDecoder,
    pending: VecDeque<u8>,
}

impl<S: EventSource> InputDecoder<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            decoder: KeyDecoder::new(),
            pending: VecDeque::new(),
        }
    }

    pub fn next_event(&mut self) -> io::Result<InputEvent> {
        loop {
            while let Some(byte) = self.pending.pop_front() {
                if let Some(event) = self.decoder.push(byte) {
                    return Ok(event);
                }
            }

            match self.source.next_raw()? {
                RawInput::Bytes(bytes) => self.pending.extend(bytes),
                RawInput::Resize => return Ok(InputEvent::Resize),
                RawInput::Interrupt => return Ok(InputEvent::CtrlC),
            }
        }
    }
}

#[cfg(test)]
#[path = "../../test/tui/input/decoder.rs"]
mod tests;
