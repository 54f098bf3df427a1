//! Keyboard, resize and interrupt input.

mod decoder;
mod signals;
mod source;

pub use decoder::{InputDecoder, InputEvent, KeyDecoder, decode_bytes};
pub use source::{CrosstermSource, EventSource, RawInput};

pub(crate) use signals::install_termination_handlers;

#[cfg(test)]
pub(crate) use source::ScriptedSource;
