//! Drawing surface abstraction.
//!
//! Panes never hold on to terminal handles; they receive a frame for the
//! duration of one draw call.

use super::layout::TerminalGeometry;
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};

#[cfg(test)]
use ratatui::backend::TestBackend;

pub trait Screen {
    fn geometry(&mut self) -> io::Result<TerminalGeometry>;
    fn clear(&mut self) -> io::Result<()>;
    fn draw(&mut self, paint: &mut dyn FnMut(&mut Frame<'_>)) -> io::Result<()>;
}

fn backend_error(err: impl std::fmt::Display) -> io::Error {
    io::Error::other(err.to_string())
}

impl Screen for Terminal<CrosstermBackend<Stdout>> {
    fn geometry(&mut self) -> io::Result<TerminalGeometry> {
        let size = self.size().map_err(backend_error)?;
        Ok(TerminalGeometry::new(size.width, size.height))
    }

    fn clear(&mut self) -> io::Result<()> {
        Terminal::clear(self).map_err(backend_error)
    }

    fn draw(&mut self, paint: &mut dyn FnMut(&mut Frame<'_>)) -> io::Result<()> {
        Terminal::draw(self, |frame| paint(frame)).map(|_| ()).map_err(backend_error)
    }
}

#[cfg(test)]
impl Screen for Terminal<TestBackend> {
    fn geometry(&mut self) -> io::Result<TerminalGeometry> {
        let size = self.size().map_err(backend_error)?;
        Ok(TerminalGeometry::new(size.width, size.height))
    }

    fn clear(&mut self) -> io::Result<()> {
        Terminal::clear(self).map_err(backend_error)
    }

    fn draw(&mut self, paint: &mut dyn FnMut(&mut Frame<'_>)) -> io::Result<()> {
        Terminal::draw(self, |frame| paint(frame)).map(|_| ()).map_err(backend_error)
    }
}
