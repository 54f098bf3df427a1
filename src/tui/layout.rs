//! Pane geometry.
//!
//! Every rectangle is a proportion of the terminal size and is recomputed from
//! scratch on each redraw. Rectangles are at least 1x1 and never extend past the
//! terminal.

use ratatui::layout::Rect;
use std::{error::Error, fmt, io};

pub const MIN_LEGIBLE_COLS: u16 = 60;
pub const MIN_LEGIBLE_ROWS: u16 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalGeometry {
    pub rows: u16,
    pub cols: u16,
}

impl TerminalGeometry {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { rows, cols }
    }

    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.cols, self.rows)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneLayout {
    pub title: Rect,
    pub nav: Rect,
    pub detail: Rect,
    pub status: Rect,
}

pub fn compute_layout(geometry: TerminalGeometry) -> PaneLayout {
    let rows = f64::from(geometry.rows);
    let cols = f64::from(geometry.cols);

    let status_y = geometry.rows.saturating_sub(2);
    let pane_y = ceil_u16(rows / 10.0);
    // Panes stop above the tip line.
    let pane_height = ceil_u16(rows - rows / 6.0).min(status_y.saturating_sub(pane_y));

    let nav = fit(geometry, ceil_u16(cols / 50.0), pane_y, ceil_u16(cols / 3.0), pane_height);
    let detail = fit(geometry, ceil_u16(cols - cols / 1.57), pane_y, ceil_u16(cols / 1.63), pane_height);
    let status = fit(geometry, 1, status_y, geometry.cols.saturating_sub(2), 1);
    let title = fit(geometry, 1, ceil_u16(rows / 22.5), geometry.cols.saturating_sub(2), 1);

    PaneLayout { title, nav, detail, status }
}

/// Fails when the terminal is too small to draw anything readable.
pub fn ensure_legible(geometry: TerminalGeometry) -> Result<(), RenderError> {
    if geometry.cols < MIN_LEGIBLE_COLS || geometry.rows < MIN_LEGIBLE_ROWS {
        return Err(RenderError::TooSmall(geometry));
    }
    Ok(())
}

fn ceil_u16(value: f64) -> u16 {
    if value <= 0.0 {
        return 0;
    }
    value.ceil().min(f64::from(u16::MAX)) as u16
}

fn fit(geometry: TerminalGeometry, x: u16, y: u16, width: u16, height: u16) -> Rect {
    let x = x.min(geometry.cols.saturating_sub(1));
    let y = y.min(geometry.rows.saturating_sub(1));
    let width = width.min(geometry.cols.saturating_sub(x)).max(1);
    let height = height.min(geometry.rows.saturating_sub(y)).max(1);
    Rect::new(x, y, width, height)
}

#[derive(Debug)]
pub enum RenderError {
    TooSmall(TerminalGeometry),
    Backend(io::Error),
    Panicked(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::TooSmall(geometry) => write!(
                f,
                "terminal is too small ({}x{}, need at least {}x{}). Please avoid making the terminal window too small",
                geometry.cols, geometry.rows, MIN_LEGIBLE_COLS, MIN_LEGIBLE_ROWS
            ),
            RenderError::Backend(err) => write!(f, "terminal I/O error: {}", err),
            RenderError::Panicked(msg) => write!(f, "drawing failed: {}", msg),
        }
    }
}

impl Error for RenderError {}

impl From<io::Error> for RenderError {
    fn from(err: io::Error) -> Self {
        RenderError::Backend(err)
    }
}

#[cfg(test)]
#[path = "../test/tui/layout.rs"]
mod tests;
