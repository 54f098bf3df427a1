//! Shared UI helpers.

use ratatui::style::{Color, Modifier, Style};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub(crate) const MARKER: &str = "* ";
const NO_MARKER: &str = "  ";

pub(crate) fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Cut `text` so it occupies at most `max_width` terminal columns.
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width > max_width {
            break;
        }
        width += ch_width;
        out.push(ch);
    }
    out
}

pub(crate) fn marker_prefix(marked: bool) -> &'static str {
    if marked { MARKER } else { NO_MARKER }
}

/// Marked entries are bold, highlighted entries are reverse video. Both may apply.
pub(crate) fn entry_style(marked: bool, highlighted: bool) -> Style {
    let mut style = Style::default();
    if marked {
        style = style.add_modifier(Modifier::BOLD);
    }
    if highlighted {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}

pub(crate) fn pane_border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub(crate) fn title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub(crate) fn prompt_style() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}

pub(crate) fn hint_style() -> Style {
    Style::default().fg(Color::Gray)
}

pub(crate) fn error_style() -> Style {
    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
}

#[cfg(test)]
#[path = "../../test/tui/ui/theme.rs"]
mod tests;
