//! Centred list of options with marker and highlight treatments.

use super::theme::{self, display_width, truncate_to_width};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

/// One line per option. `marked` gets the marker glyph, `highlighted` gets
/// reverse video. Lines are spaced out when the area has room for it.
pub(crate) fn option_lines(options: &[&str], marked: Option<usize>, highlighted: Option<usize>, width: u16) -> Vec<Line<'static>> {
    options
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let is_marked = marked == Some(index);
            let text = format!("{}{}", theme::marker_prefix(is_marked), label);
            let text = if display_width(&text) > usize::from(width) {
                truncate_to_width(&text, usize::from(width))
            } else {
                text
            };
            Line::from(Span::styled(text, theme::entry_style(is_marked, highlighted == Some(index))))
        })
        .collect()
}

pub(crate) fn render_option_list(frame: &mut Frame, area: Rect, options: &[&str], marked: Option<usize>, highlighted: Option<usize>) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let spaced = usize::from(area.height) >= options.len() * 2;
    let used = if spaced { options.len() * 2 } else { options.len() };
    let top_padding = usize::from(area.height).saturating_sub(used) / 2;

    let mut lines = vec![Line::from(""); top_padding];
    for line in option_lines(options, marked, highlighted, area.width) {
        lines.push(line);
        if spaced {
            lines.push(Line::from(""));
        }
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
