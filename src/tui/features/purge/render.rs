//! Purge confirmation rendering.

use crate::tui::state::{PURGE_OPTIONS, PURGE_QUESTION, PurgeEditor};
use crate::tui::ui::{option_list::render_option_list, theme};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

const HEADER_ROWS: u16 = 3;

pub(crate) fn render_purge_editor(frame: &mut Frame, area: Rect, editor: &PurgeEditor, focused: bool) {
    if area.width == 0 || area.height <= HEADER_ROWS {
        return;
    }

    let header = vec![Line::from(""), Line::from(Span::styled(PURGE_QUESTION, theme::prompt_style()))];
    frame.render_widget(
        Paragraph::new(header).alignment(Alignment::Center).wrap(Wrap { trim: true }),
        Rect::new(area.x, area.y, area.width, HEADER_ROWS),
    );

    let list_area = Rect::new(area.x, area.y + HEADER_ROWS, area.width, area.height - HEADER_ROWS);
    render_option_list(frame, list_area, &PURGE_OPTIONS, None, focused.then_some(editor.in_progress));
}
