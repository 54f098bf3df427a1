//! Address list editor rendering.

use crate::tui::state::AddressListEditor;
use crate::tui::ui::theme::{self, display_width, truncate_to_width};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

const INDENT: u16 = 2;
const HEADER_ROWS: u16 = 3;
const ERROR_ROWS: u16 = 2;

/// The buffer scrolls so its last line, where typing happens, stays visible.
pub(crate) fn render_address_list_editor(frame: &mut Frame, area: Rect, editor: &AddressListEditor, focused: bool) {
    if area.width <= INDENT || area.height <= HEADER_ROWS + ERROR_ROWS {
        return;
    }
    let inner = Rect::new(area.x + INDENT, area.y, area.width - INDENT, area.height);
    let width = usize::from(inner.width);

    let header = vec![
        Line::from(""),
        Line::from(Span::styled(truncate_to_width(editor.kind.prompt(), width), theme::prompt_style())),
        Line::from(""),
    ];
    frame.render_widget(Paragraph::new(header), Rect::new(inner.x, inner.y, inner.width, HEADER_ROWS));

    let body_height = inner.height - HEADER_ROWS - ERROR_ROWS;
    let lines = editor.lines();
    let skip = lines.len().saturating_sub(usize::from(body_height));
    let visible: Vec<Line> = lines[skip..].iter().map(|line| Line::from(truncate_to_width(line, width))).collect();
    let body = Rect::new(inner.x, inner.y + HEADER_ROWS, inner.width, body_height);
    frame.render_widget(Paragraph::new(visible), body);

    if let Some(error) = &editor.error {
        let error_area = Rect::new(inner.x, body.y + body_height + 1, inner.width, 1);
        frame.render_widget(Paragraph::new(Span::styled(truncate_to_width(error, width), theme::error_style())), error_area);
    }

    if focused {
        let last_row = u16::try_from(lines.len() - skip).unwrap_or(1).saturating_sub(1);
        let last_line = lines.last().copied().unwrap_or_default();
        let column = u16::try_from(display_width(last_line)).unwrap_or(u16::MAX).min(inner.width.saturating_sub(1));
        frame.set_cursor_position(Position::new(inner.x + column, body.y + last_row));
    }
}
