//! Single-choice editor rendering.

use crate::tui::state::ChoiceEditor;
use crate::tui::ui::{option_list::render_option_list, theme};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

/// Prompt and description on top, options below. The in-progress highlight is
/// only drawn while the editor has focus.
pub(crate) fn render_choice_editor(frame: &mut Frame, area: Rect, editor: &ChoiceEditor, focused: bool) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let mut header = vec![Line::from(""), Line::from(Span::styled(editor.setting.prompt(), theme::prompt_style()))];
    for text in editor.setting.description() {
        header.push(Line::from(Span::styled(*text, theme::hint_style())));
    }
    let header_height = u16::try_from(header.len()).unwrap_or(u16::MAX).min(area.height);

    frame.render_widget(
        Paragraph::new(header).alignment(Alignment::Center).wrap(Wrap { trim: true }),
        Rect::new(area.x, area.y, area.width, header_height),
    );

    let list_area = Rect::new(area.x, area.y + header_height, area.width, area.height - header_height);
    let highlighted = focused.then_some(editor.in_progress);
    render_option_list(frame, list_area, editor.options(), editor.persisted, highlighted);
}
