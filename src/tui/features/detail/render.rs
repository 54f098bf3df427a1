//! Detail pane rendering.

use crate::tui::SettingsApp;
use crate::tui::features::{
    address_list::render_address_list_editor, choice::render_choice_editor, credentials::render_credentials_editor,
    purge::render_purge_editor,
};
use crate::tui::state::{Editor, SessionState, UnavailableEditor};
use crate::tui::ui::theme;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const PLACEHOLDER: &str = "Select a setting on the left and press Enter.";

impl SettingsApp {
    /// While browsing, the committed category is previewed without its
    /// in-progress highlight.
    pub(crate) fn render_detail_pane(&self, frame: &mut Frame, area: Rect) {
        let focused = matches!(self.state, SessionState::Editing(_));
        let block = Block::default().borders(Borders::ALL).border_style(theme::pane_border_style(focused));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if let Some(editor) = self.active_editor() {
            render_editor(frame, inner, editor, true);
            return;
        }

        match self.selected_category() {
            Some(category) => {
                let preview = Editor::open(category, self.ports.store.as_ref());
                render_editor(frame, inner, &preview, false);
            }
            None => render_message(frame, inner, &[Line::from(Span::styled(PLACEHOLDER, theme::hint_style()))]),
        }
    }
}

fn render_editor(frame: &mut Frame, area: Rect, editor: &Editor, focused: bool) {
    match editor {
        Editor::Credentials(editor) => render_credentials_editor(frame, area, editor, focused),
        Editor::Choice(editor) => render_choice_editor(frame, area, editor, focused),
        Editor::AddressList(editor) => render_address_list_editor(frame, area, editor, focused),
        Editor::Purge(editor) => render_purge_editor(frame, area, editor, focused),
        Editor::Unavailable(editor) => render_unavailable(frame, area, editor),
    }
}

fn render_unavailable(frame: &mut Frame, area: Rect, editor: &UnavailableEditor) {
    let lines = [
        Line::from(Span::styled(
            format!("{} is unavailable.", editor.category.display_name()),
            theme::prompt_style(),
        )),
        Line::from(Span::styled(editor.reason.clone(), theme::error_style())),
    ];
    render_message(frame, area, &lines);
}

fn render_message(frame: &mut Frame, area: Rect, lines: &[Line<'static>]) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let mut text = vec![Line::from("")];
    text.extend(lines.iter().cloned());
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center).wrap(Wrap { trim: true }), area);
}
