//! Tip line rendering.

use super::theme;
use crate::tui::SettingsApp;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

impl SettingsApp {
    pub(crate) fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let text = theme::truncate_to_width(self.tips.text(), usize::from(area.width));
        let style = Style::default().add_modifier(Modifier::REVERSED);
        frame.render_widget(Paragraph::new(Line::from(Span::styled(text, style))).style(style), area);
    }
}
