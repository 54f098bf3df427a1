//! Outer border and title.

use super::theme;
use crate::tui::SettingsApp;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub(crate) const APP_TITLE: &str = "VPN Settings";

impl SettingsApp {
    pub(crate) fn render_chrome(&self, frame: &mut Frame, full_area: Rect, title_area: Rect) {
        frame.render_widget(Block::default().borders(Borders::ALL), full_area);

        let title = theme::truncate_to_width(APP_TITLE, usize::from(title_area.width));
        let line = Line::from(Span::styled(title, theme::title_style()));
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), title_area);
    }
}
