//! Navigation pane rendering.

use crate::tui::SettingsApp;
use crate::tui::state::Category;
use crate::tui::ui::{option_list::render_option_list, theme};
use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders},
};

impl SettingsApp {
    pub(crate) fn render_navigation_pane(&self, frame: &mut Frame, area: Rect) {
        let focused = self.is_browsing();
        let block = Block::default().borders(Borders::ALL).border_style(theme::pane_border_style(focused));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let labels: Vec<&str> = Category::ALL.iter().map(|category| category.display_name()).collect();
        let highlighted = focused.then_some(self.navigation.hovered());
        render_option_list(frame, inner, &labels, self.navigation.selected(), highlighted);
    }
}
