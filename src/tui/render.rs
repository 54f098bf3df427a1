//! Frame composition.

use super::SettingsApp;
use super::layout::compute_layout;
use ratatui::Frame;

impl SettingsApp {
    /// Every rectangle is recomputed from the current geometry on each frame.
    pub(crate) fn draw(&self, frame: &mut Frame) {
        let layout = compute_layout(self.geometry);
        let full_area = self.geometry.area().intersection(frame.area());

        self.render_chrome(frame, full_area, layout.title);
        self.render_navigation_pane(frame, layout.nav);
        self.render_detail_pane(frame, layout.detail);
        self.render_status_line(frame, layout.status);
    }
}
