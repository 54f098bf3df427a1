//! Navigation pane keyboard handling.

use crate::log_debug;
use crate::tui::input::InputEvent;
use crate::tui::state::{Category, Editor, HoverDirection, SessionState, SettingsApp};

impl SettingsApp {
    pub(crate) fn handle_navigation_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Up => self.navigation.move_hover(HoverDirection::Up),
            InputEvent::Down => self.navigation.move_hover(HoverDirection::Down),
            InputEvent::Enter => {
                let index = self.navigation.commit();
                if let Some(category) = Category::from_index(index) {
                    self.open_editor(category);
                }
            }
            InputEvent::Left | InputEvent::Right => self.leave_to_detail(),
            _ => {}
        }
    }

    /// Hand input to the editor of the committed category, if there is one.
    pub(crate) fn leave_to_detail(&mut self) {
        let Some(category) = self.selected_category() else {
            return;
        };
        self.navigation.rest_on_selection();
        self.open_editor(category);
    }

    fn open_editor(&mut self, category: Category) {
        let editor = Editor::open(category, self.ports.store.as_ref());
        log_debug!("Browsing -> Editing ({})", category.display_name());
        self.tips.set(editor.tip());
        self.state = SessionState::Editing(editor);
    }
}

#[cfg(test)]
#[path = "../../../test/tui/features/navigation/input.rs"]
mod tests;
